use super::NetScore;
use crate::Result;
use crate::context::{ArtifactCategory, ArtifactRef};
use crate::metrics::{MetricId, MetricResults, SizeScores};
use serde::{Deserialize, Serialize};

/// Everything computed for one artifact, in output order.
///
/// Scores are rounded to three decimals when the record is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub category: ArtifactCategory,
    pub net_score: f64,
    pub net_score_latency: u64,
    pub ramp_up_time: f64,
    pub ramp_up_time_latency: u64,
    pub bus_factor: f64,
    pub bus_factor_latency: u64,
    pub performance_claims: f64,
    pub performance_claims_latency: u64,
    pub license: f64,
    pub license_latency: u64,
    pub size_score: SizeScores,
    pub size_score_latency: u64,
    pub dataset_and_code_score: f64,
    pub dataset_and_code_score_latency: u64,
    pub dataset_quality: f64,
    pub dataset_quality_latency: u64,
    pub code_quality: f64,
    pub code_quality_latency: u64,
}

impl ScoreRecord {
    #[must_use]
    pub fn new(artifact: &ArtifactRef, results: &MetricResults, net: NetScore) -> Self {
        let score = |id| {
            results
                .get(id)
                .and_then(|result| result.value.as_score())
                .map_or(0.0, round3)
        };

        let latency = |id| results.get(id).map_or(0, |result| result.latency_ms);

        let size_score = results
            .get(MetricId::SizeScore)
            .and_then(|result| result.value.as_tiers().copied())
            .unwrap_or(SizeScores::FULL)
            .map(round3);

        Self {
            name: artifact.name().to_string(),
            category: artifact.category(),
            net_score: round3(net.score),
            net_score_latency: net.latency_ms,
            ramp_up_time: score(MetricId::RampUpTime),
            ramp_up_time_latency: latency(MetricId::RampUpTime),
            bus_factor: score(MetricId::BusFactor),
            bus_factor_latency: latency(MetricId::BusFactor),
            performance_claims: score(MetricId::PerformanceClaims),
            performance_claims_latency: latency(MetricId::PerformanceClaims),
            license: score(MetricId::License),
            license_latency: latency(MetricId::License),
            size_score,
            size_score_latency: latency(MetricId::SizeScore),
            dataset_and_code_score: score(MetricId::DatasetAndCodeScore),
            dataset_and_code_score_latency: latency(MetricId::DatasetAndCodeScore),
            dataset_quality: score(MetricId::DatasetQuality),
            dataset_quality_latency: latency(MetricId::DatasetQuality),
            code_quality: score(MetricId::CodeQuality),
            code_quality_latency: latency(MetricId::CodeQuality),
        }
    }

    /// Score of a metric; the mean across tiers for the size metric.
    #[must_use]
    pub fn score(&self, id: MetricId) -> f64 {
        match id {
            MetricId::RampUpTime => self.ramp_up_time,
            MetricId::BusFactor => self.bus_factor,
            MetricId::PerformanceClaims => self.performance_claims,
            MetricId::License => self.license,
            MetricId::SizeScore => self.size_score.mean(),
            MetricId::DatasetAndCodeScore => self.dataset_and_code_score,
            MetricId::DatasetQuality => self.dataset_quality,
            MetricId::CodeQuality => self.code_quality,
        }
    }

    #[must_use]
    pub const fn latency(&self, id: MetricId) -> u64 {
        match id {
            MetricId::RampUpTime => self.ramp_up_time_latency,
            MetricId::BusFactor => self.bus_factor_latency,
            MetricId::PerformanceClaims => self.performance_claims_latency,
            MetricId::License => self.license_latency,
            MetricId::SizeScore => self.size_score_latency,
            MetricId::DatasetAndCodeScore => self.dataset_and_code_score_latency,
            MetricId::DatasetQuality => self.dataset_quality_latency,
            MetricId::CodeQuality => self.code_quality_latency,
        }
    }

    /// Serialize as a single line of compact JSON, without the trailing newline.
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
