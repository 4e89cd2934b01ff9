use crate::Result;
use crate::metrics::MetricId;
use ohno::bail;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Allowed deviation of the weight total from 1.0.
const TOTAL_TOLERANCE: f64 = 1e-6;

/// Relative importance of each metric in the net score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Weights {
    pub ramp_up_time: f64,
    pub bus_factor: f64,
    pub performance_claims: f64,
    pub license: f64,
    pub size_score: f64,
    pub dataset_and_code_score: f64,
    pub dataset_quality: f64,
    pub code_quality: f64,
}

impl Weights {
    /// The reference weighting.
    pub const REFERENCE: Self = Self {
        ramp_up_time: 0.20,
        bus_factor: 0.10,
        performance_claims: 0.05,
        license: 0.20,
        size_score: 0.10,
        dataset_and_code_score: 0.15,
        dataset_quality: 0.10,
        code_quality: 0.10,
    };

    #[must_use]
    pub const fn get(&self, id: MetricId) -> f64 {
        match id {
            MetricId::RampUpTime => self.ramp_up_time,
            MetricId::BusFactor => self.bus_factor,
            MetricId::PerformanceClaims => self.performance_claims,
            MetricId::License => self.license,
            MetricId::SizeScore => self.size_score,
            MetricId::DatasetAndCodeScore => self.dataset_and_code_score,
            MetricId::DatasetQuality => self.dataset_quality,
            MetricId::CodeQuality => self.code_quality,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (MetricId, f64)> + '_ {
        MetricId::iter().map(|id| (id, self.get(id)))
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, weight)| weight).sum()
    }

    /// Check that every weight lies in [0, 1] and that the weights sum to 1.
    pub fn validate(&self) -> Result<()> {
        for (id, weight) in self.iter() {
            if !(0.0..=1.0).contains(&weight) {
                bail!("weight for metric '{id}' must be between 0 and 1, found {weight}");
            }
        }

        let total = self.total();
        if (total - 1.0).abs() > TOTAL_TOLERANCE {
            bail!("metric weights must sum to 1.0, found {total}");
        }

        Ok(())
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::REFERENCE
    }
}
