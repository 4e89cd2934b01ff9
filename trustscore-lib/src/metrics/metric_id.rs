use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, IntoStaticStr};

/// Identifies one of the scoring heuristics.
///
/// The declaration order is the evaluation and reporting order, and the names are the
/// stable keys used in configuration files and serialized records.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount, Display, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MetricId {
    RampUpTime,
    BusFactor,
    PerformanceClaims,
    License,
    SizeScore,
    DatasetAndCodeScore,
    DatasetQuality,
    CodeQuality,
}

impl MetricId {
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Name of the field holding this metric's latency in output records.
    #[must_use]
    pub const fn latency_name(self) -> &'static str {
        match self {
            Self::RampUpTime => "ramp_up_time_latency",
            Self::BusFactor => "bus_factor_latency",
            Self::PerformanceClaims => "performance_claims_latency",
            Self::License => "license_latency",
            Self::SizeScore => "size_score_latency",
            Self::DatasetAndCodeScore => "dataset_and_code_score_latency",
            Self::DatasetQuality => "dataset_quality_latency",
            Self::CodeQuality => "code_quality_latency",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_names_are_snake_case() {
        let names: Vec<_> = MetricId::iter().map(MetricId::name).collect();
        assert_eq!(
            names,
            [
                "ramp_up_time",
                "bus_factor",
                "performance_claims",
                "license",
                "size_score",
                "dataset_and_code_score",
                "dataset_quality",
                "code_quality",
            ]
        );
    }

    #[test]
    fn test_latency_names_follow_metric_names() {
        for id in MetricId::iter() {
            assert_eq!(id.latency_name(), format!("{id}_latency"));
        }
    }

    #[test]
    fn test_serde_uses_metric_names() {
        assert_eq!(serde_json::to_string(&MetricId::DatasetAndCodeScore).unwrap(), "\"dataset_and_code_score\"");
        let id: MetricId = serde_json::from_str("\"bus_factor\"").unwrap();
        assert_eq!(id, MetricId::BusFactor);
    }
}
