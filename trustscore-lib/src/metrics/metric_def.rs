use super::{MetricId, MetricValue, SizeScores};
use crate::Result;
use crate::context::Context;

#[derive(Debug)]
pub struct MetricDef {
    pub id: MetricId,
    pub description: &'static str,
    pub scorer: fn(&Context) -> Result<MetricValue>,
    pub floor: fn() -> MetricValue,
}

macro_rules! metric_def {
    ($id:ident, $description:expr, $scorer:path, $floor:expr) => {
        MetricDef {
            id: MetricId::$id,
            description: $description,
            scorer: $scorer,
            floor: $floor,
        }
    };
}

/// All metrics, in evaluation order.
pub const METRIC_DEFINITIONS: &[MetricDef] = &[
    metric_def!(
        RampUpTime,
        "How quickly a newcomer can start using the model, judged from its model card",
        super::ramp_up_time::score,
        || MetricValue::Score(0.0)
    ),
    metric_def!(
        BusFactor,
        "Resilience of the project to the loss of individual contributors",
        super::bus_factor::score,
        || MetricValue::Score(0.1)
    ),
    metric_def!(
        PerformanceClaims,
        "Evidence of benchmark results backing the model's performance claims",
        super::performance_claims::score,
        || MetricValue::Score(0.0)
    ),
    metric_def!(
        License,
        "Clarity and permissiveness of the model's license",
        super::license::score,
        || MetricValue::Score(0.0)
    ),
    metric_def!(
        SizeScore,
        "How well the model's weights fit on each class of deployment hardware",
        super::size_score::score,
        || MetricValue::Tiers(SizeScores::UNKNOWN)
    ),
    metric_def!(
        DatasetAndCodeScore,
        "Whether the training dataset and example code are available and documented",
        super::dataset_and_code_score::score,
        || MetricValue::Score(0.0)
    ),
    metric_def!(
        DatasetQuality,
        "Adoption of the associated dataset, as a proxy for its quality",
        super::dataset_quality::score,
        || MetricValue::Score(0.2)
    ),
    metric_def!(
        CodeQuality,
        "Engineering hygiene of the associated code repository",
        super::code_quality::score,
        || MetricValue::Score(0.0)
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_definitions_follow_metric_order() {
        assert_eq!(METRIC_DEFINITIONS.len(), MetricId::COUNT);
        for (def, id) in METRIC_DEFINITIONS.iter().zip(MetricId::iter()) {
            assert_eq!(def.id, id);
        }
    }

    #[test]
    fn test_all_definitions_have_descriptions() {
        for def in METRIC_DEFINITIONS {
            assert!(def.description.len() > 10, "Metric '{}' description should be meaningful", def.id);
        }
    }

    #[test]
    fn test_floors_are_in_range() {
        for def in METRIC_DEFINITIONS {
            let floor = (def.floor)();
            assert!(floor.is_finite());
            assert_eq!(floor.clamped(), floor, "floor of '{}' must already lie in [0, 1]", def.id);
        }
    }

    fn unusual_contexts() -> Vec<Context> {
        use crate::context::keys;

        let all_keys = [
            keys::README,
            keys::LICENSE,
            keys::GIT_CONTRIBUTORS,
            keys::WEIGHTS_TOTAL_BYTES,
            keys::DATASET_LINK,
            keys::CODE_LINK,
            keys::EXAMPLE_CODE_PRESENT,
            keys::DATASET_DOWNLOADS,
            keys::HAS_TESTS,
            keys::HAS_CI,
            keys::LINT_OK,
            keys::LINT_WARN,
        ];

        let values = [
            serde_json::json!("garbage"),
            serde_json::json!(""),
            serde_json::json!("Ünïcødé 日本語 ```\nlicense: ça\n---"),
            serde_json::json!(0),
            serde_json::json!(-5),
            serde_json::json!(1e308),
            serde_json::json!(u64::MAX),
            serde_json::json!(true),
            serde_json::json!([1, "two", null]),
            serde_json::json!({ "nested": { "deeper": 1 } }),
        ];

        let mut contexts = vec![Context::new()];
        for value in values {
            let object: serde_json::Map<_, _> = all_keys.iter().map(|key| ((*key).to_string(), value.clone())).collect();
            contexts.push(Context::from_json(serde_json::Value::Object(object)).unwrap());
        }

        contexts
    }

    /// Scorers are called directly here, so a panic fails the test instead of being contained.
    #[test]
    fn test_scorers_do_not_panic_on_unusual_input() {
        for context in unusual_contexts() {
            for def in METRIC_DEFINITIONS {
                let _ = (def.scorer)(&context);
            }
        }
    }

    #[test]
    fn test_only_size_score_is_tiered() {
        for def in METRIC_DEFINITIONS {
            let tiered = (def.floor)().as_tiers().is_some();
            assert_eq!(tiered, def.id == MetricId::SizeScore, "unexpected floor shape for '{}'", def.id);
        }
    }
}
