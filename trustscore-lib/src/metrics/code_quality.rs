//! Code quality of the associated repository, from test, CI and lint signals.

use super::MetricValue;
use crate::Result;
use crate::context::{Context, keys};

const TESTS_WEIGHT: f64 = 0.4;
const CI_WEIGHT: f64 = 0.3;
const LINT_WEIGHT: f64 = 0.3;

pub fn score(context: &Context) -> Result<MetricValue> {
    let has_tests = context.flag(keys::HAS_TESTS)?.unwrap_or(false);
    let has_ci = context.flag(keys::HAS_CI)?.unwrap_or(false);

    let lint = if context.flag(keys::LINT_OK)?.unwrap_or(false) {
        1.0
    } else if context.flag(keys::LINT_WARN)?.unwrap_or(false) {
        0.5
    } else {
        0.0
    };

    let score = TESTS_WEIGHT * indicator(has_tests) + CI_WEIGHT * indicator(has_ci) + LINT_WEIGHT * lint;
    Ok(MetricValue::Score(score.clamp(0.0, 1.0)))
}

const fn indicator(flag: bool) -> f64 {
    if flag { 1.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_of(context: &Context) -> f64 {
        score(context).unwrap().as_score().unwrap()
    }

    #[test]
    fn test_nothing_known() {
        assert!(score_of(&Context::new()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_everything_present() {
        let context: Context = [(keys::HAS_TESTS, true), (keys::HAS_CI, true), (keys::LINT_OK, true)].into_iter().collect();
        assert!((score_of(&context) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_lint_warnings_count_half() {
        let context: Context = [(keys::HAS_TESTS, true), (keys::LINT_WARN, true)].into_iter().collect();
        assert!((score_of(&context) - 0.55).abs() < 1e-9);
    }

    #[test]
    fn test_lint_ok_wins_over_warn() {
        let context: Context = [(keys::LINT_OK, true), (keys::LINT_WARN, true)].into_iter().collect();
        assert!((score_of(&context) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_numeric_flags() {
        let context: Context = [(keys::HAS_TESTS, 1_i64), (keys::HAS_CI, 0_i64)].into_iter().collect();
        assert!((score_of(&context) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_malformed_flag_is_an_error() {
        let context: Context = [(keys::HAS_CI, "yes")].into_iter().collect();
        assert!(score(&context).is_err());
    }
}
