use super::SizeScores;

/// The value produced by a metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Score(f64),
    Tiers(SizeScores),
}

impl MetricValue {
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Score(score) => score.is_finite(),
            Self::Tiers(tiers) => tiers.is_finite(),
        }
    }

    /// Clamp every score to [0, 1].
    #[must_use]
    pub fn clamped(&self) -> Self {
        match self {
            Self::Score(score) => Self::Score(score.clamp(0.0, 1.0)),
            Self::Tiers(tiers) => Self::Tiers(tiers.map(|score| score.clamp(0.0, 1.0))),
        }
    }

    /// Single number summarizing the value; the mean across tiers for tiered values.
    #[must_use]
    pub fn summary(&self) -> f64 {
        match self {
            Self::Score(score) => *score,
            Self::Tiers(tiers) => tiers.mean(),
        }
    }

    #[must_use]
    pub const fn as_score(&self) -> Option<f64> {
        match self {
            Self::Score(score) => Some(*score),
            Self::Tiers(_) => None,
        }
    }

    #[must_use]
    pub const fn as_tiers(&self) -> Option<&SizeScores> {
        match self {
            Self::Score(_) => None,
            Self::Tiers(tiers) => Some(tiers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped() {
        assert_eq!(MetricValue::Score(1.7).clamped(), MetricValue::Score(1.0));
        assert_eq!(MetricValue::Score(-0.2).clamped(), MetricValue::Score(0.0));

        let tiers = SizeScores {
            raspberry_pi: -1.0,
            jetson_nano: 0.5,
            desktop_pc: 2.0,
            aws_server: 1.0,
        };
        let clamped = MetricValue::Tiers(tiers).clamped();
        assert_eq!(
            clamped.as_tiers().copied(),
            Some(SizeScores {
                raspberry_pi: 0.0,
                jetson_nano: 0.5,
                desktop_pc: 1.0,
                aws_server: 1.0,
            })
        );
    }

    #[test]
    fn test_is_finite() {
        assert!(MetricValue::Score(0.3).is_finite());
        assert!(!MetricValue::Score(f64::NAN).is_finite());
        assert!(!MetricValue::Tiers(SizeScores::UNKNOWN.map(|_| f64::INFINITY)).is_finite());
    }

    #[test]
    fn test_summary() {
        assert!((MetricValue::Score(0.25).summary() - 0.25).abs() < f64::EPSILON);
        assert!((MetricValue::Tiers(SizeScores::UNKNOWN).summary() - 0.5).abs() < f64::EPSILON);
        assert_eq!(MetricValue::Tiers(SizeScores::UNKNOWN).as_score(), None);
    }
}
