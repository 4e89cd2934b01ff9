//! Common utilities shared across report generators.

use crate::metrics::MetricId;
use crate::scoring::ScoreRecord;
use strum::IntoEnumIterator;

/// Scores at or above this level are considered good.
pub const GOOD_SCORE: f64 = 0.7;

/// Scores below this level are considered poor.
pub const POOR_SCORE: f64 = 0.4;

/// How a score compares to the report thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

#[must_use]
pub fn score_band(score: f64) -> ScoreBand {
    if score >= GOOD_SCORE {
        ScoreBand::Good
    } else if score >= POOR_SCORE {
        ScoreBand::Fair
    } else {
        ScoreBand::Poor
    }
}

/// Format a score with three decimals.
#[must_use]
pub fn format_score(score: f64) -> String {
    format!("{score:.3}")
}

/// Iterate over a record's metrics as `(name, score, latency)`, net score first.
pub fn scored_fields(record: &ScoreRecord) -> impl Iterator<Item = (&'static str, f64, u64)> + '_ {
    core::iter::once(("net_score", record.net_score, record.net_score_latency))
        .chain(MetricId::iter().map(|id| (id.name(), record.score(id), record.latency(id))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::sample_record;

    #[test]
    fn test_score_band() {
        assert_eq!(score_band(1.0), ScoreBand::Good);
        assert_eq!(score_band(0.7), ScoreBand::Good);
        assert_eq!(score_band(0.5), ScoreBand::Fair);
        assert_eq!(score_band(0.399), ScoreBand::Poor);
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0.5), "0.500");
        assert_eq!(format_score(1.0), "1.000");
        assert_eq!(format_score(0.6666), "0.667");
    }

    #[test]
    fn test_scored_fields() {
        let record = sample_record();
        let names: Vec<_> = scored_fields(&record).map(|(name, _, _)| name).collect();
        assert_eq!(names.len(), 9);
        assert_eq!(names[0], "net_score");
        assert_eq!(names[8], "code_quality");
    }
}
