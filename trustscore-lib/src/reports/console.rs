use super::common::{self, ScoreBand};
use crate::Result;
use crate::scoring::ScoreRecord;
use core::fmt::Write;
use owo_colors::OwoColorize;

/// Width of the metric name column.
const NAME_WIDTH: usize = 22;

pub fn generate<W: Write>(records: &[ScoreRecord], use_colors: bool, writer: &mut W) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
            writeln!(writer, "═══════════════════════════════════════")?;
            writeln!(writer)?;
        }

        let header = format!("{} ({})", record.name, record.category);
        if use_colors {
            writeln!(writer, "{}", header.bold())?;
        } else {
            writeln!(writer, "{header}")?;
        }

        for (name, score, latency) in common::scored_fields(record) {
            let score_text = colorize(score, use_colors);
            writeln!(writer, "  {name:<NAME_WIDTH$} : {score_text}  ({latency} ms)")?;

            if name == "size_score" {
                for (tier, tier_score) in record.size_score.iter() {
                    let tier_text = colorize(tier_score, use_colors);
                    writeln!(writer, "    {:<width$} : {tier_text}", tier.name(), width = NAME_WIDTH - 2)?;
                }
            }
        }
    }

    Ok(())
}

fn colorize(score: f64, use_colors: bool) -> String {
    let text = common::format_score(score);
    if !use_colors {
        return text;
    }

    match common::score_band(score) {
        ScoreBand::Good => text.green().to_string(),
        ScoreBand::Fair => text.yellow().to_string(),
        ScoreBand::Poor => text.red().to_string(),
    }
}
