use crate::Result;
use crate::metrics::{HardwareTier, MetricId};
use crate::scoring::ScoreRecord;
use core::fmt::Write;
use std::borrow::Cow;
use strum::IntoEnumIterator;

/// Write a header row and one row per record, with size tiers flattened into their own columns.
pub fn generate<W: Write>(records: &[ScoreRecord], writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", headers().join(","))?;

    for record in records {
        write!(
            writer,
            "{},{},{:.3},{}",
            escape_csv(&record.name),
            record.category,
            record.net_score,
            record.net_score_latency
        )?;

        for id in MetricId::iter() {
            if id == MetricId::SizeScore {
                for (_, score) in record.size_score.iter() {
                    write!(writer, ",{score:.3}")?;
                }
            } else {
                write!(writer, ",{:.3}", record.score(id))?;
            }

            write!(writer, ",{}", record.latency(id))?;
        }

        writeln!(writer)?;
    }

    Ok(())
}

fn headers() -> Vec<Cow<'static, str>> {
    let mut headers = vec![
        Cow::Borrowed("name"),
        Cow::Borrowed("category"),
        Cow::Borrowed("net_score"),
        Cow::Borrowed("net_score_latency"),
    ];

    for id in MetricId::iter() {
        if id == MetricId::SizeScore {
            headers.extend(HardwareTier::iter().map(|tier| Cow::Owned(format!("{id}.{tier}"))));
        } else {
            headers.push(Cow::Borrowed(id.name()));
        }

        headers.push(Cow::Borrowed(id.latency_name()));
    }

    headers
}

/// Escape a value for RFC compliant CSV output.
///
/// Wraps the value in double quotes if it contains commas, newlines, or double quotes.
/// Internal double quotes are doubled per the RFC.
fn escape_csv(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else if s.contains(',') || s.contains('\n') || s.contains('\r') {
        Cow::Owned(format!("\"{s}\""))
    } else {
        Cow::Borrowed(s)
    }
}
