use crate::Result;
use crate::scoring::ScoreRecord;
use core::fmt::Write;

/// Write one compact JSON object per record, each terminated by a newline.
pub fn generate<W: Write>(records: &[ScoreRecord], writer: &mut W) -> Result<()> {
    for record in records {
        writeln!(writer, "{}", record.to_json_line()?)?;
    }

    Ok(())
}
