use crate::domain::{KeyPair, Occurrence, OccurrenceIndex, RowWarning};
use crate::services::ingest::CueSheet;

/// Normalize a raw key cell to an integer.
///
/// Accepts plain integer text and float literals with no fractional part
/// ("3" and "3.0" both map to 3); anything else is rejected.
pub fn parse_key(cell: &str) -> Option<i64> {
    let trimmed = cell.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    let value: f64 = trimmed.parse().ok()?;
    if value.is_finite()
        && value.fract() == 0.0
        && value >= i64::MIN as f64
        && value <= i64::MAX as f64
    {
        Some(value as i64)
    } else {
        None
    }
}

/// Index every data row of `sheet` under its (channel, cue) pair.
///
/// Rows with a missing key cell are skipped silently; rows with a
/// non-integer key cell are skipped and returned as warnings. Occurrence
/// lines are physical (`idx + 4`); warning lines keep the legacy
/// header-relative `idx + 3` the report has always printed.
pub fn index_sheet(
    source: &str,
    sheet: &CueSheet,
    index: &mut OccurrenceIndex,
) -> Vec<RowWarning> {
    let mut warnings = Vec::new();
    for (idx, record) in sheet.rows() {
        let (Some(channel_cell), Some(cue_cell)) =
            (sheet.channel_cell(record), sheet.cue_cell(record))
        else {
            continue;
        };
        match (parse_key(channel_cell), parse_key(cue_cell)) {
            (Some(channel), Some(cue)) => {
                index.record(
                    KeyPair { channel, cue },
                    Occurrence {
                        file: source.to_string(),
                        line: idx + 4,
                    },
                );
            }
            _ => warnings.push(RowWarning { line: idx + 3 }),
        }
    }
    warnings
}
