//! All user-facing text. The wording and line arithmetic here are kept
//! byte-compatible with the reports existing cue sheets were checked against.

use crate::domain::OccurrenceIndex;
use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;

const RULE_WIDTH: usize = 70;

fn rule(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

pub fn banner(out: &mut impl Write, file_count: usize) -> io::Result<()> {
    writeln!(
        out,
        "--- Starting Duplicate Check across {file_count} files ---"
    )?;
    rule(out)?;
    writeln!(
        out,
        "NOTE: Line numbers refer to the absolute line in the CSV file (starting from 1)."
    )?;
    rule(out)
}

pub fn file_not_found(out: &mut impl Write, path: &Path) -> io::Result<()> {
    writeln!(out, "ERROR: File not found: {}. Skipping.", path.display())
}

pub fn missing_columns(out: &mut impl Write, path: &Path) -> io::Result<()> {
    writeln!(
        out,
        "WARNING: File {} is missing one or more required columns ('#Channel' and '#Cue').",
        path.display()
    )?;
    writeln!(
        out,
        "         Ensure these column names exist in the 3rd row of the file."
    )
}

pub fn empty_file(out: &mut impl Write, path: &Path) -> io::Result<()> {
    writeln!(out, "WARNING: File {} is empty. Skipping.", path.display())
}

pub fn parse_error(out: &mut impl Write, path: &Path) -> io::Result<()> {
    writeln!(
        out,
        "ERROR: Could not parse CSV file {}. Is the format correct? Skipping.",
        path.display()
    )
}

pub fn unexpected_error(out: &mut impl Write, path: &Path, cause: &dyn Display) -> io::Result<()> {
    writeln!(
        out,
        "An unexpected error occurred while processing {}: {cause}",
        path.display()
    )
}

pub fn invalid_key_row(out: &mut impl Write, path: &Path, line: usize) -> io::Result<()> {
    writeln!(
        out,
        "WARNING: Skipping row {line} in {}. #Channel or #Cue is not a valid integer. Check data type.",
        path.display()
    )
}

/// Render the duplicate summary and the closing status line.
///
/// Returns the number of duplicate pairs printed.
pub fn summary(out: &mut impl Write, index: &OccurrenceIndex) -> io::Result<usize> {
    rule(out)?;
    writeln!(out, "--- Duplicate Report Summary ---")?;

    let mut duplicate_pairs = 0;
    for (pair, occurrences) in index.duplicates() {
        duplicate_pairs += 1;
        writeln!(out)?;
        writeln!(
            out,
            "DUPLICATE PAIR FOUND: Channel {}, Cue {}",
            pair.channel, pair.cue
        )?;
        writeln!(out, "  Total occurrences: {}", occurrences.len())?;
        writeln!(out, "  Locations:")?;
        for occurrence in occurrences {
            writeln!(
                out,
                "    -> File: '{}' (Line: {})",
                occurrence.file, occurrence.line
            )?;
        }
    }

    rule(out)?;
    if duplicate_pairs == 0 {
        writeln!(
            out,
            "SUCCESS: No duplicate (#Channel, #Cue) pairs were found across any of the files."
        )?;
    } else {
        writeln!(
            out,
            "COMPLETED: Review the 'DUPLICATE PAIR FOUND' reports above for all conflicting locations."
        )?;
    }
    Ok(duplicate_pairs)
}
