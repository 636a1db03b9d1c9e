use crate::domain::{OccurrenceIndex, ScanSummary};
use crate::services::ingest::{self, IngestError};
use crate::services::{aggregate, report};
use std::io::{self, Write};
use std::path::PathBuf;

/// Run the whole check: banner, per-file ingestion and aggregation in
/// argument order, then the duplicate summary.
///
/// Every per-file failure is reported and skipped; only writing the report
/// itself can fail.
pub fn run(files: &[PathBuf], out: &mut impl Write) -> io::Result<ScanSummary> {
    report::banner(out, files.len())?;

    let mut index = OccurrenceIndex::new();
    let mut files_indexed = 0;
    for path in files {
        if !path.exists() {
            report::file_not_found(out, path)?;
            continue;
        }
        let sheet = match ingest::load_sheet(path) {
            Ok(sheet) => sheet,
            Err(IngestError::Empty) => {
                report::empty_file(out, path)?;
                continue;
            }
            Err(IngestError::MissingColumns) => {
                report::missing_columns(out, path)?;
                continue;
            }
            Err(IngestError::Malformed(_)) => {
                report::parse_error(out, path)?;
                continue;
            }
            Err(err @ (IngestError::HeaderMissing | IngestError::Io(_))) => {
                report::unexpected_error(out, path, &err)?;
                continue;
            }
        };

        let source = path.display().to_string();
        for warning in aggregate::index_sheet(&source, &sheet, &mut index) {
            report::invalid_key_row(out, path, warning.line)?;
        }
        files_indexed += 1;
    }

    let duplicate_pairs = report::summary(out, &index)?;
    Ok(ScanSummary {
        files_given: files.len(),
        files_indexed,
        distinct_pairs: index.pair_count(),
        duplicate_pairs,
    })
}
