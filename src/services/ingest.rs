use crate::domain::{CHANNEL_COLUMN, CUE_COLUMN};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Reasons a file is skipped. All variants are recoverable at file
/// granularity; none aborts the batch.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("file is empty")]
    Empty,
    #[error("header row lacks required columns '#Channel' and/or '#Cue'")]
    MissingColumns,
    #[error("could not parse CSV: {0}")]
    Malformed(String),
    #[error("file ends before the header row on line 3")]
    HeaderMissing,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// One parsed cue sheet: the data region of a file whose header carried both
/// required columns.
#[derive(Debug)]
pub struct CueSheet {
    channel_col: usize,
    cue_col: usize,
    records: Vec<csv::StringRecord>,
}

impl CueSheet {
    /// Data rows in file order, with their 0-based index in the data region.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &csv::StringRecord)> {
        self.records.iter().enumerate()
    }

    /// Raw `#Channel` cell of a row; `None` is the missing-value marker.
    pub fn channel_cell<'a>(&self, record: &'a csv::StringRecord) -> Option<&'a str> {
        cell(record, self.channel_col)
    }

    /// Raw `#Cue` cell of a row; `None` is the missing-value marker.
    pub fn cue_cell<'a>(&self, record: &'a csv::StringRecord) -> Option<&'a str> {
        cell(record, self.cue_col)
    }
}

fn cell(record: &csv::StringRecord, col: usize) -> Option<&str> {
    match record.get(col) {
        Some(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

/// Load one cue-sheet file.
///
/// Physical lines 1-2 are non-data preamble and are discarded; line 3 must
/// hold the column names; data rows follow from line 4.
pub fn load_sheet(path: &Path) -> Result<CueSheet, IngestError> {
    let raw = fs::read_to_string(path)?;
    if raw.trim().is_empty() {
        return Err(IngestError::Empty);
    }
    let body = strip_preamble(&raw).ok_or(IngestError::HeaderMissing)?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(body.as_bytes());
    let header = reader
        .headers()
        .map_err(|err| IngestError::Malformed(err.to_string()))?
        .clone();

    let channel_col = position(&header, CHANNEL_COLUMN);
    let cue_col = position(&header, CUE_COLUMN);
    let (Some(channel_col), Some(cue_col)) = (channel_col, cue_col) else {
        return Err(IngestError::MissingColumns);
    };

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| IngestError::Malformed(err.to_string()))?;
        // Short rows read as missing cells; rows wider than the header do
        // not fit the declared shape at all.
        if record.len() > header.len() {
            return Err(IngestError::Malformed(format!(
                "data row {} has {} fields, header has {}",
                records.len() + 1,
                record.len(),
                header.len()
            )));
        }
        records.push(record);
    }

    Ok(CueSheet {
        channel_col,
        cue_col,
        records,
    })
}

fn position(header: &csv::StringRecord, name: &str) -> Option<usize> {
    header.iter().position(|column| column == name)
}

/// Drop the two preamble lines; `None` when no header line remains.
fn strip_preamble(raw: &str) -> Option<&str> {
    let mut rest = raw;
    for _ in 0..2 {
        let (_, tail) = rest.split_once('\n')?;
        rest = tail;
    }
    if rest.trim().is_empty() {
        None
    } else {
        Some(rest)
    }
}
