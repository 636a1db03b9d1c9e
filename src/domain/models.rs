use indexmap::IndexMap;

/// Header names of the two key columns, matched exactly (case-sensitive,
/// leading `#` included).
pub const CHANNEL_COLUMN: &str = "#Channel";
pub const CUE_COLUMN: &str = "#Cue";

/// The (channel, cue) integer tuple whose uniqueness is under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPair {
    pub channel: i64,
    pub cue: i64,
}

/// One concrete location at which a key pair was observed.
///
/// `line` is the 1-based physical line of the data row in its file, counting
/// the two preamble lines and the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub file: String,
    pub line: usize,
}

/// A data row skipped because a key cell was not integer-convertible.
///
/// `line` carries the header-relative value cited by the warning text, one
/// less than the row's physical line (legacy report compatibility).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowWarning {
    pub line: usize,
}

/// Insertion-ordered multimap from key pair to every location it was seen at.
///
/// Entries are never removed; the first occurrence of a pair is retained
/// alongside the repeats so the report can list every location.
#[derive(Debug, Default)]
pub struct OccurrenceIndex {
    pairs: IndexMap<KeyPair, Vec<Occurrence>>,
}

impl OccurrenceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an occurrence under `pair`, creating the entry if absent.
    pub fn record(&mut self, pair: KeyPair, occurrence: Occurrence) {
        self.pairs.entry(pair).or_default().push(occurrence);
    }

    /// Pairs observed more than once, in first-seen order.
    pub fn duplicates(&self) -> impl Iterator<Item = (&KeyPair, &[Occurrence])> {
        self.pairs
            .iter()
            .filter(|(_, occurrences)| occurrences.len() > 1)
            .map(|(pair, occurrences)| (pair, occurrences.as_slice()))
    }

    /// Number of distinct pairs tracked, duplicate or not.
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    pub fn occurrences(&self, pair: KeyPair) -> Option<&[Occurrence]> {
        self.pairs.get(&pair).map(Vec::as_slice)
    }
}

/// Outcome counters for one scan run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Files named on the command line.
    pub files_given: usize,
    /// Files that parsed far enough to contribute rows to the index.
    pub files_indexed: usize,
    /// Distinct key pairs tracked, duplicate or not.
    pub distinct_pairs: usize,
    /// Distinct key pairs reported as duplicates.
    pub duplicate_pairs: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(file: &str, line: usize) -> Occurrence {
        Occurrence {
            file: file.to_string(),
            line,
        }
    }

    #[test]
    fn single_occurrence_is_not_a_duplicate() {
        let mut index = OccurrenceIndex::new();
        index.record(KeyPair { channel: 1, cue: 1 }, at("a.csv", 4));
        assert_eq!(index.pair_count(), 1);
        assert_eq!(index.duplicates().count(), 0);
    }

    #[test]
    fn duplicates_keep_every_location_in_first_seen_order() {
        let mut index = OccurrenceIndex::new();
        index.record(KeyPair { channel: 2, cue: 9 }, at("a.csv", 4));
        index.record(KeyPair { channel: 1, cue: 1 }, at("a.csv", 5));
        index.record(KeyPair { channel: 2, cue: 9 }, at("b.csv", 7));
        index.record(KeyPair { channel: 1, cue: 1 }, at("b.csv", 4));
        index.record(KeyPair { channel: 2, cue: 9 }, at("b.csv", 9));

        let dupes: Vec<_> = index.duplicates().collect();
        assert_eq!(dupes.len(), 2);
        assert_eq!(*dupes[0].0, KeyPair { channel: 2, cue: 9 });
        assert_eq!(
            dupes[0].1,
            &[at("a.csv", 4), at("b.csv", 7), at("b.csv", 9)]
        );
        assert_eq!(*dupes[1].0, KeyPair { channel: 1, cue: 1 });
        assert_eq!(dupes[1].1, &[at("a.csv", 5), at("b.csv", 4)]);
    }
}
