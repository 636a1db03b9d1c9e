//! Domain layer: the key-pair vocabulary and the occurrence index.
//!
//! No I/O lives here; the services layer feeds these types and the report
//! renders them.

pub mod models;

pub use models::{KeyPair, Occurrence, OccurrenceIndex, RowWarning, ScanSummary};
pub use models::{CHANNEL_COLUMN, CUE_COLUMN};
