//! On-disk artifacts of the training and simulation subsystems
//!
//! Three JSON file kinds are consumed read-only by the analysis routines:
//! weight snapshots (parameter name → array), per-epoch training logs, and
//! loss-sensitivity tables from the analytical simulation. Loaders take
//! explicit paths and return plain values.

mod log;
mod sensitivity;
mod snapshot;

pub use log::{LogSummary, TrainingLog, LOG_FILE};
pub use sensitivity::{load_table, scan_tables, TABLE_PREFIX};
pub use snapshot::{WeightSnapshot, SNAPSHOT_FILE, W_GLO, W_OR, W_ORN};
