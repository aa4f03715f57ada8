//! Per-epoch training logs

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// File name used for logs inside a model directory.
pub const LOG_FILE: &str = "log.json";

/// Scalar series recorded once per epoch by the training subsystem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingLog {
    pub epoch: Vec<usize>,
    pub train_loss: Vec<f64>,
    pub val_loss: Vec<f64>,
    pub val_acc: Vec<f64>,
    pub glo_score: Vec<f64>,
}

/// Headline numbers extracted from a log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogSummary {
    pub final_epoch: usize,
    pub final_val_loss: f64,
    pub final_val_acc: f64,
    pub final_glo_score: f64,
    pub best_val_acc: f64,
    pub best_epoch: usize,
}

impl TrainingLog {
    /// Load a log from a JSON file, checking that all series align.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let log: TrainingLog = serde_json::from_str(&content)
            .map_err(|e| Error::Serialization(format!("log deserialization failed: {e}")))?;
        for series in [
            log.train_loss.len(),
            log.val_loss.len(),
            log.val_acc.len(),
            log.glo_score.len(),
        ] {
            if series != log.epoch.len() {
                return Err(Error::LengthMismatch {
                    left: log.epoch.len(),
                    right: series,
                });
            }
        }
        Ok(log)
    }

    /// Write the log to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string(self)
            .map_err(|e| Error::Serialization(format!("log serialization failed: {e}")))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Number of recorded epochs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.epoch.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.epoch.is_empty()
    }

    /// Final and best epoch values, or None for an empty log.
    #[must_use]
    pub fn summary(&self) -> Option<LogSummary> {
        if self.is_empty() {
            return None;
        }
        let last = self.len() - 1;
        let (best_epoch, best_val_acc) = self
            .val_acc
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, &acc)| (self.epoch[i], acc))?;
        Some(LogSummary {
            final_epoch: self.epoch[last],
            final_val_loss: self.val_loss[last],
            final_val_acc: self.val_acc[last],
            final_glo_score: self.glo_score[last],
            best_val_acc,
            best_epoch,
        })
    }
}
