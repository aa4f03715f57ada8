//! Weight snapshot files
//!
//! The training side periodically dumps every variable by name; the analysis
//! side only ever reads a handful of matrices back. Parameters are stored
//! shape-tagged with flat f32 data so 1-D biases and 2-D kernels share one
//! record type.

use std::fs;
use std::path::Path;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// File name used for snapshots inside a model directory.
pub const SNAPSHOT_FILE: &str = "model.json";

/// Conventional key of the ORN→PN weight matrix.
pub const W_ORN: &str = "w_orn";
/// Conventional key of the PN→KC weight matrix.
pub const W_GLO: &str = "w_glo";
/// Conventional key of the receptor→ORN weight matrix.
pub const W_OR: &str = "w_or";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ParameterRecord {
    name: String,
    shape: Vec<usize>,
    data: Vec<f32>,
}

/// A parameter-name-keyed collection of arrays from one model checkpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeightSnapshot {
    /// Epoch the snapshot was taken at, when recorded
    pub epoch: Option<usize>,
    parameters: Vec<ParameterRecord>,
}

impl WeightSnapshot {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        WeightSnapshot::default()
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let snapshot: WeightSnapshot = serde_json::from_str(&content)
            .map_err(|e| Error::Serialization(format!("snapshot deserialization failed: {e}")))?;
        for record in &snapshot.parameters {
            let expected: usize = record.shape.iter().product();
            if expected != record.data.len() {
                return Err(Error::ParameterShape {
                    name: record.name.clone(),
                    shape: record.shape.clone(),
                    len: record.data.len(),
                });
            }
        }
        Ok(snapshot)
    }

    /// Write the snapshot to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string(self)
            .map_err(|e| Error::Serialization(format!("snapshot serialization failed: {e}")))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Store a matrix under a parameter name, replacing any previous entry.
    pub fn insert_matrix(&mut self, name: &str, matrix: &Array2<f32>) {
        self.remove(name);
        self.parameters.push(ParameterRecord {
            name: name.to_string(),
            shape: vec![matrix.nrows(), matrix.ncols()],
            data: matrix.iter().copied().collect(),
        });
    }

    /// Store a vector under a parameter name, replacing any previous entry.
    pub fn insert_vector(&mut self, name: &str, vector: &Array1<f32>) {
        self.remove(name);
        self.parameters.push(ParameterRecord {
            name: name.to_string(),
            shape: vec![vector.len()],
            data: vector.to_vec(),
        });
    }

    fn remove(&mut self, name: &str) {
        self.parameters.retain(|record| record.name != name);
    }

    fn record(&self, name: &str) -> Result<&ParameterRecord> {
        self.parameters
            .iter()
            .find(|record| record.name == name)
            .ok_or_else(|| Error::MissingParameter(name.to_string()))
    }

    /// Parameter names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|record| record.name.as_str())
    }

    /// Retrieve a parameter as a 2-D matrix.
    pub fn matrix(&self, name: &str) -> Result<Array2<f32>> {
        let record = self.record(name)?;
        let [rows, cols] = record.shape[..] else {
            return Err(Error::ParameterShape {
                name: record.name.clone(),
                shape: record.shape.clone(),
                len: record.data.len(),
            });
        };
        Array2::from_shape_vec((rows, cols), record.data.clone()).map_err(|_| {
            Error::ParameterShape {
                name: record.name.clone(),
                shape: record.shape.clone(),
                len: record.data.len(),
            }
        })
    }

    /// Retrieve a parameter as a 1-D vector.
    pub fn vector(&self, name: &str) -> Result<Array1<f32>> {
        let record = self.record(name)?;
        let [len] = record.shape[..] else {
            return Err(Error::ParameterShape {
                name: record.name.clone(),
                shape: record.shape.clone(),
                len: record.data.len(),
            });
        };
        debug_assert_eq!(len, record.data.len());
        Ok(Array1::from_vec(record.data.clone()))
    }

    /// The ORN→PN weight matrix.
    pub fn w_orn(&self) -> Result<Array2<f32>> {
        self.matrix(W_ORN)
    }

    /// The PN→KC weight matrix.
    pub fn w_glo(&self) -> Result<Array2<f32>> {
        self.matrix(W_GLO)
    }

    /// The receptor→ORN weight matrix.
    pub fn w_or(&self) -> Result<Array2<f32>> {
        self.matrix(W_OR)
    }
}
