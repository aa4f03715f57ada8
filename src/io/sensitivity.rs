//! Loss-sensitivity tables from the analytical simulation
//!
//! The simulation writes one file per presynaptic population size m, named
//! `sensitivity_m{m}.json`, each holding a list of per-instance curves.

use std::fs;
use std::path::Path;

use crate::sparsity::SensitivityCurve;
use crate::{Error, Result};

/// File-name prefix of per-m sensitivity tables.
pub const TABLE_PREFIX: &str = "sensitivity_m";

/// Load a table of sensitivity curves from a JSON file.
pub fn load_table(path: &Path) -> Result<Vec<SensitivityCurve>> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| Error::Serialization(format!("sensitivity table deserialization failed: {e}")))
}

/// Scan a directory for per-m tables, returned sorted by m.
///
/// Files that do not match the `sensitivity_m{m}.json` pattern are ignored.
pub fn scan_tables(dir: &Path) -> Result<Vec<(u64, Vec<SensitivityCurve>)>> {
    let mut tables = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(m) = parse_table_name(&name.to_string_lossy()) else {
            continue;
        };
        tables.push((m, load_table(&entry.path())?));
    }
    tables.sort_by_key(|(m, _)| *m);
    Ok(tables)
}

/// Extract m from a `sensitivity_m{m}.json` file name.
fn parse_table_name(name: &str) -> Option<u64> {
    name.strip_prefix(TABLE_PREFIX)?
        .strip_suffix(".json")?
        .parse()
        .ok()
}
