//! Reference table configuration files.
//!
//! A table file lists rows under `points`:
//!
//! ```yaml
//! points:
//!   - { pressure: 0.05, liquid_volume: 0.00105, vapor_volume: 30.0 }
//!   - { pressure: 10.0, liquid_volume: 0.0035, vapor_volume: 0.0035 }
//! ```
//!
//! `.yaml`/`.yml` and `.json` are accepted. The file is read once at start-up;
//! the resulting table is never modified.

use std::path::Path;

use pc_table::{PhaseTable, ReferencePoint};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableFile {
    pub points: Vec<ReferencePoint>,
}

impl TableFile {
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn into_table(self) -> AppResult<PhaseTable> {
        Ok(PhaseTable::new(self.points)?)
    }
}

impl From<&PhaseTable> for TableFile {
    fn from(table: &PhaseTable) -> Self {
        Self {
            points: table.points().to_vec(),
        }
    }
}

/// Load and validate a table file, choosing the format by extension.
pub fn load_table(path: &Path) -> AppResult<PhaseTable> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::TableFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let file = match ext.as_deref() {
        Some("yaml") | Some("yml") => TableFile::from_yaml_str(&content)?,
        Some("json") => TableFile::from_json_str(&content)?,
        _ => {
            return Err(AppError::Config {
                path: path.to_path_buf(),
                message: "expected a .yaml, .yml or .json extension".to_string(),
            });
        }
    };

    let table = file.into_table()?;
    info!(path = %path.display(), points = table.len(), "loaded reference table");
    Ok(table)
}

/// Table from `path` when given, otherwise the built-in reference table.
pub fn load_table_or_reference(path: Option<&Path>) -> AppResult<PhaseTable> {
    match path {
        Some(p) => load_table(p),
        None => Ok(PhaseTable::reference()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pc_table::TableError;

    #[test]
    fn yaml_table() {
        let yaml = "points:\n  - { pressure: 10.0, liquid_volume: 0.0035, vapor_volume: 0.0035 }\n  - { pressure: 0.05, liquid_volume: 0.00105, vapor_volume: 30.0 }\n";
        let table = TableFile::from_yaml_str(yaml).unwrap().into_table().unwrap();
        assert_eq!(table, PhaseTable::reference());
    }

    #[test]
    fn json_table_rejects_single_row() {
        let json = r#"{"points":[{"pressure":1.0,"liquid_volume":0.001,"vapor_volume":1.0}]}"#;
        let err = TableFile::from_json_str(json)
            .unwrap()
            .into_table()
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Table(TableError::TooFewPoints { count: 1 })
        ));
    }

    #[test]
    fn default_when_no_path() {
        assert_eq!(
            load_table_or_reference(None).unwrap(),
            PhaseTable::reference()
        );
    }

    #[test]
    fn table_file_from_table() {
        let file = TableFile::from(&PhaseTable::reference());
        assert_eq!(file.points.len(), 2);
        assert_eq!(file.points[0].pressure, 0.05);
    }
}
