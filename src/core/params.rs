use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::Action;

/// Run parameters suitable for config files and embedding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunParams {
    pub action: Action,
    /// Result sink path: markers plus one `v1;v2;result` line per valid row.
    pub result_log: PathBuf,
    /// Diagnostic sink path: markers plus one line per wrong row.
    pub diagnostic_log: PathBuf,
}

impl RunParams {
    pub fn new(action: Action) -> Self {
        Self {
            action,
            ..Self::default()
        }
    }
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            action: Action::Plus,
            result_log: PathBuf::from("storage/result.csv"),
            diagnostic_log: PathBuf::from("storage/log.txt"),
        }
    }
}
