//! Naming options.
//!
//! Options come from the `objcNames` block of the generator configuration,
//! as JSON:
//!
//! ```json
//! { "exactMethodNames": false, "cacheTypeNames": true }
//! ```
//!
//! Missing fields fall back to their defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ObjCNameOptions {
    /// Value of `exact` on method `@ObjCName` markers.
    pub exact_method_names: bool,
    /// Memoize resolved type names across calls.
    pub cache_type_names: bool,
}

impl Default for ObjCNameOptions {
    fn default() -> Self {
        Self {
            exact_method_names: false,
            cache_type_names: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("failed to read naming options from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid naming options: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ObjCNameOptions {
    pub fn from_json(text: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, OptionsError> {
        let text = std::fs::read_to_string(path).map_err(|source| OptionsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
#[path = "../tests/options_tests.rs"]
mod tests;
