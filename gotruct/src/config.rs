//! @ai:module:intent Configuration for a generation run, loadable from TOML
//! @ai:module:layer infrastructure
//! @ai:module:public_api GeneratorConfig
//! @ai:module:stateless true

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// @ai:intent Everything the pipeline needs: input directory, grouping default, and emission settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratorConfig {
    #[serde(default = "default_package")]
    pub package: String,
    #[serde(default = "default_group")]
    pub default_group: String,
    /// Destination file; `None` writes to standard output.
    #[serde(default)]
    pub output: Option<PathBuf>,
    /// Comment placed above each generated struct.
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default = "default_path")]
    pub path: PathBuf,
    /// Emit the "Code generated ... DO NOT EDIT." line.
    #[serde(default = "default_header")]
    pub header: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package: default_package(),
            default_group: default_group(),
            output: None,
            comment: None,
            path: default_path(),
            header: default_header(),
        }
    }
}

fn default_package() -> String {
    "converter".to_string()
}

fn default_group() -> String {
    "unknown".to_string()
}

fn default_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_header() -> bool {
    true
}

impl GeneratorConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// @ai:intent Struct comment to emit, derived from the package when unset
    /// @ai:example (package = "converter", comment = None) -> "@autowire(set=converter)"
    /// @ai:effects pure
    pub fn struct_comment(&self) -> String {
        match &self.comment {
            Some(comment) if !comment.is_empty() => comment.clone(),
            _ => format!("@autowire(set={})", self.package),
        }
    }
}
