use crate::cli::Cli;
use crate::error::{ToolboxError, ToolboxResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "toolbox.json";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Where `export` writes when no explicit output is given
    pub out_dir: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pretty: true,
            out_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load from `path`, or from `toolbox.json` in the working directory when
    /// it exists, or fall back to defaults.
    pub fn load(path: Option<&Path>) -> ToolboxResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> ToolboxResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ToolboxError::io(path, e))?;
        serde_json::from_str(&content).map_err(|e| ToolboxError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Command line flags take precedence over the file
    pub fn apply_cli(&mut self, cli: &Cli) {
        if cli.compact {
            self.pretty = false;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
    }
}
