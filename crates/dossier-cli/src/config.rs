//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "dossier.toml";

/// CLI configuration: the three directories every command works against.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the per-type YAML data files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory holding the per-type JSON Schema files
    #[serde(default = "default_schema_dir")]
    pub schema_dir: PathBuf,

    /// Directory rendered reports are written into
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_schema_dir() -> PathBuf {
    PathBuf::from("schemas")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            schema_dir: default_schema_dir(),
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicitly given path must exist; the default `dossier.toml` is
    /// optional and falls back to built-in directory names.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => {
                let default = PathBuf::from(CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };
        let contents = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Apply command-line directory overrides.
    pub fn with_overrides(
        mut self,
        data_dir: Option<PathBuf>,
        schema_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if let Some(dir) = schema_dir {
            self.schema_dir = dir;
        }
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        self
    }
}
