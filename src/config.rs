use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::types::InputSource;
use crate::utils::{MergeError, Result};

pub const DEFAULT_KEY_FIELD: &str = "Email";

/// Fully resolved settings for one merge run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Files or directory to read
    pub source: InputSource,

    /// Destination CSV, overwritten if present
    pub output: Utf8PathBuf,

    /// Column whose value identifies a row
    pub key_field: String,

    /// Lowercase keys before comparing them
    pub case_insensitive: bool,
}

impl Config {
    pub fn new(source: InputSource, output: impl Into<Utf8PathBuf>) -> Self {
        Self {
            source,
            output: output.into(),
            key_field: DEFAULT_KEY_FIELD.to_string(),
            case_insensitive: false,
        }
    }

    pub fn with_key_field(mut self, key_field: impl Into<String>) -> Self {
        self.key_field = key_field.into();
        self
    }

    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.key_field.trim().is_empty() {
            return Err(MergeError::Config("key field must not be empty".to_string()));
        }
        if self.output.as_str().is_empty() {
            return Err(MergeError::Config("output path must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Optional settings, as read from a YAML file or collected from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    #[serde(default)]
    pub input_files: Option<Vec<Utf8PathBuf>>,
    #[serde(default)]
    pub input_dir: Option<Utf8PathBuf>,
    #[serde(default)]
    pub output: Option<Utf8PathBuf>,
    #[serde(default)]
    pub key_field: Option<String>,
    #[serde(default)]
    pub case_insensitive: Option<bool>,
}

impl PartialConfig {
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| MergeError::Config(format!("failed to read config file {path}: {e}")))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| MergeError::Config(format!("failed to parse config file {path}: {e}")))
    }

    /// Layer `overrides` on top of `self`. An input mode in `overrides` replaces
    /// both input settings of `self`.
    pub fn overlay(self, overrides: PartialConfig) -> PartialConfig {
        let overrides_input = overrides.input_files.is_some() || overrides.input_dir.is_some();
        let (input_files, input_dir) = if overrides_input {
            (overrides.input_files, overrides.input_dir)
        } else {
            (self.input_files, self.input_dir)
        };

        PartialConfig {
            input_files,
            input_dir,
            output: overrides.output.or(self.output),
            key_field: overrides.key_field.or(self.key_field),
            case_insensitive: overrides.case_insensitive.or(self.case_insensitive),
        }
    }
}

impl TryFrom<PartialConfig> for Config {
    type Error = MergeError;

    fn try_from(partial: PartialConfig) -> Result<Self> {
        let source = match (partial.input_files, partial.input_dir) {
            (Some(files), None) => InputSource::Files(files),
            (None, Some(dir)) => InputSource::Directory(dir),
            (Some(_), Some(_)) => {
                return Err(MergeError::Config(
                    "input files and input directory are mutually exclusive".to_string(),
                ))
            }
            (None, None) => {
                return Err(MergeError::Config(
                    "either input files or an input directory is required".to_string(),
                ))
            }
        };

        let output = partial
            .output
            .ok_or_else(|| MergeError::Config("output path is required".to_string()))?;

        let config = Config {
            source,
            output,
            key_field: partial
                .key_field
                .unwrap_or_else(|| DEFAULT_KEY_FIELD.to_string()),
            case_insensitive: partial.case_insensitive.unwrap_or(false),
        };
        config.validate()?;
        Ok(config)
    }
}
