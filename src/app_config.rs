use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::backends::BackendKind;
use crate::bounded_reader::ReadLimits;
use crate::errors::AppError;

/// Application configuration module
/// This module handles the application configuration: loading the JSON
/// configuration file, applying defaults and validating the result.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Settings of a translation run
    pub run: RunConfig,

    /// Provider settings shared by all backends
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

// Same shape as `Config`, but tolerates a missing `run` section so it can be
// reported as such instead of as a parse error.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    run: Option<RunConfig>,
    #[serde(default)]
    provider: ProviderConfig,
    #[serde(default)]
    log_level: LogLevel,
}

/// Where the translated text goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    // @output: Print to stdout
    Screen,
    // @output: Write a derived file next to the input
    File,
}

impl FromStr for OutputTarget {
    type Err = std::convert::Infallible;

    // Anything other than `screen` means file
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("screen") {
            Ok(Self::Screen)
        } else {
            Ok(Self::File)
        }
    }
}

/// The `run` section
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RunConfig {
    // @field: Input text file
    #[serde(default = "default_text_file")]
    pub text_file: PathBuf,

    // @field: Destination language token
    #[serde(default = "default_dest_lang")]
    pub dest_lang: String,

    // @field: Backend identifier
    #[serde(default = "default_module")]
    pub module: String,

    // @field: `screen` or `file`
    #[serde(default = "default_output")]
    pub output: String,

    // @field: Character limit, 0 = unlimited
    #[serde(default)]
    pub limit_chars: usize,

    // @field: Word limit, 0 = unlimited
    #[serde(default)]
    pub limit_words: usize,

    // @field: Sentence limit, 0 = unlimited
    #[serde(default)]
    pub limit_sentences: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            text_file: default_text_file(),
            dest_lang: default_dest_lang(),
            module: default_module(),
            output: default_output(),
            limit_chars: 0,
            limit_words: 0,
            limit_sentences: 0,
        }
    }
}

impl RunConfig {
    pub fn output_target(&self) -> OutputTarget {
        self.output.parse().unwrap_or(OutputTarget::File)
    }

    pub fn limits(&self) -> ReadLimits {
        ReadLimits::new(self.limit_chars, self.limit_words, self.limit_sentences)
    }
}

/// Provider settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    // @field: Translate endpoint base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    // @field: Directory for language listing files
    #[serde(default = "default_listing_dir")]
    pub listing_dir: PathBuf,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            listing_dir: default_listing_dir(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

fn default_text_file() -> PathBuf {
    PathBuf::from("text.txt")
}

fn default_dest_lang() -> String {
    "en".to_string()
}

fn default_module() -> String {
    BackendKind::default().id().to_string()
}

fn default_output() -> String {
    "screen".to_string()
}

fn default_endpoint() -> String {
    "https://translate.googleapis.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_listing_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Config {
    /// Parse configuration from JSON text
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let file: ConfigFile = serde_json::from_str(json)
            .map_err(|e| AppError::ConfigurationMissing(format!("invalid config: {}", e)))?;

        let run = file
            .run
            .ok_or_else(|| AppError::ConfigurationMissing("config [run] section missing".to_string()))?;

        Ok(Self { run, provider: file.provider, log_level: file.log_level })
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::ConfigurationMissing(format!("config [run] section missing ({:?}: {})", path, e))
        })?;
        Self::from_json(&json)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), AppError> {
        if self.run.dest_lang.trim().is_empty() {
            return Err(AppError::ConfigurationMissing("dest_lang must not be empty".to_string()));
        }
        self.run.module.parse::<BackendKind>()?;
        if self.provider.endpoint.trim().is_empty() {
            return Err(AppError::ConfigurationMissing("provider endpoint must not be empty".to_string()));
        }
        Ok(())
    }
}
