/*!
 * Translation backends.
 *
 * Every backend exposes the same contract (`TranslationBackend`) so callers
 * can swap them through configuration. Backends differ in what they can do:
 * - `rich`: catalog-backed language table, detection through the translation provider
 * - `minimal`: fixed five-language table, no detection
 * - `file_oriented`: table fetched from the provider with a static fallback,
 *   detection through a separate language identifier
 *
 * Detection is an optional sub-interface (`LanguageDetector`); a backend
 * without it answers `detect_language` with `BackendError::Unsupported`.
 */

use async_trait::async_trait;
use std::fmt::Debug;
use std::path::PathBuf;

use crate::errors::BackendError;

pub mod file_oriented;
pub mod listing;
pub mod minimal;
pub mod registry;
pub mod rich;

pub use file_oriented::FileOrientedBackend;
pub use listing::LanguageRow;
pub use minimal::MinimalBackend;
pub use registry::{BackendKind, BackendRegistry};
pub use rich::RichBackend;

/// What `detect_language` should report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectMode {
    /// Language code only
    Lang,
    /// Confidence only
    Confidence,
    /// `code confidence`
    #[default]
    All,
}

impl DetectMode {
    /// Parse a mode name, case-insensitively; anything unrecognized means `All`
    pub fn parse(mode: &str) -> Self {
        match mode.trim().to_lowercase().as_str() {
            "lang" => Self::Lang,
            "confidence" => Self::Confidence,
            _ => Self::All,
        }
    }
}

/// Outcome of a language detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionResult {
    /// Detected language code
    pub language_code: String,
    /// Backend-specific confidence, when available
    pub confidence: Option<String>,
}

impl DetectionResult {
    /// Confidence, or `N/A` when the backend could not provide one
    pub fn confidence_or_na(&self) -> &str {
        self.confidence.as_deref().unwrap_or("N/A")
    }

    /// Render according to `mode`
    pub fn render(&self, mode: DetectMode) -> String {
        match mode {
            DetectMode::Lang => self.language_code.clone(),
            DetectMode::Confidence => self.confidence_or_na().to_string(),
            DetectMode::All => format!("{} {}", self.language_code, self.confidence_or_na()),
        }
    }
}

/// Where `list_languages` sends its table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListDestination {
    /// Column-aligned table on stdout
    Screen,
    /// Semicolon-delimited file at the given path
    File(PathBuf),
}

impl ListDestination {
    /// Parse `screen`/`file` case-insensitively; `screen` is the default
    pub fn parse(destination: &str, file_path: impl Into<PathBuf>) -> Self {
        if destination.trim().eq_ignore_ascii_case("file") {
            Self::File(file_path.into())
        } else {
            Self::Screen
        }
    }
}

/// Optional detection capability of a backend
#[async_trait]
pub trait LanguageDetector: Send + Sync {
    /// Detect the language of `text`
    async fn detect(&self, text: &str) -> Result<DetectionResult, BackendError>;
}

/// Common contract of all translation backends
#[async_trait]
pub trait TranslationBackend: Send + Sync + Debug {
    /// Which backend this is
    fn kind(&self) -> BackendKind;

    /// Resolve a language token: a name yields its code, a code yields its name
    async fn resolve_language(&self, token: &str) -> Result<String, BackendError>;

    /// Translate `text` from `source` (a token or `auto`) to `dest`
    async fn translate(&self, text: &str, source: &str, dest: &str) -> Result<String, BackendError>;

    /// List supported languages sorted by name, optionally with `sample` translated into each
    async fn list_languages(
        &self,
        destination: &ListDestination,
        sample: &str,
    ) -> Result<Vec<LanguageRow>, BackendError>;

    /// Detection capability, if this backend has one
    fn as_detector(&self) -> Option<&dyn LanguageDetector> {
        None
    }

    /// Detect the language of `text` and render it according to `mode`
    async fn detect_language(&self, text: &str, mode: DetectMode) -> Result<String, BackendError> {
        match self.as_detector() {
            Some(detector) => Ok(detector.detect(text).await?.render(mode)),
            None => Err(BackendError::Unsupported {
                backend: self.kind().id(),
                operation: "detect_language",
            }),
        }
    }
}
