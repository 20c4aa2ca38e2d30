use log::debug;
use std::path::PathBuf;
use std::str::FromStr;

use crate::app_config::ProviderConfig;
use crate::backends::{FileOrientedBackend, MinimalBackend, RichBackend, TranslationBackend};
use crate::errors::AppError;
use crate::providers::google::GoogleTranslate;
use crate::providers::trigram::WhatlangIdentifier;

/// Registered backend variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    // @backend: Full catalog, provider-side detection
    Rich,
    // @backend: Fixed five-language table, no detection
    Minimal,
    // @backend: Fetched table with fallback, local detection
    #[default]
    FileOriented,
}

impl BackendKind {
    // @returns: Identifier used in configuration
    pub fn id(&self) -> &'static str {
        match self {
            Self::Rich => "rich",
            Self::Minimal => "minimal",
            Self::FileOriented => "file-oriented",
        }
    }

    pub fn all() -> [Self; 3] {
        [Self::Rich, Self::Minimal, Self::FileOriented]
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for BackendKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rich" => Ok(Self::Rich),
            "minimal" => Ok(Self::Minimal),
            "file-oriented" | "file_oriented" | "file" => Ok(Self::FileOriented),
            _ => Err(AppError::UnknownBackend(s.trim().to_string())),
        }
    }
}

/// Builds backend instances from provider settings
///
/// Each backend owns its own provider clients; nothing is shared through
/// process-wide state.
#[derive(Debug, Clone)]
pub struct BackendRegistry {
    settings: ProviderConfig,
}

impl BackendRegistry {
    pub fn new(settings: ProviderConfig) -> Self {
        Self { settings }
    }

    /// Construct a backend of the given kind
    pub fn create(&self, kind: BackendKind) -> Box<dyn TranslationBackend> {
        debug!("Creating {} backend for {}", kind, self.settings.endpoint);
        let translator = Box::new(GoogleTranslate::new(&self.settings.endpoint, self.settings.timeout_secs));

        match kind {
            BackendKind::Rich => Box::new(RichBackend::new(translator)),
            BackendKind::Minimal => Box::new(MinimalBackend::new(translator)),
            BackendKind::FileOriented => Box::new(FileOrientedBackend::new(
                translator,
                Box::new(WhatlangIdentifier::new()),
            )),
        }
    }

    /// Construct the backend named by a configuration identifier
    pub fn resolve(&self, identifier: &str) -> Result<Box<dyn TranslationBackend>, AppError> {
        let kind = identifier.parse::<BackendKind>()?;
        Ok(self.create(kind))
    }

    /// Where a backend's language listing file goes
    pub fn listing_path(&self, kind: BackendKind) -> PathBuf {
        self.settings.listing_dir.join(format!("languages_{}.csv", kind.id()))
    }
}
