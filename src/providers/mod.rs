/*!
 * Provider implementations for translation and language identification.
 *
 * Providers are the external collaborators behind the backends:
 * - `google`: HTTP client for the public Google translate endpoint
 * - `trigram`: local trigram-based language identification (whatlang)
 * - `mock`: deterministic providers for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Language reported by a translation provider's own detection
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderDetection {
    /// Detected language code
    pub language: String,
    /// Provider confidence, when reported
    pub confidence: Option<f64>,
}

/// Common trait for translation providers
///
/// Language arguments may be codes, catalog names or the literal `auto`
/// (source only); providers normalize them to whatever their API expects.
#[async_trait]
pub trait TextTranslator: Send + Sync + Debug {
    /// Translate `text` from `source` to `target`
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, ProviderError>;

    /// Detect the language of `text`
    async fn detect(&self, text: &str) -> Result<ProviderDetection, ProviderError>;

    /// Languages supported by the provider, as `(code, name)` pairs
    async fn supported_languages(&self) -> Result<Vec<(String, String)>, ProviderError>;
}

/// Language identification independent of any translation provider
pub trait LanguageIdentifier: Send + Sync + Debug {
    /// Most likely language code of `text`
    fn detect(&self, text: &str) -> Result<String, ProviderError>;

    /// Ranked candidates, best first, each formatted as `code:score`
    fn ranked(&self, text: &str) -> Result<Vec<String>, ProviderError>;
}

pub mod google;
pub mod mock;
pub mod trigram;
