use async_trait::async_trait;
use log::{debug, warn};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::backends::{
    listing, BackendKind, DetectionResult, LanguageDetector, LanguageRow, ListDestination, TranslationBackend,
};
use crate::errors::BackendError;
use crate::language_utils::LanguageTable;
use crate::providers::{LanguageIdentifier, TextTranslator};

// Short codes the provider expects spelled out
const FULL_NAMES: &[(&str, &str)] = &[
    ("uk", "ukrainian"),
    ("en", "english"),
    ("fr", "french"),
    ("de", "german"),
    ("es", "spanish"),
    ("auto", "auto"),
];

/// Backend whose language table is fetched from the provider on every use
///
/// A failed or empty fetch never surfaces: the static fallback table is used
/// instead and `used_fallback()` reports it. Detection goes through a
/// separate `LanguageIdentifier`.
#[derive(Debug)]
pub struct FileOrientedBackend {
    translator: Box<dyn TextTranslator>,
    identifier: Box<dyn LanguageIdentifier>,
    fallback: LanguageTable,
    degraded: AtomicBool,
}

impl FileOrientedBackend {
    pub fn new(translator: Box<dyn TextTranslator>, identifier: Box<dyn LanguageIdentifier>) -> Self {
        Self {
            translator,
            identifier,
            fallback: LanguageTable::fallback(),
            degraded: AtomicBool::new(false),
        }
    }

    /// True when the most recent table fetch fell back to the static table
    pub fn used_fallback(&self) -> bool {
        self.degraded.load(Ordering::SeqCst)
    }

    /// Fetch the provider's table, degrading to the fallback on any failure
    pub async fn language_table(&self) -> LanguageTable {
        let fetched = match self.translator.supported_languages().await {
            Ok(languages) if !languages.is_empty() => {
                Some(LanguageTable::from_pairs(languages.iter().map(|(code, name)| (name, code))))
            }
            Ok(_) => {
                warn!("Provider returned no languages, using fallback table");
                None
            }
            Err(e) => {
                warn!("Language list unavailable ({}), using fallback table", e);
                None
            }
        };

        self.degraded.store(fetched.is_none(), Ordering::SeqCst);
        fetched.unwrap_or_else(|| self.fallback.clone())
    }

    fn full_name(token: &str) -> String {
        let token = token.trim();
        let lowered = token.to_lowercase();
        FULL_NAMES
            .iter()
            .find(|(code, _)| *code == lowered)
            .map(|(_, name)| name.to_string())
            .unwrap_or_else(|| token.to_string())
    }
}

/// Confidence of `code` in a ranked `code:score` list
///
/// Parsing is lenient: entries without a colon are skipped and the first
/// matching code wins.
pub fn confidence_for(code: &str, ranked: &[String]) -> Option<String> {
    ranked.iter().find_map(|candidate| {
        let (candidate_code, score) = candidate.split_once(':')?;
        let score = score.trim();
        (candidate_code.trim() == code && !score.is_empty()).then(|| score.to_string())
    })
}

#[async_trait]
impl TranslationBackend for FileOrientedBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::FileOriented
    }

    async fn resolve_language(&self, token: &str) -> Result<String, BackendError> {
        if token.trim().is_empty() {
            return Err(BackendError::EmptyArgument);
        }
        self.language_table().await.resolve(token)
    }

    async fn translate(&self, text: &str, source: &str, dest: &str) -> Result<String, BackendError> {
        if text.trim().is_empty() {
            return Err(BackendError::EmptyText);
        }
        if source.trim().is_empty() || dest.trim().is_empty() {
            return Err(BackendError::EmptyArgument);
        }

        let source = Self::full_name(source);
        let dest = Self::full_name(dest);
        debug!("file-oriented: translating {} -> {}", source, dest);

        Ok(self.translator.translate(text, &source, &dest).await?)
    }

    async fn list_languages(
        &self,
        destination: &ListDestination,
        sample: &str,
    ) -> Result<Vec<LanguageRow>, BackendError> {
        let table = self.language_table().await;
        listing::list_languages(&table, destination, sample, self.translator.as_ref()).await
    }

    fn as_detector(&self) -> Option<&dyn LanguageDetector> {
        Some(self)
    }
}

#[async_trait]
impl LanguageDetector for FileOrientedBackend {
    async fn detect(&self, text: &str) -> Result<DetectionResult, BackendError> {
        if text.trim().is_empty() {
            return Err(BackendError::EmptyText);
        }

        let language_code = self.identifier.detect(text)?;
        let confidence = match self.identifier.ranked(text) {
            Ok(ranked) => confidence_for(&language_code, &ranked),
            Err(e) => {
                debug!("Ranked candidates unavailable: {}", e);
                None
            }
        };

        Ok(DetectionResult { language_code, confidence })
    }
}
