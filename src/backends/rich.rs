use async_trait::async_trait;
use log::debug;

use crate::backends::{
    listing, BackendKind, DetectionResult, LanguageDetector, LanguageRow, ListDestination, TranslationBackend,
};
use crate::errors::BackendError;
use crate::language_utils::{self, LanguageTable};
use crate::providers::TextTranslator;

/// Backend with a full language catalog and provider-side detection
///
/// Language tokens are validated against the table before anything is sent
/// to the provider.
#[derive(Debug)]
pub struct RichBackend {
    translator: Box<dyn TextTranslator>,
    table: LanguageTable,
}

impl RichBackend {
    /// Backend over the translate endpoint's catalog
    pub fn new(translator: Box<dyn TextTranslator>) -> Self {
        Self::with_table(translator, language_utils::catalog().clone())
    }

    /// Backend over a caller-provided table
    pub fn with_table(translator: Box<dyn TextTranslator>, table: LanguageTable) -> Self {
        Self { translator, table }
    }
}

#[async_trait]
impl TranslationBackend for RichBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Rich
    }

    async fn resolve_language(&self, token: &str) -> Result<String, BackendError> {
        self.table.resolve(token)
    }

    async fn translate(&self, text: &str, source: &str, dest: &str) -> Result<String, BackendError> {
        if text.trim().is_empty() {
            return Err(BackendError::EmptyText);
        }

        let source = if source.trim().eq_ignore_ascii_case("auto") {
            "auto".to_string()
        } else {
            self.table.code_of(source)?
        };
        let dest = self.table.code_of(dest)?;
        debug!("rich: translating {} -> {}", source, dest);

        Ok(self.translator.translate(text, &source, &dest).await?)
    }

    async fn list_languages(
        &self,
        destination: &ListDestination,
        sample: &str,
    ) -> Result<Vec<LanguageRow>, BackendError> {
        listing::list_languages(&self.table, destination, sample, self.translator.as_ref()).await
    }

    fn as_detector(&self) -> Option<&dyn LanguageDetector> {
        Some(self)
    }
}

#[async_trait]
impl LanguageDetector for RichBackend {
    async fn detect(&self, text: &str) -> Result<DetectionResult, BackendError> {
        if text.trim().is_empty() {
            return Err(BackendError::EmptyText);
        }

        let detection = self.translator.detect(text).await?;
        Ok(DetectionResult {
            language_code: detection.language,
            // Debug keeps the fraction on whole values: 1.0 not 1
            confidence: detection.confidence.map(|confidence| format!("{:?}", confidence)),
        })
    }
}
