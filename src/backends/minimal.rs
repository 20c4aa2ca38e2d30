use async_trait::async_trait;
use log::debug;

use crate::backends::{listing, BackendKind, LanguageRow, ListDestination, TranslationBackend};
use crate::errors::BackendError;
use crate::language_utils::LanguageTable;
use crate::providers::TextTranslator;

/// Backend with a fixed five-language table and no detection
///
/// The table never comes from the provider, so it is always available.
#[derive(Debug)]
pub struct MinimalBackend {
    translator: Box<dyn TextTranslator>,
    table: LanguageTable,
}

impl MinimalBackend {
    pub fn new(translator: Box<dyn TextTranslator>) -> Self {
        Self { translator, table: LanguageTable::fallback() }
    }
}

#[async_trait]
impl TranslationBackend for MinimalBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Minimal
    }

    async fn resolve_language(&self, token: &str) -> Result<String, BackendError> {
        self.table.resolve(token)
    }

    /// An empty or unknown source silently becomes `auto`; the destination
    /// is mapped through the table when possible and passed through otherwise.
    async fn translate(&self, text: &str, source: &str, dest: &str) -> Result<String, BackendError> {
        if text.trim().is_empty() {
            return Err(BackendError::EmptyText);
        }
        if dest.trim().is_empty() {
            return Err(BackendError::EmptyArgument);
        }

        let source = self.table.code_of(source).unwrap_or_else(|_| "auto".to_string());
        let dest = self
            .table
            .code_of(dest)
            .unwrap_or_else(|_| dest.trim().to_lowercase());
        debug!("minimal: translating {} -> {}", source, dest);

        Ok(self.translator.translate(text, &source, &dest).await?)
    }

    async fn list_languages(
        &self,
        destination: &ListDestination,
        sample: &str,
    ) -> Result<Vec<LanguageRow>, BackendError> {
        listing::list_languages(&self.table, destination, sample, self.translator.as_ref()).await
    }
}
