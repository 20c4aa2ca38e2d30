//! Trigram-based language identification
//!
//! Uses the whatlang crate, which runs locally and needs no network access.

use whatlang::{Detector, Lang};

use crate::errors::ProviderError;
use crate::language_utils;
use crate::providers::LanguageIdentifier;

/// Whatlang-based language identifier
#[derive(Debug, Clone)]
pub struct WhatlangIdentifier {
    /// How many ranked candidates to report
    candidates: usize,
}

impl WhatlangIdentifier {
    pub fn new() -> Self {
        Self { candidates: 3 }
    }

    pub fn with_candidates(candidates: usize) -> Self {
        Self { candidates: candidates.max(1) }
    }

    // whatlang reports ISO 639-3; Mandarin has no 639-1 entry of its own
    fn code_of(lang: Lang) -> String {
        match lang {
            Lang::Cmn => "zh".to_string(),
            other => language_utils::to_part1(other.code()).unwrap_or_else(|| other.code().to_string()),
        }
    }
}

impl Default for WhatlangIdentifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageIdentifier for WhatlangIdentifier {
    fn detect(&self, text: &str) -> Result<String, ProviderError> {
        whatlang::detect(text)
            .map(|info| Self::code_of(info.lang()))
            .ok_or_else(|| ProviderError::Unavailable("no features in text".to_string()))
    }

    fn ranked(&self, text: &str) -> Result<Vec<String>, ProviderError> {
        let mut denied: Vec<Lang> = Vec::new();
        let mut ranked = Vec::with_capacity(self.candidates);

        while ranked.len() < self.candidates {
            let Some(info) = Detector::with_denylist(denied.clone()).detect(text) else {
                break;
            };
            ranked.push(format!("{}:{:.4}", Self::code_of(info.lang()), info.confidence()));
            denied.push(info.lang());
        }

        if ranked.is_empty() {
            return Err(ProviderError::Unavailable("no features in text".to_string()));
        }
        Ok(ranked)
    }
}
