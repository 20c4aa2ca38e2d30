/*!
 * Mock provider implementations for testing.
 *
 * This module provides mock providers that simulate different behaviors:
 * - `MockProvider::working()` - Always succeeds with tagged translated text
 * - `MockProvider::failing()` - Always fails with an error
 * - `MockProvider::without_language_list()` - Translates, but cannot list languages
 * - `MockIdentifier` - Fixed detection result and ranked candidate list
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::ProviderError;
use crate::providers::{LanguageIdentifier, ProviderDetection, TextTranslator};

/// A translate call as received by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockRequest {
    /// The text to translate
    pub text: String,
    /// Source language
    pub source_language: String,
    /// Target language
    pub target_language: String,
}

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a proper translation
    Working,
    /// Always fails with an error
    Failing,
}

/// Mock provider for testing translation behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Languages returned by `supported_languages`; `None` makes the call fail
    languages: Option<Vec<(String, String)>>,
    /// Detection reported by `detect`
    detection: ProviderDetection,
    /// Request counter shared between clones
    request_count: Arc<AtomicUsize>,
    /// Every translate request received
    requests: Arc<Mutex<Vec<MockRequest>>>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&MockRequest) -> String>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            languages: Some(vec![
                ("en".to_string(), "English".to_string()),
                ("uk".to_string(), "Ukrainian".to_string()),
                ("fr".to_string(), "French".to_string()),
                ("de".to_string(), "German".to_string()),
                ("es".to_string(), "Spanish".to_string()),
                ("it".to_string(), "Italian".to_string()),
            ]),
            detection: ProviderDetection { language: "en".to_string(), confidence: Some(0.98) },
            request_count: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            custom_response: None,
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a working mock whose language list is unavailable
    pub fn without_language_list() -> Self {
        Self::working().with_languages(None)
    }

    /// Set the language list (`None` makes listing fail)
    pub fn with_languages(mut self, languages: Option<Vec<(String, String)>>) -> Self {
        self.languages = languages;
        self
    }

    /// Set the detection result
    pub fn with_detection(mut self, language: &str, confidence: Option<f64>) -> Self {
        self.detection = ProviderDetection { language: language.to_string(), confidence };
        self
    }

    /// Set a custom response generator
    pub fn with_custom_response(mut self, generator: fn(&MockRequest) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of requests of any kind received so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Translate requests received so far
    pub fn requests(&self) -> Vec<MockRequest> {
        self.requests.lock().map(|requests| requests.clone()).unwrap_or_default()
    }

    fn failure(&self) -> ProviderError {
        ProviderError::ApiError {
            message: "Simulated provider failure".to_string(),
            status_code: 500,
        }
    }
}

impl Clone for MockProvider {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            languages: self.languages.clone(),
            detection: self.detection.clone(),
            request_count: Arc::clone(&self.request_count),
            requests: Arc::clone(&self.requests),
            custom_response: self.custom_response,
        }
    }
}

#[async_trait]
impl TextTranslator for MockProvider {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        let request = MockRequest {
            text: text.to_string(),
            source_language: source.to_string(),
            target_language: target.to_string(),
        };
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        match self.behavior {
            MockBehavior::Working => Ok(match self.custom_response {
                Some(generator) => generator(&request),
                None => format!("[TRANSLATED to {}] {}", request.target_language, request.text),
            }),
            MockBehavior::Failing => Err(self.failure()),
        }
    }

    async fn detect(&self, _text: &str) -> Result<ProviderDetection, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            MockBehavior::Working => Ok(self.detection.clone()),
            MockBehavior::Failing => Err(self.failure()),
        }
    }

    async fn supported_languages(&self) -> Result<Vec<(String, String)>, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        if self.behavior == MockBehavior::Failing {
            return Err(self.failure());
        }
        self.languages
            .clone()
            .ok_or_else(|| ProviderError::RequestFailed("Simulated language list outage".to_string()))
    }
}

/// Mock language identifier with a fixed answer
#[derive(Debug, Clone)]
pub struct MockIdentifier {
    /// Detected code; `None` makes detection fail
    detected: Option<String>,
    /// Ranked list; `None` makes ranking fail
    ranked: Option<Vec<String>>,
}

impl MockIdentifier {
    pub fn new(detected: &str, ranked: &[&str]) -> Self {
        Self {
            detected: Some(detected.to_string()),
            ranked: Some(ranked.iter().map(|candidate| candidate.to_string()).collect()),
        }
    }

    /// Identifier that detects `detected` but cannot rank candidates
    pub fn without_ranking(detected: &str) -> Self {
        Self { detected: Some(detected.to_string()), ranked: None }
    }

    /// Identifier whose every call fails
    pub fn failing() -> Self {
        Self { detected: None, ranked: None }
    }
}

impl LanguageIdentifier for MockIdentifier {
    fn detect(&self, _text: &str) -> Result<String, ProviderError> {
        self.detected
            .clone()
            .ok_or_else(|| ProviderError::Unavailable("Simulated detector failure".to_string()))
    }

    fn ranked(&self, _text: &str) -> Result<Vec<String>, ProviderError> {
        self.ranked
            .clone()
            .ok_or_else(|| ProviderError::Unavailable("Simulated ranking failure".to_string()))
    }
}
