use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::errors::ProviderError;
use crate::language_utils;
use crate::providers::{ProviderDetection, TextTranslator};

/// Client for the public Google translate endpoint (`client=gtx`)
#[derive(Debug)]
pub struct GoogleTranslate {
    /// Base URL, e.g. `https://translate.googleapis.com`
    base_url: String,
    /// HTTP client for making requests
    client: Client,
}

impl GoogleTranslate {
    /// Create a new client for `endpoint` with a request timeout
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        let endpoint = endpoint.into();
        Self {
            base_url: endpoint.trim_end_matches('/').to_string(),
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
        }
    }

    // @returns: Language parameter the endpoint understands
    // Catalog names map to codes; anything else is passed through as given.
    fn language_param(token: &str) -> String {
        let token = token.trim();
        if token.eq_ignore_ascii_case("auto") {
            return "auto".to_string();
        }
        language_utils::catalog()
            .code_for(token)
            .map(str::to_string)
            .unwrap_or_else(|| token.to_string())
    }

    fn endpoint_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, ProviderError> {
        Url::parse_with_params(&format!("{}/{}", self.base_url, path), params)
            .map_err(|e| ProviderError::RequestFailed(format!("Invalid endpoint {}: {}", self.base_url, e)))
    }

    async fn send(&self, url: Url, text: Option<&str>) -> Result<Value, ProviderError> {
        let request = match text {
            Some(text) => self.client.post(url).form(&[("q", text)]),
            None => self.client.get(url),
        };

        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            error!("Translate endpoint returned {}", status);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        serde_json::from_str(&body).map_err(|e| ProviderError::ParseError(e.to_string()))
    }
}

/// Concatenate the translated segments of a `translate_a/single` response
pub fn parse_translation(value: &Value) -> Result<String, ProviderError> {
    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| ProviderError::ParseError("missing translation segments".to_string()))?;

    Ok(segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect())
}

/// Extract the source language and its confidence from a `translate_a/single` response
pub fn parse_detection(value: &Value) -> Result<ProviderDetection, ProviderError> {
    let language = value
        .get(2)
        .and_then(Value::as_str)
        .ok_or_else(|| ProviderError::ParseError("missing detected language".to_string()))?;

    Ok(ProviderDetection {
        language: language.to_string(),
        confidence: value.get(6).and_then(Value::as_f64),
    })
}

/// Extract `(code, name)` target languages from a `translate_a/l` response
pub fn parse_languages(value: &Value) -> Result<Vec<(String, String)>, ProviderError> {
    let targets = value
        .get("tl")
        .and_then(Value::as_object)
        .ok_or_else(|| ProviderError::ParseError("missing target language list".to_string()))?;

    Ok(targets
        .iter()
        .filter_map(|(code, name)| name.as_str().map(|name| (code.clone(), name.to_string())))
        .collect())
}

#[async_trait]
impl TextTranslator for GoogleTranslate {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, ProviderError> {
        let source = Self::language_param(source);
        let target = Self::language_param(target);
        debug!("Translating {} chars {} -> {}", text.chars().count(), source, target);

        let url = self.endpoint_url(
            "translate_a/single",
            &[("client", "gtx"), ("sl", source.as_str()), ("tl", target.as_str()), ("dt", "t")],
        )?;
        let value = self.send(url, Some(text)).await?;
        parse_translation(&value)
    }

    async fn detect(&self, text: &str) -> Result<ProviderDetection, ProviderError> {
        let url = self.endpoint_url(
            "translate_a/single",
            &[("client", "gtx"), ("sl", "auto"), ("tl", "en"), ("dt", "t")],
        )?;
        let value = self.send(url, Some(text)).await?;
        parse_detection(&value)
    }

    async fn supported_languages(&self) -> Result<Vec<(String, String)>, ProviderError> {
        let url = self.endpoint_url("translate_a/l", &[("client", "gtx"), ("hl", "en")])?;
        let value = self.send(url, None).await?;
        parse_languages(&value)
    }
}
