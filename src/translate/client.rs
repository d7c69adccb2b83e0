//! Translation client for LibreTranslate-compatible endpoints.

use super::types::Translation;
use super::Translator;
use crate::lang::TargetLanguage;
use crate::{Error, ErrorContext, Result};

/// Client for machine translation.
///
/// Speaks the LibreTranslate wire shape: `POST {base}/translate` with a JSON
/// body, source language left to the service (`"source": "auto"`). One
/// request per call, no retries.
pub struct HttpTranslator {
    http_client: reqwest::Client,
    base_url: String,
    endpoint_path: String,
    api_key: Option<String>,
}

impl HttpTranslator {
    pub fn builder() -> HttpTranslatorBuilder {
        HttpTranslatorBuilder::new()
    }

    async fn request(&self, text: &str, target: TargetLanguage) -> Result<Translation> {
        let endpoint = format!("{}{}", self.base_url.trim_end_matches('/'), self.endpoint_path);
        let mut body = serde_json::json!({
            "q": text,
            "source": "auto",
            "target": target.code(),
            "format": "text",
        });
        if let Some(key) = &self.api_key {
            body["api_key"] = serde_json::Value::String(key.clone());
        }
        let response = self
            .http_client
            .post(&endpoint)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                Error::network_with_context(
                    format!("translation request failed: {}", e),
                    ErrorContext::new().with_source("translator"),
                )
            })?;
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            Error::network_with_context(
                format!("failed to read translation response: {}", e),
                ErrorContext::new().with_source("translator"),
            )
        })?;
        if !status.is_success() {
            // A language-pair rejection arrives as a client error naming the
            // language; everything else keeps the generic classification.
            let lowered = body.to_lowercase();
            if status.is_client_error() && lowered.contains("language") && lowered.contains("support") {
                return Err(Error::UnsupportedLanguage(target.code().to_string()));
            }
            return Err(Error::from_status(status.as_u16(), body, "translator"));
        }
        let json: serde_json::Value = serde_json::from_str(&body)?;
        let translated = json
            .get("translatedText")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                Error::unexpected_with_context(
                    "translation response missing 'translatedText'",
                    ErrorContext::new().with_details(body.clone()).with_source("translator"),
                )
            })?;
        Ok(Translation {
            text: translated.to_string(),
            target: target.code().to_string(),
            source_text: text.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl Translator for HttpTranslator {
    async fn translate(&self, text: &str, target: TargetLanguage) -> Result<Translation> {
        if text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }
        tracing::info!(target_lang = target.code(), chars = text.len(), "translating text");
        self.request(text, target).await
    }
}

pub struct HttpTranslatorBuilder {
    base_url: Option<String>,
    endpoint_path: Option<String>,
    api_key: Option<String>,
    timeout_secs: Option<u64>,
}

impl HttpTranslatorBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            endpoint_path: None,
            api_key: None,
            timeout_secs: None,
        }
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn endpoint_path(mut self, path: impl Into<String>) -> Self {
        self.endpoint_path = Some(path.into());
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn build(self) -> Result<HttpTranslator> {
        let base_url = self
            .base_url
            .or_else(|| std::env::var("VOXLATE_TRANSLATE_URL").ok())
            .unwrap_or_else(|| "https://libretranslate.com".to_string());
        let api_key = self
            .api_key
            .or_else(|| std::env::var("VOXLATE_TRANSLATE_API_KEY").ok());
        let endpoint_path = self
            .endpoint_path
            .unwrap_or_else(|| "/translate".to_string());
        let endpoint_path = if endpoint_path.starts_with('/') {
            endpoint_path
        } else {
            format!("/{}", endpoint_path)
        };
        let timeout_secs = self
            .timeout_secs
            .or_else(|| {
                std::env::var("VOXLATE_HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
            })
            .unwrap_or(30);
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| {
                Error::unexpected_with_context(
                    format!("failed to create HTTP client: {}", e),
                    ErrorContext::new().with_source("translator"),
                )
            })?;
        Ok(HttpTranslator {
            http_client,
            base_url,
            endpoint_path,
            api_key,
        })
    }
}

impl Default for HttpTranslatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
