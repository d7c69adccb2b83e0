//! Speech recognition client for Whisper-style transcription endpoints.

use std::path::PathBuf;

use super::spool::AudioSpool;
use super::types::{AudioUpload, Transcription};
use super::SpeechRecognizer;
use crate::{Error, ErrorContext, Result};

/// Client for speech-to-text transcription.
///
/// Each call spools the upload to a scoped temp file, submits the full
/// recording as one multipart request, and returns a single transcription.
/// The spool is removed before the call returns on every path.
pub struct HttpRecognizer {
    http_client: reqwest::Client,
    model: String,
    base_url: String,
    endpoint_path: String,
    api_key: String,
    spool_dir: Option<PathBuf>,
}

impl HttpRecognizer {
    pub fn builder() -> HttpRecognizerBuilder {
        HttpRecognizerBuilder::new()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn transcribe(&self, upload: &AudioUpload) -> Result<Transcription> {
        let spool = AudioSpool::write(upload, self.spool_dir.as_deref())?;
        tracing::debug!(path = %spool.path().display(), bytes = upload.data.len(), "audio spooled");

        let audio = spool.read()?;
        let endpoint = format!("{}{}", self.base_url.trim_end_matches('/'), self.endpoint_path);
        let part = reqwest::multipart::Part::bytes(audio)
            .file_name(format!("audio.{}", upload.format.extension()))
            .mime_str(upload.format.mime_type())
            .map_err(|e| {
                Error::unexpected_with_context(
                    format!("invalid mime: {}", e),
                    ErrorContext::new().with_source("recognizer"),
                )
            })?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("model", self.model.clone());
        let response = self
            .http_client
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                Error::speech_request_with_context(
                    e.to_string(),
                    ErrorContext::new().with_source("recognizer"),
                )
            })?;
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            Error::speech_request_with_context(
                format!("failed to read response: {}", e),
                ErrorContext::new().with_source("recognizer"),
            )
        })?;
        if !status.is_success() {
            return Err(Error::speech_request_with_context(
                format!("HTTP {}", status.as_u16()),
                ErrorContext::new().with_details(body).with_source("recognizer"),
            ));
        }
        let json: serde_json::Value = serde_json::from_str(&body)?;
        let text = json
            .get("text")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .trim()
            .to_string();
        // The endpoint signals "no speech" with an empty transcript rather
        // than a distinct status.
        if text.is_empty() {
            return Err(Error::Unintelligible);
        }
        Ok(Transcription {
            text,
            language: json.get("language").and_then(|v| v.as_str()).map(String::from),
        })
    }
}

#[async_trait::async_trait]
impl SpeechRecognizer for HttpRecognizer {
    async fn recognize(&self, upload: &AudioUpload) -> Result<Transcription> {
        tracing::info!(
            format = upload.format.extension(),
            bytes = upload.data.len(),
            "recognizing speech"
        );
        self.transcribe(upload).await
    }
}

pub struct HttpRecognizerBuilder {
    model: Option<String>,
    api_key: Option<String>,
    base_url: Option<String>,
    endpoint_path: Option<String>,
    spool_dir: Option<PathBuf>,
    timeout_secs: Option<u64>,
}

impl HttpRecognizerBuilder {
    pub fn new() -> Self {
        Self {
            model: None,
            api_key: None,
            base_url: None,
            endpoint_path: None,
            spool_dir: None,
            timeout_secs: None,
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn endpoint_path(mut self, path: impl Into<String>) -> Self {
        self.endpoint_path = Some(path.into());
        self
    }

    /// Directory for spooled uploads. Defaults to the system temp directory.
    pub fn spool_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.spool_dir = Some(dir.into());
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn build(self) -> Result<HttpRecognizer> {
        let model = self.model.unwrap_or_else(|| "whisper-1".to_string());
        let api_key = self
            .api_key
            .or_else(|| std::env::var("VOXLATE_STT_API_KEY").ok())
            .ok_or_else(|| {
                Error::unexpected_with_context(
                    "speech recognition API key required (set VOXLATE_STT_API_KEY)",
                    ErrorContext::new().with_source("recognizer"),
                )
            })?;
        let base_url = self
            .base_url
            .or_else(|| std::env::var("VOXLATE_STT_URL").ok())
            .unwrap_or_else(|| "https://api.openai.com".to_string());
        let endpoint_path = self
            .endpoint_path
            .unwrap_or_else(|| "/v1/audio/transcriptions".to_string());
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
            .unwrap_or(60);
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| {
                Error::unexpected_with_context(
                    format!("failed to create HTTP client: {}", e),
                    ErrorContext::new().with_source("recognizer"),
                )
            })?;
        Ok(HttpRecognizer {
            http_client,
            model,
            base_url,
            endpoint_path,
            api_key,
            spool_dir: self.spool_dir,
        })
    }
}

impl Default for HttpRecognizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
