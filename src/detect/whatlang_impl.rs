//! whatlang-backed language identification.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::LanguageDetector;
use crate::{Error, Result};

// whatlang reports ISO 639-3; the UI and the translation service both speak
// 639-1, so common languages are mapped down. Anything absent stays 639-3.
static ISO_639_1: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("eng", "en"),
        ("spa", "es"),
        ("fra", "fr"),
        ("deu", "de"),
        ("cmn", "zh"),
        ("jpn", "ja"),
        ("ita", "it"),
        ("por", "pt"),
        ("rus", "ru"),
        ("nld", "nl"),
        ("kor", "ko"),
        ("ara", "ar"),
        ("hin", "hi"),
        ("ukr", "uk"),
        ("pol", "pl"),
        ("tur", "tr"),
        ("vie", "vi"),
        ("swe", "sv"),
    ])
});

/// In-process statistical detector.
#[derive(Debug, Clone, Default)]
pub struct WhatlangDetector;

impl WhatlangDetector {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Result<String> {
        let info = whatlang::detect(text).ok_or_else(|| {
            Error::DetectionFailed("no linguistic features found in input".to_string())
        })?;
        let iso3 = info.lang().code();
        let code = ISO_639_1.get(iso3).copied().unwrap_or(iso3);
        tracing::debug!(
            code,
            confidence = info.confidence(),
            reliable = info.is_reliable(),
            "language detected"
        );
        Ok(code.to_string())
    }
}
