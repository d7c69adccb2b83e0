//! Language detection: typed contract plus the whatlang-backed
//! implementation.

mod whatlang_impl;

pub use whatlang_impl::WhatlangDetector;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Outcome of a detection request after fallback handling.
///
/// `fell_back` marks the case where detection produced nothing and the
/// session substituted [`crate::lang::DEFAULT_LANGUAGE_CODE`]; callers must
/// keep that visible to the user as a warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    pub code: String,
    pub fell_back: bool,
}

/// Language identification interface.
///
/// Statistical identification is probabilistic and unreliable on short or
/// mixed-language input; implementations return
/// [`crate::Error::DetectionFailed`] when no result can be produced at all.
/// Recovery (default-language fallback) belongs to the caller, not here.
pub trait LanguageDetector: Send + Sync {
    /// Best-guess ISO-639-like code for `text`.
    fn detect(&self, text: &str) -> Result<String>;
}
