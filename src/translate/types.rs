//! Translation result types.

use serde::{Deserialize, Serialize};

/// A completed translation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    /// Translated text returned by the service.
    pub text: String,
    /// Target language code the translation was requested for.
    pub target: String,
    /// The exact source text that was submitted.
    pub source_text: String,
}
