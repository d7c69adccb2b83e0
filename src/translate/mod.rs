//! Translation: typed contract plus an HTTP client for
//! LibreTranslate-compatible services.

mod client;
mod types;

pub use client::{HttpTranslator, HttpTranslatorBuilder};
pub use types::Translation;

use crate::lang::TargetLanguage;
use crate::Result;

/// Translation provider interface.
///
/// The source language is never supplied; the service auto-detects it.
/// Implementations must short-circuit empty or whitespace-only text with
/// [`crate::Error::EmptyInput`] without touching the network.
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target: TargetLanguage) -> Result<Translation>;
}
