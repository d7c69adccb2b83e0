//! Speech recognition: typed contract, audio upload types, the scoped spool
//! for uploaded bytes, and an HTTP client for Whisper-style transcription
//! endpoints.

mod client;
mod spool;
mod types;

pub use client::{HttpRecognizer, HttpRecognizerBuilder};
pub use spool::AudioSpool;
pub use types::{AudioFormat, AudioUpload, Transcription};

use crate::Result;

/// Speech-to-text interface.
///
/// The whole upload is treated as a single utterance; there are no streaming
/// or partial results, and a failed call is terminal (no retries).
#[async_trait::async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize(&self, upload: &AudioUpload) -> Result<Transcription>;
}
