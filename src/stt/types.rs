//! Speech recognition types.

use serde::{Deserialize, Serialize};

/// Transcription result for one audio upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcription {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Supported audio container formats for uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Wav,
    Mp3,
    Flac,
    Aiff,
}

impl AudioFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mpeg",
            Self::Flac => "audio/flac",
            Self::Aiff => "audio/aiff",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::Flac => "flac",
            Self::Aiff => "aiff",
        }
    }

    /// Parse a file extension. Accepts both `aiff` and `aif`.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "wav" => Some(Self::Wav),
            "mp3" => Some(Self::Mp3),
            "flac" => Some(Self::Flac),
            "aiff" | "aif" => Some(Self::Aiff),
            _ => None,
        }
    }
}

/// An uploaded audio recording: the raw bytes plus the declared container
/// format. Transient; lives only long enough to be recognized.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    pub data: Vec<u8>,
    pub format: AudioFormat,
}

impl AudioUpload {
    pub fn new(data: Vec<u8>, format: AudioFormat) -> Self {
        Self { data, format }
    }
}
