use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorContext {
    /// Additional context about the error (e.g., HTTP body, underlying cause)
    pub details: Option<String>,
    /// Source of the error (e.g., "translator", "recognizer")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            details: None,
            source: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Unified error type for the translation session.
///
/// Every variant maps to a distinct user-visible message; the session
/// controller never lets one of these escape as a crash. `DetectionFailed`
/// is the single recoverable variant (the controller falls back to the
/// default language and keeps going).
#[derive(Debug, Error)]
pub enum Error {
    #[error("please enter text and select a target language before translating")]
    EmptyInput,

    #[error("no recognized text to translate")]
    NoRecognizedText,

    #[error("target language '{0}' is not supported")]
    UnsupportedLanguage(String),

    #[error("translation service unavailable (HTTP {status}){}", format_context(.context))]
    ServiceUnavailable {
        status: u16,
        context: ErrorContext,
    },

    #[error("service rejected the request (HTTP {status}){}", format_context(.context))]
    ServiceRejected {
        status: u16,
        context: ErrorContext,
    },

    #[error("network error: {message}{}", format_context(.context))]
    Network {
        message: String,
        context: ErrorContext,
    },

    #[error("speech recognition could not understand the audio")]
    Unintelligible,

    #[error("could not request results from the speech recognition service: {message}{}", format_context(.context))]
    SpeechRequestFailed {
        message: String,
        context: ErrorContext,
    },

    #[error("language detection failed: {0}")]
    DetectionFailed(String),

    #[error("unexpected error: {message}{}", format_context(.context))]
    Unexpected {
        message: String,
        context: ErrorContext,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed service response: {0}")]
    Json(#[from] serde_json::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new network error with structured context
    pub fn network_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Network {
            message: msg.into(),
            context,
        }
    }

    /// Create a new speech-request error with structured context
    pub fn speech_request_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::SpeechRequestFailed {
            message: msg.into(),
            context,
        }
    }

    /// Create a new unexpected error with structured context
    pub fn unexpected_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Unexpected {
            message: msg.into(),
            context,
        }
    }

    /// Classify an HTTP error status from a collaborator service.
    pub fn from_status(status: u16, body: impl Into<String>, source: &str) -> Self {
        let context = ErrorContext::new()
            .with_details(body)
            .with_source(source.to_string());
        if status >= 500 {
            Error::ServiceUnavailable { status, context }
        } else {
            Error::ServiceRejected { status, context }
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::ServiceUnavailable { context, .. }
            | Error::ServiceRejected { context, .. }
            | Error::Network { context, .. }
            | Error::SpeechRequestFailed { context, .. }
            | Error::Unexpected { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Whether the session controller recovers from this error instead of
    /// surfacing it as the action's outcome.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::DetectionFailed(_))
    }
}
