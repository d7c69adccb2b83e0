//! Translation session state and the controller that drives it.
//!
//! Every public method corresponds to one user-triggered action, performs at
//! most one collaborator call, and returns a typed outcome for the UI layer
//! to render. There are no automatic transitions, no background work, and no
//! retries; a failed action is retried only by the user triggering it again.

use std::sync::Arc;

use crate::detect::{Detection, LanguageDetector};
use crate::lang::{TargetLanguage, DEFAULT_LANGUAGE_CODE};
use crate::stt::{AudioUpload, SpeechRecognizer, Transcription};
use crate::translate::{Translation, Translator};
use crate::{Error, Result};

/// Per-interaction session state.
///
/// `recognized_text` holds the transcript of the most recently recognized
/// upload. It is set only by a successful recognition and cleared when a new
/// recognition attempt starts; a failure message is never stored here.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub input_text: String,
    pub target: Option<TargetLanguage>,
    pub recognized_text: Option<String>,
    pub detected: Option<Detection>,
}

/// Orchestrates the three collaborators over a [`Session`].
///
/// Collaborators are injected as trait objects so tests can substitute
/// deterministic fakes. The text-entry track and the audio track are
/// independent and may interleave arbitrarily.
pub struct SessionController {
    translator: Arc<dyn Translator>,
    detector: Arc<dyn LanguageDetector>,
    recognizer: Arc<dyn SpeechRecognizer>,
    session: Session,
}

impl SessionController {
    pub fn new(
        translator: Arc<dyn Translator>,
        detector: Arc<dyn LanguageDetector>,
        recognizer: Arc<dyn SpeechRecognizer>,
    ) -> Self {
        Self {
            translator,
            detector,
            recognizer,
            session: Session::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.session.input_text = text.into();
    }

    pub fn select_target(&mut self, target: TargetLanguage) {
        self.session.target = Some(target);
    }

    /// Translate the live text-entry field into the selected target.
    ///
    /// Empty or whitespace-only text, or a missing target selection, returns
    /// [`Error::EmptyInput`] without invoking the translator.
    pub async fn translate_input(&mut self) -> Result<Translation> {
        let text = self.session.input_text.trim();
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }
        let target = self.session.target.ok_or(Error::EmptyInput)?;
        let text = text.to_string();
        self.translator.translate(&text, target).await
    }

    /// Detect the language of the live text-entry field.
    ///
    /// A failed detection recovers here: the default code is substituted,
    /// `fell_back` is set so the UI shows the warning, and the action still
    /// succeeds. Any non-detection error from the collaborator is terminal
    /// for this action.
    pub fn detect_input(&mut self) -> Result<Detection> {
        let outcome = match self.detector.detect(&self.session.input_text) {
            Ok(code) => Detection {
                code,
                fell_back: false,
            },
            Err(e) if e.is_recoverable() => {
                tracing::warn!(error = %e, fallback = DEFAULT_LANGUAGE_CODE, "language detection failed, using default");
                Detection {
                    code: DEFAULT_LANGUAGE_CODE.to_string(),
                    fell_back: true,
                }
            }
            Err(e) => return Err(e),
        };
        self.session.detected = Some(outcome.clone());
        Ok(outcome)
    }

    /// Recognize an uploaded recording and remember its transcript.
    ///
    /// The previous transcript is invalidated before the attempt starts, so
    /// a stale value from an earlier upload can never be translated. On
    /// failure the slot stays empty.
    pub async fn recognize(&mut self, upload: AudioUpload) -> Result<Transcription> {
        self.session.recognized_text = None;
        let transcription = self.recognizer.recognize(&upload).await?;
        self.session.recognized_text = Some(transcription.text.clone());
        Ok(transcription)
    }

    /// Translate the most recently recognized transcript.
    ///
    /// Uses the target language selected at the time of this request, not a
    /// snapshot taken at recognition time. With no transcript available the
    /// action returns [`Error::NoRecognizedText`] and makes no external
    /// call.
    pub async fn translate_recognized(&mut self) -> Result<Translation> {
        let text = match &self.session.recognized_text {
            Some(t) if !t.trim().is_empty() => t.clone(),
            _ => return Err(Error::NoRecognizedText),
        };
        let target = self.session.target.ok_or(Error::EmptyInput)?;
        self.translator.translate(&text, target).await
    }
}
