//! Controller tests against deterministic fake collaborators.
//!
//! The fakes count their calls so the "no external call" properties are
//! checked directly, not inferred from output.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use voxlate::detect::LanguageDetector;
use voxlate::lang::TargetLanguage;
use voxlate::session::SessionController;
use voxlate::stt::{AudioFormat, AudioUpload, SpeechRecognizer, Transcription};
use voxlate::translate::{Translation, Translator};
use voxlate::{Error, Result};

#[derive(Default)]
struct FakeTranslator {
    calls: AtomicUsize,
    last_text: Mutex<Option<String>>,
}

#[async_trait::async_trait]
impl Translator for FakeTranslator {
    async fn translate(&self, text: &str, target: TargetLanguage) -> Result<Translation> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_text.lock().unwrap() = Some(text.to_string());
        Ok(Translation {
            text: format!("[{}] {}", target.code(), text),
            target: target.code().to_string(),
            source_text: text.to_string(),
        })
    }
}

struct FakeDetector {
    result: Option<&'static str>,
}

impl LanguageDetector for FakeDetector {
    fn detect(&self, _text: &str) -> Result<String> {
        match self.result {
            Some(code) => Ok(code.to_string()),
            None => Err(Error::DetectionFailed("no features".to_string())),
        }
    }
}

/// Scripted recognizer: each call pops the next outcome
/// (`Some(text)` = transcript, `None` = unintelligible).
struct FakeRecognizer {
    calls: AtomicUsize,
    outcomes: Mutex<VecDeque<Option<String>>>,
}

impl FakeRecognizer {
    fn scripted(outcomes: Vec<Option<&str>>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            outcomes: Mutex::new(outcomes.into_iter().map(|o| o.map(String::from)).collect()),
        }
    }
}

#[async_trait::async_trait]
impl SpeechRecognizer for FakeRecognizer {
    async fn recognize(&self, _upload: &AudioUpload) -> Result<Transcription> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.outcomes.lock().unwrap().pop_front() {
            Some(Some(text)) => Ok(Transcription {
                text,
                language: None,
            }),
            Some(None) => Err(Error::Unintelligible),
            None => panic!("unexpected recognize call"),
        }
    }
}

fn controller(
    translator: Arc<FakeTranslator>,
    detector: FakeDetector,
    recognizer: Arc<FakeRecognizer>,
) -> SessionController {
    SessionController::new(translator, Arc::new(detector), recognizer)
}

fn wav_upload() -> AudioUpload {
    AudioUpload::new(vec![0u8; 32], AudioFormat::Wav)
}

#[tokio::test]
async fn empty_text_translates_nothing() {
    let translator = Arc::new(FakeTranslator::default());
    let mut c = controller(
        translator.clone(),
        FakeDetector { result: Some("en") },
        Arc::new(FakeRecognizer::scripted(vec![])),
    );
    c.select_target(TargetLanguage::Spanish);
    c.set_input_text("   \t ");

    let err = c.translate_input().await.unwrap_err();
    assert!(matches!(err, Error::EmptyInput));
    assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_target_translates_nothing() {
    let translator = Arc::new(FakeTranslator::default());
    let mut c = controller(
        translator.clone(),
        FakeDetector { result: Some("en") },
        Arc::new(FakeRecognizer::scripted(vec![])),
    );
    c.set_input_text("Bonjour tout le monde");

    let err = c.translate_input().await.unwrap_err();
    assert!(matches!(err, Error::EmptyInput));
    assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn translate_uses_entered_text() {
    let translator = Arc::new(FakeTranslator::default());
    let mut c = controller(
        translator.clone(),
        FakeDetector { result: Some("en") },
        Arc::new(FakeRecognizer::scripted(vec![])),
    );
    c.select_target(TargetLanguage::German);
    c.set_input_text("Good morning");

    let translation = c.translate_input().await.unwrap();
    assert_eq!(translation.text, "[de] Good morning");
    assert_eq!(translation.source_text, "Good morning");
    assert_eq!(translator.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn detection_failure_falls_back_with_warning_flag() {
    let translator = Arc::new(FakeTranslator::default());
    let mut c = controller(
        translator,
        FakeDetector { result: None },
        Arc::new(FakeRecognizer::scripted(vec![])),
    );
    c.set_input_text("zq");

    let detection = c.detect_input().unwrap();
    assert_eq!(detection.code, "en");
    assert!(detection.fell_back);
    assert_eq!(c.session().detected.as_ref().unwrap().code, "en");
}

#[tokio::test]
async fn detection_success_keeps_detected_code() {
    let translator = Arc::new(FakeTranslator::default());
    let mut c = controller(
        translator,
        FakeDetector { result: Some("fr") },
        Arc::new(FakeRecognizer::scripted(vec![])),
    );
    c.set_input_text("Bonjour tout le monde");

    let detection = c.detect_input().unwrap();
    assert_eq!(detection.code, "fr");
    assert!(!detection.fell_back);
}

#[tokio::test]
async fn translate_recognized_without_recognition_makes_no_call() {
    let translator = Arc::new(FakeTranslator::default());
    let mut c = controller(
        translator.clone(),
        FakeDetector { result: Some("en") },
        Arc::new(FakeRecognizer::scripted(vec![])),
    );
    c.select_target(TargetLanguage::French);

    let err = c.translate_recognized().await.unwrap_err();
    assert!(matches!(err, Error::NoRecognizedText));
    assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn translate_recognized_uses_transcript_not_live_text() {
    let translator = Arc::new(FakeTranslator::default());
    let recognizer = Arc::new(FakeRecognizer::scripted(vec![Some("hello from the recording")]));
    let mut c = controller(
        translator.clone(),
        FakeDetector { result: Some("en") },
        recognizer,
    );
    c.select_target(TargetLanguage::Spanish);

    c.recognize(wav_upload()).await.unwrap();
    // The text field diverges after recognition; the transcript must win.
    c.set_input_text("something typed later");

    let translation = c.translate_recognized().await.unwrap();
    assert_eq!(translation.source_text, "hello from the recording");
    assert_eq!(
        translator.last_text.lock().unwrap().as_deref(),
        Some("hello from the recording")
    );
}

#[tokio::test]
async fn translate_recognized_uses_current_selector() {
    let translator = Arc::new(FakeTranslator::default());
    let recognizer = Arc::new(FakeRecognizer::scripted(vec![Some("guten tag")]));
    let mut c = controller(
        translator,
        FakeDetector { result: Some("de") },
        recognizer,
    );
    c.select_target(TargetLanguage::French);
    c.recognize(wav_upload()).await.unwrap();

    let translation = c.translate_recognized().await.unwrap();
    assert_eq!(translation.target, "fr");

    // Switching the selector after recognition changes the next request.
    c.select_target(TargetLanguage::Japanese);
    let translation = c.translate_recognized().await.unwrap();
    assert_eq!(translation.target, "ja");
}

#[tokio::test]
async fn failed_recognition_invalidates_stale_transcript() {
    let translator = Arc::new(FakeTranslator::default());
    let recognizer = Arc::new(FakeRecognizer::scripted(vec![Some("first recording"), None]));
    let mut c = controller(
        translator.clone(),
        FakeDetector { result: Some("en") },
        recognizer,
    );
    c.select_target(TargetLanguage::Spanish);

    c.recognize(wav_upload()).await.unwrap();
    assert_eq!(c.session().recognized_text.as_deref(), Some("first recording"));

    // A new upload whose recognition fails must not leave the old
    // transcript behind, and must not store the failure message either.
    let err = c.recognize(wav_upload()).await.unwrap_err();
    assert!(matches!(err, Error::Unintelligible));
    assert!(c.session().recognized_text.is_none());

    let err = c.translate_recognized().await.unwrap_err();
    assert!(matches!(err, Error::NoRecognizedText));
    assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn recognition_then_translation_round() {
    let translator = Arc::new(FakeTranslator::default());
    let recognizer = Arc::new(FakeRecognizer::scripted(vec![Some("where is the station")]));
    let mut c = controller(
        translator,
        FakeDetector { result: Some("en") },
        recognizer.clone(),
    );
    c.select_target(TargetLanguage::Chinese);

    let transcription = c.recognize(wav_upload()).await.unwrap();
    assert_eq!(transcription.text, "where is the station");
    assert_eq!(recognizer.calls.load(Ordering::SeqCst), 1);

    let translation = c.translate_recognized().await.unwrap();
    assert_eq!(translation.text, "[zh] where is the station");
}
