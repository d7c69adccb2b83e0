//! # voxlate
//!
//! Interactive translation sessions over three external collaborators: a
//! speech-to-text service, an in-process language detector, and a machine
//! translation service.
//!
//! ## Overview
//!
//! A user types text or uploads a recording, optionally detects the source
//! language, and requests a translation into one of a fixed set of target
//! languages. Every action is a single blocking call into one collaborator;
//! the only state is the per-session [`session::Session`] value (most
//! importantly the transcript of the last recognized upload). There is no
//! queueing, no background work, and no retry logic; a failed action is
//! simply retried by the user.
//!
//! ## Design
//!
//! - **Typed failures**: every expected failure mode (empty input,
//!   unintelligible audio, unreachable service, ambiguous detection) is a
//!   variant of [`Error`] with a user-visible message; nothing crashes the
//!   session.
//! - **Injected collaborators**: [`translate::Translator`],
//!   [`detect::LanguageDetector`], and [`stt::SpeechRecognizer`] are trait
//!   seams, so the controller is tested against deterministic fakes.
//! - **Scoped uploads**: recognized audio is spooled to a temp file that is
//!   removed on every exit path ([`stt::AudioSpool`]).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use voxlate::detect::WhatlangDetector;
//! use voxlate::lang::TargetLanguage;
//! use voxlate::session::SessionController;
//! use voxlate::stt::HttpRecognizer;
//! use voxlate::translate::HttpTranslator;
//!
//! #[tokio::main]
//! async fn main() -> voxlate::Result<()> {
//!     let mut controller = SessionController::new(
//!         Arc::new(HttpTranslator::builder().build()?),
//!         Arc::new(WhatlangDetector::new()),
//!         Arc::new(HttpRecognizer::builder().api_key("sk-...").build()?),
//!     );
//!
//!     controller.set_input_text("Where is the train station?");
//!     controller.select_target(TargetLanguage::Japanese);
//!     let translation = controller.translate_input().await?;
//!     println!("{}", translation.text);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`session`] | Session state and the user-action controller |
//! | [`translate`] | Translation contract and HTTP client |
//! | [`detect`] | Language detection contract and whatlang backend |
//! | [`stt`] | Speech recognition contract, audio types, spool, HTTP client |
//! | [`lang`] | Supported target languages and the detection fallback code |

pub mod detect;
pub mod error;
pub mod lang;
pub mod session;
pub mod stt;
pub mod translate;

// Re-export main types for convenience
pub use detect::{Detection, LanguageDetector, WhatlangDetector};
pub use error::{Error, ErrorContext};
pub use lang::TargetLanguage;
pub use session::{Session, SessionController};
pub use stt::{AudioFormat, AudioUpload, HttpRecognizer, SpeechRecognizer, Transcription};
pub use translate::{HttpTranslator, Translation, Translator};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
