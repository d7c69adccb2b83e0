//! voxlate — interactive translation session in the terminal.
//!
//! Usage:
//!   voxlate                 Start an interactive session
//!   voxlate version         Show version information
//!   voxlate help            Show this help message

use std::io::{BufRead, Write};
use std::sync::Arc;

use voxlate::detect::WhatlangDetector;
use voxlate::lang::TargetLanguage;
use voxlate::session::SessionController;
use voxlate::stt::{AudioFormat, AudioUpload, HttpRecognizer};
use voxlate::translate::HttpTranslator;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        None => run_session(),
        Some("version") | Some("--version") | Some("-V") => cmd_version(),
        Some("help") | Some("--help") | Some("-h") => print_usage(),
        Some(other) => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!(
        r#"voxlate — interactive speech/text translation sessions

USAGE:
    voxlate [COMMAND]

COMMANDS:
    (none)                      Start an interactive session
    version                     Show version information
    help                        Show this help message

SESSION ACTIONS:
    text <words...>             Set the text to translate
    lang <code>                 Select the target language (es, fr, de, zh, ja)
    detect                      Detect the language of the entered text
    translate                   Translate the entered text
    upload <path>               Recognize speech from an audio file (wav, mp3, flac, aiff)
    translate-rec               Translate the recognized text
    show                        Show the current session state
    quit                        End the session

ENVIRONMENT:
    VOXLATE_TRANSLATE_URL       Translation service base URL
    VOXLATE_TRANSLATE_API_KEY   Translation service API key (optional)
    VOXLATE_STT_URL             Speech recognition service base URL
    VOXLATE_STT_API_KEY         Speech recognition service API key
    VOXLATE_HTTP_TIMEOUT_SECS   Per-request timeout (default 30s translate, 60s speech)"#
    );
}

fn cmd_version() {
    println!("voxlate {}", env!("CARGO_PKG_VERSION"));
}

fn run_session() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("failed to start runtime: {e}");
            std::process::exit(1);
        }
    };

    let translator = match HttpTranslator::builder().build() {
        Ok(t) => Arc::new(t),
        Err(e) => {
            eprintln!("failed to configure translator: {e}");
            std::process::exit(1);
        }
    };
    let recognizer = match HttpRecognizer::builder().build() {
        Ok(r) => Some(Arc::new(r)),
        Err(e) => {
            // Speech recognition is optional at startup; text-only sessions
            // still work without a key.
            eprintln!("note: speech recognition disabled: {e}");
            None
        }
    };

    // An unconfigured recognizer still needs a collaborator slot; every
    // upload attempt reports the configuration problem.
    let recognizer_slot: Arc<dyn voxlate::stt::SpeechRecognizer> = match recognizer.clone() {
        Some(r) => r,
        None => Arc::new(DisabledRecognizer),
    };

    println!("Translator session. Type 'help' for actions, 'quit' to exit.");
    let mut controller = SessionController::new(
        translator,
        Arc::new(WhatlangDetector::new()),
        recognizer_slot,
    );

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("input error: {e}");
                break;
            }
        }
        let line = line.trim();
        let (action, rest) = match line.split_once(char::is_whitespace) {
            Some((a, r)) => (a, r.trim()),
            None => (line, ""),
        };
        match action {
            "" => {}
            "quit" | "exit" => break,
            "help" => print_usage(),
            "text" => {
                controller.set_input_text(rest);
                println!("Text set ({} chars).", rest.len());
            }
            "lang" => match TargetLanguage::from_code(rest) {
                Some(lang) => {
                    controller.select_target(lang);
                    println!("Target language: {lang}");
                }
                None => {
                    println!("Unknown language code '{rest}'. Supported:");
                    for lang in TargetLanguage::ALL {
                        println!("  {} — {}", lang.code(), lang.label());
                    }
                }
            },
            "detect" => match controller.detect_input() {
                Ok(detection) => {
                    if detection.fell_back {
                        println!("Warning: language detection failed, assuming '{}'.", detection.code);
                    } else {
                        println!("Detected Language: {}", detection.code);
                    }
                }
                Err(e) => println!("{e}"),
            },
            "translate" => match runtime.block_on(controller.translate_input()) {
                Ok(translation) => {
                    println!("Translated Text:");
                    println!("{}", translation.text);
                }
                Err(e) => println!("{e}"),
            },
            "upload" => {
                if recognizer.is_none() {
                    println!("Speech recognition is not configured (set VOXLATE_STT_API_KEY).");
                    continue;
                }
                match read_upload(rest) {
                    Ok(upload) => {
                        println!("Processing audio...");
                        match runtime.block_on(controller.recognize(upload)) {
                            Ok(transcription) => {
                                println!("Recognized Text:");
                                println!("{}", transcription.text);
                            }
                            Err(e) => println!("{e}"),
                        }
                    }
                    Err(msg) => println!("{msg}"),
                }
            }
            "translate-rec" => match runtime.block_on(controller.translate_recognized()) {
                Ok(translation) => {
                    println!("Translated Text:");
                    println!("{}", translation.text);
                }
                Err(e) => println!("{e}"),
            },
            "show" => {
                let session = controller.session();
                println!("text:       {:?}", session.input_text);
                println!(
                    "target:     {}",
                    session.target.map(|l| l.to_string()).unwrap_or_else(|| "(none)".into())
                );
                println!(
                    "recognized: {}",
                    session.recognized_text.as_deref().unwrap_or("(none)")
                );
                println!(
                    "detected:   {}",
                    session
                        .detected
                        .as_ref()
                        .map(|d| d.code.clone())
                        .unwrap_or_else(|| "(none)".into())
                );
            }
            other => println!("Unknown action '{other}'. Type 'help' for the list."),
        }
    }
}

fn read_upload(path: &str) -> Result<AudioUpload, String> {
    if path.is_empty() {
        return Err("usage: upload <path>".to_string());
    }
    let format = std::path::Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .and_then(AudioFormat::from_extension)
        .ok_or_else(|| "unsupported audio format (expected wav, mp3, flac, or aiff)".to_string())?;
    let data = std::fs::read(path).map_err(|e| format!("cannot read '{path}': {e}"))?;
    Ok(AudioUpload::new(data, format))
}

/// Stand-in used when no speech API key is configured.
struct DisabledRecognizer;

#[async_trait::async_trait]
impl voxlate::stt::SpeechRecognizer for DisabledRecognizer {
    async fn recognize(&self, _upload: &voxlate::stt::AudioUpload) -> voxlate::Result<voxlate::stt::Transcription> {
        Err(voxlate::Error::unexpected_with_context(
            "speech recognition is not configured (set VOXLATE_STT_API_KEY)",
            voxlate::ErrorContext::new().with_source("recognizer"),
        ))
    }
}
