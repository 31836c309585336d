//! Handing a completed reading to something that writes prose about it.
//!
//! The text model behind an [`Interpreter`] is an external collaborator:
//! prompt in, prose out, and it may fail. [`interpret_or_fallback`] keeps a
//! reading usable when it does by falling back to [`CannedInterpreter`].

pub mod canned;
pub mod request;

pub use canned::CannedInterpreter;
pub use request::InterpretationRequest;

use oracle_core::SpiritAnswer;
use oracle_core::whispers::VEILED_WHISPER;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::ouija::SpiritReading;

/// Result type for interpretation.
pub type InterpretResult<T> = Result<T, InterpretError>;

/// Ways an interpreter can fail.
#[derive(Debug, Error)]
pub enum InterpretError {
    /// No credential is configured for the text service.
    #[error("missing credential: {0}")]
    MissingCredential(String),

    /// The service answered with a non-success status.
    #[error("interpreter returned status {status}: {body}")]
    Status {
        /// HTTP-style status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// The service answered with nothing.
    #[error("interpreter returned an empty response")]
    EmptyResponse,

    /// Any other failure.
    #[error("interpreter unavailable: {0}")]
    Unavailable(String),
}

/// Writes prose for a reading.
pub trait Interpreter {
    /// Interpret a request. Implementations backed by a text model send
    /// [`InterpretationRequest::system_prompt`] and
    /// [`InterpretationRequest::prompt`].
    fn interpret(&self, request: &InterpretationRequest) -> InterpretResult<String>;
}

/// Ask `interpreter`, falling back to the canned reading on failure or an
/// empty reply.
pub fn interpret_or_fallback(interpreter: &dyn Interpreter, request: &InterpretationRequest) -> String {
    match interpreter.interpret(request) {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            warn!(kind = request.kind(), "empty interpretation, using canned reading");
            CannedInterpreter.compose(request)
        }
        Err(e) => {
            warn!(kind = request.kind(), error = %e, "interpreter failed, using canned reading");
            CannedInterpreter.compose(request)
        }
    }
}

#[derive(Deserialize)]
struct SpiritReply {
    answer: SpiritAnswer,
    whisper: String,
}

/// Read a spirit-board reply (a JSON object, possibly wrapped in a code
/// fence). Anything unreadable becomes UNCERTAIN with the veiled whisper.
pub fn parse_spirit_reply(question: &str, raw: &str) -> SpiritReading {
    let cleaned = raw
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();
    let (answer, whisper) = match serde_json::from_str::<SpiritReply>(cleaned) {
        Ok(reply) => (reply.answer, reply.whisper),
        Err(e) => {
            warn!(error = %e, "unreadable spirit reply");
            (SpiritAnswer::Uncertain, VEILED_WHISPER.to_string())
        }
    };
    SpiritReading {
        question: question.trim().to_string(),
        answer,
        whisper,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Offline;

    impl Interpreter for Offline {
        fn interpret(&self, _: &InterpretationRequest) -> InterpretResult<String> {
            Err(InterpretError::MissingCredential("ORACLE_API_KEY".into()))
        }
    }

    struct Silent;

    impl Interpreter for Silent {
        fn interpret(&self, _: &InterpretationRequest) -> InterpretResult<String> {
            Ok("  ".into())
        }
    }

    struct Echo;

    impl Interpreter for Echo {
        fn interpret(&self, request: &InterpretationRequest) -> InterpretResult<String> {
            Ok(format!("echo {}", request.kind()))
        }
    }

    #[test]
    fn successful_interpreter_wins() {
        let request = InterpretationRequest::ouija("Now?");
        assert_eq!(interpret_or_fallback(&Echo, &request), "echo ouija");
    }

    #[test]
    fn failure_falls_back() {
        let request = InterpretationRequest::birth_chart("Ada", "1990-05-15", None, None);
        let text = interpret_or_fallback(&Offline, &request);
        assert_eq!(text, CannedInterpreter.compose(&request));
    }

    #[test]
    fn empty_reply_falls_back() {
        let request = InterpretationRequest::ouija("Now?");
        let text = interpret_or_fallback(&Silent, &request);
        assert!(text.contains("UNCERTAIN"));
    }

    #[test]
    fn spirit_reply_plain_and_fenced() {
        let reading = parse_spirit_reply("Q", r#"{"answer": "YES", "whisper": "Go."}"#);
        assert_eq!(reading.answer, SpiritAnswer::Yes);
        assert_eq!(reading.whisper, "Go.");

        let fenced = "```json\n{\"answer\": \"NO\", \"whisper\": \"Wait.\"}\n```";
        assert_eq!(parse_spirit_reply("Q", fenced).answer, SpiritAnswer::No);
    }

    #[test]
    fn garbage_spirit_reply_is_veiled() {
        let reading = parse_spirit_reply("Q", "the spirits are silent");
        assert_eq!(reading.answer, SpiritAnswer::Uncertain);
        assert_eq!(reading.whisper, VEILED_WHISPER);
    }

    #[test]
    fn error_messages() {
        let err = InterpretError::Status {
            status: 529,
            body: "overloaded".into(),
        };
        assert_eq!(err.to_string(), "interpreter returned status 529: overloaded");
    }
}
