use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationInvalidArgument,
    ValidationUnexpectedArgument,

    InputReadFailed,

    OutputWriteFailed,
    OutputClosed,

    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",
            ErrorCode::ValidationUnexpectedArgument => "validation.unexpected_argument",

            ErrorCode::InputReadFailed => "input.read_failed",

            ErrorCode::OutputWriteFailed => "output.write_failed",
            ErrorCode::OutputClosed => "output.closed",

            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnexpectedArgumentDetails {
    pub argument: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamErrorDetails {
    pub stream: String,
    pub error: String,
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    /// An argument was present but its value is unusable.
    ///
    /// The message is the problem itself so the diagnostic names the offending value.
    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        let problem = problem.into();
        let details = serde_json::to_value(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.clone(),
            value,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::ValidationInvalidArgument, problem, details).with_help_hint()
    }

    pub fn validation_unexpected_argument(argument: impl Into<String>) -> Self {
        let argument = argument.into();
        let details = serde_json::to_value(UnexpectedArgumentDetails {
            argument: argument.clone(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::ValidationUnexpectedArgument,
            format!("unexpected argument: {}", argument),
            details,
        )
        .with_help_hint()
    }

    pub fn input_read(error: std::io::Error) -> Self {
        Self::stream_error(ErrorCode::InputReadFailed, "stdin", "read", error)
    }

    /// Maps a stdout write failure. A broken pipe means the reader went away,
    /// which is reported with its own code so the boundary can stay quiet.
    pub fn output_write(error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::BrokenPipe {
            return Self::stream_error(ErrorCode::OutputClosed, "stdout", "write", error);
        }
        Self::stream_error(ErrorCode::OutputWriteFailed, "stdout", "write", error)
    }

    fn stream_error(code: ErrorCode, stream: &str, verb: &str, error: std::io::Error) -> Self {
        let details = serde_json::to_value(StreamErrorDetails {
            stream: stream.to_string(),
            error: error.to_string(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            code,
            format!("failed to {} {}: {}", verb, stream, error),
            details,
        )
    }

    pub fn internal_unexpected(error: impl Into<String>) -> Self {
        let error = error.into();
        Self::new(
            ErrorCode::InternalUnexpected,
            format!("unexpected error: {}", error),
            serde_json::json!({ "error": error }),
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }

    fn with_help_hint(self) -> Self {
        self.with_hint("Run with -h/--help for help.")
    }
}
