use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationMissingArgument,
    ValidationInvalidArgument,
    ValidationInvalidJson,

    PathInvalidSegment,
    PathIndexOutOfBounds,

    LocaleUnknown,
    SizeUnknownUnit,

    RuntimeNotInstalled,
    RuntimeAlreadyInstalled,

    InternalIoError,
    InternalJsonError,
    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationMissingArgument => "validation.missing_argument",
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",
            ErrorCode::ValidationInvalidJson => "validation.invalid_json",

            ErrorCode::PathInvalidSegment => "path.invalid_segment",
            ErrorCode::PathIndexOutOfBounds => "path.index_out_of_bounds",

            ErrorCode::LocaleUnknown => "locale.unknown",
            ErrorCode::SizeUnknownUnit => "size.unknown_unit",

            ErrorCode::RuntimeNotInstalled => "runtime.not_installed",
            ErrorCode::RuntimeAlreadyInstalled => "runtime.already_installed",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingArgumentDetails {
    pub args: Vec<String>,
}

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
pub struct InvalidSegmentDetails {
    pub path: String,
    pub segment: String,
    pub problem: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexOutOfBoundsDetails {
    pub path: String,
    pub index: usize,
    pub len: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnknownUnitDetails {
    pub input: String,
    pub unit: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
    pub retryable: Option<bool>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
            retryable: None,
        }
    }

    pub fn validation_missing_argument(args: Vec<String>) -> Self {
        let details = serde_json::to_value(MissingArgumentDetails { args })
            .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
        Self::new(
            ErrorCode::ValidationMissingArgument,
            "Missing required argument",
            details,
        )
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        let details = serde_json::to_value(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.into(),
            value,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::ValidationInvalidArgument,
            "Invalid argument",
            details,
        )
    }

    pub fn validation_invalid_json(err: serde_json::Error, context: Option<String>) -> Self {
        let details = serde_json::json!({
            "error": err.to_string(),
            "context": context,
        });

        Self::new(ErrorCode::ValidationInvalidJson, "Invalid JSON", details)
    }

    pub fn path_invalid_segment(
        path: impl Into<String>,
        segment: impl Into<String>,
        problem: impl Into<String>,
    ) -> Self {
        let details = serde_json::to_value(InvalidSegmentDetails {
            path: path.into(),
            segment: segment.into(),
            problem: problem.into(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::PathInvalidSegment, "Invalid path segment", details)
    }

    pub fn path_index_out_of_bounds(path: impl Into<String>, index: usize, len: usize) -> Self {
        let details = serde_json::to_value(IndexOutOfBoundsDetails {
            path: path.into(),
            index,
            len,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::PathIndexOutOfBounds,
            "Array index out of bounds",
            details,
        )
    }

    pub fn locale_unknown(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        let details = serde_json::json!({ "tag": tag });
        Self::new(
            ErrorCode::LocaleUnknown,
            format!("Unknown locale '{}'", tag),
            details,
        )
        .with_hint("Known locales: en, de, fr, de-CH")
    }

    pub fn size_unknown_unit(input: impl Into<String>, unit: impl Into<String>) -> Self {
        let details = serde_json::to_value(UnknownUnitDetails {
            input: input.into(),
            unit: unit.into(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::SizeUnknownUnit, "Unknown size unit", details)
            .with_hint("Recognized units: B, KB, MB, GB, TB, PB")
    }

    pub fn runtime_not_installed() -> Self {
        Self::new(
            ErrorCode::RuntimeNotInstalled,
            "Runtime is not installed",
            Value::Object(serde_json::Map::new()),
        )
        .with_hint("Call runtime::install(config) once at startup")
    }

    pub fn runtime_already_installed() -> Self {
        Self::new(
            ErrorCode::RuntimeAlreadyInstalled,
            "Runtime is already installed",
            Value::Object(serde_json::Map::new()),
        )
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::to_value(InternalIoErrorDetails {
            error: error.into(),
            context,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let error: String = error.into();
        let details = serde_json::json!({
            "error": error,
            "context": context,
        });

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    pub fn internal_unexpected(error: impl Into<String>) -> Self {
        let error: String = error.into();
        Self::new(
            ErrorCode::InternalUnexpected,
            "Unexpected error",
            serde_json::json!({ "error": error }),
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }

    pub fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = Some(retryable);
        self
    }
}
