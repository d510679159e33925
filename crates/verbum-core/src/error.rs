//! Error types for Verbum.
//!
//! Two layers of errors exist:
//!
//! - [`GenerationError`]: internal failures of a single generation attempt.
//!   They carry transport detail (status codes, parser messages) and are only
//!   ever logged.
//! - [`StudyError`]: what the caller of `generate_study` sees. Its `Display`
//!   output is the user-displayable message and never contains transport
//!   detail or credential state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Remediation shown when no API key is configured.
pub const MISSING_CREDENTIAL_MESSAGE: &str = "A chave de API do Gemini não está configurada. Por favor, configure a variável de ambiente API_KEY.";

/// Generic failure shown once every attempt is spent or a terminal error occurs.
pub const GENERATION_FAILED_MESSAGE: &str = "Falha ao gerar o estudo. Tente novamente em instantes.";

/// User-facing error returned by the study generation entry point.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudyError {
    /// No credential is configured. Terminal, never retried.
    #[error("{}", MISSING_CREDENTIAL_MESSAGE)]
    MissingCredential,

    /// Generation failed after the retry policy gave up.
    #[error("{}", GENERATION_FAILED_MESSAGE)]
    GenerationFailed,

    /// The request itself is unusable (e.g. empty subject).
    #[error("Pedido inválido: {0}")]
    InvalidRequest(String),

    /// The caller abandoned the request.
    #[error("Geração cancelada.")]
    Cancelled,
}

impl StudyError {
    /// Creates an InvalidRequest error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Check if this is a configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingCredential)
    }

    /// Check if this is the generic generation failure
    pub fn is_generation_failed(&self) -> bool {
        matches!(self, Self::GenerationFailed)
    }
}

/// Failure of a single round-trip to the generative service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Client-side configuration problem (missing credential, bad endpoint).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The service answered with an error, or the transport failed before
    /// any status was received (`status_code: None`).
    #[error("Service error{}: {message}", status_suffix(.status_code))]
    Service {
        status_code: Option<u16>,
        message: String,
    },

    /// The service answered successfully but without any text.
    #[error("Empty response from the generative service")]
    EmptyResponse,

    /// The text could not be parsed or does not satisfy the schema.
    #[error("Malformed model output: {0}")]
    MalformedOutput(String),

    /// The attempt was aborted by the caller.
    #[error("Generation attempt cancelled")]
    Cancelled,
}

fn status_suffix(status_code: &Option<u16>) -> String {
    status_code
        .map(|code| format!(" (HTTP {code})"))
        .unwrap_or_default()
}

/// Retryability of a failure, judged by its status code alone.
///
/// A failure without a status (transport error, timeout) or with a
/// server-side status (>= 500) is transient. Everything else is terminal.
pub fn is_retryable_status(status_code: Option<u16>) -> bool {
    match status_code {
        None => true,
        Some(code) => code >= 500,
    }
}

impl GenerationError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates a Service error
    pub fn service(status_code: Option<u16>, message: impl Into<String>) -> Self {
        Self::Service {
            status_code,
            message: message.into(),
        }
    }

    /// Creates a MalformedOutput error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedOutput(message.into())
    }

    // ============================================================================
    // Classification
    // ============================================================================

    /// The explicit status code carried by this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Service { status_code, .. } => *status_code,
            _ => None,
        }
    }

    /// Whether another attempt may succeed.
    ///
    /// - `Service` errors are classified by [`is_retryable_status`].
    /// - Empty and malformed output vary from run to run and are retried.
    /// - Configuration problems and cancellation are terminal.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Configuration(_) | Self::Cancelled => false,
            Self::Service { status_code, .. } => is_retryable_status(*status_code),
            Self::EmptyResponse | Self::MalformedOutput(_) => true,
        }
    }

    /// Check if this is a configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedOutput(format!("JSON - {err}"))
    }
}

/// A type alias for `Result<T, StudyError>`.
pub type Result<T> = std::result::Result<T, StudyError>;
