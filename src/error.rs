//! Error types for gcai using thiserror.
//!
//! Every stage of the pipeline returns one of these; only `main` turns them
//! into an exit code.

use thiserror::Error;

/// Top-level error for a single `gcai generate` run.
#[derive(Error, Debug)]
pub enum GcaiError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error("there are no staged changes")]
    EmptyDiff,

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("response body is not valid JSON ({reason}): {body}")]
    MalformedResponse { reason: String, body: String },
}

/// Invalid model, style or locale.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid model: {0} is not installed (see `ollama list`)")]
    ModelNotInstalled(String),

    #[error("invalid style: {0} (expected one of: simple, conventional, gitmoji)")]
    InvalidStyle(String),

    #[error("invalid locale: {0}")]
    InvalidLocale(String),
}

/// An external tool the pipeline depends on is not operable.
#[derive(Error, Debug)]
pub enum PreconditionError {
    #[error("ollama seems to not be running: {0}")]
    InferenceToolUnavailable(String),

    #[error("directory seems to not be a git repository: {0}")]
    NotARepository(String),
}

/// The request could not be sent, or the response could not be read.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to encode request body: {0}")]
    Encode(String),

    #[error("failed to make POST request to {url}: {source}")]
    Send {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("inference server at {url} returned {status}: {body}")]
    Status { url: String, status: u16, body: String },

    #[error("failed to read response body: {0}")]
    ReadBody(#[source] reqwest::Error),
}
