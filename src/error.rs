//! Error types for the authorizations client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Errors raised while fetching a page are wrapped with the stage that failed
//! (`preparing`, `sending`, `responding to`), and the pagination driver wraps
//! those again with the page that was being loaded. [`Error::kind`] looks
//! through the wrappers and classifies the innermost cause.

use std::fmt;
use thiserror::Error;

/// The stage of a single page request that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Building the HTTP request
    Preparing,
    /// Sending the request over the shared HTTP client
    Sending,
    /// Checking the status and decoding the body
    Responding,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Preparing => f.write_str("preparing"),
            Stage::Sending => f.write_str("sending"),
            Stage::Responding => f.write_str("responding to"),
        }
    }
}

/// Broad classification of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid client configuration
    Configuration,
    /// Malformed input to request construction
    Preparation,
    /// The HTTP send failed or was cut short
    Transport,
    /// The server answered with a bad status or an undecodable body
    Response,
    /// A terminal page was asked for its successor
    ExhaustedPages,
    /// Anything else
    Other,
}

/// The main error type for the authorizations client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Preparation Errors
    // ============================================================================
    #[error("parsing nextLink {next_link:?}: {source}")]
    ParseNextLink {
        next_link: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("parsing {input:?} as a Private Cloud ID: {message}")]
    InvalidResourceId { input: String, message: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Max retries ({max_retries}) exceeded")]
    MaxRetriesExceeded { max_retries: u32 },

    #[error("request was cancelled")]
    Cancelled,

    #[error("request deadline exceeded")]
    DeadlineExceeded,

    // ============================================================================
    // Response Errors
    // ============================================================================
    #[error("unexpected status {status} (expected 200): {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("no more pages returned")]
    ExhaustedPages,

    #[error("{operation}: Failure {stage} request: {source}")]
    Request {
        operation: &'static str,
        stage: Stage,
        #[source]
        source: Box<Error>,
    },

    #[error("loading the initial page: {0}")]
    InitialPage(#[source] Box<Error>),

    #[error("loading the next page: {0}")]
    NextPage(#[source] Box<Error>),

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("Failed to write output: {0}")]
    Output(#[source] serde_json::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid resource id error
    pub fn invalid_resource_id(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidResourceId {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Create an unexpected status error
    pub fn unexpected_status(status: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            body: body.into(),
        }
    }

    /// Wrap an error with the request stage that produced it
    pub fn request(operation: &'static str, stage: Stage, source: Error) -> Self {
        Self::Request {
            operation,
            stage,
            source: Box::new(source),
        }
    }

    /// Wrap an error raised while loading the first page
    pub fn initial_page(source: Error) -> Self {
        Self::InitialPage(Box::new(source))
    }

    /// Wrap an error raised while loading a continuation page
    pub fn next_page(source: Error) -> Self {
        Self::NextPage(Box::new(source))
    }

    /// Classify the innermost cause of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Request { source, .. } => source.kind(),
            Error::InitialPage(inner) | Error::NextPage(inner) => inner.kind(),
            Error::Config { .. } | Error::YamlParse(_) | Error::Io(_) => ErrorKind::Configuration,
            Error::ParseNextLink { .. } | Error::InvalidUrl(_) | Error::InvalidResourceId { .. } => {
                ErrorKind::Preparation
            }
            Error::Http(_)
            | Error::Timeout { .. }
            | Error::MaxRetriesExceeded { .. }
            | Error::Cancelled
            | Error::DeadlineExceeded => ErrorKind::Transport,
            Error::UnexpectedStatus { .. } | Error::Decode(_) => ErrorKind::Response,
            Error::ExhaustedPages => ErrorKind::ExhaustedPages,
            Error::Output(_) | Error::Other(_) => ErrorKind::Other,
        }
    }

    /// The request stage that failed, if this error came from a page request
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Error::Request { stage, .. } => Some(*stage),
            Error::InitialPage(inner) | Error::NextPage(inner) => inner.stage(),
            _ => None,
        }
    }

    /// Unwrap stage and page wrappers down to the root cause
    pub fn root(&self) -> &Error {
        match self {
            Error::Request { source, .. } => source.root(),
            Error::InitialPage(inner) | Error::NextPage(inner) => inner.root(),
            other => other,
        }
    }
}

/// Result type alias for the authorizations client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::unexpected_status(404, "Not found");
        assert_eq!(
            err.to_string(),
            "unexpected status 404 (expected 200): Not found"
        );

        assert_eq!(Error::ExhaustedPages.to_string(), "no more pages returned");
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Preparing.to_string(), "preparing");
        assert_eq!(Stage::Sending.to_string(), "sending");
        assert_eq!(Stage::Responding.to_string(), "responding to");
    }

    #[test]
    fn test_wrapped_error_display() {
        let inner = Error::unexpected_status(500, "boom");
        let err = Error::next_page(Error::request(
            "AuthorizationsClient#List",
            Stage::Responding,
            inner,
        ));

        assert_eq!(
            err.to_string(),
            "loading the next page: AuthorizationsClient#List: Failure responding to request: \
             unexpected status 500 (expected 200): boom"
        );
    }

    #[test]
    fn test_kind_looks_through_wrappers() {
        let err = Error::initial_page(Error::request(
            "AuthorizationsClient#List",
            Stage::Sending,
            Error::Cancelled,
        ));
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.stage(), Some(Stage::Sending));
        assert!(matches!(err.root(), Error::Cancelled));

        assert_eq!(Error::ExhaustedPages.kind(), ErrorKind::ExhaustedPages);
        assert_eq!(Error::config("x").kind(), ErrorKind::Configuration);
        assert_eq!(Error::ExhaustedPages.stage(), None);
    }

    #[test]
    fn test_parse_next_link_names_token() {
        let source = url::Url::parse("http://[::1").unwrap_err();
        let err = Error::ParseNextLink {
            next_link: "http://[::1".to_string(),
            source,
        };
        assert_eq!(err.kind(), ErrorKind::Preparation);
        assert!(err.to_string().contains("\"http://[::1\""));
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
