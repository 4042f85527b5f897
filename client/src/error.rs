use kafka_connect_config::ConfigError;
use serde::Deserialize;
use thiserror::Error;

/// Errors returned by every call against a Kafka Connect worker.
///
/// Only HTTP 404 and 409 get their own variants; the worker uses 409 while a
/// rebalance is in progress, which is the one condition worth retrying.
#[derive(Error, Debug)]
pub enum ConnectError {
    #[error("{}", render("NotFoundError", .message))]
    NotFound { message: String },

    #[error("{}", render("RebalanceError", .message))]
    Rebalance { message: String },

    #[error("{}", render_http(.status, .message))]
    Http { status: u16, message: String },

    #[error("ConnectionError: {0}")]
    Connection(String),

    #[error("RequestError: {0}")]
    Request(String),

    #[error("DecodeError: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
}

pub type ConnectResult<T> = Result<T, ConnectError>;

/// Error body the worker sends with non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    message: Option<String>,
}

fn render(kind: &str, message: &str) -> String {
    if message.is_empty() {
        kind.to_string()
    } else {
        format!("{}: {}", kind, message)
    }
}

fn render_http(status: &u16, message: &str) -> String {
    render(&format!("HttpError({})", status), message)
}

impl ConnectError {
    /// Map a non-2xx status and its raw body to an error
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .and_then(|envelope| envelope.message)
            .unwrap_or_default();

        match status {
            404 => ConnectError::NotFound { message },
            409 => ConnectError::Rebalance { message },
            _ => ConnectError::Http { status, message },
        }
    }

    /// Map a transport failure, which never carries an HTTP status
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ConnectError::Request(err.to_string())
        } else {
            ConnectError::Connection(err.to_string())
        }
    }

    /// Only a rebalance (409) is worth retrying
    pub fn is_retriable(&self) -> bool {
        matches!(self, ConnectError::Rebalance { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ConnectError::NotFound { .. })
    }

    /// HTTP status behind the error, if the worker answered
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ConnectError::NotFound { .. } => Some(404),
            ConnectError::Rebalance { .. } => Some(409),
            ConnectError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
