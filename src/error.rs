use thiserror::Error;

/// Unified error type for the client.
///
/// Exactly one of these is returned per failed call; no failure path is
/// swallowed. `Transport` means no usable response was obtained from the
/// service, `Service` means the service answered with a non-2xx status.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service error (HTTP {status}): {message}")]
    Service { status: u16, message: String },
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration(msg.into())
    }

    pub fn service(status: u16, message: impl Into<String>) -> Self {
        Error::Service {
            status,
            message: message.into(),
        }
    }

    /// HTTP status of a service failure, `None` for the other kinds.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Service { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}
