//! Error types for soapcall-services.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    pub(crate) fn invalid_response(reason: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidResponse {
            reason: reason.into(),
            status: None,
            body: body.into(),
        })
    }

    /// Record the HTTP status of the response an invalid body came with.
    pub(crate) fn with_response_status(mut self, response_status: u16) -> Self {
        if let ErrorKind::InvalidResponse { status, .. } = &mut self.kind {
            *status = Some(response_status);
        }
        self
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(message.into()))
    }

    /// Status code of the HTTP response, when the failure happened after one arrived.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Http { status, .. } => Some(*status),
            ErrorKind::InvalidResponse { status, .. } => *status,
            _ => None,
        }
    }

    /// Raw response text, when the failure happened after a response arrived.
    pub fn raw_body(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Http { body, .. } | ErrorKind::InvalidResponse { body, .. } => Some(body),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("Request timeout")]
    Timeout,
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("API error: status code {status}")]
    Http { status: u16, body: String },
    #[error("Invalid response: {reason}")]
    InvalidResponse {
        reason: String,
        status: Option<u16>,
        body: String,
    },
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<soapcall_client::Error> for Error {
    fn from(err: soapcall_client::Error) -> Self {
        use soapcall_client::ErrorKind as ClientKind;

        let kind = match err.kind {
            ClientKind::Timeout => ErrorKind::Timeout,
            ClientKind::Connection(message) => ErrorKind::Connection(message),
            ClientKind::Transport(message) => ErrorKind::Transport(message),
            ClientKind::Http { status, body } => ErrorKind::Http { status, body },
            ClientKind::Config(message) => ErrorKind::Config(message),
        };
        Error {
            kind,
            source: err.source,
        }
    }
}
