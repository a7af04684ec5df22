//! Raw HTTP outcome of a SOAP POST.

use crate::error::{Error, ErrorKind, Result};

/// Status code and body of one HTTP exchange.
///
/// Kept verbatim so callers can show the raw response next to the
/// interpreted result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpOutcome {
    /// HTTP status code.
    pub status: u16,
    /// Response body decoded as text.
    pub body: String,
}

impl HttpOutcome {
    /// Create an outcome from a status code and body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Convert a non-success status into an `ErrorKind::Http` error.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::new(ErrorKind::Http {
                status: self.status,
                body: self.body,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        assert!(HttpOutcome::new(200, "").is_success());
        assert!(HttpOutcome::new(204, "").is_success());
        assert!(!HttpOutcome::new(301, "").is_success());
        assert!(!HttpOutcome::new(500, "").is_success());
    }

    #[test]
    fn test_error_for_status() {
        let ok = HttpOutcome::new(200, "<ok/>").error_for_status().unwrap();
        assert_eq!(ok.body, "<ok/>");

        let err = HttpOutcome::new(503, "busy").error_for_status().unwrap_err();
        match err.kind {
            ErrorKind::Http { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "busy");
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }
}
