//! Common types for SOAP calls.

use serde::{Deserialize, Serialize};

/// SOAP 1.1 envelope namespace.
pub const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// SOAP 1.2 envelope namespace, recognized when reading responses.
pub const SOAP12_ENV_NS: &str = "http://www.w3.org/2003/05/soap-envelope";

/// WS-Security extension namespace.
pub const WSSE_NS: &str =
    "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-wssecurity-secext-1.0.xsd";

/// Password type URI for plain-text UsernameToken passwords.
pub const PASSWORD_TEXT_TYPE: &str =
    "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-username-token-profile-1.0#PasswordText";

/// Username/password pair sent as a WS-Security UsernameToken.
///
/// Both values are trimmed on construction. The password is redacted in
/// Debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct UsernameCredentials {
    username: String,
    password: String,
}

impl std::fmt::Debug for UsernameCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsernameCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl UsernameCredentials {
    pub fn new(username: impl AsRef<str>, password: impl AsRef<str>) -> Self {
        Self {
            username: username.as_ref().trim().to_string(),
            password: password.as_ref().trim().to_string(),
        }
    }

    /// Load credentials from `SOAPCALL_USERNAME` and `SOAPCALL_PASSWORD`.
    ///
    /// Returns `None` unless both are set.
    pub fn from_env() -> Option<Self> {
        let username = std::env::var("SOAPCALL_USERNAME").ok()?;
        let password = std::env::var("SOAPCALL_PASSWORD").ok()?;
        Some(Self::new(username, password))
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Normalized result of one SOAP call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SoapResult {
    /// The service answered with a result.
    Success { value: String, raw_detail: String },
    /// The service answered with a fault or an application error.
    Failure { reason: String, detail: String },
}

impl SoapResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SoapResult::Success { .. })
    }

    /// The success value, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            SoapResult::Success { value, .. } => Some(value),
            SoapResult::Failure { .. } => None,
        }
    }

    /// The failure reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            SoapResult::Success { .. } => None,
            SoapResult::Failure { reason, .. } => Some(reason),
        }
    }

    /// Detail text of either variant.
    pub fn detail(&self) -> &str {
        match self {
            SoapResult::Success { raw_detail, .. } => raw_detail,
            SoapResult::Failure { detail, .. } => detail,
        }
    }
}

impl std::fmt::Display for SoapResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoapResult::Success { value, .. } => write!(f, "Result: {}", value),
            SoapResult::Failure { reason, .. } => write!(f, "Error: {}", reason),
        }
    }
}

/// SOAP Fault from a response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoapFault {
    pub fault_code: String,
    pub fault_string: String,
    /// Serialized `detail` subtree, empty when the fault carries none.
    pub detail: String,
}

impl std::fmt::Display for SoapFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SOAP Fault: {} - {}", self.fault_code, self.fault_string)
    }
}

impl std::error::Error for SoapFault {}

impl From<SoapFault> for SoapResult {
    fn from(fault: SoapFault) -> Self {
        SoapResult::Failure {
            reason: fault.to_string(),
            detail: fault.detail,
        }
    }
}

/// Interpreted result of a call plus the raw HTTP exchange it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallOutcome {
    pub result: SoapResult,
    pub status: u16,
    pub raw_body: String,
}
