//! # soapcall
//!
//! Invoke SOAP 1.1 web services from named input values and read back a
//! normalized result.
//!
//! ## Security
//!
//! - WS-Security credentials are sent as a plain-text UsernameToken; use
//!   `https` endpoints for any authenticated service
//! - Passwords are redacted in Debug output and never logged
//! - Every field value is XML-escaped before it enters an envelope
//!
//! ## Crates
//!
//! - **soapcall-client** - HTTP transport: one POST per call, timeouts, TLS trust
//! - **soapcall-services** - Envelope builder, response interpreter, service profiles
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use soapcall::{FieldActivityCancellation, ServiceProfile, SoapCaller, UsernameCredentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let profile = ServiceProfile::field_activity_cancellation(
//!         "https://ouaf.example.com/ouaf/webservices/CM-CancelFieldActivity",
//!     );
//!     let caller = SoapCaller::for_profile(&profile)?;
//!
//!     let request = FieldActivityCancellation::new("1234567890")
//!         .with_cancel_reason("DUPL")
//!         .into_request(&profile, UsernameCredentials::from_env())?;
//!
//!     let outcome = caller.call(request).await?;
//!     println!("{}", outcome.result);
//!     Ok(())
//! }
//! ```

pub use soapcall_client as client;
pub use soapcall_services as services;

pub use soapcall_client::{ClientConfig, SoapHttpClient, TlsVerify};
pub use soapcall_services::{
    build_envelope, CalculatorInput, CalculatorOperation, CallOutcome, EnvelopeRequest, Error,
    ErrorKind, FieldActivityCancellation, InterpretStrategy, ResponseInterpreter, ServiceProfile,
    SoapCaller, SoapResult, UsernameCredentials,
};
