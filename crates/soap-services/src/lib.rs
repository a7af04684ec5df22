//! # soapcall-services
//!
//! SOAP 1.1 calls from named input values to a normalized result.
//!
//! ## Features
//!
//! - **Envelope building** - Ordered fields, optional-field suppression, escaping
//! - **WS-Security** - Plain-text UsernameToken header (see [`build_envelope`])
//! - **Response interpretation** - Text-search or namespace-aware strategies
//! - **Service profiles** - Calculator demo and OUAF field activity cancellation
//!
//! ## Example
//!
//! ```rust,ignore
//! use soapcall_services::{CalculatorInput, CalculatorOperation, ServiceProfile, SoapCaller};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), soapcall_services::Error> {
//!     let profile = ServiceProfile::calculator(CalculatorOperation::Add);
//!     let caller = SoapCaller::for_profile(&profile)?;
//!
//!     let request = CalculatorInput::new(4, 5).into_request(&profile)?;
//!     let outcome = caller.call(request).await?;
//!
//!     println!("{}", outcome.result);
//!     Ok(())
//! }
//! ```

mod caller;
mod envelope;
mod error;
mod interpret;
mod profile;
mod request;
mod types;

pub use caller::SoapCaller;
pub use envelope::{build_envelope, SoapEnvelope};
pub use error::{Error, ErrorKind, Result};
pub use interpret::{InterpretStrategy, ResponseInterpreter};
pub use profile::{
    CalculatorInput, CalculatorOperation, FieldActivityCancellation, ServiceProfile,
    BROWSER_USER_AGENT, CALCULATOR_ENDPOINT, CALCULATOR_NAMESPACE, FA_CANCEL_NAMESPACE,
    FA_CANCEL_OPERATION, FA_CANCEL_TIMEOUT,
};
pub use request::{EnvelopeRequest, EnvelopeRequestBuilder};
pub use types::{
    CallOutcome, SoapFault, SoapResult, UsernameCredentials, PASSWORD_TEXT_TYPE, SOAP12_ENV_NS,
    SOAP_ENV_NS, WSSE_NS,
};
