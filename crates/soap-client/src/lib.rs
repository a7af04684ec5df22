//! # soapcall-client
//!
//! HTTP transport for SOAP 1.1 calls.
//!
//! This crate provides the outbound half of a SOAP exchange:
//! - A single POST per call, no retries
//! - `SOAPAction`, `Content-Type` and `User-Agent` headers
//! - Optional request timeout (absent means wait indefinitely)
//! - TLS trust from the platform store, or only from a given CA bundle
//! - XML escaping helpers for building envelopes
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    soapcall-services                        │
//! │  (envelope builder, response interpreter, profiles)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SoapHttpClient                           │
//! │  - One POST per envelope                                    │
//! │  - Returns status + body as an HttpOutcome                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use soapcall_client::{ClientConfig, SoapHttpClient};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), soapcall_client::Error> {
//!     let client = SoapHttpClient::new(
//!         ClientConfig::builder()
//!             .with_timeout(Duration::from_secs(60))
//!             .build(),
//!     )?;
//!
//!     let outcome = client
//!         .execute(envelope_xml, "https://example.com/service", "urn:doSomething")
//!         .await?;
//!
//!     println!("{} {}", outcome.status, outcome.body);
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod response;
pub mod security;

pub use client::SoapHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder, TlsVerify, DEFAULT_CONNECT_TIMEOUT};
pub use error::{Error, ErrorKind, Result};
pub use response::HttpOutcome;

/// Content type sent with every SOAP 1.1 request.
pub const SOAP_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("soapcall/", env!("CARGO_PKG_VERSION"));
