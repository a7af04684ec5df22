//! SOAP 1.1 envelope rendering.
//!
//! # Credentials
//!
//! When a request carries [`UsernameCredentials`](crate::UsernameCredentials)
//! the header holds a WS-Security `UsernameToken` with the password in
//! **plain text** (`#PasswordText`). No nonce, timestamp or digest is
//! generated. The password crosses the wire as-is, so the endpoint must be
//! reached over TLS.

use soapcall_client::security::xml;

use crate::request::EnvelopeRequest;
use crate::types::{PASSWORD_TEXT_TYPE, SOAP_ENV_NS, WSSE_NS};

/// A rendered SOAP envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapEnvelope(String);

impl SoapEnvelope {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SoapEnvelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render the envelope for a request.
///
/// Fields without a value are left out entirely; every value is escaped.
pub fn build_envelope(request: &EnvelopeRequest) -> SoapEnvelope {
    let header_xml = request
        .credentials()
        .map(|creds| {
            format!(
                r#"
  <soapenv:Header>
    <wsse:Security xmlns:wsse="{wsse_ns}">
      <wsse:UsernameToken>
        <wsse:Username>{username}</wsse:Username>
        <wsse:Password Type="{password_type}">{password}</wsse:Password>
      </wsse:UsernameToken>
    </wsse:Security>
  </soapenv:Header>"#,
                wsse_ns = WSSE_NS,
                username = xml::escape(creds.username()),
                password_type = PASSWORD_TEXT_TYPE,
                password = xml::escape(creds.password()),
            )
        })
        .unwrap_or_default();

    let fields_xml = request
        .present_fields()
        .map(|(name, value)| format!("\n      <tns:{name}>{}</tns:{name}>", xml::escape(value)))
        .collect::<String>();

    SoapEnvelope(format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<soapenv:Envelope xmlns:soapenv="{soap_ns}" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns:tns="{target_ns}">{header}
  <soapenv:Body>
    <tns:{operation}>{fields}
    </tns:{operation}>
  </soapenv:Body>
</soapenv:Envelope>"#,
        soap_ns = SOAP_ENV_NS,
        target_ns = xml::escape(request.target_namespace()),
        header = header_xml,
        operation = request.operation_name(),
        fields = fields_xml,
    ))
}
