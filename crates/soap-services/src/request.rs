//! Immutable description of one SOAP call.

use soapcall_client::security::{url, xml};

use crate::error::{Error, Result};
use crate::types::UsernameCredentials;

/// Everything needed to render and send one envelope.
///
/// Built fresh for every call through [`EnvelopeRequest::builder`] and
/// validated once in [`EnvelopeRequestBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeRequest {
    operation_name: String,
    target_namespace: String,
    soap_action: String,
    endpoint_url: String,
    fields: Vec<(String, Option<String>)>,
    credentials: Option<UsernameCredentials>,
}

impl EnvelopeRequest {
    pub fn builder(
        operation_name: impl Into<String>,
        target_namespace: impl Into<String>,
    ) -> EnvelopeRequestBuilder {
        EnvelopeRequestBuilder {
            request: EnvelopeRequest {
                operation_name: operation_name.into(),
                target_namespace: target_namespace.into(),
                soap_action: String::new(),
                endpoint_url: String::new(),
                fields: Vec::new(),
                credentials: None,
            },
        }
    }

    pub fn operation_name(&self) -> &str {
        &self.operation_name
    }

    pub fn target_namespace(&self) -> &str {
        &self.target_namespace
    }

    pub fn soap_action(&self) -> &str {
        &self.soap_action
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Fields in the order they were supplied, including absent ones.
    pub fn fields(&self) -> &[(String, Option<String>)] {
        &self.fields
    }

    /// Fields that carry a value, in order.
    pub fn present_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .filter_map(|(name, value)| value.as_deref().map(|v| (name.as_str(), v)))
    }

    pub fn credentials(&self) -> Option<&UsernameCredentials> {
        self.credentials.as_ref()
    }
}

/// Builder for [`EnvelopeRequest`].
#[derive(Debug, Clone)]
pub struct EnvelopeRequestBuilder {
    request: EnvelopeRequest,
}

impl EnvelopeRequestBuilder {
    pub fn soap_action(mut self, action: impl Into<String>) -> Self {
        self.request.soap_action = action.into();
        self
    }

    pub fn endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.request.endpoint_url = url.into();
        self
    }

    /// Add a field with a value. Setting the same name twice keeps the
    /// original position and replaces the value.
    pub fn field(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.optional_field(name, Some(value.into()))
    }

    /// Add a field that is omitted from the envelope when `value` is `None`.
    pub fn optional_field(mut self, name: impl Into<String>, value: Option<String>) -> Self {
        let name = name.into();
        match self.request.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.request.fields.push((name, value)),
        }
        self
    }

    pub fn credentials(mut self, credentials: UsernameCredentials) -> Self {
        self.request.credentials = Some(credentials);
        self
    }

    pub fn maybe_credentials(mut self, credentials: Option<UsernameCredentials>) -> Self {
        self.request.credentials = credentials;
        self
    }

    pub fn build(self) -> Result<EnvelopeRequest> {
        let request = self.request;

        if request.operation_name.is_empty() {
            return Err(Error::config("operation name must not be empty"));
        }
        if request.target_namespace.trim().is_empty() {
            return Err(Error::config("target namespace must not be empty"));
        }
        if !xml::is_valid_name(&request.operation_name) {
            return Err(Error::config(format!(
                "invalid operation name '{}'",
                request.operation_name
            )));
        }
        if let Some((name, _)) = request.fields.iter().find(|(n, _)| !xml::is_valid_name(n)) {
            return Err(Error::config(format!("invalid field name '{}'", name)));
        }
        url::parse_endpoint(&request.endpoint_url)?;

        Ok(request)
    }
}
