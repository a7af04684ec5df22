//! HTTP client issuing a single SOAP POST per call.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use tracing::{debug, info, instrument};

use crate::config::{ClientConfig, TlsVerify};
use crate::error::{Error, ErrorKind, Result};
use crate::response::HttpOutcome;
use crate::security;

/// SOAP Action header name.
static SOAP_ACTION_HEADER: HeaderName = HeaderName::from_static("soapaction");

/// HTTP client for SOAP endpoints.
///
/// Failures are never retried: a refused connection, a timeout or a TLS
/// error surfaces to the caller on the first attempt.
#[derive(Debug, Clone)]
pub struct SoapHttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl SoapHttpClient {
    /// Create a new HTTP client from the given configuration.
    ///
    /// A CA bundle named in the configuration is read here, so an unreadable
    /// or empty bundle is reported before any request is made. The bundle
    /// replaces the platform roots.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        if let TlsVerify::CaBundle(ref path) = config.tls {
            let pem = std::fs::read(path).map_err(|e| {
                Error::with_source(
                    ErrorKind::Config(format!("Cannot read CA bundle {}: {}", path.display(), e)),
                    e,
                )
            })?;
            let certs = reqwest::Certificate::from_pem_bundle(&pem).map_err(|e| {
                Error::with_source(
                    ErrorKind::Config(format!("Invalid CA bundle {}: {}", path.display(), e)),
                    e,
                )
            })?;
            if certs.is_empty() {
                return Err(Error::new(ErrorKind::Config(format!(
                    "No certificates found in CA bundle {}",
                    path.display()
                ))));
            }
            debug!(path = %path.display(), count = certs.len(), "Trusting only the CA bundle");
            builder = builder.tls_certs_only(certs);
        }

        let inner = builder
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the headers sent with every SOAP request.
    pub(crate) fn build_headers(&self, soap_action: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(crate::SOAP_CONTENT_TYPE),
        );
        let action = HeaderValue::from_str(soap_action).map_err(|e| {
            Error::with_source(
                ErrorKind::Config(format!("Invalid SOAPAction '{}'", soap_action)),
                e,
            )
        })?;
        headers.insert(SOAP_ACTION_HEADER.clone(), action);
        Ok(headers)
    }

    /// POST an envelope and return the raw status and body.
    ///
    /// Any HTTP status is returned as an [`HttpOutcome`]; use
    /// [`HttpOutcome::error_for_status`] to turn non-2xx into an error.
    #[instrument(skip(self, envelope), fields(url = %endpoint_url, action = %soap_action))]
    pub async fn execute(
        &self,
        envelope: &str,
        endpoint_url: &str,
        soap_action: &str,
    ) -> Result<HttpOutcome> {
        let url = security::url::parse_endpoint(endpoint_url)?;
        let headers = self.build_headers(soap_action)?;

        if self.config.enable_tracing {
            debug!(bytes = envelope.len(), "Sending SOAP request");
        }

        let response = self
            .inner
            .post(url)
            .headers(headers)
            .body(envelope.to_string())
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        if self.config.enable_tracing {
            if (200..300).contains(&status) {
                debug!(status, bytes = body.len(), "Response received");
            } else {
                info!(status, bytes = body.len(), "Non-success response");
            }
        }

        Ok(HttpOutcome::new(status, body))
    }
}
