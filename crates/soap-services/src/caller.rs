//! Build → send → interpret.

use soapcall_client::SoapHttpClient;
use tracing::{info, instrument, warn};

use crate::envelope::build_envelope;
use crate::error::Result;
use crate::interpret::ResponseInterpreter;
use crate::profile::ServiceProfile;
use crate::request::EnvelopeRequest;
use crate::types::CallOutcome;

/// HTTP status SOAP 1.1 servers use for faults.
const SOAP_FAULT_STATUS: u16 = 500;

/// Executes SOAP calls against one service.
#[derive(Debug, Clone)]
pub struct SoapCaller {
    http_client: SoapHttpClient,
    interpreter: ResponseInterpreter,
}

impl SoapCaller {
    pub fn new(http_client: SoapHttpClient, interpreter: ResponseInterpreter) -> Self {
        Self {
            http_client,
            interpreter,
        }
    }

    /// Create a caller with the timeout, TLS trust and parsing strategy of a profile.
    pub fn for_profile(profile: &ServiceProfile) -> Result<Self> {
        let http_client = SoapHttpClient::new(profile.client_config())?;
        Ok(Self::new(http_client, profile.interpreter()))
    }

    pub fn interpreter(&self) -> &ResponseInterpreter {
        &self.interpreter
    }

    /// Send one request and interpret the response.
    ///
    /// Transport failures, non-2xx statuses and unparseable bodies are
    /// returned as `Err`. Faults and application errors are
    /// `Ok` with a [`SoapResult::Failure`](crate::SoapResult::Failure).
    /// Nothing is retried.
    #[instrument(skip(self, request), fields(operation = %request.operation_name()))]
    pub async fn call(&self, request: EnvelopeRequest) -> Result<CallOutcome> {
        let envelope = build_envelope(&request);

        let outcome = self
            .http_client
            .execute(envelope.as_str(), request.endpoint_url(), request.soap_action())
            .await?;

        if outcome.status == SOAP_FAULT_STATUS {
            if let Some(fault) = self.interpreter.find_fault(outcome.body.as_bytes()) {
                warn!(fault_code = %fault.fault_code, "Service returned a SOAP fault");
                return Ok(CallOutcome {
                    result: fault.into(),
                    status: outcome.status,
                    raw_body: outcome.body,
                });
            }
        }

        let outcome = outcome.error_for_status().inspect_err(|err| {
            warn!(status = ?err.status(), "Service returned a non-success status");
        })?;

        let result = self
            .interpreter
            .interpret(outcome.body.as_bytes())
            .map_err(|err| err.with_response_status(outcome.status))?;
        info!(success = result.is_success(), "SOAP call completed");

        Ok(CallOutcome {
            result,
            status: outcome.status,
            raw_body: outcome.body,
        })
    }
}
