//! Service profiles for the two callable services.

use std::time::Duration;

use soapcall_client::{ClientConfig, TlsVerify};

use crate::error::Result;
use crate::interpret::{InterpretStrategy, ResponseInterpreter};
use crate::request::{EnvelopeRequest, EnvelopeRequestBuilder};
use crate::types::UsernameCredentials;

/// Public calculator demo endpoint.
pub const CALCULATOR_ENDPOINT: &str = "http://dneonline.com/calculator.asmx";

/// Target namespace of the calculator service.
pub const CALCULATOR_NAMESPACE: &str = "http://tempuri.org/";

/// The calculator host rejects non-browser agents.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Field activity cancellation operation.
pub const FA_CANCEL_OPERATION: &str = "CM-CancelFieldActivity";

/// Target namespace of the field activity cancellation service.
pub const FA_CANCEL_NAMESPACE: &str =
    "http://ouaf.oracle.com/webservices/cm/CM-CancelFieldActivity";

/// Request timeout of the authenticated field activity path.
pub const FA_CANCEL_TIMEOUT: Duration = Duration::from_secs(60);

/// Calculator operations offered by the demo service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalculatorOperation {
    #[default]
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl CalculatorOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculatorOperation::Add => "Add",
            CalculatorOperation::Subtract => "Subtract",
            CalculatorOperation::Multiply => "Multiply",
            CalculatorOperation::Divide => "Divide",
        }
    }

    /// Name of the element holding the result, e.g. `AddResult`.
    pub fn result_element(&self) -> String {
        format!("{}Result", self.as_str())
    }
}

impl std::fmt::Display for CalculatorOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CalculatorOperation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "add" => Ok(CalculatorOperation::Add),
            "subtract" => Ok(CalculatorOperation::Subtract),
            "multiply" => Ok(CalculatorOperation::Multiply),
            "divide" => Ok(CalculatorOperation::Divide),
            other => Err(format!("unknown calculator operation: {}", other)),
        }
    }
}

/// Fixed settings of one callable service: where it lives, how to address
/// it, how long to wait and how to read its responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceProfile {
    pub operation_name: String,
    pub target_namespace: String,
    pub soap_action: String,
    pub endpoint_url: String,
    /// Request timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub user_agent: String,
    pub tls: TlsVerify,
    pub strategy: InterpretStrategy,
}

impl ServiceProfile {
    /// The public calculator demo. No timeout, plain HTTP, text-search results.
    pub fn calculator(operation: CalculatorOperation) -> Self {
        Self {
            operation_name: operation.as_str().to_string(),
            target_namespace: CALCULATOR_NAMESPACE.to_string(),
            soap_action: format!("{}{}", CALCULATOR_NAMESPACE, operation.as_str()),
            endpoint_url: CALCULATOR_ENDPOINT.to_string(),
            timeout: None,
            user_agent: BROWSER_USER_AGENT.to_string(),
            tls: TlsVerify::Platform,
            strategy: InterpretStrategy::SimpleResultTag {
                element: operation.result_element(),
            },
        }
    }

    /// The OUAF field activity cancellation service at `endpoint_url`.
    ///
    /// 60 second timeout, namespace-aware parsing with `errorInformation`.
    pub fn field_activity_cancellation(endpoint_url: impl Into<String>) -> Self {
        Self {
            operation_name: FA_CANCEL_OPERATION.to_string(),
            target_namespace: FA_CANCEL_NAMESPACE.to_string(),
            soap_action: FA_CANCEL_OPERATION.to_string(),
            endpoint_url: endpoint_url.into(),
            timeout: Some(FA_CANCEL_TIMEOUT),
            user_agent: soapcall_client::USER_AGENT.to_string(),
            tls: TlsVerify::Platform,
            strategy: InterpretStrategy::NamespacedOutputPath {
                operation: FA_CANCEL_OPERATION.to_string(),
                namespace: FA_CANCEL_NAMESPACE.to_string(),
                echo_field: Some("fieldActivityId".to_string()),
            },
        }
    }

    pub fn with_endpoint(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = endpoint_url.into();
        self
    }

    pub fn with_soap_action(mut self, soap_action: impl Into<String>) -> Self {
        self.soap_action = soap_action.into();
        self
    }

    pub fn with_tls(mut self, tls: TlsVerify) -> Self {
        self.tls = tls;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// HTTP client configuration for this service.
    pub fn client_config(&self) -> ClientConfig {
        let builder = ClientConfig::builder()
            .with_user_agent(&self.user_agent)
            .with_tls(self.tls.clone());

        match self.timeout {
            Some(timeout) => builder.with_timeout(timeout),
            None => builder.without_timeout(),
        }
        .build()
    }

    pub fn interpreter(&self) -> ResponseInterpreter {
        ResponseInterpreter::new(self.strategy.clone())
    }

    /// A request builder addressed at this service, ready for fields.
    pub fn request_builder(&self) -> EnvelopeRequestBuilder {
        EnvelopeRequest::builder(&self.operation_name, &self.target_namespace)
            .soap_action(&self.soap_action)
            .endpoint_url(&self.endpoint_url)
    }
}

/// Two operands for a calculator operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorInput {
    pub a: i64,
    pub b: i64,
}

impl CalculatorInput {
    pub fn new(a: i64, b: i64) -> Self {
        Self { a, b }
    }

    pub fn into_request(self, profile: &ServiceProfile) -> Result<EnvelopeRequest> {
        profile
            .request_builder()
            .field("intA", self.a.to_string())
            .field("intB", self.b.to_string())
            .build()
    }
}

/// Input of the field activity cancellation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldActivityCancellation {
    pub field_activity_id: String,
    pub cancel_reason: Option<String>,
    pub comments: Option<String>,
}

impl FieldActivityCancellation {
    pub fn new(field_activity_id: impl Into<String>) -> Self {
        Self {
            field_activity_id: field_activity_id.into(),
            cancel_reason: None,
            comments: None,
        }
    }

    pub fn with_cancel_reason(mut self, reason: impl Into<String>) -> Self {
        self.cancel_reason = Some(reason.into());
        self
    }

    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    pub fn into_request(
        self,
        profile: &ServiceProfile,
        credentials: Option<UsernameCredentials>,
    ) -> Result<EnvelopeRequest> {
        profile
            .request_builder()
            .field("fieldActivityId", self.field_activity_id.trim())
            .optional_field("cancelReason", non_blank(self.cancel_reason))
            .optional_field("comments", non_blank(self.comments))
            .maybe_credentials(credentials)
            .build()
    }
}

/// Blank optional inputs are treated as not supplied.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::build_envelope;

    #[test]
    fn test_calculator_operation_parse() {
        assert_eq!("add".parse::<CalculatorOperation>(), Ok(CalculatorOperation::Add));
        assert_eq!("Divide".parse::<CalculatorOperation>(), Ok(CalculatorOperation::Divide));
        assert!("modulo".parse::<CalculatorOperation>().is_err());
        assert_eq!(CalculatorOperation::Multiply.result_element(), "MultiplyResult");
    }

    #[test]
    fn test_calculator_profile() {
        let profile = ServiceProfile::calculator(CalculatorOperation::Subtract);
        assert_eq!(profile.soap_action, "http://tempuri.org/Subtract");
        assert_eq!(profile.endpoint_url, CALCULATOR_ENDPOINT);
        assert!(profile.timeout.is_none());
        assert_eq!(
            profile.strategy,
            InterpretStrategy::SimpleResultTag {
                element: "SubtractResult".to_string()
            }
        );

        let config = profile.client_config();
        assert!(config.timeout.is_none());
        assert_eq!(config.user_agent, BROWSER_USER_AGENT);
    }

    #[test]
    fn test_field_activity_profile() {
        let profile = ServiceProfile::field_activity_cancellation("https://ouaf.example.com/ws")
            .with_tls(TlsVerify::CaBundle("/etc/ssl/corp.pem".into()));

        let config = profile.client_config();
        assert_eq!(config.timeout, Some(Duration::from_secs(60)));
        assert_eq!(config.tls, TlsVerify::CaBundle("/etc/ssl/corp.pem".into()));
        assert!(matches!(
            profile.interpreter().strategy(),
            InterpretStrategy::NamespacedOutputPath { .. }
        ));
    }

    #[test]
    fn test_calculator_input_request() {
        let profile = ServiceProfile::calculator(CalculatorOperation::Add);
        let request = CalculatorInput::new(4, 5).into_request(&profile).unwrap();

        assert_eq!(request.operation_name(), "Add");
        assert_eq!(request.soap_action(), "http://tempuri.org/Add");
        let xml = build_envelope(&request).into_string();
        assert!(xml.contains("<tns:intA>4</tns:intA>"));
        assert!(xml.contains("<tns:intB>5</tns:intB>"));
    }

    #[test]
    fn test_field_activity_request_omits_blank_optionals() {
        let profile = ServiceProfile::field_activity_cancellation("https://ouaf.example.com/ws");
        let request = FieldActivityCancellation::new(" 1234567890 ")
            .with_cancel_reason("DUPL")
            .with_comments("   ")
            .into_request(&profile, Some(UsernameCredentials::new("SYSUSER", "pw")))
            .unwrap();

        let xml = build_envelope(&request).into_string();
        assert!(xml.contains("<tns:fieldActivityId>1234567890</tns:fieldActivityId>"));
        assert!(xml.contains("<tns:cancelReason>DUPL</tns:cancelReason>"));
        assert!(!xml.contains("comments"));
        assert!(xml.contains("<wsse:Username>SYSUSER</wsse:Username>"));
    }

    #[test]
    fn test_with_endpoint_override() {
        let profile = ServiceProfile::calculator(CalculatorOperation::Add)
            .with_endpoint("http://localhost:8080/calculator.asmx");
        let request = CalculatorInput::new(1, 2).into_request(&profile).unwrap();
        assert_eq!(request.endpoint_url(), "http://localhost:8080/calculator.asmx");
    }
}
