//! Response interpretation.
//!
//! Two strategies share one entry point:
//!
//! - [`InterpretStrategy::SimpleResultTag`] searches the text for a single
//!   result element and tolerates malformed markup.
//! - [`InterpretStrategy::NamespacedOutputPath`] parses the full document
//!   and walks `<operation>/output` in the target namespace, reading the
//!   `errorInformation` block of OUAF-style services.

mod text_search;
mod xml_tree;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{SoapFault, SoapResult, SOAP12_ENV_NS, SOAP_ENV_NS};
use xml_tree::Element;

/// How a response body is turned into a [`SoapResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpretStrategy {
    /// Text search for `<element>value</element>` anywhere in the body.
    SimpleResultTag { element: String },
    /// Namespace-aware lookup of `<operation>/output`.
    NamespacedOutputPath {
        operation: String,
        namespace: String,
        /// Output child echoed back on success, such as the record identifier.
        echo_field: Option<String>,
    },
}

/// Turns response bodies into [`SoapResult`]s using one strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseInterpreter {
    strategy: InterpretStrategy,
}

impl ResponseInterpreter {
    pub fn new(strategy: InterpretStrategy) -> Self {
        Self { strategy }
    }

    pub fn simple_result_tag(element: impl Into<String>) -> Self {
        Self::new(InterpretStrategy::SimpleResultTag {
            element: element.into(),
        })
    }

    pub fn namespaced_output_path(
        operation: impl Into<String>,
        namespace: impl Into<String>,
        echo_field: Option<String>,
    ) -> Self {
        Self::new(InterpretStrategy::NamespacedOutputPath {
            operation: operation.into(),
            namespace: namespace.into(),
            echo_field,
        })
    }

    pub fn strategy(&self) -> &InterpretStrategy {
        &self.strategy
    }

    /// Interpret a successful (2xx) response body.
    ///
    /// Faults and application errors come back as `Ok(SoapResult::Failure)`.
    /// `Err` is returned only when the body cannot be understood.
    pub fn interpret(&self, body: &[u8]) -> Result<SoapResult> {
        let text = String::from_utf8_lossy(body);

        match &self.strategy {
            InterpretStrategy::SimpleResultTag { element } => interpret_simple(&text, element),
            InterpretStrategy::NamespacedOutputPath {
                operation,
                namespace,
                echo_field,
            } => interpret_namespaced(&text, operation, namespace, echo_field.as_deref()),
        }
    }

    /// Look for a SOAP Fault in a body, using the same parser as
    /// [`interpret`](Self::interpret). Unparseable bodies yield `None`.
    pub fn find_fault(&self, body: &[u8]) -> Option<SoapFault> {
        let text = String::from_utf8_lossy(body);

        match &self.strategy {
            InterpretStrategy::SimpleResultTag { .. } => text_search::parse_soap_fault(&text),
            InterpretStrategy::NamespacedOutputPath { .. } => xml_tree::parse_document(&text)
                .ok()
                .and_then(|root| find_fault_element(&root).map(fault_from_element)),
        }
    }
}

fn interpret_simple(text: &str, element: &str) -> Result<SoapResult> {
    if let Some(fault) = text_search::parse_soap_fault(text) {
        debug!(fault_code = %fault.fault_code, "SOAP fault in response");
        return Ok(fault.into());
    }

    match text_search::extract_element(text, element) {
        Some(raw) => Ok(SoapResult::Success {
            value: raw.trim().to_string(),
            raw_detail: raw,
        }),
        None => Err(Error::invalid_response(
            format!("could not find <{}> in the response", element),
            text,
        )),
    }
}

fn interpret_namespaced(
    text: &str,
    operation: &str,
    namespace: &str,
    echo_field: Option<&str>,
) -> Result<SoapResult> {
    let root = xml_tree::parse_document(text)
        .map_err(|reason| Error::invalid_response(format!("unparseable response: {}", reason), text))?;

    if !is_soap_element(&root, "Envelope") {
        return Err(Error::invalid_response(
            format!("expected a SOAP Envelope, found <{}>", root.qualified_name),
            text,
        ));
    }

    if let Some(fault) = find_fault_element(&root) {
        let fault = fault_from_element(fault);
        debug!(fault_code = %fault.fault_code, "SOAP fault in response");
        return Ok(fault.into());
    }

    let body = root
        .child_elements()
        .find(|el| is_soap_element(el, "Body"))
        .ok_or_else(|| Error::invalid_response("SOAP Envelope has no Body", text))?;

    let output = body
        .find(&|el: &Element| el.is(namespace, operation))
        .and_then(|op| op.child("output"));

    let Some(output) = output else {
        debug!(operation, "No output element in response");
        return Ok(SoapResult::Success {
            value: format!(
                "Call completed, but the response did not contain {}/output",
                operation
            ),
            raw_detail: body.inner_xml(),
        });
    };

    let in_error = output
        .child("errorInformation")
        .filter(|info| {
            info.child_text("inError")
                .is_some_and(|flag| flag.eq_ignore_ascii_case("true"))
        });

    if let Some(info) = in_error {
        let message = info
            .child_text("messageText")
            .or_else(|| output.child_text("messageText"))
            .unwrap_or_default();
        let category = info.child_text("messageCategory").unwrap_or_default();
        let number = info.child_text("messageNumber").unwrap_or_default();

        let reason = if message.is_empty() {
            "Service reported an error".to_string()
        } else {
            message.clone()
        };

        return Ok(SoapResult::Failure {
            reason,
            detail: format!(
                "messageText: {}; messageCategory: {}; messageNumber: {}",
                message, category, number
            ),
        });
    }

    let message = output.child_text("messageText").unwrap_or_default();
    let mut raw_detail = String::new();
    if let Some(field) = echo_field {
        raw_detail.push_str(&format!(
            "{}: {}; ",
            field,
            output.child_text(field).unwrap_or_default()
        ));
    }
    raw_detail.push_str(&format!("messageText: {}", message));

    let value = if message.is_empty() {
        "Call completed".to_string()
    } else {
        message
    };

    Ok(SoapResult::Success { value, raw_detail })
}

fn is_soap_element(el: &Element, local_name: &str) -> bool {
    el.is(SOAP_ENV_NS, local_name) || el.is(SOAP12_ENV_NS, local_name)
}

fn find_fault_element(root: &Element) -> Option<&Element> {
    root.find(&|el: &Element| is_soap_element(el, "Fault"))
}

/// Read a SOAP 1.1 (`faultcode`/`faultstring`/`detail`) or SOAP 1.2
/// (`Code/Value`/`Reason/Text`/`Detail`) fault.
fn fault_from_element(fault: &Element) -> SoapFault {
    let fault_code = fault
        .child_text("faultcode")
        .or_else(|| fault.child("Code").and_then(|code| code.child_text("Value")))
        .unwrap_or_default();
    let fault_string = fault
        .child_text("faultstring")
        .or_else(|| fault.child("Reason").and_then(|reason| reason.child_text("Text")))
        .unwrap_or_else(|| "Unknown error".to_string());
    let detail = fault
        .child("detail")
        .or_else(|| fault.child("Detail"))
        .map(Element::inner_xml)
        .unwrap_or_default();

    SoapFault {
        fault_code,
        fault_string,
        detail,
    }
}
