//! Calculator profile end to end against a mock server.

use super::common::{assert_well_formed, header_value, received_request, ADD_RESPONSE};
use soapcall::{CalculatorInput, CalculatorOperation, ErrorKind, ServiceProfile, SoapCaller};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn calculator_against(server: &MockServer, operation: CalculatorOperation) -> ServiceProfile {
    ServiceProfile::calculator(operation).with_endpoint(format!("{}/calculator.asmx", server.uri()))
}

#[tokio::test]
async fn test_add_four_and_five() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/calculator.asmx"))
        .and(header("SOAPAction", "http://tempuri.org/Add"))
        .and(header("Content-Type", "text/xml; charset=utf-8"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ADD_RESPONSE))
        .expect(1)
        .mount(&server)
        .await;

    let profile = calculator_against(&server, CalculatorOperation::Add);
    let caller = SoapCaller::for_profile(&profile).expect("caller should build");
    let outcome = caller
        .call(CalculatorInput::new(4, 5).into_request(&profile).unwrap())
        .await
        .expect("call should succeed");

    assert_eq!(outcome.result.value(), Some("9"));
    assert_eq!(outcome.status, 200);

    // Whole-value check: the browser agent contains a comma.
    let request = received_request(&server).await;
    assert_eq!(
        header_value(&request, "user-agent"),
        soapcall::services::BROWSER_USER_AGENT
    );
    let sent = String::from_utf8(request.body).expect("envelope should be UTF-8");
    assert_well_formed(&sent);
    assert!(sent.contains("<tns:Add>"));
    assert!(sent.contains("<tns:intA>4</tns:intA>"));
    assert!(sent.contains("<tns:intB>5</tns:intB>"));
    assert!(!sent.contains("Header"));
}

#[tokio::test]
async fn test_divide_uses_its_own_result_element() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("SOAPAction", "http://tempuri.org/Divide"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<soap:Envelope xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\"><soap:Body>\
             <DivideResponse xmlns=\"http://tempuri.org/\"><DivideResult>-3</DivideResult></DivideResponse>\
             </soap:Body></soap:Envelope>",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let profile = calculator_against(&server, CalculatorOperation::Divide);
    let caller = SoapCaller::for_profile(&profile).unwrap();
    let outcome = caller
        .call(CalculatorInput::new(-9, 3).into_request(&profile).unwrap())
        .await
        .unwrap();

    assert_eq!(outcome.result.value(), Some("-3"));
}

#[tokio::test]
async fn test_blocked_response_is_invalid() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>Access denied</html>"))
        .mount(&server)
        .await;

    let profile = calculator_against(&server, CalculatorOperation::Add);
    let caller = SoapCaller::for_profile(&profile).unwrap();
    let err = caller
        .call(CalculatorInput::new(1, 2).into_request(&profile).unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::InvalidResponse { .. }));
    assert_eq!(err.status(), Some(200));
    assert_eq!(err.raw_body(), Some("<html>Access denied</html>"));
}

#[tokio::test]
async fn test_server_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&server)
        .await;

    let profile = calculator_against(&server, CalculatorOperation::Add);
    let caller = SoapCaller::for_profile(&profile).unwrap();
    let err = caller
        .call(CalculatorInput::new(1, 2).into_request(&profile).unwrap())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(502));
}

/// Talks to the public demo host; run with `--ignored` when online.
#[tokio::test]
#[ignore]
async fn test_live_calculator() {
    let profile = ServiceProfile::calculator(CalculatorOperation::Add);
    let caller = SoapCaller::for_profile(&profile).unwrap();
    let outcome = caller
        .call(CalculatorInput::new(4, 5).into_request(&profile).unwrap())
        .await
        .expect("live calculator should answer");

    assert_eq!(outcome.result.value(), Some("9"));
}
