//! Field activity cancellation end to end against a mock server.

use super::common::{assert_well_formed, field_activity_response, received_body};
use soapcall::{
    ErrorKind, FieldActivityCancellation, ServiceProfile, SoapCaller, SoapResult,
    UsernameCredentials,
};
use wiremock::matchers::{header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount(server: &MockServer, status: u16, body: String) {
    Mock::given(method("POST"))
        .and(header("SOAPAction", soapcall::services::FA_CANCEL_OPERATION))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_cancel_success_sends_username_token() {
    let server = MockServer::start().await;
    mount(
        &server,
        200,
        field_activity_response(
            "<cm:output><cm:fieldActivityId>1234567890</cm:fieldActivityId>\
             <cm:messageText>Field activity cancelled</cm:messageText></cm:output>",
        ),
    )
    .await;

    let profile = ServiceProfile::field_activity_cancellation(server.uri());
    let caller = SoapCaller::for_profile(&profile).unwrap();
    let request = FieldActivityCancellation::new("1234567890")
        .with_cancel_reason("DUPL")
        .into_request(&profile, Some(UsernameCredentials::new(" SYSUSER ", " s3cret ")))
        .unwrap();

    let outcome = caller.call(request).await.unwrap();
    match &outcome.result {
        SoapResult::Success { value, raw_detail } => {
            assert_eq!(value, "Field activity cancelled");
            assert!(raw_detail.contains("1234567890"));
        }
        other => panic!("expected success, got {other:?}"),
    }

    let sent = received_body(&server).await;
    assert_well_formed(&sent);
    assert_eq!(sent.matches("<wsse:UsernameToken>").count(), 1);
    assert!(sent.contains("<wsse:Username>SYSUSER</wsse:Username>"));
    assert!(sent.contains(">s3cret</wsse:Password>"));
    assert!(sent.contains("<tns:cancelReason>DUPL</tns:cancelReason>"));
    assert!(!sent.contains("comments"));
}

#[tokio::test]
async fn test_cancel_in_error() {
    let server = MockServer::start().await;
    mount(
        &server,
        200,
        field_activity_response(
            "<cm:output><cm:errorInformation><cm:inError>true</cm:inError>\
             <cm:messageCategory>11002</cm:messageCategory><cm:messageNumber>4051</cm:messageNumber>\
             <cm:messageText>Not found</cm:messageText></cm:errorInformation></cm:output>",
        ),
    )
    .await;

    let profile = ServiceProfile::field_activity_cancellation(server.uri());
    let caller = SoapCaller::for_profile(&profile).unwrap();
    let outcome = caller
        .call(
            FieldActivityCancellation::new("999")
                .into_request(&profile, None)
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(!outcome.result.is_success());
    assert!(outcome.result.detail().contains("Not found"));
    assert!(outcome.result.detail().contains("4051"));
}

#[tokio::test]
async fn test_cancel_fault_in_500() {
    let server = MockServer::start().await;
    mount(
        &server,
        500,
        r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/"><soapenv:Body>
<soapenv:Fault><faultcode>soapenv:Client</faultcode><faultstring>Bad request</faultstring>
<detail><Reason>Invalid credentials</Reason></detail></soapenv:Fault></soapenv:Body></soapenv:Envelope>"#
            .to_string(),
    )
    .await;

    let profile = ServiceProfile::field_activity_cancellation(server.uri());
    let caller = SoapCaller::for_profile(&profile).unwrap();
    let outcome = caller
        .call(
            FieldActivityCancellation::new("1")
                .into_request(&profile, Some(UsernameCredentials::new("u", "wrong")))
                .unwrap(),
        )
        .await
        .unwrap();

    match outcome.result {
        SoapResult::Failure { reason, detail } => {
            assert_eq!(reason, "SOAP Fault: soapenv:Client - Bad request");
            assert_eq!(detail, "<Reason>Invalid credentials</Reason>");
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_cancel_without_output_is_advisory() {
    let server = MockServer::start().await;
    mount(&server, 200, field_activity_response("")).await;

    let profile = ServiceProfile::field_activity_cancellation(server.uri());
    let caller = SoapCaller::for_profile(&profile).unwrap();
    let outcome = caller
        .call(
            FieldActivityCancellation::new("1")
                .into_request(&profile, None)
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(outcome.result.is_success());
}

#[tokio::test]
async fn test_cancel_garbage_body() {
    let server = MockServer::start().await;
    mount(&server, 200, "}{ not xml".to_string()).await;

    let profile = ServiceProfile::field_activity_cancellation(server.uri());
    let caller = SoapCaller::for_profile(&profile).unwrap();
    let err = caller
        .call(
            FieldActivityCancellation::new("1")
                .into_request(&profile, None)
                .unwrap(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::InvalidResponse { .. }));
}
