use quick_xml::events::Event;
use quick_xml::Reader;
use wiremock::{MockServer, Request};

/// The single request the mock server received.
pub async fn received_request(server: &MockServer) -> Request {
    let mut requests = server
        .received_requests()
        .await
        .expect("request recording is enabled by default");
    assert_eq!(requests.len(), 1, "exactly one request should be sent");
    requests.remove(0)
}

/// Body of the single request the mock server received.
pub async fn received_body(server: &MockServer) -> String {
    let request = received_request(server).await;
    String::from_utf8(request.body).expect("envelope should be UTF-8")
}

/// Value of a header on a received request, compared as a whole.
pub fn header_value<'a>(request: &'a Request, name: &str) -> &'a str {
    request
        .headers
        .get(name)
        .unwrap_or_else(|| panic!("request should carry {name}"))
        .to_str()
        .expect("header should be visible ASCII")
}

/// Panics if `xml` is not a well-formed document.
pub fn assert_well_formed(xml: &str) {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("document is not well-formed: {e}\n{xml}"),
        }
    }
}

pub const ADD_RESPONSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema">
  <soap:Body>
    <AddResponse xmlns="http://tempuri.org/">
      <AddResult>9</AddResult>
    </AddResponse>
  </soap:Body>
</soap:Envelope>"#;

/// OUAF response wrapping `output` in the cancellation operation element.
pub fn field_activity_response(output: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
  <soapenv:Body>
    <cm:CM-CancelFieldActivity xmlns:cm="{}">
      {}
    </cm:CM-CancelFieldActivity>
  </soapenv:Body>
</soapenv:Envelope>"#,
        soapcall::services::FA_CANCEL_NAMESPACE,
        output
    )
}
