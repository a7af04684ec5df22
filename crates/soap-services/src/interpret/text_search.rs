use crate::types::SoapFault;

/// Parse a SOAP fault by tag search, without requiring well-formed XML.
pub(crate) fn parse_soap_fault(xml: &str) -> Option<SoapFault> {
    if !xml.contains("faultcode") {
        return None;
    }

    let fault_code = extract_element(xml, "faultcode")?;
    let fault_string =
        extract_element(xml, "faultstring").unwrap_or_else(|| "Unknown error".to_string());
    let detail = extract_element(xml, "detail").unwrap_or_default();

    Some(SoapFault {
        fault_code: fault_code.trim().to_string(),
        fault_string: fault_string.trim().to_string(),
        detail: detail.trim().to_string(),
    })
}

/// Extract the raw content of the first element whose local name is `tag`.
///
/// Matches `<tag>`, `<prefix:tag>` and start tags with attributes. A
/// self-closing element yields an empty string.
pub(crate) fn extract_element(xml: &str, tag: &str) -> Option<String> {
    let mut search_from = 0;

    while let Some(offset) = xml[search_from..].find('<') {
        let name_start = search_from + offset + 1;
        let rest = &xml[name_start..];
        let name_len = rest
            .find(|c: char| c == '>' || c == '/' || c.is_whitespace())
            .unwrap_or(rest.len());
        let qname = &rest[..name_len];
        search_from = name_start;

        let local = qname.rsplit(':').next().unwrap_or(qname);
        if qname.is_empty() || local != tag {
            continue;
        }

        let tag_end = name_start + rest.find('>')?;
        if xml[..tag_end].ends_with('/') {
            return Some(String::new());
        }

        let content_start = tag_end + 1;
        let end_tag = format!("</{}>", qname);
        let end_idx = xml[content_start..].find(&end_tag)?;
        return Some(xml[content_start..content_start + end_idx].to_string());
    }

    None
}
