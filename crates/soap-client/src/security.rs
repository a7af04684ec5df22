//! Security utilities for building SOAP requests.
//!
//! Every caller-supplied value that ends up in an envelope MUST pass
//! through [`xml::escape`], and every caller-supplied element name through
//! [`xml::is_valid_name`]. Without this a value such as `</intA><x>` would
//! rewrite the document structure.
//!
//! ```rust
//! use soapcall_client::security::xml;
//!
//! // CORRECT - Always escape user input
//! let value = xml::escape("Smith & <Sons>");
//! let element = format!("<tns:name>{}</tns:name>", value);
//!
//! // WRONG - NEVER do this
//! // let element = format!("<tns:name>{}</tns:name>", user_input);
//! ```

/// XML escaping and naming utilities for SOAP envelopes.
pub mod xml {
    /// Escape a string for safe inclusion in XML content or attribute values.
    ///
    /// This escapes the five predefined XML entities.
    ///
    /// # Example
    ///
    /// ```rust
    /// use soapcall_client::security::xml;
    ///
    /// let safe = xml::escape("Hello <World> & 'Friends'");
    /// assert_eq!(safe, "Hello &lt;World&gt; &amp; &apos;Friends&apos;");
    /// ```
    #[must_use]
    pub fn escape(value: &str) -> String {
        let mut escaped = String::with_capacity(value.len() + 16);
        for ch in value.chars() {
            match ch {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&apos;"),
                _ => escaped.push(ch),
            }
        }
        escaped
    }

    /// Validate that a string can be used as an unprefixed XML element name.
    ///
    /// Accepts ASCII letters, digits, `_`, `-` and `.`, starting with a
    /// letter or underscore. Colons are rejected since the builder adds its
    /// own prefix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use soapcall_client::security::xml;
    ///
    /// assert!(xml::is_valid_name("intA"));
    /// assert!(xml::is_valid_name("CM-FieldActivityCancel"));
    /// assert!(!xml::is_valid_name("1st"));
    /// assert!(!xml::is_valid_name("a><b"));
    /// ```
    #[must_use]
    pub fn is_valid_name(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
            _ => return false,
        }
        chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.'))
    }
}

/// Endpoint URL validation.
pub mod url {
    use crate::error::{Error, ErrorKind, Result};

    /// Parse an endpoint URL, accepting only absolute `http` and `https` URLs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use soapcall_client::security::url;
    ///
    /// assert!(url::parse_endpoint("https://example.com/ws").is_ok());
    /// assert!(url::parse_endpoint("ftp://example.com/ws").is_err());
    /// assert!(url::parse_endpoint("/relative/path").is_err());
    /// ```
    pub fn parse_endpoint(endpoint: &str) -> Result<::url::Url> {
        let parsed = ::url::Url::parse(endpoint.trim())?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            other => Err(Error::new(ErrorKind::Config(format!(
                "Unsupported URL scheme '{}' in endpoint {}",
                other, endpoint
            )))),
        }
    }
}
