//! Namespace-aware document tree built with quick-xml.
//!
//! quick-xml does not expand external entities, so parsing untrusted
//! responses is safe against XXE.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;

use soapcall_client::security::xml;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Element {
    pub namespace: Option<String>,
    pub local_name: String,
    /// Name as written in the document, prefix included.
    pub qualified_name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    fn from_start(resolved: &ResolveResult<'_>, start: &BytesStart<'_>) -> Result<Self, String> {
        let namespace = match resolved {
            ResolveResult::Bound(ns) => Some(String::from_utf8_lossy(ns.as_ref()).into_owned()),
            ResolveResult::Unbound => None,
            ResolveResult::Unknown(prefix) => {
                return Err(format!(
                    "undeclared namespace prefix '{}'",
                    String::from_utf8_lossy(prefix)
                ))
            }
        };

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| e.to_string())?;
            let value = attr.unescape_value().map_err(|e| e.to_string())?;
            attributes.push((
                String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
                value.into_owned(),
            ));
        }

        Ok(Self {
            namespace,
            local_name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
            qualified_name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            attributes,
            children: Vec::new(),
        })
    }

    pub fn is(&self, namespace: &str, local_name: &str) -> bool {
        self.local_name == local_name && self.namespace.as_deref() == Some(namespace)
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// First direct child with the given local name, in any namespace.
    pub fn child(&self, local_name: &str) -> Option<&Element> {
        self.child_elements().find(|el| el.local_name == local_name)
    }

    /// Trimmed text of a direct child, if the child exists.
    pub fn child_text(&self, local_name: &str) -> Option<String> {
        self.child(local_name).map(Element::text)
    }

    /// Concatenated direct text content, trimmed.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for node in &self.children {
            if let Node::Text(t) = node {
                text.push_str(t);
            }
        }
        text.trim().to_string()
    }

    /// Depth-first search over this element and its descendants.
    pub fn find<'a>(&'a self, predicate: &dyn Fn(&Element) -> bool) -> Option<&'a Element> {
        if predicate(self) {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find(predicate))
    }

    /// Serialize the children of this element back to XML text.
    pub fn inner_xml(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            write_node(node, &mut out);
        }
        out
    }
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&xml::escape(text)),
        Node::Element(el) => {
            out.push('<');
            out.push_str(&el.qualified_name);
            for (key, value) in &el.attributes {
                out.push_str(&format!(" {}=\"{}\"", key, xml::escape(value)));
            }
            if el.children.is_empty() {
                out.push_str("/>");
                return;
            }
            out.push('>');
            for child in &el.children {
                write_node(child, out);
            }
            out.push_str("</");
            out.push_str(&el.qualified_name);
            out.push('>');
        }
    }
}

/// Deepest element nesting accepted from a response.
pub(crate) const MAX_DEPTH: usize = 256;

/// Parse a complete document and return its root element.
///
/// Errors describe why the text is not well-formed XML or nests deeper
/// than [`MAX_DEPTH`].
pub(crate) fn parse_document(text: &str) -> Result<Element, String> {
    let mut reader = NsReader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let (resolved, event) = reader
            .read_resolved_event()
            .map_err(|e| format!("XML error: {}", e))?;

        match event {
            Event::Start(ref start) => {
                if stack.len() >= MAX_DEPTH {
                    return Err(format!(
                        "document nests deeper than {} elements",
                        MAX_DEPTH
                    ));
                }
                stack.push(Element::from_start(&resolved, start)?);
            }
            Event::Empty(ref start) => {
                let element = Element::from_start(&resolved, start)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| "closing tag without matching start tag".to_string())?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(ref text) => {
                let text = text.unescape().map_err(|e| e.to_string())?;
                push_text(&mut stack, text.into_owned())?;
            }
            Event::CData(cdata) => {
                let text = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                push_text(&mut stack, text)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(format!(
            "unexpected end of document inside <{}>",
            open.qualified_name
        ));
    }

    root.ok_or_else(|| "document has no root element".to_string())
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<(), String> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(Node::Element(element));
        Ok(())
    } else if root.is_none() {
        *root = Some(element);
        Ok(())
    } else {
        Err("document has more than one root element".to_string())
    }
}

fn push_text(stack: &mut [Element], text: String) -> Result<(), String> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(Node::Text(text));
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err("text content outside the root element".to_string()),
    }
}
