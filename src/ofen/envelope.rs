//! # XML Envelope Layer
//!
//! The controller transports binary frames as hex text inside an XML
//! envelope over HTTP. This module builds the textual command request
//! body and parses the two response envelope shapes:
//!
//! - command responses: `<function><return><result>..</result>
//!   <message>HEX</message></return></function>`
//! - status responses: `<statusrecord><statusgroup ..>
//!   <statusitem ..><value>..</value></statusitem></statusgroup>
//!   </statusrecord>`
//!
//! Parsing is strict: a wrong root tag, a missing `return` element or a
//! non-`Succeeded` result each fail with their own [`EnvelopeError`]
//! kind, and nothing is parsed past the first failure.

use roxmltree::{Document, Node};

use crate::error::EnvelopeError;

/// The literal result text the device reports on success.
const RESULT_SUCCEEDED: &str = "Succeeded";

/// Builds the command request body posted to `/action/status`.
///
/// The `n`, `m` and `t` qualifiers are opaque protocol parameters and are
/// appended only when present, each followed by a single space before the
/// hex message.
pub fn build_command_request(
    line: u8,
    message: &str,
    n: Option<u32>,
    m: Option<u32>,
    t: Option<u32>,
) -> String {
    let mut body = format!("group=Line&optionalGroupInstance={line}&action=Command ");
    if let Some(n) = n {
        body.push_str(&format!("n={n} "));
    }
    if let Some(m) = m {
        body.push_str(&format!("m={m} "));
    }
    if let Some(t) = t {
        body.push_str(&format!("t={t} "));
    }
    body.push_str(message);
    body
}

/// Parses a command response envelope, returning the hex message text.
///
/// An empty `<message/>` returns an empty string; a missing `message`
/// element is [`EnvelopeError::MissingElement`]. The two cases must stay
/// distinct for the caller.
pub fn parse_command_response(xml: &[u8]) -> Result<String, EnvelopeError> {
    let text = std::str::from_utf8(xml)
        .map_err(|e| EnvelopeError::MalformedXml(e.to_string()))?;
    let doc = Document::parse(text).map_err(|e| EnvelopeError::MalformedXml(e.to_string()))?;

    let root = doc.root_element();
    if root.tag_name().name() != "function" {
        return Err(EnvelopeError::UnexpectedRootTag {
            expected: "function",
            found: root.tag_name().name().to_string(),
        });
    }

    let ret = child_element(root, "return").ok_or(EnvelopeError::MissingElement("return"))?;

    let result = child_text(ret, "result").unwrap_or_default();
    if result != RESULT_SUCCEEDED {
        return Err(EnvelopeError::NonSuccessResult(result));
    }

    let message =
        child_element(ret, "message").ok_or(EnvelopeError::MissingElement("message"))?;
    Ok(message.text().unwrap_or_default().to_string())
}

/// Parses a status response envelope, returning the wlan0 MAC address.
///
/// Walks `statusrecord -> statusgroup[name=Interface, instance=wlan0] ->
/// statusitem[name=MAC Address] -> value`; the first match wins.
pub fn parse_status_response(xml: &[u8]) -> Result<String, EnvelopeError> {
    let text = std::str::from_utf8(xml)
        .map_err(|e| EnvelopeError::MalformedXml(e.to_string()))?;
    let doc = Document::parse(text).map_err(|e| EnvelopeError::MalformedXml(e.to_string()))?;

    let root = doc.root_element();
    if root.tag_name().name() != "statusrecord" {
        return Err(EnvelopeError::UnexpectedRootTag {
            expected: "statusrecord",
            found: root.tag_name().name().to_string(),
        });
    }

    for group in root.children().filter(|n| {
        n.has_tag_name("statusgroup")
            && n.attribute("name") == Some("Interface")
            && n.attribute("instance") == Some("wlan0")
    }) {
        for item in group
            .children()
            .filter(|n| n.has_tag_name("statusitem") && n.attribute("name") == Some("MAC Address"))
        {
            if let Some(value) = child_text(item, "value") {
                return Ok(value);
            }
        }
    }

    Err(EnvelopeError::ValueNotFound("MAC address"))
}

/// Returns the first child element with the given tag name.
fn child_element<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(name))
}

/// Returns the text of the first child element with the given tag name.
fn child_text(node: Node, name: &str) -> Option<String> {
    child_element(node, name).map(|n| n.text().unwrap_or_default().to_string())
}
