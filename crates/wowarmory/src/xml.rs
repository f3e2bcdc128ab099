//! Minimal element tree over quick-xml, with fixed-path traversal.
//!
//! Armory documents are small, so the whole body is materialised into an
//! [`Element`] tree before any lookup. This also means a malformed document
//! fails as a whole, even when the wanted element appears before the damage.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::types::{ArmoryError, ArmoryResult};

/// Deepest element nesting accepted. The tree is recursive, so anything
/// deeper is refused up front rather than risking the stack on drop.
pub const MAX_DEPTH: usize = 256;

/// One XML element with its attributes, child elements and concatenated text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
    pub text: String,
}

impl Element {
    /// First child element with the given local name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All child elements with the given local name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Text content with surrounding whitespace removed.
    pub fn text(&self) -> &str {
        self.text.trim()
    }
}

/// Parse a complete document and return its root element.
pub fn parse_document(xml: &str) -> ArmoryResult<Element> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            ArmoryError::Xml(format!("at byte {}: {e}", reader.buffer_position()))
        })?;

        match event {
            Event::Start(e) => {
                ensure_single_root(&root, &stack)?;
                if stack.len() >= MAX_DEPTH {
                    return Err(ArmoryError::Xml(format!(
                        "document nested too deeply (more than {MAX_DEPTH} levels)"
                    )));
                }
                stack.push(open_element(&e)?);
            }
            Event::Empty(e) => {
                ensure_single_root(&root, &stack)?;
                let element = open_element(&e)?;
                close_element(element, &mut stack, &mut root);
            }
            Event::End(_) => {
                // quick-xml has already checked that the names match.
                let element = stack
                    .pop()
                    .ok_or_else(|| ArmoryError::Xml("unexpected closing tag".to_string()))?;
                close_element(element, &mut stack, &mut root);
            }
            Event::Text(e) => {
                let text = e
                    .unescape()
                    .map_err(|err| ArmoryError::Xml(err.to_string()))?;
                match stack.last_mut() {
                    Some(top) => top.text.push_str(&text),
                    None if text.trim().is_empty() => {}
                    None => {
                        return Err(ArmoryError::Xml(
                            "text content outside of the root element".to_string(),
                        ))
                    }
                }
            }
            Event::CData(e) => match stack.last_mut() {
                Some(top) => top.text.push_str(&String::from_utf8_lossy(&e.into_inner())),
                None => {
                    return Err(ArmoryError::Xml(
                        "CDATA section outside of the root element".to_string(),
                    ))
                }
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(ArmoryError::Xml(format!(
            "unexpected end of document inside <{}>",
            open.name
        )));
    }

    root.ok_or_else(|| ArmoryError::Xml("document has no root element".to_string()))
}

/// Walk `path` from the document root. The first segment names the root
/// itself; every later segment picks the first matching child.
///
/// On failure the error carries the path up to and including the first
/// segment that could not be found.
pub fn descend<'a>(root: &'a Element, path: &[&str]) -> ArmoryResult<&'a Element> {
    let missing = |depth: usize| ArmoryError::MissingElement(path[..=depth].join("/"));

    let Some((first, rest)) = path.split_first() else {
        return Ok(root);
    };
    if root.name != *first {
        return Err(missing(0));
    }

    let mut current = root;
    for (i, segment) in rest.iter().enumerate() {
        current = current.child(segment).ok_or_else(|| missing(i + 1))?;
    }
    Ok(current)
}

fn ensure_single_root(root: &Option<Element>, stack: &[Element]) -> ArmoryResult<()> {
    if root.is_some() && stack.is_empty() {
        return Err(ArmoryError::Xml("multiple root elements".to_string()));
    }
    Ok(())
}

fn open_element(e: &BytesStart<'_>) -> ArmoryResult<Element> {
    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| ArmoryError::Xml(format!("in <{name}>: {err}")))?;
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| ArmoryError::Xml(format!("in <{name}>: {err}")))?
            .into_owned();
        attributes.push((key, value));
    }
    Ok(Element {
        name,
        attributes,
        ..Element::default()
    })
}

fn close_element(element: Element, stack: &mut [Element], root: &mut Option<Element>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}
