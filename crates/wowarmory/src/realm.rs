//! Realm status, as published by the realm-status RSS feed.

use serde::{Deserialize, Serialize};

use crate::character::capitalize;
use crate::types::ArmoryResult;
use crate::xml::{self, Element};

/// Location of the per-realm `<item>` elements inside the feed.
pub const CHANNEL_PATH: [&str; 2] = ["rss", "channel"];

/// One realm entry from the status feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Realm {
    pub name: String,
    pub up: bool,
    pub language: String,
    /// Ruleset, e.g. `PvP` or `RP`.
    #[serde(rename = "type")]
    pub kind: String,
    pub queue: bool,
}

impl Realm {
    /// Build a realm from the raw category texts of a feed item.
    pub fn new(name: &str, status: &str, kind: &str, queue: &str, language: &str) -> Self {
        let language = language.trim().to_lowercase();
        Self {
            name: name.to_string(),
            up: matches!(status.trim(), "Up" | "Realm Up"),
            language: if language.is_empty() {
                "en".to_string()
            } else {
                language
            },
            kind: kind.to_string(),
            queue: queue.trim() == "true",
        }
    }

    /// Build a realm from an RSS `<item>`. Returns `None` for items that do
    /// not describe a realm (no `type` category).
    fn from_item(item: &Element) -> Option<Self> {
        let kind = category(item, "type")?;
        Some(Self::new(
            item.child("title").map(Element::text).unwrap_or_default(),
            category(item, "status").unwrap_or_default(),
            kind,
            category(item, "queue").unwrap_or_default(),
            category(item, "language").unwrap_or_default(),
        ))
    }
}

fn category<'a>(item: &'a Element, domain: &str) -> Option<&'a str> {
    item.children_named("category")
        .find(|c| c.attr("domain") == Some(domain))
        .map(Element::text)
}

/// Parse every realm listed in a status feed.
pub fn parse_status_feed(body: &str) -> ArmoryResult<Vec<Realm>> {
    let root = xml::parse_document(body)?;
    let channel = xml::descend(&root, &CHANNEL_PATH)?;
    Ok(channel
        .children_named("item")
        .filter_map(Realm::from_item)
        .collect())
}

/// Realms whose name equals `name` capitalized (first letter upper, rest lower).
pub fn filter_realms(realms: &[Realm], name: &str) -> Vec<Realm> {
    let wanted = capitalize(name);
    realms.iter().filter(|r| r.name == wanted).cloned().collect()
}
