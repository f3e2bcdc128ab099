//! Character sheets: the `<character/>` element and its rendering.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{ArmoryError, ArmoryResult};
use crate::xml;

/// Location of the character element inside a character sheet.
pub const CHARACTER_PATH: [&str; 3] = ["page", "characterInfo", "character"];

/// Attributes of the `page/characterInfo/character` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterInfo {
    attributes: BTreeMap<String, String>,
}

impl CharacterInfo {
    /// Extract the character element from a character sheet body.
    pub fn from_xml(body: &str) -> ArmoryResult<Self> {
        let root = xml::parse_document(body)?;
        let character = xml::descend(&root, &CHARACTER_PATH)?;
        Ok(Self {
            attributes: character.attributes.iter().cloned().collect(),
        })
    }

    /// Raw attribute lookup.
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.attributes.get(attribute).map(String::as_str)
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn name(&self) -> ArmoryResult<&str> {
        self.required("name")
    }

    pub fn class(&self) -> ArmoryResult<&str> {
        self.required("class")
    }

    pub fn level(&self) -> Option<u32> {
        self.get("level").and_then(|l| l.trim().parse().ok())
    }

    pub fn race(&self) -> Option<&str> {
        self.get("race")
    }

    pub fn realm(&self) -> Option<&str> {
        self.get("realm")
    }

    pub fn battle_group(&self) -> Option<&str> {
        self.get("battleGroup")
    }

    pub fn faction(&self) -> Option<&str> {
        self.get("faction")
    }

    pub fn gender(&self) -> Option<&str> {
        self.get("gender")
    }

    /// Guild name, with an empty attribute treated as no guild.
    pub fn guild(&self) -> Option<&str> {
        self.get("guildName").filter(|g| !g.is_empty())
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }

    /// `"<name> is a <class>"`.
    pub fn headline(&self) -> ArmoryResult<String> {
        Ok(format!("{} is a {}", self.name()?, self.class()?))
    }

    /// One-line description of everything the sheet says about the character.
    ///
    /// Missing optional attributes render empty; a missing level renders as 0.
    pub fn summary(&self) -> String {
        let guild = self
            .guild()
            .map(|g| format!("<{g}> "))
            .unwrap_or_default();
        format!(
            "{} {}is a level {} {} {} {} {} on {} in battle group {}.",
            self.get("name").unwrap_or_default(),
            guild,
            self.level().unwrap_or(0),
            capitalize(self.gender().unwrap_or_default()),
            self.race().unwrap_or_default(),
            capitalize(self.faction().unwrap_or_default()),
            capitalize(self.get("class").unwrap_or_default()),
            self.realm().unwrap_or_default(),
            self.battle_group().unwrap_or_default(),
        )
    }

    fn required(&self, attribute: &str) -> ArmoryResult<&str> {
        self.get(attribute).ok_or_else(|| ArmoryError::MissingAttribute {
            element: CHARACTER_PATH[CHARACTER_PATH.len() - 1].to_string(),
            attribute: attribute.to_string(),
        })
    }
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
