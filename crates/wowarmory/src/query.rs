//! Character lookups and their query-string encoding.

/// Realm used when the caller does not name one.
pub const DEFAULT_REALM: &str = "hellfire";

/// Character looked up when the caller does not name one.
pub const DEFAULT_CHARACTER: &str = "xoq";

/// A (realm, character) pair identifying one character sheet.
///
/// Both parts are free-form and passed through verbatim apart from URL
/// encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterQuery {
    pub realm: String,
    pub name: String,
}

impl CharacterQuery {
    pub fn new(realm: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            realm: realm.into(),
            name: name.into(),
        }
    }

    /// Encode as `r=<realm>&n=<name>` using form encoding (spaces become `+`).
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("r", &self.realm)
            .append_pair("n", &self.name)
            .finish()
    }
}

impl Default for CharacterQuery {
    fn default() -> Self {
        Self::new(DEFAULT_REALM, DEFAULT_CHARACTER)
    }
}
