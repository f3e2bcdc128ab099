//! Error taxonomy shared by the armory client and the XML extractors.

/// All errors that can occur while talking to the armory.
#[derive(thiserror::Error, Debug)]
pub enum ArmoryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("XML parse error: {0}")]
    Xml(String),

    /// The fixed element path was not found. Carries the path up to and
    /// including the first missing segment.
    #[error("Element not found: {0}")]
    MissingElement(String),

    #[error("Attribute '{attribute}' missing on <{element}>")]
    MissingAttribute { element: String, attribute: String },
}

pub type ArmoryResult<T> = Result<T, ArmoryError>;
