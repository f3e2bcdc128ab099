//! Async HTTP client for the armory, wrapping reqwest.
//!
//! Every request is a plain GET carrying a fixed `Accept` header and a
//! Firefox `User-Agent`; the armory only serves XML to browsers it knows.

use std::time::Duration;

use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::{debug, warn};
use url::Url;

use crate::character::CharacterInfo;
use crate::query::CharacterQuery;
use crate::realm::{self, Realm};
use crate::types::ArmoryResult;

/// Armory host. Plain HTTP on port 80.
pub const DEFAULT_ARMORY_URL: &str = "http://eu.wowarmory.com:80";

/// Realm status RSS feed.
pub const DEFAULT_STATUS_URL: &str = "http://www.wow-europe.com/en/serverstatus/index.xml";

/// Path of the character sheet document on the armory host.
pub const CHARACTER_SHEET_PATH: &str = "/character-sheet.xml";

/// `Accept` header sent with every request.
pub const ACCEPT_XML: &str = "application/xml, text/xml";

/// `User-Agent` sent with every request. Without it the armory answers in HTML.
pub const BROWSER_USER_AGENT: &str = "Firefox/2.0.0.1";

/// Endpoint and timeout settings for [`ArmoryClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    pub armory_url: String,
    pub status_url: String,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            armory_url: DEFAULT_ARMORY_URL.to_string(),
            status_url: DEFAULT_STATUS_URL.to_string(),
            timeout: None,
        }
    }
}

/// HTTP client for the armory and the realm status feed.
///
/// Idle connections are not pooled, so each socket is closed once its
/// response body has been read, and nothing outlives the client.
#[derive(Debug, Clone)]
pub struct ArmoryClient {
    client: reqwest::Client,
    armory_url: Url,
    status_url: Url,
}

impl ArmoryClient {
    /// Create a client against the default endpoints, with no timeout.
    pub fn new() -> ArmoryResult<Self> {
        Self::with_options(&ClientOptions::default())
    }

    pub fn with_options(options: &ClientOptions) -> ArmoryResult<Self> {
        let armory_url = Url::parse(&options.armory_url)?;
        let status_url = Url::parse(&options.status_url)?;

        let mut builder = reqwest::Client::builder().pool_max_idle_per_host(0);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            armory_url,
            status_url,
        })
    }

    /// Full character sheet URL for `query`.
    pub fn character_sheet_url(&self, query: &CharacterQuery) -> ArmoryResult<Url> {
        let mut url = self.armory_url.join(CHARACTER_SHEET_PATH)?;
        url.set_query(Some(&query.to_query_string()));
        Ok(url)
    }

    /// Fetch the raw character sheet document.
    pub async fn fetch_character_sheet(&self, query: &CharacterQuery) -> ArmoryResult<String> {
        let url = self.character_sheet_url(query)?;
        self.get_xml(url).await
    }

    /// Fetch a character sheet and extract its `<character/>` element.
    pub async fn fetch_character(&self, query: &CharacterQuery) -> ArmoryResult<CharacterInfo> {
        let body = self.fetch_character_sheet(query).await?;
        CharacterInfo::from_xml(&body)
    }

    /// Fetch the realm status feed and parse every realm in it.
    pub async fn fetch_realm_status(&self) -> ArmoryResult<Vec<Realm>> {
        let body = self.get_xml(self.status_url.clone()).await?;
        realm::parse_status_feed(&body)
    }

    /// GET `url` and return the body as text.
    ///
    /// The status code is not an error: a non-2xx answer is logged and its
    /// body handed to the XML layer like any other.
    async fn get_xml(&self, url: Url) -> ArmoryResult<String> {
        debug!(%url, "GET");

        let resp = self
            .client
            .get(url.clone())
            .header(ACCEPT, ACCEPT_XML)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%url, %status, "non-success status, parsing body anyway");
        }

        let body = resp.text().await?;
        debug!(%status, bytes = body.len(), "response read");
        Ok(body)
    }
}
