//! wowarmory — client library for the World of Warcraft Armory: character
//! sheets and realm status, fetched over HTTP and read out of XML.

pub mod character;
pub mod client;
pub mod query;
pub mod realm;
pub mod types;
pub mod xml;

pub use character::CharacterInfo;
pub use client::{ArmoryClient, ClientOptions};
pub use query::CharacterQuery;
pub use realm::{filter_realms, parse_status_feed, Realm};
pub use types::*;
