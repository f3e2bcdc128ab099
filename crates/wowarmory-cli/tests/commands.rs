//! Command-level tests: mocked armory in, exact terminal output out.

use serde_json::Value;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wowarmory::{ArmoryClient, CharacterQuery, ClientOptions};
use wowarmory_cli::commands;
use wowarmory_cli::output::{Output, Styled};

// ─────────────────────── helpers ───────────────────────

const XOQ_SHEET: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<page lang="en_gb">
  <characterInfo>
    <character battleGroup="Reckoning" class="Warlock" faction="Horde" gender="Male"
               guildName="Dread Pact" level="70" name="Xoq" race="Undead" realm="Hellfire"/>
  </characterInfo>
</page>"#;

const STATUS_FEED: &str = r#"<?xml version="1.0"?>
<rss version="2.0"><channel>
  <item>
    <title>Hellfire</title>
    <category domain="status">Realm Up</category>
    <category domain="type">Normal</category>
    <category domain="queue">false</category>
    <category domain="language">en</category>
  </item>
  <item>
    <title>Ragnaros</title>
    <category domain="status">Realm Down</category>
    <category domain="type">PvP</category>
    <category domain="queue">true</category>
    <category domain="language">de</category>
  </item>
</channel></rss>"#;

async fn armory() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/character-sheet.xml"))
        .and(query_param("r", "hellfire"))
        .and(query_param("n", "xoq"))
        .respond_with(ResponseTemplate::new(200).set_body_string(XOQ_SHEET))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/en/serverstatus/index.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(STATUS_FEED))
        .mount(&server)
        .await;
    server
}

fn client_for(server: &MockServer) -> ArmoryClient {
    ArmoryClient::with_options(&ClientOptions {
        armory_url: server.uri(),
        status_url: format!("{}/en/serverstatus/index.xml", server.uri()),
        timeout: None,
    })
    .unwrap()
}

fn plain() -> Output {
    Output::text(Styled::plain())
}

// ─────────────────────── character ───────────────────────

#[tokio::test]
async fn test_default_lookup_prints_headline() {
    let server = armory().await;
    let mut buf = Vec::new();

    commands::character::run(
        &client_for(&server),
        &CharacterQuery::default(),
        false,
        &plain(),
        &mut buf,
    )
    .await
    .unwrap();

    assert_eq!(String::from_utf8(buf).unwrap(), "Xoq is a Warlock\n");
}

#[tokio::test]
async fn test_detail_prints_summary() {
    let server = armory().await;
    let mut buf = Vec::new();

    commands::character::run(
        &client_for(&server),
        &CharacterQuery::new("hellfire", "xoq"),
        true,
        &plain(),
        &mut buf,
    )
    .await
    .unwrap();

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "Xoq <Dread Pact> is a level 70 Male Undead Horde Warlock on Hellfire in battle group Reckoning.\n"
    );
}

#[tokio::test]
async fn test_character_json() {
    let server = armory().await;
    let mut buf = Vec::new();

    commands::character::run(
        &client_for(&server),
        &CharacterQuery::default(),
        false,
        &Output::json(),
        &mut buf,
    )
    .await
    .unwrap();

    let v: Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(v["name"], "Xoq");
    assert_eq!(v["class"], "Warlock");
    assert_eq!(v["level"], "70");
}

#[tokio::test]
async fn test_lookup_failure_carries_context() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/character-sheet.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<page/>"))
        .mount(&server)
        .await;
    let mut buf = Vec::new();

    let err = commands::character::run(
        &client_for(&server),
        &CharacterQuery::default(),
        false,
        &plain(),
        &mut buf,
    )
    .await
    .unwrap_err();

    let msg = format!("{err:#}");
    assert!(msg.contains("looking up 'xoq' on realm 'hellfire'"), "{msg}");
    assert!(msg.contains("page/characterInfo"), "{msg}");
    assert!(buf.is_empty());
}

// ─────────────────────── status ───────────────────────

#[tokio::test]
async fn test_status_all_realms() {
    let server = armory().await;
    let mut buf = Vec::new();

    commands::status::run(&client_for(&server), None, &plain(), &mut buf)
        .await
        .unwrap();

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "Status of all realms:\n\
         \tHellfire................(en) Normal is UP NoQueue\n\
         \tRagnaros................(de) PvP    is DOWN Queue\n"
    );
}

#[tokio::test]
async fn test_status_single_realm() {
    let server = armory().await;
    let mut buf = Vec::new();

    commands::status::run(&client_for(&server), Some("ragnaros"), &plain(), &mut buf)
        .await
        .unwrap();

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "Getting realm status for ragnaros.\n\
         \tRagnaros................(de) PvP    is DOWN Queue\n"
    );
}

#[tokio::test]
async fn test_status_no_match() {
    let server = armory().await;
    let mut buf = Vec::new();

    commands::status::run(&client_for(&server), Some("silvermoon"), &plain(), &mut buf)
        .await
        .unwrap();

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "Getting realm status for silvermoon.\nNo matching realms!\n"
    );
}

#[tokio::test]
async fn test_status_json() {
    let server = armory().await;
    let mut buf = Vec::new();

    commands::status::run(&client_for(&server), None, &Output::json(), &mut buf)
        .await
        .unwrap();

    let v: Value = serde_json::from_slice(&buf).unwrap();
    let realms = v.as_array().unwrap();
    assert_eq!(realms.len(), 2);
    assert_eq!(realms[0]["name"], "Hellfire");
    assert_eq!(realms[0]["up"], true);
    assert_eq!(realms[1]["type"], "PvP");
}

#[tokio::test]
async fn test_status_failure_prints_no_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/en/serverstatus/index.xml"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;
    let mut buf = Vec::new();

    let err = commands::status::run(&client_for(&server), None, &plain(), &mut buf)
        .await
        .unwrap_err();

    assert!(format!("{err:#}").contains("fetching realm status"));
    assert!(buf.is_empty());
}
