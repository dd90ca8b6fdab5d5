use crate::{SteamClient, SteamConfig};
use serde_json::{json, Value};
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SCHEMA: &str = "/ISteamUserStats/GetSchemaForGame/v0002/";
const PERCENTAGES: &str = "/ISteamUserStats/GetGlobalAchievementPercentagesForApp/v0002/";
const STORE_SEARCH: &str = "/api/storesearch/";

fn client_for(server: &MockServer) -> SteamClient {
    let _ = env_logger::builder().is_test(true).try_init();
    let base = Url::parse(&server.uri()).unwrap();
    SteamClient::new(
        SteamConfig::new("test-key")
            .with_api_url(base.clone())
            .with_store_url(base),
    )
}

fn store_item(kind: &str, id: u32) -> Value {
    json!({ "type": kind, "id": id, "name": format!("Title {}", id) })
}

async fn mount_json(server: &MockServer, at: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn search_keeps_apps_in_upstream_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STORE_SEARCH))
        .and(query_param("term", "portal"))
        .and(query_param("l", "english"))
        .and(query_param("cc", "US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 3,
            "items": [store_item("app", 620), store_item("sub", 7), store_item("app", 400)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let titles = client_for(&server).search_titles_by_name("portal").await;

    let ids: Vec<_> = titles.iter().map(|title| title.id()).collect();
    assert_eq!(ids, vec![620, 400]);
    assert_eq!(titles[0].name(), "Title 620");
}

#[tokio::test]
async fn search_only_considers_first_twenty_items() {
    let server = MockServer::start().await;
    let mut items: Vec<Value> = (1..=20).map(|id| store_item("bundle", id)).collect();
    items.extend((21..=30).map(|id| store_item("app", id)));
    mount_json(&server, STORE_SEARCH, 200, json!({ "items": items })).await;

    let titles = client_for(&server).search_titles_by_name("bundle").await;

    assert!(titles.is_empty());
}

#[tokio::test]
async fn search_caps_results() {
    let server = MockServer::start().await;
    let items: Vec<Value> = (1..=50).map(|id| store_item("app", id)).collect();
    mount_json(&server, STORE_SEARCH, 200, json!({ "items": items })).await;

    let titles = client_for(&server).search_titles_by_name("many").await;

    assert_eq!(titles.len(), 20);
    assert_eq!(titles.last().unwrap().id(), 20);
}

#[tokio::test]
async fn search_failures_yield_empty_list() {
    let server = MockServer::start().await;
    mount_json(&server, STORE_SEARCH, 503, json!({})).await;
    assert!(client_for(&server).search_titles_by_name("down").await.is_empty());

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STORE_SEARCH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;
    assert!(client_for(&server).search_titles_by_name("garbled").await.is_empty());
}

#[tokio::test]
async fn search_transport_error_yields_empty_list() {
    let unreachable = Url::parse("http://127.0.0.1:9").unwrap();
    let client = SteamClient::new(SteamConfig::new("k").with_store_url(unreachable));

    assert!(client.search_titles_by_name("anything").await.is_empty());
}

#[tokio::test]
async fn schema_request_carries_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SCHEMA))
        .and(query_param("key", "test-key"))
        .and(query_param("appid", "440"))
        .and(query_param("l", "english"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "game": { "gameName": "Team Fortress 2", "availableGameStats": {} }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let schema = client_for(&server).fetch_achievement_schema(440).await.unwrap();

    assert_eq!(schema.game_name().as_deref(), Some("Team Fortress 2"));
    assert!(schema.achievements().is_empty());
}

#[tokio::test]
async fn schema_not_found_cases() {
    for (status, body) in [
        (200, json!({})),
        (200, json!({ "game": {} })),
        (403, json!({ "game": { "gameName": "Forbidden" } })),
        (500, json!({})),
    ] {
        let server = MockServer::start().await;
        mount_json(&server, SCHEMA, status, body).await;

        assert!(client_for(&server).fetch_achievement_schema(1).await.is_none());
    }
}

#[tokio::test]
async fn percentages_failure_is_empty() {
    let server = MockServer::start().await;
    mount_json(&server, PERCENTAGES, 500, json!({})).await;

    assert!(client_for(&server)
        .fetch_global_unlock_percentages(10)
        .await
        .is_empty());
}

#[tokio::test]
async fn percentages_request_uses_gameid() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PERCENTAGES))
        .and(query_param("gameid", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "achievementpercentages": { "achievements": [{ "name": "A", "percent": 9.0 }] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let percentages = client_for(&server).fetch_global_unlock_percentages(10).await;

    assert_eq!(percentages.get("A"), Some(9.0));
}

#[tokio::test]
async fn build_set_merges_schema_and_percentages() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        SCHEMA,
        200,
        json!({
            "game": {
                "gameName": "Half-Life 2",
                "availableGameStats": {
                    "achievements": [
                        { "name": "HL2_HIT_CANCOP_WITHCAN", "displayName": "Defiant", "description": "Hit the trashcan cop", "icon": "i1", "icongray": "g1", "hidden": 0 },
                        { "name": "HL2_GET_CROWBAR", "displayName": "Trusty Hardware", "description": "Get the crowbar", "icon": "i2", "icongray": "g2", "hidden": 0 }
                    ]
                }
            }
        }),
    )
    .await;
    mount_json(
        &server,
        PERCENTAGES,
        200,
        json!({
            "achievementpercentages": {
                "achievements": [{ "name": "HL2_GET_CROWBAR", "percent": "87.5" }]
            }
        }),
    )
    .await;

    let set = client_for(&server).build_achievement_set(220).await.unwrap();

    assert_eq!(set.title_name(), "Half-Life 2");
    assert_eq!(set.achievements().len(), 2);
    assert_eq!(set.achievements()[0].unlock_percent(), None);
    assert_eq!(set.achievements()[1].unlock_percent(), Some(87.5));
    assert_eq!(set.achievements()[1].display_name(), "Trusty Hardware");
}

#[tokio::test]
async fn build_set_tolerates_percentage_outage() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        SCHEMA,
        200,
        json!({
            "game": {
                "gameName": "Lonely",
                "availableGameStats": { "achievements": [{ "name": "ONLY" }] }
            }
        }),
    )
    .await;
    mount_json(&server, PERCENTAGES, 502, json!({})).await;

    let set = client_for(&server).build_achievement_set(3).await.unwrap();

    assert_eq!(set.achievements().len(), 1);
    assert_eq!(set.achievements()[0].unlock_percent(), None);
}

#[tokio::test]
async fn build_set_without_achievements_skips_percentages() {
    let server = MockServer::start().await;
    mount_json(&server, SCHEMA, 200, json!({ "game": { "gameName": "Quiet" } })).await;
    Mock::given(method("GET"))
        .and(path(PERCENTAGES))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let set = client_for(&server).build_achievement_set(4).await.unwrap();

    assert_eq!(set.title_name(), "Quiet");
    assert!(set.achievements().is_empty());
}

#[tokio::test]
async fn build_set_unknown_title_is_none() {
    let server = MockServer::start().await;
    mount_json(&server, SCHEMA, 200, json!({ "game": {} })).await;

    assert!(client_for(&server).build_achievement_set(999).await.is_none());
}
