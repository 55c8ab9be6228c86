use reqwest::Client;
use serde_json::{json, Value};

mod common;
use common::utils::{spawn_odds_app, ODDS_API_HOST, TEST_API_KEY};

#[tokio::test]
async fn sports_are_relayed_verbatim_with_api_headers() {
    let app = spawn_odds_app().await;
    let sports = json!([
        { "id": 1, "name": "Soccer", "has_offerings": true },
        { "id": 3, "name": "Basketball", "has_offerings": true }
    ]);
    app.upstream.respond("/sports", sports.clone());

    let response = Client::new()
        .get(&format!("{}/sports", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, sports);

    let requests = app.upstream.requests_to("/sports");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].api_key.as_deref(), Some(TEST_API_KEY));
    assert_eq!(requests[0].api_host.as_deref(), Some(ODDS_API_HOST));
    assert!(requests[0].query.is_empty());
}

#[tokio::test]
async fn markets_default_to_prematch_and_omit_league_filter() {
    let app = spawn_odds_app().await;
    app.upstream.respond("/markets", json!({ "sport_id": 3, "events": [] }));

    let response = Client::new()
        .get(&format!("{}/markets/3", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let request = &app.upstream.requests_to("/markets")[0];
    assert_eq!(request.query.get("sport_id").map(String::as_str), Some("3"));
    assert_eq!(request.query.get("event_type").map(String::as_str), Some("prematch"));
    assert_eq!(request.query.get("is_have_odds").map(String::as_str), Some("true"));
    assert!(!request.query.contains_key("league_ids"));
}

#[tokio::test]
async fn markets_forward_supplied_filters_verbatim() {
    let app = spawn_odds_app().await;
    app.upstream.respond("/markets", json!({ "sport_id": 1, "events": [] }));

    let response = Client::new()
        .get(&format!("{}/markets/1?event_type=live&league_ids=1980", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let request = &app.upstream.requests_to("/markets")[0];
    assert_eq!(request.query.get("event_type").map(String::as_str), Some("live"));
    assert_eq!(request.query.get("league_ids").map(String::as_str), Some("1980"));
}

#[tokio::test]
async fn leagues_pass_sport_id_upstream() {
    let app = spawn_odds_app().await;
    let leagues = json!({ "leagues": [{ "id": 487, "name": "NBA" }] });
    app.upstream.respond("/leagues", leagues.clone());

    let response = Client::new()
        .get(&format!("{}/leagues/3", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, leagues);
    let request = &app.upstream.requests_to("/leagues")[0];
    assert_eq!(request.query.get("sport_id").map(String::as_str), Some("3"));
}

#[tokio::test]
async fn non_integer_sport_id_is_rejected_without_upstream_call() {
    let app = spawn_odds_app().await;

    let response = Client::new()
        .get(&format!("{}/leagues/soccer", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_client_error());
    assert!(app.upstream.requests().is_empty());
}

#[tokio::test]
async fn upstream_error_status_is_relayed() {
    let app = spawn_odds_app().await;
    let error = json!({ "message": "You are not subscribed to this API." });
    app.upstream.respond_with_status("/sports", 403, error.clone());

    let response = Client::new()
        .get(&format!("{}/sports", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 403);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, error);
}

#[tokio::test]
async fn upstream_error_on_event_details_stores_nothing() {
    // Lazy pool: the handler must not reach the database for error answers
    let app = spawn_odds_app().await;
    app.upstream.respond_with_status("/details", 429, json!({ "message": "Too many requests" }));

    let response = Client::new()
        .get(&format!("{}/event/12345", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 429);
}
