use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::integration::common::{setup_panicking_app, setup_test_app, setup_unreachable_app};

async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn root_returns_service_info() {
    let (status, json) = get_json(setup_test_app().await, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["service"], "Podium Web Scraper API");
    assert_eq!(json["status"], "running");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn teams_principal_lists_teams() {
    let (status, json) = get_json(setup_test_app().await, "/teams-principal").await;

    assert_eq!(status, StatusCode::OK);
    let teams = json["teams"].as_array().unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0]["id"], "12");
    assert_eq!(teams[0]["name"], "Les Hiboux");
    assert_eq!(teams[1]["id"], "13");
}

#[tokio::test]
async fn team_details_returns_members_and_selected_challenges() {
    let (status, json) = get_json(setup_test_app().await, "/team/12").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Les Hiboux");
    assert_eq!(json["members"], serde_json::json!(["Alice", "Bob"]));
    assert_eq!(json["selectedchall"][1]["id"], "494");
    assert_eq!(json["selectedchall"][1]["name"], "Chat'bruti");
}

#[tokio::test]
async fn team_page_without_panel_returns_404() {
    let (status, json) = get_json(setup_test_app().await, "/team/13").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "not_found");
    assert_eq!(
        json["message"],
        "Team not found or failed to scrape: Panel not found"
    );
    assert_eq!(json["context"]["team_id"], "13");
}

#[tokio::test]
async fn unknown_team_returns_404() {
    let (status, json) = get_json(setup_test_app().await, "/team/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json["message"],
        "Team not found or failed to scrape: Failed to fetch page"
    );
    assert!(json["context"]["cause"].as_str().unwrap().contains("404"));
}

#[tokio::test]
async fn challenges_lists_catalogue() {
    let (status, json) = get_json(setup_test_app().await, "/challenges").await;

    assert_eq!(status, StatusCode::OK);
    let challenges = json["challenges"].as_array().unwrap();
    assert_eq!(challenges.len(), 2);

    assert_eq!(challenges[0]["id"], "494");
    assert_eq!(challenges[0]["name"], "Chat'bruti");
    assert_eq!(challenges[0]["category"], "Chatbot");
    assert_eq!(challenges[0]["thumbnail"], "/uploads/chat.png");
    assert_eq!(challenges[0]["participants"], 42);

    assert!(challenges[1]["category"].is_null());
    assert!(challenges[1]["thumbnail"].is_null());
    assert_eq!(challenges[1]["participants"], 0);
}

#[tokio::test]
async fn challenge_details_uses_camel_case_keys() {
    let (status, json) = get_json(setup_test_app().await, "/challenge/494").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");
    assert_eq!(json["name"], "Chat'bruti");
    assert_eq!(json["organizer"], "Acme Corp");
    assert_eq!(json["logo"], "/uploads/logo-acme.png");
    assert_eq!(json["theme"], "Intelligence artificielle");
    assert_eq!(
        json["expectedElements"],
        serde_json::json!(["Une démo", "Le code source"])
    );
    assert_eq!(json["submissionMode"], "Lien vers un dépôt git");
    assert_eq!(json["teams"][0]["id"], "12");
}

#[tokio::test]
async fn unknown_challenge_returns_404() {
    let (status, json) = get_json(setup_test_app().await, "/challenge/1").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["context"]["challenge_id"], "1");
}

#[tokio::test]
async fn unreachable_site_fails_listings_with_500() {
    let (status, json) = get_json(setup_unreachable_app().await, "/teams-principal").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "scrape_failed");
    assert_eq!(json["message"], "Failed to scrape teams: Failed to fetch page");

    let (status, json) = get_json(setup_unreachable_app().await, "/challenges").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json["message"],
        "Failed to scrape challenges: Failed to fetch page"
    );
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (status, json) = get_json(setup_test_app().await, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["info"]["title"], "Podium Web Scraper API");
    assert!(json["paths"]["/team/{team_id}"].is_object());
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = setup_test_app()
        .await
        .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn panicking_handler_returns_500_json() {
    let (status, json) = get_json(setup_panicking_app().await, "/explode").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "internal_error");
    assert_eq!(json["message"], "Internal server error: handler exploded");
    assert!(json.get("teams").is_none());
}

#[tokio::test]
async fn regular_routes_still_served_next_to_extra_routes() {
    let (status, json) = get_json(setup_panicking_app().await, "/teams-principal").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["teams"].as_array().unwrap().len(), 2);
}
