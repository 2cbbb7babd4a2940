use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tokio::net::TcpListener;

use podium_core::ScraperConfig;
use podium_server::routes;
use podium_server::state::AppState;

pub const TEAMS_PAGE: &str = r#"
<html><body>
  <div class="panel panel-info">
    <div class="panel-heading">Équipes inscrites</div>
    <div class="list-group">
      <a class="list-group-item" href="/inscription/equipes/12">Les Hiboux</a>
      <a class="list-group-item" href="/inscription/equipes/13">Nocturnes</a>
    </div>
  </div>
</body></html>"#;

pub const TEAM_PAGE: &str = r#"
<html><body>
  <div class="panel panel-info">
    <div class="panel-heading"><h1>Les Hiboux</h1></div>
    <div class="panel-body">
      <ul class="list-group">
        <li class="list-group-item">Alice</li>
        <li class="list-group-item">Bob</li>
      </ul>
      <div class="list-group">
        <a class="list-group-item" href="/inscription/defis/174">Défi de la nuit</a>
        <a class="list-group-item" href="/inscription/defis/494">Chat'bruti</a>
      </div>
    </div>
  </div>
</body></html>"#;

pub const CHALLENGE_LIST_PAGE: &str = r#"
<html><body>
  <div class="defiList">
    <div class="defi">
      <div class="thumbnail"><img src="/uploads/chat.png"></div>
      <div class="title"><a href="/inscription/defis/494">Chat'bruti</a> Chatbot</div>
      <div class="participants"><div class="count"> 42 </div></div>
    </div>
    <div class="defi">
      <div class="title"><a href="/inscription/defis/500">Accessibilité</a></div>
      <div class="participants"><div class="count">n/a</div></div>
    </div>
  </div>
</body></html>"#;

pub const CHALLENGE_PAGE: &str = r#"
<html><body>
  <div class="panel panel-info"><img src="/uploads/logo-acme.png"></div>
  <div class="panel panel-info"><h1>Proposé par <span>Acme Corp</span></h1></div>
  <div class="panel panel-info">
    <h2>Le défi: Chat'bruti</h2>
    <div class="alert alert-info"><h4>Thème</h4><h4>Intelligence artificielle</h4></div>
    <div class="alert alert-warning"><h4>Prix</h4><h4>Un casque VR</h4></div>
    <p>Créez le chatbot le plus inutile possible.</p>
    <h2>Elements attendus</h2>
    <ul><li>Une démo</li><li>Le code source</li></ul>
    <h2>Mode de restitution</h2>
    <p>Lien vers un dépôt git</p>
  </div>
  <div class="panel panel-info">
    <div class="list-group">
      <a class="list-group-item" href="/inscription/equipes/12">Les Hiboux</a>
    </div>
  </div>
</body></html>"#;

/// Serve `router` on an ephemeral local port.
async fn spawn(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake site");
    let addr = listener.local_addr().expect("Failed to read fake site address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });
    addr
}

async fn challenge_page(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "174" => Html(TEAMS_PAGE).into_response(),
        "494" => Html(CHALLENGE_PAGE).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn team_page(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "12" => Html(TEAM_PAGE).into_response(),
        "13" => Html("<html><body><p>Équipe supprimée</p></body></html>").into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

/// A stand-in for nuitdelinfo.com serving the fixture pages above.
pub async fn spawn_fake_site() -> SocketAddr {
    let site = Router::new()
        .route(
            "/inscription/defis/liste",
            get(|| async { Html(CHALLENGE_LIST_PAGE) }),
        )
        .route("/inscription/defis/{id}", get(challenge_page))
        .route("/inscription/equipes/{id}", get(team_page));
    spawn(site).await
}

/// A single-attempt scraper configuration aimed at `base_url`.
pub fn scraper_config(base_url: String) -> ScraperConfig {
    ScraperConfig::from_lookup(move |key| match key {
        "PODIUM_BASE_URL" => Some(base_url.clone()),
        "MAX_RETRIES" => Some("1".to_string()),
        "REQUEST_TIMEOUT" => Some("5".to_string()),
        _ => None,
    })
    .expect("Invalid test configuration")
}

/// The API router backed by the fake site.
pub async fn setup_test_app() -> Router {
    let addr = spawn_fake_site().await;
    routes::router(Arc::new(AppState::new(scraper_config(format!(
        "http://{addr}"
    )))))
}

/// The API router aimed at a port nothing listens on.
pub async fn setup_unreachable_app() -> Router {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to reserve port");
    let addr = listener.local_addr().expect("Failed to read address");
    drop(listener);

    routes::router(Arc::new(AppState::new(scraper_config(format!(
        "http://{addr}"
    )))))
}

async fn exploding_handler() -> &'static str {
    panic!("handler exploded")
}

/// The API router with an extra `/explode` route whose handler panics.
pub async fn setup_panicking_app() -> Router {
    let addr = spawn_fake_site().await;
    let extra = Router::new().route("/explode", get(exploding_handler));
    routes::router_with(
        extra,
        Arc::new(AppState::new(scraper_config(format!("http://{addr}")))),
    )
}
