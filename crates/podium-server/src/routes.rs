use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::dto::{
    ChallengeDetailResponse, ChallengeListResponse, ChallengeSummaryResponse,
    ServiceInfoResponse, TeamDetailResponse, TeamListResponse, TeamResponse,
};
use crate::error::{ApiError, handle_panic};
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub const SERVICE_NAME: &str = "Podium Web Scraper API";

/// Build the full router with all routes and middleware.
pub fn router(state: Arc<AppState>) -> Router {
    router_with(Router::new(), state)
}

/// Same as [`router`], with `extra` routes mounted under the same middleware.
pub fn router_with(extra: Router<Arc<AppState>>, state: Arc<AppState>) -> Router {
    extra
        .route("/", get(root))
        .route("/teams-principal", get(teams_principal))
        .route("/team/{team_id}", get(team_details))
        .route("/challenges", get(challenges))
        .route("/challenge/{challenge_id}", get(challenge_details))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = ServiceInfoResponse),
    ),
    tag = "system"
)]
pub async fn root() -> impl IntoResponse {
    axum::Json(ServiceInfoResponse {
        service: SERVICE_NAME.to_string(),
        status: "running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ---------------------------------------------------------------------------
// Teams
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/teams-principal",
    responses(
        (status = 200, description = "Teams of the principal challenge", body = TeamListResponse),
        (status = 500, description = "Page unavailable or not recognised", body = crate::dto::ErrorResponse),
    ),
    tag = "teams"
)]
pub async fn teams_principal(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!("Fetching teams of the principal challenge");

    let list = state
        .scraper()?
        .scrape_principal_teams()
        .await
        .into_result()
        .map_err(|f| ApiError::scrape_failed("Failed to scrape teams", f))?;

    tracing::info!(total = list.teams.len(), "Successfully scraped teams");

    Ok(axum::Json(TeamListResponse {
        teams: list.teams.into_iter().map(TeamResponse::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/team/{team_id}",
    params(
        ("team_id" = String, Path, description = "Team identifier")
    ),
    responses(
        (status = 200, description = "Team members and selected challenges", body = TeamDetailResponse),
        (status = 404, description = "Team not found or page not recognised", body = crate::dto::ErrorResponse),
    ),
    tag = "teams"
)]
pub async fn team_details(
    State(state): State<Arc<AppState>>,
    Path(team_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!(%team_id, "Fetching team details");

    let detail = state
        .scraper()?
        .scrape_team_details(&team_id)
        .await
        .into_result()
        .map_err(|f| ApiError::not_found("Team not found or failed to scrape", f))?;

    Ok(axum::Json(TeamDetailResponse::from(detail)))
}

// ---------------------------------------------------------------------------
// Challenges
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/challenges",
    responses(
        (status = 200, description = "Challenge catalogue", body = ChallengeListResponse),
        (status = 500, description = "Page unavailable or not recognised", body = crate::dto::ErrorResponse),
    ),
    tag = "challenges"
)]
pub async fn challenges(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!("Fetching challenge catalogue");

    let list = state
        .scraper()?
        .scrape_challenges()
        .await
        .into_result()
        .map_err(|f| ApiError::scrape_failed("Failed to scrape challenges", f))?;

    tracing::info!(total = list.challenges.len(), "Successfully scraped challenges");

    Ok(axum::Json(ChallengeListResponse {
        challenges: list
            .challenges
            .into_iter()
            .map(ChallengeSummaryResponse::from)
            .collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/challenge/{challenge_id}",
    params(
        ("challenge_id" = String, Path, description = "Challenge identifier")
    ),
    responses(
        (status = 200, description = "Challenge details", body = ChallengeDetailResponse),
        (status = 404, description = "Challenge page unavailable", body = crate::dto::ErrorResponse),
    ),
    tag = "challenges"
)]
pub async fn challenge_details(
    State(state): State<Arc<AppState>>,
    Path(challenge_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!(%challenge_id, "Fetching challenge details");

    let detail = state
        .scraper()?
        .scrape_challenge_details(&challenge_id)
        .await
        .into_result()
        .map_err(|f| ApiError::not_found("Challenge not found or failed to scrape", f))?;

    Ok(axum::Json(ChallengeDetailResponse::from(detail)))
}
