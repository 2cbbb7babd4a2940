use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Podium Web Scraper API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Teams and challenges of the Nuit de l'Info, scraped from nuitdelinfo.com."
    ),
    paths(
        crate::routes::root,
        crate::routes::teams_principal,
        crate::routes::team_details,
        crate::routes::challenges,
        crate::routes::challenge_details,
    ),
    components(schemas(
        crate::dto::TeamResponse,
        crate::dto::TeamListResponse,
        crate::dto::ChallengeLinkResponse,
        crate::dto::TeamDetailResponse,
        crate::dto::ChallengeSummaryResponse,
        crate::dto::ChallengeListResponse,
        crate::dto::ChallengeDetailResponse,
        crate::dto::ServiceInfoResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "teams", description = "Registered teams"),
        (name = "challenges", description = "Challenge catalogue and details"),
        (name = "system", description = "Service status"),
    )
)]
pub struct ApiDoc;
