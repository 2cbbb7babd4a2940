use std::collections::BTreeMap;

use serde::Serialize;

use podium_core::models::{ChallengeDetail, ChallengeLink, ChallengeSummary, Team, TeamDetail};

// ---------------------------------------------------------------------------
// Teams
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct TeamResponse {
    /// Identifier taken from the team link, `null` when the link has no target.
    pub id: Option<String>,
    pub name: String,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self {
            id: team.id,
            name: team.name,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct TeamListResponse {
    pub teams: Vec<TeamResponse>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ChallengeLinkResponse {
    pub id: Option<String>,
    pub name: String,
}

impl From<ChallengeLink> for ChallengeLinkResponse {
    fn from(link: ChallengeLink) -> Self {
        Self {
            id: link.id,
            name: link.name,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct TeamDetailResponse {
    pub members: Vec<String>,
    pub selectedchall: Vec<ChallengeLinkResponse>,
    pub name: Option<String>,
}

impl From<TeamDetail> for TeamDetailResponse {
    fn from(detail: TeamDetail) -> Self {
        Self {
            members: detail.members,
            selectedchall: detail
                .selected_challenges
                .into_iter()
                .map(ChallengeLinkResponse::from)
                .collect(),
            name: detail.name,
        }
    }
}

// ---------------------------------------------------------------------------
// Challenges
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ChallengeSummaryResponse {
    pub id: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
    pub participants: i64,
}

impl From<ChallengeSummary> for ChallengeSummaryResponse {
    fn from(summary: ChallengeSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            category: summary.category,
            thumbnail: summary.thumbnail,
            participants: summary.participants,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ChallengeListResponse {
    pub challenges: Vec<ChallengeSummaryResponse>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeDetailResponse {
    pub name: Option<String>,
    pub organizer: Option<String>,
    pub theme: Option<String>,
    pub prize: Option<String>,
    pub description: Option<String>,
    /// `null` when the page has no "Elements attendus" section.
    pub expected_elements: Option<Vec<String>>,
    pub submission_mode: Option<String>,
    pub logo: Option<String>,
    pub teams: Vec<TeamResponse>,
    pub status: String,
}

impl From<ChallengeDetail> for ChallengeDetailResponse {
    fn from(detail: ChallengeDetail) -> Self {
        Self {
            name: detail.name,
            organizer: detail.organizer,
            theme: detail.theme,
            prize: detail.prize,
            description: detail.description,
            expected_elements: detail.expected_elements,
            submission_mode: detail.submission_mode,
            logo: detail.logo,
            teams: detail.teams.into_iter().map(TeamResponse::from).collect(),
            status: "success".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ServiceInfoResponse {
    pub service: String,
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    /// Diagnostic details (URL, identifier, underlying cause).
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub context: BTreeMap<String, String>,
}
