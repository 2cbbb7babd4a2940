use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::AppError;

/// A team registered on a challenge page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    /// Last path segment of the team link (e.g. `/inscription/equipes/42` → `"42"`).
    pub id: Option<String>,
    pub name: String,
}

/// A challenge selected by a team, as linked from the team page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChallengeLink {
    pub id: Option<String>,
    pub name: String,
}

/// Details of a single team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamDetail {
    pub name: Option<String>,
    pub members: Vec<String>,
    #[serde(rename = "selectedchall")]
    pub selected_challenges: Vec<ChallengeLink>,
}

/// One entry of the challenge catalogue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChallengeSummary {
    pub id: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
    /// Registered participants; 0 when the count is missing or unparsable.
    pub participants: i64,
}

/// Details of a single challenge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeDetail {
    pub name: Option<String>,
    pub organizer: Option<String>,
    pub theme: Option<String>,
    pub prize: Option<String>,
    pub description: Option<String>,
    /// `None` when the page has no "Elements attendus" section, which is
    /// distinct from a section without items.
    pub expected_elements: Option<Vec<String>>,
    pub submission_mode: Option<String>,
    pub logo: Option<String>,
    pub teams: Vec<Team>,
}

/// Payload of a team-list scrape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamList {
    pub teams: Vec<Team>,
}

/// Payload of a challenge-list scrape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChallengeList {
    pub challenges: Vec<ChallengeSummary>,
}

// ---------------------------------------------------------------------------
// Result envelope
// ---------------------------------------------------------------------------

/// Why a scrape did not produce a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeFailure {
    pub message: String,
    /// Diagnostic key/value pairs (URL, identifier, underlying cause).
    pub context: BTreeMap<String, String>,
}

impl fmt::Display for ScrapeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of one scrape: either a payload or a diagnosed failure, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeResult<T> {
    Success { payload: T, total: Option<usize> },
    Failure(ScrapeFailure),
}

impl<T> ScrapeResult<T> {
    pub fn success(payload: T) -> Self {
        Self::Success {
            payload,
            total: None,
        }
    }

    pub fn success_with_total(payload: T, total: usize) -> Self {
        Self::Success {
            payload,
            total: Some(total),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(ScrapeFailure {
            message: message.into(),
            context: BTreeMap::new(),
        })
    }

    /// Attach a diagnostic entry. No-op on success.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Failure(failure) = &mut self {
            failure.context.insert(key.into(), value.into());
        }
        self
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn total(&self) -> Option<usize> {
        match self {
            Self::Success { total, .. } => *total,
            Self::Failure(_) => None,
        }
    }

    pub fn into_result(self) -> Result<T, ScrapeFailure> {
        match self {
            Self::Success { payload, .. } => Ok(payload),
            Self::Failure(failure) => Err(failure),
        }
    }
}

impl<T: Serialize> ScrapeResult<T> {
    /// Render the result as a flat JSON object.
    ///
    /// Success: the payload's fields plus `total` (when known) and
    /// `"status": "success"`. Failure: `error` plus the context entries.
    /// A payload that does not serialize to an object is nested under `data`.
    pub fn to_envelope(&self) -> Result<serde_json::Value, AppError> {
        let mut object = serde_json::Map::new();
        match self {
            Self::Success { payload, total } => {
                match serde_json::to_value(payload)? {
                    serde_json::Value::Object(fields) => object.extend(fields),
                    other => {
                        object.insert("data".into(), other);
                    }
                }
                if let Some(total) = total {
                    object.insert("total".into(), (*total).into());
                }
                object.insert("status".into(), "success".into());
            }
            Self::Failure(failure) => {
                object.insert("error".into(), failure.message.clone().into());
                for (key, value) in &failure.context {
                    object.insert(key.clone(), value.clone().into());
                }
            }
        }
        Ok(serde_json::Value::Object(object))
    }
}
