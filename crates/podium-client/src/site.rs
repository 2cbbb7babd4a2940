use podium_core::config::ScraperConfig;
use podium_core::error::AppError;
use url::Url;

/// Page addresses on the scraped site.
#[derive(Debug, Clone)]
pub struct SiteUrls {
    base: Url,
    principal_challenge: String,
}

impl SiteUrls {
    pub fn new(base: Url, principal_challenge: impl Into<String>) -> Result<Self, AppError> {
        if base.cannot_be_a_base() {
            return Err(AppError::ConfigError(format!(
                "Base URL '{base}' cannot carry a path"
            )));
        }
        Ok(Self {
            base,
            principal_challenge: principal_challenge.into(),
        })
    }

    pub fn from_config(config: &ScraperConfig) -> Result<Self, AppError> {
        Self::new(config.base_url.clone(), config.principal_challenge.clone())
    }

    /// `/inscription/defis/{id}`: registration page of a challenge, listing
    /// its teams, and its detail page.
    pub fn challenge(&self, challenge_id: &str) -> String {
        self.page(&["inscription", "defis", challenge_id])
    }

    /// Registration page of the challenge behind `/teams-principal`.
    pub fn principal_challenge(&self) -> String {
        self.challenge(&self.principal_challenge)
    }

    /// `/inscription/equipes/{id}`
    pub fn team(&self, team_id: &str) -> String {
        self.page(&["inscription", "equipes", team_id])
    }

    /// `/inscription/defis/liste`
    pub fn challenge_list(&self) -> String {
        self.page(&["inscription", "defis", "liste"])
    }

    fn page(&self, segments: &[&str]) -> String {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.to_string()
    }
}

impl Default for SiteUrls {
    fn default() -> Self {
        let config = ScraperConfig::default();
        Self {
            base: config.base_url,
            principal_challenge: config.principal_challenge,
        }
    }
}
