use podium_core::config::ScraperConfig;
use podium_core::error::AppError;
use podium_core::retry::RetryingFetcher;
use podium_core::traits::Fetcher;
use podium_core::{ChallengeDetail, ChallengeList, ScrapeResult, TeamDetail, TeamList};
use tracing::instrument;

use crate::document::Document;
use crate::extract;
use crate::fetcher::ReqwestFetcher;
use crate::site::SiteUrls;

/// The production fetcher stack: reqwest behind the retry policy.
pub type DefaultFetcher = RetryingFetcher<ReqwestFetcher>;

/// Scrapes nuitdelinfo.com pages: fetch → parse → extract → envelope.
///
/// Generic over the [`Fetcher`] so tests can run it against canned HTML.
/// Holds no per-request state; build one per request or share a clone.
#[derive(Clone)]
pub struct NuitScraper<F> {
    fetcher: F,
    urls: SiteUrls,
}

impl NuitScraper<DefaultFetcher> {
    /// Build the reqwest + retry stack described by `config`.
    pub fn from_config(config: &ScraperConfig) -> Result<Self, AppError> {
        let policy = config.retry_policy();
        tracing::debug!(
            attempts = policy.max_retries,
            timeout_secs = config.timeout.as_secs(),
            worst_case_backoff_ms = %policy.total_backoff().as_millis(),
            "Building scraper"
        );

        let fetcher = RetryingFetcher::new(ReqwestFetcher::from_config(config)?, policy);
        Ok(Self::new(fetcher, SiteUrls::from_config(config)?))
    }
}

impl<F: Fetcher> NuitScraper<F> {
    pub fn new(fetcher: F, urls: SiteUrls) -> Self {
        Self { fetcher, urls }
    }

    /// Teams registered on the challenge page at `url`.
    #[instrument(skip(self))]
    pub async fn scrape_teams(&self, url: &str) -> ScrapeResult<TeamList> {
        let result = self
            .scrape_page(url, extract::extract_team_list)
            .await
            .with_context("url", url);
        if let Some(total) = result.total() {
            tracing::info!(total, "Scraped teams");
        }
        result
    }

    /// Teams of the configured principal challenge.
    pub async fn scrape_principal_teams(&self) -> ScrapeResult<TeamList> {
        let url = self.urls.principal_challenge();
        self.scrape_teams(&url).await
    }

    #[instrument(skip(self))]
    pub async fn scrape_team_details(&self, team_id: &str) -> ScrapeResult<TeamDetail> {
        let url = self.urls.team(team_id);
        let result = self
            .scrape_page(&url, extract::extract_team_detail)
            .await
            .with_context("team_id", team_id);
        if let ScrapeResult::Success { payload, .. } = &result {
            tracing::info!(
                members = payload.members.len(),
                challenges = payload.selected_challenges.len(),
                "Scraped team"
            );
        }
        result
    }

    #[instrument(skip(self))]
    pub async fn scrape_challenges(&self) -> ScrapeResult<ChallengeList> {
        let url = self.urls.challenge_list();
        let result = self
            .scrape_page(&url, extract::extract_challenge_list)
            .await
            .with_context("url", url.as_str());
        if let Some(total) = result.total() {
            tracing::info!(total, "Scraped challenges");
        }
        result
    }

    #[instrument(skip(self))]
    pub async fn scrape_challenge_details(&self, challenge_id: &str) -> ScrapeResult<ChallengeDetail> {
        let url = self.urls.challenge(challenge_id);
        let result = self
            .scrape_page(&url, extract::extract_challenge_detail)
            .await
            .with_context("challenge_id", challenge_id);
        if let ScrapeResult::Success { payload, .. } = &result {
            tracing::info!(
                teams = payload.teams.len(),
                named = payload.name.is_some(),
                "Scraped challenge"
            );
        }
        result
    }

    /// Fetch `url` and run `extract` over the parsed page.
    ///
    /// A fetch error becomes a `"Failed to fetch page"` failure carrying the
    /// URL and the cause. The parsed document is dropped before returning, so
    /// it never lives across an await point.
    async fn scrape_page<T>(
        &self,
        url: &str,
        extract: fn(&Document) -> ScrapeResult<T>,
    ) -> ScrapeResult<T> {
        let html = match self.fetcher.fetch(url).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(%url, error = %e, "Page unavailable");
                return ScrapeResult::failure("Failed to fetch page")
                    .with_context("url", url)
                    .with_context("cause", e.to_string());
            }
        };

        let document = Document::parse(&html);
        let result = extract(&document);
        if let ScrapeResult::Failure(failure) = &result {
            tracing::warn!(%url, error = %failure, "Page structure not recognised");
        }
        result
    }
}
