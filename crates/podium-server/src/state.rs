use podium_client::{DefaultFetcher, NuitScraper};
use podium_core::config::ScraperConfig;
use podium_core::error::AppError;

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
///
/// Only immutable configuration is shared; every request builds its own
/// scraper and HTTP client from it.
pub struct AppState {
    pub scraper_config: ScraperConfig,
}

impl AppState {
    pub fn new(scraper_config: ScraperConfig) -> Self {
        Self { scraper_config }
    }

    /// A fresh scraper for one request.
    pub fn scraper(&self) -> Result<NuitScraper<DefaultFetcher>, AppError> {
        NuitScraper::from_config(&self.scraper_config)
    }
}
