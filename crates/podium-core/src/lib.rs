pub mod config;
pub mod error;
pub mod models;
pub mod retry;
#[cfg(any(test, feature = "testutil"))]
pub mod testutil;
pub mod traits;

pub use config::ScraperConfig;
pub use error::AppError;
pub use models::{
    ChallengeDetail, ChallengeLink, ChallengeList, ChallengeSummary, ScrapeFailure, ScrapeResult,
    Team, TeamDetail, TeamList,
};
pub use retry::{RetryPolicy, RetryingFetcher};
pub use traits::Fetcher;
