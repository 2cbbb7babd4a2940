pub mod document;
pub mod extract;
pub mod fetcher;
pub mod service;
pub mod site;

pub use document::{Document, Node};
pub use fetcher::ReqwestFetcher;
pub use service::{DefaultFetcher, NuitScraper};
pub use site::SiteUrls;
