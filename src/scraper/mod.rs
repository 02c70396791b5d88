mod fetcher;
mod traits;

pub use fetcher::FetcherImpl;
pub use traits::Scraper;
