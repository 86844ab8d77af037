pub mod config;
pub mod requests;
pub mod scraping_context;
pub mod spreadsheet;

mod detail_scraper;
mod handout;
mod handout_scraper;
mod listing_scraper;
mod text_manipulators;

pub use detail_scraper::parse_detail;
pub use handout::{HandoutRecord, HandoutStub};
pub use handout_scraper::HandoutScraper;
pub use listing_scraper::{ListingParser, parse_listing};
pub use requests::{PageSource, RequestClient};
pub use scraping_context::ScrapingContext;
pub use text_manipulators::resolve_link;
