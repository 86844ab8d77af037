use crate::{
    detail_scraper::parse_detail,
    handout::HandoutRecord,
    listing_scraper::parse_listing,
    requests::PageSource,
    text_manipulators::resolve_link,
};

/// Crawls the listing page and then every handout's detail page, one at a time.
pub struct HandoutScraper<'a, S> {
    listing_url: String,
    source: &'a S,
}

impl<'a, S: PageSource> HandoutScraper<'a, S> {
    pub fn new(source: &'a S, listing_url: impl Into<String>) -> Self {
        Self {
            listing_url: listing_url.into(),
            source,
        }
    }

    pub async fn scrape(&self) -> Vec<HandoutRecord> {
        println!("*** FETCHING ALL HANDOUTS ***");
        let Some(listing_html) = self.source.fetch_page(&self.listing_url).await else {
            log::warn!("listing page {} unavailable", self.listing_url);
            return vec![];
        };

        println!("Fetching Handout: page 1...");
        let stubs = parse_listing(&listing_html);
        log::info!("{} handouts listed on {}", stubs.len(), self.listing_url);

        let mut handouts = Vec::with_capacity(stubs.len());
        for stub in stubs {
            let mut handout = HandoutRecord::from(stub);
            let detail_url = resolve_link(&self.listing_url, &handout.url);
            match self.source.fetch_page(&detail_url).await {
                Some(detail_html) => handout.resource_link = parse_detail(&detail_html),
                None => log::debug!("no detail page for {:?}", handout.title),
            }
            handouts.push(handout);
        }
        handouts
    }
}
