/// A handout as listed on the listing page, before its detail page is visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandoutStub {
    pub title: String,
    pub url: String,
}

/// A handout enriched with the resource link found on its detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandoutRecord {
    pub title: String,
    pub url: String,
    // Empty when the detail page couldn't be fetched or had no download link.
    pub resource_link: String,
}

impl From<HandoutStub> for HandoutRecord {
    fn from(stub: HandoutStub) -> Self {
        Self {
            title: stub.title,
            url: stub.url,
            resource_link: String::new(),
        }
    }
}
