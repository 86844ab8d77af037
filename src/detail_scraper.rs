use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::text_manipulators::extract_text;

static DOWNLOAD_MARKER_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a[download][href], a.resources-single__download[href]")
        .expect("download marker selector is valid")
});
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("anchor selector is valid"));

const DOWNLOAD_LABEL: &str = "download";

/// Pulls the downloadable resource link out of a handout's detail page.
///
/// An explicitly marked download anchor wins; otherwise the first anchor
/// labelled "Download" is used. Returns an empty string when neither exists.
pub fn parse_detail(html: &str) -> String {
    let document = Html::parse_document(html);

    let marked = document.select(&DOWNLOAD_MARKER_SELECTOR).next();
    let labelled = || {
        document
            .select(&ANCHOR_SELECTOR)
            .find(|anchor| extract_text(*anchor).trim().eq_ignore_ascii_case(DOWNLOAD_LABEL))
    };

    match marked.or_else(labelled).and_then(|anchor| anchor.value().attr("href")) {
        Some(href) => href.trim().to_string(),
        None => {
            log::debug!("no download link on detail page");
            String::new()
        }
    }
}
