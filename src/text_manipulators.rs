use scraper::ElementRef;
use url::Url;

pub fn extract_text(node: ElementRef) -> String {
    node.text().collect::<String>()
}

/// Joins a possibly relative `href` onto the page it was found on.
/// Falls back to the raw `href` if either side isn't a usable URL.
pub fn resolve_link(base_url: &str, href: &str) -> String {
    match Url::parse(base_url).and_then(|base| base.join(href)) {
        Ok(url) => url.to_string(),
        Err(e) => {
            log::debug!("couldn't resolve {href} against {base_url}: {e}");
            href.to_string()
        }
    }
}
