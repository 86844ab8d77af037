use ego_tree::iter::Edge;
use scraper::{Html, Node, node::Element};

use crate::handout::HandoutStub;

const TITLE_TAG: &str = "h4";
const TITLE_CLASS: &str = "resources-grid__content--title";

/// Walks the listing page as a stream of open/text/close events and pairs
/// each handout title heading with the anchor that preceded it.
#[derive(Debug, Default)]
pub struct ListingParser {
    handouts: Vec<HandoutStub>,
    title_flag: bool,
    current_url: Option<String>,
}

impl ListingParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, html: &str) {
        let document = Html::parse_document(html);
        for edge in document.tree.root().traverse() {
            match edge {
                Edge::Open(node) => match node.value() {
                    Node::Element(element) => self.handle_start_tag(element),
                    Node::Text(text) => self.handle_data(text),
                    _ => {}
                },
                Edge::Close(node) => {
                    if let Node::Element(element) = node.value() {
                        self.handle_end_tag(element);
                    }
                }
            }
        }
    }

    fn handle_start_tag(&mut self, element: &Element) {
        if element.name() == "a" {
            if let Some(href) = element.attr("href") {
                self.current_url = Some(href.to_string());
            }
        }

        if element.name() == TITLE_TAG && element.classes().any(|class| class == TITLE_CLASS) {
            self.title_flag = true;
        }
    }

    fn handle_data(&mut self, data: &str) {
        let title = data.trim();
        // Whitespace between tags isn't a title; keep waiting for real text.
        if !self.title_flag || title.is_empty() {
            return;
        }
        let Some(url) = self.current_url.take_if(|url| !url.is_empty()) else {
            return;
        };
        log::debug!("found handout {title:?} at {url}");
        self.handouts.push(HandoutStub {
            title: title.to_string(),
            url,
        });
        self.title_flag = false;
    }

    fn handle_end_tag(&mut self, element: &Element) {
        if element.name() == TITLE_TAG && self.title_flag {
            self.title_flag = false;
        }
    }

    pub fn into_handouts(self) -> Vec<HandoutStub> {
        self.handouts
    }
}

pub fn parse_listing(html: &str) -> Vec<HandoutStub> {
    let mut parser = ListingParser::new();
    parser.feed(html);
    parser.into_handouts()
}
