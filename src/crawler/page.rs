//! Fetched-page wrapper
//!
//! [`RawPage`] pairs a parsed HTML document with the URL it was fetched
//! from and exposes the selector-based accessors the extractors need.
//! Pages are transient: parsed, picked over, and dropped; nothing here is
//! persisted.

use crate::normalize::collapse_whitespace;
use scraper::{Html, Selector};
use url::Url;

pub struct RawPage {
    html: Html,
    url: Url,
}

impl RawPage {
    /// Parses a fetched body. Never fails: html5ever recovers from any input.
    pub fn parse(body: &str, url: Url) -> Self {
        Self {
            html: Html::parse_document(body),
            url,
        }
    }

    /// The URL this page was fetched from
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Collapsed text of the first element matching `selector` whose text is
    /// non-empty
    pub fn first_text(&self, selector: &str) -> Option<String> {
        let sel = Selector::parse(selector).ok()?;
        self.html
            .select(&sel)
            .map(|el| collapse_whitespace(&el.text().collect::<String>()))
            .find(|text| !text.is_empty())
    }

    /// Raw text chunks (in document order) under the first element matching
    /// `selector`, skipping text that sits inside an anchor. Anchor text is
    /// reported separately by [`Self::anchors`]; keeping it out here lets
    /// callers combine both without repeating the link text.
    pub fn text_chunks(&self, selector: &str) -> Vec<String> {
        let Ok(sel) = Selector::parse(selector) else {
            return Vec::new();
        };
        let Some(el) = self.html.select(&sel).next() else {
            return Vec::new();
        };
        el.descendants()
            .filter_map(|node| {
                let text = node.value().as_text()?;
                let in_anchor = node
                    .ancestors()
                    .take_while(|a| a.id() != el.id())
                    .any(|a| a.value().as_element().map_or(false, |e| e.name() == "a"));
                if in_anchor {
                    None
                } else {
                    Some(text.to_string())
                }
            })
            .collect()
    }

    /// Value of `attr` on the first element matching `selector`
    pub fn attr(&self, selector: &str, attr: &str) -> Option<String> {
        let sel = Selector::parse(selector).ok()?;
        self.html
            .select(&sel)
            .find_map(|el| el.value().attr(attr))
            .map(str::to_string)
    }

    /// `(href, text)` pairs for every element matching `selector` that
    /// carries a resolvable href, in document order. Hrefs are resolved to
    /// absolute URLs against this page's URL.
    pub fn anchors(&self, selector: &str) -> Vec<(Url, String)> {
        let Ok(sel) = Selector::parse(selector) else {
            return Vec::new();
        };
        self.html
            .select(&sel)
            .filter_map(|el| {
                let href = el.value().attr("href")?;
                let resolved = self.resolve(href)?;
                let text = collapse_whitespace(&el.text().collect::<String>());
                Some((resolved, text))
            })
            .collect()
    }

    /// Resolves a possibly-relative href against this page's URL
    pub fn resolve(&self, href: &str) -> Option<Url> {
        let href = href.trim();
        if href.is_empty() {
            return None;
        }
        self.url.join(href).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> RawPage {
        RawPage::parse(body, Url::parse("https://calendar.example.gov/list?cid=899").unwrap())
    }

    #[test]
    fn test_first_text_skips_empty_matches() {
        let p = page("<div><span class='t'>  </span><span class='t'> Hello  World </span></div>");
        assert_eq!(p.first_text("span.t"), Some("Hello World".to_string()));
    }

    #[test]
    fn test_first_text_none_when_absent() {
        let p = page("<div></div>");
        assert_eq!(p.first_text("span.t"), None);
    }

    #[test]
    fn test_text_chunks_exclude_anchor_text() {
        let p = page("<div id='d'>one<a href='/x'>two</a>three</div>");
        assert_eq!(p.text_chunks("div[id=\"d\"]"), vec!["one", "three"]);
    }

    #[test]
    fn test_text_chunks_exclude_nested_anchor_text() {
        let p = page("<div id='d'>one<a href='/x'><em>two</em></a><span>three</span></div>");
        assert_eq!(p.text_chunks("div[id=\"d\"]"), vec!["one", "three"]);
    }

    #[test]
    fn test_attr() {
        let p = page("<a class='agenda-download' href='/doc/7'>Agenda</a>");
        assert_eq!(p.attr("a.agenda-download", "href"), Some("/doc/7".to_string()));
        assert_eq!(p.attr("a.agenda-download", "id"), None);
    }

    #[test]
    fn test_anchors_resolve_relative_hrefs() {
        let p = page("<div id='docs'><a href='/files/1.pdf'>Minutes</a><a>no href</a></div>");
        let anchors = p.anchors("div[id=\"docs\"] a");
        assert_eq!(
            anchors,
            vec![(
                Url::parse("https://calendar.example.gov/files/1.pdf").unwrap(),
                "Minutes".to_string()
            )]
        );
    }

    #[test]
    fn test_anchors_keep_absolute_hrefs() {
        let p = page("<a class='l' href='https://other.gov/a'>A</a>");
        assert_eq!(p.anchors("a.l")[0].0.as_str(), "https://other.gov/a");
    }

    #[test]
    fn test_resolve_empty_href_is_none() {
        let p = page("<html></html>");
        assert!(p.resolve("  ").is_none());
    }
}
