use scraper::{ElementRef, Html, Selector};

use crate::{Error, Result, CONTAINER_SELECTOR, ITEM_SELECTOR, LINK_SELECTOR};

/// Pulls entries out of a listing page.
///
/// Entries come from the `<ul data-testid="list-az-results">` container: every `<li>` inside it
/// contributes the trimmed text of its first `<a>`, items without a link are skipped.
#[derive(Debug)]
pub struct PageExtractor {
    container: Selector,
    item: Selector,
    link: Selector,
}

impl PageExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            container: create_selector(CONTAINER_SELECTOR)?,
            item: create_selector(ITEM_SELECTOR)?,
            link: create_selector(LINK_SELECTOR)?,
        })
    }

    /// Returns the page entries in document order.
    /// A page without the container is an [`Error::MalformedPage`], `url` is only used for reporting.
    pub fn extract(&self, html: &str, url: &str) -> Result<Vec<String>> {
        let doc = Html::parse_document(html);
        let container = doc
            .select(&self.container)
            .next()
            .ok_or_else(|| Error::MalformedPage { url: url.into() })?;

        let entries = container
            .select(&self.item)
            .filter_map(|item| item.select(&self.link).next())
            .map(link_text)
            .collect();
        Ok(entries)
    }
}

#[inline]
fn link_text(link: ElementRef<'_>) -> String {
    link.text().collect::<String>().trim().to_string()
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::InvalidSelector(sel_str.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "http://localhost/list/a/1";

    fn page(items: &str) -> String {
        format!(
            r#"<html><body>
            <nav><ul><li><a href="/">Home</a></li></ul></nav>
            <ul data-testid="list-az-results">{items}</ul>
            </body></html>"#
        )
    }

    #[test]
    fn extracts_every_link_in_document_order() {
        let html = page(
            r#"<li><a href="/browse/a">a</a></li>
               <li><a href="/browse/aardvark">  aardvark </a></li>
               <li><a href="/browse/a-la-carte">à la carte</a></li>"#,
        );
        let entries = PageExtractor::new().unwrap().extract(&html, URL).unwrap();
        assert_eq!(entries, ["a", "aardvark", "à la carte"]);
    }

    #[test]
    fn items_without_link_are_skipped() {
        let html = page(
            r#"<li><a href="/browse/abacus">abacus</a></li>
               <li><span>advertisement</span></li>
               <li><a href="/browse/abaft">abaft</a></li>"#,
        );
        let entries = PageExtractor::new().unwrap().extract(&html, URL).unwrap();
        assert_eq!(entries, ["abacus", "abaft"]);
    }

    #[test]
    fn only_first_link_of_an_item_counts() {
        let html = page(
            r#"<li><a href="/browse/abbey"><em>abbey</em></a> <a href="/browse/abbot">abbot</a></li>"#,
        );
        let entries = PageExtractor::new().unwrap().extract(&html, URL).unwrap();
        assert_eq!(entries, ["abbey"]);
    }

    #[test]
    fn empty_container_yields_nothing() {
        let entries = PageExtractor::new().unwrap().extract(&page(""), URL).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn missing_container_is_malformed() {
        let html = "<html><body><ul><li><a>abandon</a></li></ul></body></html>";
        let err = PageExtractor::new().unwrap().extract(html, URL).unwrap_err();
        assert!(matches!(err, Error::MalformedPage { url } if url == URL));
    }
}
