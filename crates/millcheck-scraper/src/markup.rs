//! Read-only querying of rendered markup.
//!
//! Extraction code is written against [`MarkupQuery`] and [`MarkupElement`];
//! [`HtmlSnapshot`] provides them on top of the `scraper` crate.

use scraper::{ElementRef, Html, Selector};

use crate::error::ScraperError;

pub trait MarkupElement {
    fn attr(&self, name: &str) -> Option<&str>;

    /// All descendant text, concatenated.
    fn text(&self) -> String;

    fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }
}

pub trait MarkupQuery {
    type Element<'a>: MarkupElement
    where
        Self: 'a;

    /// Returns every element matching the CSS `selector`, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidSelector`] if `selector` does not parse.
    fn select(&self, selector: &str) -> Result<Vec<Self::Element<'_>>, ScraperError>;
}

/// A parsed page.
pub struct HtmlSnapshot {
    document: Html,
}

impl HtmlSnapshot {
    /// Parses `html` leniently; malformed markup still yields a document.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }
}

impl MarkupQuery for HtmlSnapshot {
    type Element<'a> = ElementRef<'a>;

    fn select(&self, selector: &str) -> Result<Vec<ElementRef<'_>>, ScraperError> {
        let parsed = Selector::parse(selector).map_err(|e| ScraperError::InvalidSelector {
            selector: selector.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(self.document.select(&parsed).collect())
    }
}

impl MarkupElement for ElementRef<'_> {
    fn attr(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn text(&self) -> String {
        ElementRef::text(self).collect()
    }
}
