//! Product link discovery from the store catalog page.

use std::collections::HashSet;
use std::time::Duration;

use crate::error::ScraperError;
use crate::markup::{HtmlSnapshot, MarkupElement, MarkupQuery};
use crate::render::PageRenderer;

/// Anchors wrapping each product thumbnail on the catalog page.
pub const PRODUCT_LINK_SELECTOR: &str = ".product-thumb > a";

/// Loads the catalog page and returns every product link on it, in
/// document order. Duplicates are kept; see [`dedupe_product_urls`].
///
/// # Errors
///
/// Returns [`ScraperError`] if the catalog page cannot be loaded.
pub async fn discover_product_links<R: PageRenderer>(
    renderer: &R,
    store_url: &str,
    timeout: Duration,
) -> Result<Vec<String>, ScraperError> {
    let html = renderer.render(store_url, timeout).await?;
    let links = parse_catalog_page(store_url, &html)?;
    tracing::info!(store_url, count = links.len(), "discovered product links");
    Ok(links)
}

fn parse_catalog_page(store_url: &str, html: &str) -> Result<Vec<String>, ScraperError> {
    extract_product_links(store_url, &HtmlSnapshot::parse(html))
}

/// Collects the `href` of every product thumbnail anchor on `page`.
///
/// Relative hrefs are resolved against `store_url`; absolute ones are
/// returned untouched. Anchors without an `href` are skipped.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidSelector`] only if the built-in selector
/// is rejected by the markup backend.
pub fn extract_product_links<Q: MarkupQuery>(
    store_url: &str,
    page: &Q,
) -> Result<Vec<String>, ScraperError> {
    let anchors = page.select(PRODUCT_LINK_SELECTOR)?;
    let links = anchors
        .iter()
        .filter_map(|a| {
            let Some(href) = a.attr("href") else {
                tracing::debug!("product thumbnail anchor has no href");
                return None;
            };
            resolve_href(store_url, href)
        })
        .collect();
    Ok(links)
}

fn resolve_href(base: &str, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    if reqwest::Url::parse(href).is_ok() {
        return Some(href.to_owned());
    }
    let joined = reqwest::Url::parse(base).and_then(|b| b.join(href));
    match joined {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            tracing::debug!(href, error = %e, "could not resolve product href");
            None
        }
    }
}

/// Drops repeated URLs, keeping the first occurrence of each.
///
/// URLs are compared as exact strings: a trailing slash or a query string
/// makes two links distinct.
#[must_use]
pub fn dedupe_product_urls(urls: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    urls.into_iter()
        .filter(|url| seen.insert(url.clone()))
        .collect()
}
