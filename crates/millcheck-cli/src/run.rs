//! Orchestration for a single availability check.
//!
//! Discovery runs once, duplicate links are dropped, then every product page
//! is inspected concurrently. Nothing is classified until every inspection
//! has finished.

use std::time::Duration;

use anyhow::Context;
use futures::stream::{self, StreamExt};
use millcheck_core::{classify, AppConfig, Classification, ProductRecord};
use millcheck_scraper::{
    dedupe_product_urls, discover_product_links, inspect_product, PageRenderer,
};

/// Everything a check produced, in deduplicated discovery order.
#[derive(Debug)]
pub(crate) struct CheckOutcome {
    pub records: Vec<ProductRecord>,
    pub classification: Classification,
}

/// Runs one full check against `config.store_url`.
///
/// # Errors
///
/// Returns an error only if the catalog page cannot be loaded. Product page
/// failures are contained in their records.
pub(crate) async fn run_check<R: PageRenderer>(
    renderer: &R,
    config: &AppConfig,
) -> anyhow::Result<CheckOutcome> {
    let links = discover_product_links(
        renderer,
        &config.store_url,
        Duration::from_secs(config.listing_timeout_secs),
    )
    .await
    .with_context(|| format!("failed to load store listing {}", config.store_url))?;

    let urls = dedupe_product_urls(links);
    tracing::info!(products = urls.len(), "inspecting product pages");

    let records = inspect_all(
        renderer,
        &urls,
        Duration::from_secs(config.page_timeout_secs),
        config.max_concurrent_pages,
    )
    .await;

    let failed = records.iter().filter(|r| r.is_failed()).count();
    if failed > 0 {
        tracing::warn!(
            failed,
            total = records.len(),
            "some product pages could not be inspected"
        );
    }

    let classification = classify(&records);
    Ok(CheckOutcome {
        records,
        classification,
    })
}

/// Inspects every URL and returns the records in the same order as `urls`.
///
/// `max_concurrent == 0` puts every inspection in flight at once.
pub(crate) async fn inspect_all<R: PageRenderer>(
    renderer: &R,
    urls: &[String],
    timeout: Duration,
    max_concurrent: usize,
) -> Vec<ProductRecord> {
    let width = if max_concurrent == 0 {
        urls.len().max(1)
    } else {
        max_concurrent
    };

    stream::iter(urls)
        .map(|url| inspect_product(renderer, url, timeout))
        .buffered(width)
        .collect()
        .await
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
