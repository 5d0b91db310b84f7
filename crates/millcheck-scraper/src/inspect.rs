//! Per-product inspection: title and weight-option state.
//!
//! Inspection never fails outward. Any load or parse error is logged with the
//! product URL and turned into a [`ProductRecord::failed`] sentinel so a
//! single bad page cannot sink the batch.

use std::time::Duration;

use millcheck_core::{InspectionStatus, ProductRecord};

use crate::error::ScraperError;
use crate::markup::{HtmlSnapshot, MarkupElement, MarkupQuery};
use crate::render::PageRenderer;

pub const PRODUCT_TITLE_SELECTOR: &str = ".product_title";

/// Bag-size radio buttons on a product page.
pub const WEIGHT_OPTION_SELECTOR: &str = "input[type=radio][name=attribute_pa_weight]";

/// Loads one product page and extracts its [`ProductRecord`].
///
/// A page that takes longer than `timeout` is handled like any other
/// failure.
pub async fn inspect_product<R: PageRenderer>(
    renderer: &R,
    url: &str,
    timeout: Duration,
) -> ProductRecord {
    match fetch_product_record(renderer, url, timeout).await {
        Ok(record) => {
            tracing::debug!(
                url,
                available = record.available_options.len(),
                unavailable = record.unavailable_options.len(),
                "inspected product"
            );
            record
        }
        Err(e) => {
            tracing::warn!(url, error = %e, "error fetching product page");
            ProductRecord::failed(url, e.to_string())
        }
    }
}

async fn fetch_product_record<R: PageRenderer>(
    renderer: &R,
    url: &str,
    timeout: Duration,
) -> Result<ProductRecord, ScraperError> {
    let html = renderer.render(url, timeout).await?;
    parse_product_page(url, &html)
}

/// Parses raw product-page markup into a [`ProductRecord`].
///
/// # Errors
///
/// See [`extract_product_record`].
pub fn parse_product_page(url: &str, html: &str) -> Result<ProductRecord, ScraperError> {
    extract_product_record(url, &HtmlSnapshot::parse(html))
}

/// Extracts the product title and partitions the weight radios by their
/// `disabled` attribute.
///
/// Every radio carrying a `value` lands in exactly one of the two option
/// lists. A page with no weight radios yields two empty lists.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidSelector`] only if a built-in selector is
/// rejected by the markup backend.
pub fn extract_product_record<Q: MarkupQuery>(
    url: &str,
    page: &Q,
) -> Result<ProductRecord, ScraperError> {
    let name = page
        .select(PRODUCT_TITLE_SELECTOR)?
        .iter()
        .map(MarkupElement::text)
        .collect::<String>()
        .trim()
        .to_owned();

    let mut available_options = Vec::new();
    let mut unavailable_options = Vec::new();

    for radio in page.select(WEIGHT_OPTION_SELECTOR)? {
        let Some(code) = radio.attr("value") else {
            tracing::debug!(url, "weight option has no value attribute");
            continue;
        };
        if radio.has_attr("disabled") {
            unavailable_options.push(code.to_owned());
        } else {
            available_options.push(code.to_owned());
        }
    }

    Ok(ProductRecord {
        name,
        url: url.to_owned(),
        available_options,
        unavailable_options,
        status: InspectionStatus::Ok,
    })
}

#[cfg(test)]
#[path = "inspect_test.rs"]
mod tests;
