use std::collections::HashMap;
use std::time::Duration;

use super::*;

const URL: &str = "https://centralmilling.com/product/type-00-normal/";

fn radio(code: &str, disabled: bool) -> String {
    let flag = if disabled { " disabled" } else { "" };
    format!(r#"<input type="radio" name="attribute_pa_weight" value="{code}"{flag}>"#)
}

fn product_page(title: &str, radios: &[String]) -> String {
    format!(
        r#"<html><body>
             <h1 class="product_title entry-title">{title}</h1>
             <form class="variations_form">{}</form>
           </body></html>"#,
        radios.join("\n")
    )
}

/// Renderer serving canned pages; URLs not in the map fail with 404.
struct FakeRenderer {
    pages: HashMap<String, String>,
}

impl PageRenderer for FakeRenderer {
    async fn render(&self, url: &str, _timeout: Duration) -> Result<String, ScraperError> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScraperError::NotFound {
                url: url.to_owned(),
            })
    }
}

// -----------------------------------------------------------------------
// extract_product_record
// -----------------------------------------------------------------------

#[test]
fn partitions_radios_by_disabled_flag() {
    let html = product_page(
        "Type 00 Normal",
        &[
            radio("5-lb-bag-2-26-kg", false),
            radio("25-lb-bag-11-34-kg", true),
            radio("50-lb-bag-22-68-kg", false),
        ],
    );

    let record = parse_product_page(URL, &html).unwrap();
    assert_eq!(record.name, "Type 00 Normal");
    assert_eq!(record.url, URL);
    assert_eq!(
        record.available_options,
        vec!["5-lb-bag-2-26-kg", "50-lb-bag-22-68-kg"]
    );
    assert_eq!(record.unavailable_options, vec!["25-lb-bag-11-34-kg"]);
    assert_eq!(record.status, InspectionStatus::Ok);
}

#[test]
fn disabled_attribute_with_value_counts_as_disabled() {
    let html = product_page(
        "Organic Rye",
        &[
            r#"<input type="radio" name="attribute_pa_weight" value="5-lb-bag-2-26-kg" disabled="disabled">"#.to_string(),
            r#"<input type="radio" name="attribute_pa_weight" value="25-lb-bag-11-34-kg" disabled="">"#.to_string(),
        ],
    );

    let record = parse_product_page(URL, &html).unwrap();
    assert!(record.available_options.is_empty());
    assert_eq!(record.unavailable_options.len(), 2);
}

#[test]
fn partition_covers_every_radio_without_overlap() {
    let radios: Vec<String> = (0..6)
        .map(|i| radio(&format!("code-{i}"), i % 3 == 0))
        .collect();
    let record = parse_product_page(URL, &product_page("Many", &radios)).unwrap();

    let mut all: Vec<_> = record
        .available_options
        .iter()
        .chain(&record.unavailable_options)
        .cloned()
        .collect();
    all.sort();
    let expected: Vec<String> = (0..6).map(|i| format!("code-{i}")).collect();
    assert_eq!(all, expected);
    assert!(record
        .available_options
        .iter()
        .all(|c| !record.unavailable_options.contains(c)));
}

#[test]
fn zero_radios_yields_empty_lists() {
    let record = parse_product_page(URL, &product_page("Gift Card", &[])).unwrap();
    assert_eq!(record.name, "Gift Card");
    assert!(record.available_options.is_empty());
    assert!(record.unavailable_options.is_empty());
    assert!(!record.is_failed());
}

#[test]
fn ignores_radios_for_other_attributes_and_non_radio_inputs() {
    let html = product_page(
        "Semolina",
        &[
            radio("5-lb-bag-2-26-kg", false),
            r#"<input type="radio" name="attribute_pa_grind" value="fine">"#.to_string(),
            r#"<input type="hidden" name="attribute_pa_weight" value="25-lb-bag-11-34-kg">"#
                .to_string(),
        ],
    );

    let record = parse_product_page(URL, &html).unwrap();
    assert_eq!(record.available_options, vec!["5-lb-bag-2-26-kg"]);
    assert!(record.unavailable_options.is_empty());
}

#[test]
fn radio_without_value_is_skipped() {
    let html = product_page(
        "Spelt",
        &[r#"<input type="radio" name="attribute_pa_weight">"#.to_string()],
    );
    let record = parse_product_page(URL, &html).unwrap();
    assert!(record.available_options.is_empty());
    assert!(record.unavailable_options.is_empty());
}

#[test]
fn missing_title_gives_empty_name() {
    let html = r#"<html><body><input type="radio" name="attribute_pa_weight" value="5-lb-bag-2-26-kg"></body></html>"#;
    let record = parse_product_page(URL, html).unwrap();
    assert_eq!(record.name, "");
    assert_eq!(record.available_options, vec!["5-lb-bag-2-26-kg"]);
}

#[test]
fn title_whitespace_is_trimmed() {
    let html = product_page("\n   Beehive Pastry Flour  \n", &[]);
    let record = parse_product_page(URL, &html).unwrap();
    assert_eq!(record.name, "Beehive Pastry Flour");
}

// -----------------------------------------------------------------------
// inspect_product
// -----------------------------------------------------------------------

#[tokio::test]
async fn inspect_product_returns_populated_record() {
    let mut pages = HashMap::new();
    pages.insert(
        URL.to_string(),
        product_page("Type 00 Normal", &[radio("5-lb-bag-2-26-kg", false)]),
    );
    let renderer = FakeRenderer { pages };

    let record = inspect_product(&renderer, URL, Duration::from_secs(60)).await;
    assert_eq!(record.name, "Type 00 Normal");
    assert_eq!(record.available_options, vec!["5-lb-bag-2-26-kg"]);
}

#[tokio::test]
async fn inspect_product_failure_yields_sentinel() {
    let renderer = FakeRenderer {
        pages: HashMap::new(),
    };

    let record = inspect_product(&renderer, URL, Duration::from_secs(60)).await;
    assert_eq!(record.name, "");
    assert_eq!(record.url, URL);
    assert!(record.available_options.is_empty());
    assert!(record.unavailable_options.is_empty());
    assert!(
        matches!(record.status, InspectionStatus::Failed { ref reason } if reason.contains("not found")),
        "expected Failed status, got: {:?}",
        record.status
    );
}
