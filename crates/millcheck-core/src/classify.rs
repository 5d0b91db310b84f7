//! Availability filtering over inspected product records.

use crate::products::ProductRecord;
use crate::weights::{label_of, WeightLabel};

/// Product names grouped by the bag sizes the report cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub five_pound: Vec<String>,
    pub twenty_five_pound: Vec<String>,
}

/// Returns `true` if any available option of `record` maps to `weight`.
///
/// Unknown option codes are skipped; an empty `available_options` list is
/// never available.
#[must_use]
pub fn is_available(record: &ProductRecord, weight: WeightLabel) -> bool {
    record
        .available_options
        .iter()
        .filter_map(|code| label_of(code))
        .any(|label| label == weight)
}

#[must_use]
pub fn has_five_pound_bag(record: &ProductRecord) -> bool {
    is_available(record, WeightLabel::FivePound)
}

#[must_use]
pub fn has_twenty_five_pound_bag(record: &ProductRecord) -> bool {
    is_available(record, WeightLabel::TwentyFivePound)
}

/// Splits `records` into the 5lb and 25lb name lists, preserving input order.
#[must_use]
pub fn classify(records: &[ProductRecord]) -> Classification {
    let names = |pred: fn(&ProductRecord) -> bool| {
        records
            .iter()
            .filter(|r| pred(r))
            .map(|r| r.name.clone())
            .collect::<Vec<_>>()
    };

    Classification {
        five_pound: names(has_five_pound_bag),
        twenty_five_pound: names(has_twenty_five_pound_bag),
    }
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
