use millcheck_core::{Classification, ProductRecord};

use crate::run::CheckOutcome;

pub(crate) const FIVE_POUND_HEADER: &str = "FIVE POUND BAGS : ";
pub(crate) const TWENTY_FIVE_POUND_HEADER: &str = "TWENTY FIVE POUND BAGS : ";

/// Every inspected record, failed ones included, as pretty JSON.
pub(crate) fn format_records(records: &[ProductRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

/// The two labelled name lists, one name per line.
pub(crate) fn format_summary(classification: &Classification) -> String {
    format!(
        "{FIVE_POUND_HEADER}\n{}\n{TWENTY_FIVE_POUND_HEADER}\n{}",
        classification.five_pound.join("\n"),
        classification.twenty_five_pound.join("\n"),
    )
}

/// Writes the diagnostic record dump followed by the summary to stdout.
pub(crate) fn print_report(outcome: &CheckOutcome) -> anyhow::Result<()> {
    println!("{}", format_records(&outcome.records)?);
    println!("{}", format_summary(&outcome.classification));
    Ok(())
}

#[cfg(test)]
mod tests {
    use millcheck_core::InspectionStatus;

    use super::*;

    #[test]
    fn summary_lists_names_under_headers() {
        let classification = Classification {
            five_pound: vec!["Type 00".to_string(), "Rye".to_string()],
            twenty_five_pound: vec!["High Mountain".to_string()],
        };

        assert_eq!(
            format_summary(&classification),
            "FIVE POUND BAGS : \nType 00\nRye\nTWENTY FIVE POUND BAGS : \nHigh Mountain"
        );
    }

    #[test]
    fn summary_with_no_products_keeps_headers() {
        assert_eq!(
            format_summary(&Classification::default()),
            "FIVE POUND BAGS : \n\nTWENTY FIVE POUND BAGS : \n"
        );
    }

    #[test]
    fn records_dump_includes_failed_records() {
        let records = vec![
            ProductRecord {
                name: "Type 00".to_string(),
                url: "https://centralmilling.com/product/type-00/".to_string(),
                available_options: vec!["5-lb-bag-2-26-kg".to_string()],
                unavailable_options: vec![],
                status: InspectionStatus::Ok,
            },
            ProductRecord::failed("https://centralmilling.com/product/slow/", "timed out"),
        ];

        let dump = format_records(&records).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&dump).unwrap();
        assert_eq!(parsed[0]["name"], "Type 00");
        assert_eq!(parsed[0]["available_options"][0], "5-lb-bag-2-26-kg");
        assert_eq!(parsed[1]["name"], "");
        assert_eq!(parsed[1]["status"]["state"], "failed");
        assert_eq!(parsed[1]["status"]["reason"], "timed out");
    }
}
