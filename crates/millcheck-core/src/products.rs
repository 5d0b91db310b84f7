use serde::Serialize;

/// Whether a product page was actually read.
///
/// A failed inspection and a product with no weight options both end up with
/// empty option lists; this is what tells them apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum InspectionStatus {
    Ok,
    Failed { reason: String },
}

/// Purchase-option state extracted from one product page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    /// Product title as shown on the page. Empty when inspection failed.
    pub name: String,
    pub url: String,
    /// Option codes of enabled weight radios, in document order.
    pub available_options: Vec<String>,
    /// Option codes of disabled weight radios, in document order.
    pub unavailable_options: Vec<String>,
    pub status: InspectionStatus,
}

impl ProductRecord {
    /// Sentinel record for a page that could not be fetched or parsed.
    #[must_use]
    pub fn failed(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            url: url.into(),
            available_options: Vec::new(),
            unavailable_options: Vec::new(),
            status: InspectionStatus::Failed {
                reason: reason.into(),
            },
        }
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self.status, InspectionStatus::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_record_has_empty_fields() {
        let record = ProductRecord::failed("https://example.com/p/1", "timed out");
        assert_eq!(record.name, "");
        assert_eq!(record.url, "https://example.com/p/1");
        assert!(record.available_options.is_empty());
        assert!(record.unavailable_options.is_empty());
        assert!(record.is_failed());
    }

    #[test]
    fn status_serializes_with_state_tag() {
        let ok = serde_json::to_value(InspectionStatus::Ok).unwrap();
        assert_eq!(ok, serde_json::json!({"state": "ok"}));

        let failed = serde_json::to_value(InspectionStatus::Failed {
            reason: "boom".to_string(),
        })
        .unwrap();
        assert_eq!(
            failed,
            serde_json::json!({"state": "failed", "reason": "boom"})
        );
    }
}
