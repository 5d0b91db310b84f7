/// Storefront catalog page used when `MILLCHECK_STORE_URL` is unset.
pub const DEFAULT_STORE_URL: &str = "https://centralmilling.com/store/";

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub store_url: String,
    pub log_level: String,
    /// Upper bound on loading a single product page.
    pub page_timeout_secs: u64,
    pub listing_timeout_secs: u64,
    /// `0` means one in-flight request per product.
    pub max_concurrent_pages: usize,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_url: DEFAULT_STORE_URL.to_string(),
            log_level: "info".to_string(),
            page_timeout_secs: 60,
            listing_timeout_secs: 30,
            max_concurrent_pages: 0,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
