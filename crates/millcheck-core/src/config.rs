use crate::app_config::{AppConfig, DEFAULT_STORE_URL, DEFAULT_USER_AGENT};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build configuration from the provided env-var lookup function.
///
/// Every variable is optional; the defaults reproduce a plain run against
/// the Central Milling store.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_secs = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        let secs = raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        if secs == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "timeout must be at least 1 second".to_string(),
            });
        }
        Ok(secs)
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let store_url = or_default("MILLCHECK_STORE_URL", DEFAULT_STORE_URL);
    if !(store_url.starts_with("https://") || store_url.starts_with("http://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "MILLCHECK_STORE_URL".to_string(),
            reason: format!("\"{store_url}\" is not an http(s) URL"),
        });
    }

    let log_level = or_default("MILLCHECK_LOG_LEVEL", "info");
    let page_timeout_secs = parse_secs("MILLCHECK_PAGE_TIMEOUT_SECS", "60")?;
    let listing_timeout_secs = parse_secs("MILLCHECK_LISTING_TIMEOUT_SECS", "30")?;
    let max_concurrent_pages = parse_usize("MILLCHECK_MAX_CONCURRENT_PAGES", "0")?;
    let user_agent = or_default("MILLCHECK_USER_AGENT", DEFAULT_USER_AGENT);

    Ok(AppConfig {
        store_url,
        log_level,
        page_timeout_secs,
        listing_timeout_secs,
        max_concurrent_pages,
        user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
