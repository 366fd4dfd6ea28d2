//! Environment-driven configuration loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::app_config::AppConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable has an unparseable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable has an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing logic, decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let output_dir = PathBuf::from(or_default("APPLENS_OUTPUT_DIR", "./output"));
    let log_level = or_default("APPLENS_LOG_LEVEL", "info");
    let review_lang = or_default("APPLENS_REVIEW_LANG", "en");
    let review_country = or_default("APPLENS_REVIEW_COUNTRY", "us");

    let scraper_request_timeout_secs = parse_u64("APPLENS_SCRAPER_REQUEST_TIMEOUT_SECS", "30")?;
    let scraper_user_agent = or_default(
        "APPLENS_SCRAPER_USER_AGENT",
        "applens/0.1 (review-intelligence)",
    );
    let scraper_max_retries = parse_u32("APPLENS_SCRAPER_MAX_RETRIES", "3")?;
    let scraper_retry_backoff_base_secs =
        parse_u64("APPLENS_SCRAPER_RETRY_BACKOFF_BASE_SECS", "5")?;
    let scraper_inter_request_delay_ms = parse_u64("APPLENS_SCRAPER_INTER_REQUEST_DELAY_MS", "250")?;

    Ok(AppConfig {
        output_dir,
        log_level,
        review_lang,
        review_country,
        scraper_request_timeout_secs,
        scraper_user_agent,
        scraper_max_retries,
        scraper_retry_backoff_base_secs,
        scraper_inter_request_delay_ms,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_app_config_succeeds_on_empty_environment() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.output_dir, PathBuf::from("./output"));
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.review_lang, "en");
        assert_eq!(cfg.review_country, "us");
        assert_eq!(cfg.scraper_request_timeout_secs, 30);
        assert_eq!(cfg.scraper_user_agent, "applens/0.1 (review-intelligence)");
        assert_eq!(cfg.scraper_max_retries, 3);
        assert_eq!(cfg.scraper_retry_backoff_base_secs, 5);
        assert_eq!(cfg.scraper_inter_request_delay_ms, 250);
    }

    #[test]
    fn build_app_config_reads_overrides() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("APPLENS_OUTPUT_DIR", "/tmp/applens-out");
        map.insert("APPLENS_REVIEW_LANG", "de");
        map.insert("APPLENS_REVIEW_COUNTRY", "at");
        map.insert("APPLENS_SCRAPER_MAX_RETRIES", "7");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.output_dir, PathBuf::from("/tmp/applens-out"));
        assert_eq!(cfg.review_lang, "de");
        assert_eq!(cfg.review_country, "at");
        assert_eq!(cfg.scraper_max_retries, 7);
    }

    #[test]
    fn build_app_config_rejects_non_numeric_timeout() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("APPLENS_SCRAPER_REQUEST_TIMEOUT_SECS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(
                result,
                Err(ConfigError::InvalidEnvVar { ref var, .. })
                    if var == "APPLENS_SCRAPER_REQUEST_TIMEOUT_SECS"
            ),
            "expected InvalidEnvVar, got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_non_numeric_retries() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("APPLENS_SCRAPER_MAX_RETRIES", "-1");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(
                result,
                Err(ConfigError::InvalidEnvVar { ref var, .. })
                    if var == "APPLENS_SCRAPER_MAX_RETRIES"
            ),
            "expected InvalidEnvVar, got: {result:?}"
        );
    }
}
