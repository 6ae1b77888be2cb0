use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("LMI_ENV", "development"))?;
    let bind_addr = parse_addr("LMI_BIND_ADDR", "0.0.0.0:5000")?;
    let log_level = or_default("LMI_LOG_LEVEL", "info");

    // An empty key is treated the same as an absent one.
    let brave_search_api_key = lookup("BRAVE_SEARCH_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty());
    let search_base_url = or_default("LMI_SEARCH_BASE_URL", "https://api.search.brave.com/");

    let search_max_results = parse_usize("LMI_SEARCH_MAX_RESULTS", "50")?;
    if search_max_results == 0 {
        return Err(invalid(
            "LMI_SEARCH_MAX_RESULTS",
            "must be greater than zero".to_string(),
        ));
    }

    let http_timeout_secs = parse_u64("LMI_HTTP_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("LMI_USER_AGENT", "lmi/0.1 (labour-market-intelligence)");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        brave_search_api_key,
        search_base_url,
        search_max_results,
        http_timeout_secs,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "production" => Ok(Environment::Production),
        "test" => Ok(Environment::Test),
        other => Err(ConfigError::InvalidEnvVar {
            var: "LMI_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
