//! Application configuration from environment variables.
//!
//! Every variable has a default, so a bare environment works out of the box.
//! Parsing is decoupled from the process environment via a lookup closure so
//! tests drive it with a plain `HashMap` — no `set_var`/`remove_var` needed.

use thiserror::Error;

/// Primary Overpass API endpoint.
pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

/// Secondary endpoint tried once when the primary fails.
pub const DEFAULT_OVERPASS_FALLBACK_URL: &str = "https://overpass.kumi.systems/api/interpreter";

/// Request timeout for one Overpass attempt, in seconds.
pub const DEFAULT_OVERPASS_TIMEOUT_SECS: u64 = 25;

const DEFAULT_USER_AGENT: &str = "sanpo/0.1 (walking spot finder)";

/// Runtime configuration for the Overpass collaborators.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub overpass_url: String,
    pub overpass_fallback_url: String,
    pub overpass_timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load configuration from environment variables, reading `.env` first.
///
/// # Errors
///
/// Returns [`ConfigError`] if a set variable fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// # Errors
///
/// Returns [`ConfigError`] if a set variable fails to parse.
pub fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default =
        |var: &str, default: &str| lookup(var).unwrap_or_else(|_| default.to_string());

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Err(_) => Ok(default),
            Ok(raw) => raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        }
    };

    Ok(AppConfig {
        overpass_url: or_default("SANPO_OVERPASS_URL", DEFAULT_OVERPASS_URL),
        overpass_fallback_url: or_default(
            "SANPO_OVERPASS_FALLBACK_URL",
            DEFAULT_OVERPASS_FALLBACK_URL,
        ),
        overpass_timeout_secs: parse_u64(
            "SANPO_OVERPASS_TIMEOUT_SECS",
            DEFAULT_OVERPASS_TIMEOUT_SECS,
        )?,
        user_agent: or_default("SANPO_USER_AGENT", DEFAULT_USER_AGENT),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| map.get(key).map(|v| (*v).to_string()).ok_or(VarError::NotPresent)
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let env = HashMap::new();
        let cfg = build_app_config(lookup_from(&env)).unwrap();
        assert_eq!(cfg.overpass_url, DEFAULT_OVERPASS_URL);
        assert_eq!(cfg.overpass_fallback_url, DEFAULT_OVERPASS_FALLBACK_URL);
        assert_eq!(cfg.overpass_timeout_secs, 25);
    }

    #[test]
    fn set_variables_override_defaults() {
        let env = HashMap::from([
            ("SANPO_OVERPASS_URL", "http://localhost:9000/api"),
            ("SANPO_OVERPASS_TIMEOUT_SECS", "5"),
        ]);
        let cfg = build_app_config(lookup_from(&env)).unwrap();
        assert_eq!(cfg.overpass_url, "http://localhost:9000/api");
        assert_eq!(cfg.overpass_timeout_secs, 5);
    }

    #[test]
    fn malformed_timeout_is_an_error() {
        let env = HashMap::from([("SANPO_OVERPASS_TIMEOUT_SECS", "soon")]);
        let err = build_app_config(lookup_from(&env)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. }
            if var == "SANPO_OVERPASS_TIMEOUT_SECS"));
    }
}
