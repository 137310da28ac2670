//! Application configuration loaded from environment variables.

use std::env;

use pantry_core::domain::PublishedAtPolicy;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// How `PUT /recipes/{id}` treats `publishedAt`.
    pub published_at_policy: PublishedAtPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            published_at_policy: PublishedAtPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source.
    ///
    /// Missing or unparsable values fall back to [`AppConfig::default`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let published_at_policy = match lookup("UPDATE_PUBLISHED_AT") {
            Some(raw) => raw.parse::<PublishedAtPolicy>().unwrap_or_else(|e| {
                tracing::warn!(
                    "{}; using {}",
                    e,
                    defaults.published_at_policy
                );
                defaults.published_at_policy
            }),
            None => defaults.published_at_policy,
        };

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            published_at_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.published_at_policy, PublishedAtPolicy::FromBody);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("UPDATE_PUBLISHED_AT", "preserve"),
        ]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.published_at_policy, PublishedAtPolicy::Preserve);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = config_from(&[("PORT", "eighty"), ("UPDATE_PUBLISHED_AT", "whenever")]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.published_at_policy, PublishedAtPolicy::FromBody);
    }
}
