//! Server configuration, loaded from environment variables.

/// Catalog published by the upstream project
pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/phebe02/webontwikkeling-project/main/porsche-project/json/porsche.json";

pub const DEFAULT_PORT: u16 = 3001;

pub const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// TCP port the server binds on (all interfaces).
    pub port: u16,
    /// URL of the JSON catalog, fetched on every request.
    pub catalog_url: String,
    /// Directory served for stylesheets and images.
    pub static_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment in production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("PORT={:?} is not a valid port, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };
        let catalog_url = lookup("CATALOG_URL")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());
        let static_dir = lookup("STATIC_DIR")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        Self {
            port,
            catalog_url,
            static_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.port, 3001);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("CATALOG_URL", "http://localhost:9000/porsche.json"),
            ("STATIC_DIR", "/srv/public"),
        ]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.catalog_url, "http://localhost:9000/porsche.json");
        assert_eq!(config.static_dir, "/srv/public");
    }

    #[test]
    fn test_bad_port_falls_back() {
        let config = AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")]));
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
