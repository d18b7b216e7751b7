use std::env;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ENVIRONMENT: &str = "development";

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid {key} value: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
}

impl ServerConfig {
    /// Loads `.env.{RUST_ENV}` first, then falls back to `.env`.
    pub fn load_dotenv() {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| DEFAULT_ENVIRONMENT.into());
        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }
    }

    /// Load server configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, but reads through `lookup` so tests never touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "PORT",
                    value: raw.clone(),
                })?,
            None => DEFAULT_PORT,
        };
        let environment =
            non_empty("RUST_ENV").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        Ok(Self {
            host,
            port,
            environment,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(cfg.host, DEFAULT_HOST);
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.environment, DEFAULT_ENVIRONMENT);
        assert!(!cfg.is_production());
    }

    #[test]
    fn reads_explicit_values() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9000"),
            ("RUST_ENV", "production"),
        ]))
        .unwrap();

        assert_eq!(cfg.bind_address(), "0.0.0.0:9000");
        assert!(cfg.is_production());
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[("HOST", "  "), ("PORT", "")])).unwrap();

        assert_eq!(cfg.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "PORT",
                value: "eighty".to_string()
            }
        );
    }
}
