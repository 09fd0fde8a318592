use leptos::prelude::{get_configuration, LeptosOptions};
use thiserror::Error;

/// Used when `RUST_LOG` is unset or blank.
pub static DEFAULT_LOG_FILTER: &str = "info,tower_http=info";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid leptos configuration: {0}")]
    Leptos(String),
}

/// Server-side settings: the Leptos options (from `[package.metadata.leptos]`,
/// overridable through `LEPTOS_*` variables) and the log filter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub leptos_options: LeptosOptions,
    pub log_filter: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
        let log_filter = log_filter(std::env::var("RUST_LOG").ok());
        Ok(Self {
            leptos_options: conf.leptos_options,
            log_filter,
        })
    }
}

fn log_filter(raw: Option<String>) -> String {
    raw.filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_wins_when_set() {
        assert_eq!(log_filter(Some("debug".to_string())), "debug");
    }

    #[test]
    fn unset_or_blank_falls_back() {
        assert_eq!(log_filter(None), DEFAULT_LOG_FILTER);
        assert_eq!(log_filter(Some("  ".to_string())), DEFAULT_LOG_FILTER);
    }
}
