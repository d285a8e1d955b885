use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

pub const ENV_LOG_LEVEL: &str = "NODEGEN_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "NODEGEN_LOG_DIR";
pub const ENV_PRETTY: &str = "NODEGEN_PRETTY";

/// Runtime settings for the `nodegen` tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Default filter directive when `RUST_LOG` is not set.
    pub log_level: String,
    /// Write daily rolling log files here when set.
    pub log_dir: Option<PathBuf>,
    /// Pretty-print JSON written to stdout.
    pub pretty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            log_dir: None,
            pretty: true,
        }
    }
}

impl AppConfig {
    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        // A missing .env is normal outside development.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = non_empty(lookup(ENV_LOG_LEVEL)) {
            cfg.log_level = v;
        }

        cfg.log_dir = non_empty(lookup(ENV_LOG_DIR)).map(PathBuf::from);

        if let Some(v) = non_empty(lookup(ENV_PRETTY)) {
            cfg.pretty = parse_bool(&v)
                .ok_or_else(|| anyhow!("{ENV_PRETTY} must be a boolean, got `{v}`"))?;
        }

        Ok(cfg)
    }
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
