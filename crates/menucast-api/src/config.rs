use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub listen_addr: String,
    pub log_level: String,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    /// Backend base URL prepended to canonical paths in fallback resolution.
    pub base_url: String,
    /// Host treated as the site's own when classifying absolute link targets.
    #[serde(default)]
    pub site_host: Option<String>,
    /// Cache max-age (seconds) for anonymous responses.
    #[serde(default = "AppConfig::default_cache_max_age")]
    pub cache_max_age: u32,
    /// JSON fixture declaring the served menus.
    #[serde(default)]
    pub menus_file: Option<String>,
    /// Optional JSON fixture backing the content resolver; without it every
    /// internal link resolves via the route fallback.
    #[serde(default)]
    pub resolver_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            cors: CorsConfig::default(),
            telemetry: TelemetryConfig::default(),
            base_url: "http://localhost".to_string(),
            site_host: None,
            cache_max_age: Self::default_cache_max_age(),
            menus_file: None,
            resolver_file: None,
        }
    }
}

impl AppConfig {
    fn default_cache_max_age() -> u32 {
        300
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allow_any_origin: bool,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self { allow_any_origin: true, allowed_origins: vec![] }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    #[serde(default = "TelemetryConfig::default_format")]
    pub format: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self { format: Self::default_format(), json: false }
    }
}

impl TelemetryConfig {
    fn default_format() -> String {
        "pretty".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct Args {
    pub config: Option<String>,
}

impl Args {
    pub fn parse() -> Self {
        let mut config: Option<String> = None;
        let mut it = std::env::args().skip(1);
        while let Some(arg) = it.next() {
            if arg.as_str() == "--config" {
                if let Some(v) = it.next() {
                    config = Some(v);
                }
            }
        }
        Self { config }
    }
}

pub fn load_config(path: Option<&str>) -> Result<AppConfig> {
    match path {
        None => Ok(AppConfig::default()),
        Some(p) => {
            let raw = fs::read_to_string(Path::new(p))?;
            let mut cfg: AppConfig = serde_json::from_str(&raw)
                .map_err(|e| anyhow!("invalid config json: {e}"))?;
            if cfg.listen_addr.trim().is_empty() {
                cfg.listen_addr = AppConfig::default().listen_addr;
            }
            if cfg.log_level.trim().is_empty() {
                cfg.log_level = AppConfig::default().log_level;
            }
            if cfg.base_url.trim().is_empty() {
                cfg.base_url = AppConfig::default().base_url;
            }
            Ok(cfg)
        }
    }
}
