//! Configuration management

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Public origin used in recovery-email redirect links.
    #[serde(default = "default_public_url")]
    pub public_url: String,

    #[serde(default)]
    pub backend: BackendConfig,
}

fn default_port() -> u16 {
    8080
}

fn default_public_url() -> String {
    "http://localhost:8080".to_string()
}

/// Connection details for the hosted auth/data service.
#[derive(Debug, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_backend_url")]
    pub url: String,
    /// Project anon key; row-level rules on the backend decide what it may
    /// touch.
    #[serde(default)]
    pub anon_key: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            anon_key: String::new(),
        }
    }
}

fn default_backend_url() -> String {
    "http://localhost:54321".to_string()
}

pub fn load_config() -> Result<Config> {
    let file = std::env::var("MARQUEE_CONFIG_FILE").unwrap_or_else(|_| "marquee".to_string());
    build_config(&file)
}

fn build_config(file: &str) -> Result<Config> {
    let config = ::config::Config::builder()
        // Start with defaults
        .set_default("port", 8080)?
        // Load from config file if it exists
        .add_source(::config::File::with_name(file).required(false))
        // Override with environment variables (MARQUEE_PORT, MARQUEE_BACKEND__URL, etc.)
        .add_source(
            ::config::Environment::with_prefix("MARQUEE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_apply_without_a_file() {
        let config = build_config("definitely-missing-config").expect("defaults load");
        assert_eq!(config.port, 8080);
        assert_eq!(config.public_url, "http://localhost:8080");
        assert_eq!(config.backend.url, "http://localhost:54321");
        assert!(config.backend.anon_key.is_empty());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("marquee.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(
            file,
            "port = 9000\npublic_url = \"https://tickets.example\"\n\n[backend]\nurl = \"https://project.example\"\nanon_key = \"anon-key\""
        )
        .expect("write config");

        let stem = path.with_extension("");
        let config = build_config(&stem.to_string_lossy()).expect("file loads");
        assert_eq!(config.port, 9000);
        assert_eq!(config.public_url, "https://tickets.example");
        assert_eq!(config.backend.url, "https://project.example");
        assert_eq!(config.backend.anon_key, "anon-key");
    }
}
