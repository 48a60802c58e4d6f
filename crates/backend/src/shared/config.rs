use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Собранный фронтенд (trunk dist)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// Внешний REST API каталога
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "dist".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[api]
base_url = "http://localhost:8080/api"
timeout_secs = 10
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `API_BASE_URL` from the environment wins over both.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = read_config_file()?;
    apply_env_overrides(&mut config, std::env::var(API_BASE_URL_ENV).ok());
    Ok(config)
}

fn read_config_file() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            }
            tracing::warn!("config.toml not found at: {}", config_path.display());
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.api.base_url.trim().is_empty() {
        anyhow::bail!("[api] base_url must not be empty");
    }
    Ok(config)
}

pub fn apply_env_overrides(config: &mut Config, api_base_url: Option<String>) {
    if let Some(url) = api_base_url.filter(|u| !u.trim().is_empty()) {
        tracing::info!("{} override: {}", API_BASE_URL_ENV, url);
        config.api.base_url = url.trim().to_string();
    }
}

/// Resolves the static directory relative to the executable directory
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.server.static_dir);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(dir);
            if resolved.exists() {
                return resolved;
            }
        }
    }

    // cargo run из корня workspace
    PathBuf::from(&config.server.static_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
    }

    #[test]
    fn test_optional_fields_use_defaults() {
        let config = parse_config(
            r#"
[server]

[api]
base_url = "https://api.example.ro"
"#,
        )
        .unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.api.timeout_secs, 10);
    }

    #[test]
    fn test_empty_base_url_rejected() {
        assert!(parse_config("[server]\n[api]\nbase_url = \" \"\n").is_err());
    }

    #[test]
    fn test_env_override() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        apply_env_overrides(&mut config, Some("  ".into()));
        assert_eq!(config.api.base_url, "http://localhost:8080/api");

        apply_env_overrides(&mut config, Some("https://api.example.ro/v1".into()));
        assert_eq!(config.api.base_url, "https://api.example.ro/v1");
    }
}
