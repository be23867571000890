use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Каталог со сборкой frontend (trunk dist)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    /// Таймаут запроса к upstream; по умолчанию не задан
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "dist".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[upstream]
base_url = "https://web-production-dbd6b.up.railway.app"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(contents)?;
    config.upstream.base_url = config.upstream.base_url.trim_end_matches('/').to_string();
    if config.upstream.base_url.is_empty() {
        anyhow::bail!("upstream.base_url must not be empty");
    }
    Ok(config)
}

impl Config {
    pub fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("invalid listen address {}: {}", addr, e))
    }

    /// Relative static_dir is resolved against the executable directory
    pub fn static_dir(&self) -> PathBuf {
        let dir = PathBuf::from(&self.server.static_dir);
        if dir.is_absolute() {
            return dir;
        }
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let resolved = exe_dir.join(&dir);
                if resolved.exists() {
                    return resolved;
                }
            }
        }
        dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(
            config.upstream.base_url,
            "https://web-production-dbd6b.up.railway.app"
        );
        assert_eq!(config.upstream.timeout_secs, None);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.listen_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_trailing_slash_and_defaults() {
        let config = parse_config(
            r#"
            [upstream]
            base_url = "http://localhost:8080/"
            timeout_secs = 15
            "#,
        )
        .unwrap();
        assert_eq!(config.upstream.base_url, "http://localhost:8080");
        assert_eq!(config.upstream.timeout_secs, Some(15));
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.static_dir, "dist");
    }

    #[test]
    fn test_empty_base_url_is_rejected() {
        assert!(parse_config("[upstream]\nbase_url = \"\"").is_err());
        assert!(parse_config("[server]\nport = 1").is_err());
    }
}
