use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upload: UploadConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub dir: String,
    /// Body limit for `POST /api/upload`. `None` disables the limit.
    pub max_bytes: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub seed_sample_data: bool,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let config = Self {
            server: ServerConfig {
                host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("PORT")
                    .unwrap_or_else(|_| "5000".to_string())
                    .parse()
                    .unwrap_or(5000),
            },
            upload: UploadConfig {
                dir: std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string()),
                max_bytes: std::env::var("UPLOAD_MAX_BYTES")
                    .ok()
                    .and_then(|value| value.parse().ok()),
            },
            store: StoreConfig {
                seed_sample_data: parse_flag(std::env::var("SEED_SAMPLE_DATA").ok().as_deref(), true),
            },
        };

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => true,
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_accepts_common_spellings() {
        assert!(parse_flag(Some("true"), false));
        assert!(parse_flag(Some(" YES "), false));
        assert!(parse_flag(Some("1"), false));
        assert!(!parse_flag(Some("off"), true));
        assert!(!parse_flag(Some("0"), true));
    }

    #[test]
    fn test_parse_flag_falls_back_to_default() {
        assert!(parse_flag(None, true));
        assert!(!parse_flag(None, false));
        assert!(parse_flag(Some("maybe"), true));
    }

    #[test]
    fn test_bind_address_joins_host_and_port() {
        let config = AppConfig {
            server: ServerConfig { host: "127.0.0.1".to_string(), port: 5000 },
            upload: UploadConfig { dir: "./uploads".to_string(), max_bytes: None },
            store: StoreConfig { seed_sample_data: true },
        };

        assert_eq!(config.bind_address(), "127.0.0.1:5000");
    }
}
