// src/config/mod.rs
// Central configuration for the wetsim backend

pub mod helpers;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

lazy_static! {
    pub static ref CONFIG: WetsimConfig = WetsimConfig::from_env();
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origin allowed on the WebSocket and HTTP surface. "*" outside production.
    pub allowed_origin: String,
    /// Serve the built client bundle (production deployments only).
    pub serve_static: bool,
    pub static_dir: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: helpers::env_or("WETSIM_HOST", "0.0.0.0"),
            port: helpers::env_parsed("WETSIM_PORT", 5000),
            allowed_origin: helpers::env_or("WETSIM_ALLOWED_ORIGIN", "*"),
            serve_static: helpers::env_bool("WETSIM_SERVE_STATIC", false),
            static_dir: helpers::env_or("WETSIM_STATIC_DIR", "client/build"),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Completion API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
    /// Defensive timeout on the third-party call.
    pub request_timeout_secs: u64,
}

impl OpenAiConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: helpers::env_or("OPENAI_API_KEY", ""),
            model: helpers::env_or("WETSIM_MODEL", "gpt-3.5-turbo"),
            request_timeout_secs: helpers::env_parsed("WETSIM_REQUEST_TIMEOUT_SECS", 120),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.is_empty() {
            return Err(anyhow::anyhow!("OPENAI_API_KEY is required"));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            level: helpers::env_or("WETSIM_LOG_LEVEL", "info"),
        }
    }
}

/// Main configuration structure - composes all domain configs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WetsimConfig {
    pub server: ServerConfig,
    pub openai: OpenAiConfig,
    pub logging: LoggingConfig,
}

impl WetsimConfig {
    pub fn from_env() -> Self {
        // Don't panic if .env doesn't exist (for production)
        dotenv::dotenv().ok();

        Self {
            server: ServerConfig::from_env(),
            openai: OpenAiConfig::from_env(),
            logging: LoggingConfig::from_env(),
        }
    }

    /// Validate config on startup
    pub fn validate(&self) -> anyhow::Result<()> {
        self.openai.validate()?;
        Ok(())
    }
}

impl Default for WetsimConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
