/// Configuration management for the Encantia service
///
/// Loads configuration from environment variables. The two Supabase values
/// are externally supplied and required; missing either is a fatal startup
/// condition because every page issues remote calls.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Hosted backend configuration
    pub supabase: SupabaseSettings,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// HTTP port
    pub port: u16,
}

/// Hosted Supabase backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupabaseSettings {
    /// Project base URL
    pub url: String,
    /// Public anon API key
    pub anon_key: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let app = AppConfig {
            env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
        };

        let supabase = SupabaseSettings {
            url: std::env::var("SUPABASE_URL")
                .context("SUPABASE_URL environment variable not set")?,
            anon_key: std::env::var("SUPABASE_ANON_KEY")
                .context("SUPABASE_ANON_KEY environment variable not set")?,
        };

        Ok(Config { app, supabase })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        std::env::set_var("SUPABASE_URL", "https://test.supabase.co");
        std::env::set_var("SUPABASE_ANON_KEY", "anon-test");

        let config = Config::from_env().unwrap();

        assert_eq!(config.app.env, "development");
        assert_eq!(config.app.host, "0.0.0.0");
        assert_eq!(config.app.port, 8080);
        assert_eq!(config.supabase.url, "https://test.supabase.co");
    }
}
