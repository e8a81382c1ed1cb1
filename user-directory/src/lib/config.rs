use std::env;
use std::fmt;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RateLimitConfig {
    pub window_secs: u64,
    pub max_requests: u32,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    #[serde(default)]
    pub secret: String,
    /// Token lifetime, e.g. "1h" or "30m"
    pub expiry: String,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiry", &self.expiry)
            .finish()
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Flat variables PORT, DATABASE_URL, JWT_SECRET, TOKEN_EXPIRY
    /// 2. Environment variables (DATABASE__URL, SERVER__HTTP_PORT, JWT__SECRET, etc.)
    /// 3. Environment-specific config file (config/{environment}.toml)
    /// 4. Default config file (config/default.toml)
    /// 5. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| env::var(key).ok())
    }

    /// Same as [`Config::load`], reading the flat variables and `RUN_MODE`
    /// through `lookup`.
    pub fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let run_mode = lookup("RUN_MODE").unwrap_or_else(|| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("server.http_port", 3000)?
            .set_default("database.max_connections", 5)?
            .set_default("jwt.expiry", "1h")?
            .set_default("rate_limit.window_secs", 900)?
            .set_default("rate_limit.max_requests", 100)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::default().separator("__"))
            .set_override_option("server.http_port", lookup("PORT"))?
            .set_override_option("database.url", lookup("DATABASE_URL"))?
            .set_override_option("jwt.secret", lookup("JWT_SECRET"))?
            .set_override_option("jwt.expiry", lookup("TOKEN_EXPIRY"))?
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.trim().is_empty() {
            return Err(ConfigError::Message(
                "jwt.secret is required (set JWT_SECRET or JWT__SECRET)".to_string(),
            ));
        }
        if self.rate_limit.window_secs == 0 || self.rate_limit.max_requests == 0 {
            return Err(ConfigError::Message(
                "rate_limit.window_secs and rate_limit.max_requests must be positive".to_string(),
            ));
        }
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Message(
                "database.url is required (set DATABASE_URL or DATABASE__URL)".to_string(),
            ));
        }
        Ok(())
    }
}
