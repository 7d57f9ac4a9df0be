//! Configuration management for the FarmEase backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with FARMEASE__ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;
const MAX_TOKEN_EXPIRY_DAYS: i64 = 365;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// JWT authentication configuration
    pub jwt: JwtConfig,

    /// Password hashing configuration
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    /// Secret key for signing JWT tokens
    pub secret: String,

    /// Token lifetime in days (1-365)
    pub token_expiry_days: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// bcrypt work factor (4-31)
    pub bcrypt_cost: u32,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("FARMEASE_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 5001)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("jwt.secret", "farmease-development-secret")?
            .set_default("jwt.token_expiry_days", 30)?
            .set_default("auth.bcrypt_cost", i64::from(bcrypt::DEFAULT_COST))?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FARMEASE__ prefix)
            .add_source(
                Environment::with_prefix("FARMEASE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_TOKEN_EXPIRY_DAYS).contains(&self.jwt.token_expiry_days) {
            return Err(ConfigError::Message(format!(
                "jwt.token_expiry_days must be between 1 and {}",
                MAX_TOKEN_EXPIRY_DAYS
            )));
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.auth.bcrypt_cost) {
            return Err(ConfigError::Message(format!(
                "auth.bcrypt_cost must be between {} and {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST
            )));
        }
        if self.environment == "production" && self.jwt.secret == "farmease-development-secret" {
            return Err(ConfigError::Message(
                "jwt.secret must be set in production".to_string(),
            ));
        }
        Ok(())
    }

    /// Configuration for unit tests: fast hashing, fixed secret
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            environment: "test".to_string(),
            server: ServerConfig::default(),
            jwt: JwtConfig {
                secret: "test-secret".to_string(),
                token_expiry_days: 30,
            },
            auth: AuthConfig {
                bcrypt_cost: MIN_BCRYPT_COST,
            },
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5001,
            host: "0.0.0.0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejection(config: &Config) -> String {
        match config.validate() {
            Err(ConfigError::Message(msg)) => msg,
            other => panic!("expected a rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_test_config_is_valid() {
        assert!(Config::for_tests().validate().is_ok());
    }

    #[test]
    fn test_rejects_token_lifetime_out_of_range() {
        let mut config = Config::for_tests();
        config.jwt.token_expiry_days = 0;
        assert!(rejection(&config).contains("token_expiry_days"));

        config.jwt.token_expiry_days = -7;
        assert!(rejection(&config).contains("token_expiry_days"));

        config.jwt.token_expiry_days = i64::MAX;
        assert!(rejection(&config).contains("token_expiry_days"));

        config.jwt.token_expiry_days = MAX_TOKEN_EXPIRY_DAYS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bcrypt_cost_out_of_range() {
        let mut config = Config::for_tests();
        config.auth.bcrypt_cost = 3;
        assert!(rejection(&config).contains("bcrypt_cost"));

        config.auth.bcrypt_cost = 32;
        assert!(rejection(&config).contains("bcrypt_cost"));
    }

    #[test]
    fn test_rejects_development_secret_in_production() {
        let mut config = Config::for_tests();
        config.environment = "production".to_string();
        config.jwt.secret = "farmease-development-secret".to_string();
        assert!(rejection(&config).contains("jwt.secret"));

        config.jwt.secret = "a-real-production-secret".to_string();
        assert!(config.validate().is_ok());
    }
}
