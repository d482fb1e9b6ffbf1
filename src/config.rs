//! Configuration module

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Path to the CSV file of safe URL examples
    pub safe_data_path: String,

    /// Path to the CSV file of scam URL examples
    pub scam_data_path: String,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),

            safe_data_path: env::var("SAFE_DATA_PATH")
                .unwrap_or_else(|_| "data/safe-urls.csv".to_string()),

            scam_data_path: env::var("SCAM_DATA_PATH")
                .unwrap_or_else(|_| "data/scam-urls.csv".to_string()),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
