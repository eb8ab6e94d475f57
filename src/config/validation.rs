// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - NOXTERM
//
//! Configuration validation

use tracing::warn;

use super::error::ConfigError;
use super::types::{Config, KEY_ADMIN_KEY, KEY_MONGODB_URI, KEY_PORT};

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                key: KEY_PORT.to_string(),
                value: "0".to_string(),
                reason: "Port cannot be 0".to_string(),
            });
        }

        if !self.database.uri.starts_with("mongodb://")
            && !self.database.uri.starts_with("mongodb+srv://")
        {
            warn!("{} does not use a mongodb:// or mongodb+srv:// scheme", KEY_MONGODB_URI);
        }

        if self.is_production() {
            let uri = &self.database.uri;
            if uri.contains("localhost") || uri.contains("127.0.0.1") {
                warn!("{} points at a local database in production", KEY_MONGODB_URI);
            }
            if self.admin.key.len() < 16 {
                warn!("{} is shorter than 16 characters in production", KEY_ADMIN_KEY);
            }
        }

        Ok(())
    }
}
