// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - NOXTERM
//
//! Configuration type definitions
//! Whitelisted keys, the parsed value store and the typed views built from it.

use std::collections::BTreeMap;
use std::str::FromStr;

pub const ENV_FILE_NAME: &str = ".env";

pub const KEY_PORT: &str = "PORT";
pub const KEY_MONGODB_URI: &str = "MONGODB_URI";
pub const KEY_ENV: &str = "ENV";
pub const KEY_X_API_KEY_OCTA: &str = "X_API_KEY_OCTA";
pub const KEY_ADMIN_KEY: &str = "ADMIN_KEY";

/// Every key the `.env` file may contain. All of them are required.
pub const ALLOWED_KEYS: [&str; 5] = [
    KEY_PORT,
    KEY_MONGODB_URI,
    KEY_ENV,
    KEY_X_API_KEY_OCTA,
    KEY_ADMIN_KEY,
];

/// Permitted values for `ENV`.
pub const ALLOWED_ENVIRONMENTS: [&str; 2] = ["development", "production"];

/// Key/value pairs read from the `.env` file, after unquoting.
pub type EnvValues = BTreeMap<String, String>;

/// Main application configuration
#[derive(Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub octa: OctaConfig,
    pub admin: AdminConfig,
    pub(super) values: EnvValues,
}

/// Local service settings (`PORT`, `ENV`)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub environment: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Development,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "production" => Ok(Environment::Production),
            "development" => Ok(Environment::Development),
            _ => Err(format!(
                "Unknown environment: {}. Allowed values: {}",
                s,
                ALLOWED_ENVIRONMENTS.join(", ")
            )),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Development => write!(f, "development"),
        }
    }
}

/// MongoDB connection settings
#[derive(Clone)]
pub struct DatabaseConfig {
    pub uri: String,
}

/// Octadesk chat API credentials
#[derive(Clone)]
pub struct OctaConfig {
    pub api_key: String,
}

/// Local admin endpoint credentials
#[derive(Clone)]
pub struct AdminConfig {
    pub key: String,
}

// Credentials must never end up in log lines, so Debug is redacted by hand.

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("server", &self.server)
            .field("database", &self.database)
            .field("octa", &self.octa)
            .field("admin", &self.admin)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("uri", &"<redacted>")
            .finish()
    }
}

impl std::fmt::Debug for OctaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OctaConfig")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("key", &"<redacted>")
            .finish()
    }
}
