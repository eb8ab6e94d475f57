// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - NOXTERM
//! Configuration loading from the whitelisted `.env` file

use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};
use super::error::ConfigError;
use super::types::*;

impl Config {
    /// Loads `.env` from the current working directory.
    pub fn load() -> Result<Self, ConfigError> {
        let work_dir = env::current_dir().map_err(ConfigError::WorkingDirectory)?;
        Self::load_from_dir(&work_dir)
    }

    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        Self::from_file(&dir.join(ENV_FILE_NAME))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if contents.is_empty() {
            return Err(ConfigError::EmptyFile {
                path: path.to_path_buf(),
            });
        }

        let config = Self::parse(&contents)?;
        info!(
            "Loaded configuration from {} (environment: {})",
            path.display(),
            config.server.environment
        );
        Ok(config)
    }

    /// Builds a configuration from `.env` formatted text. Nothing is kept
    /// unless every line and every required key checks out.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let values = parse_env(contents)?;

        Ok(Config {
            server: ServerConfig {
                port: value_parse(&values, KEY_PORT)?,
                environment: value_parse(&values, KEY_ENV)?,
            },
            database: DatabaseConfig {
                uri: required(&values, KEY_MONGODB_URI)?.to_string(),
            },
            octa: OctaConfig {
                api_key: required(&values, KEY_X_API_KEY_OCTA)?.to_string(),
            },
            admin: AdminConfig {
                key: required(&values, KEY_ADMIN_KEY)?.to_string(),
            },
            values,
        })
    }

    /// Raw (unquoted) value of a loaded key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn values(&self) -> &EnvValues {
        &self.values
    }

    pub fn is_production(&self) -> bool {
        self.server.environment == Environment::Production
    }

    pub fn is_development(&self) -> bool {
        self.server.environment == Environment::Development
    }
}

/// Single pass over `.env` text.
///
/// Blank lines and `#` comments are skipped. Every other line must be
/// `KEY=VALUE` with a whitelisted key. The first offending line aborts the
/// scan; the required-key check runs only after a clean scan, and reports
/// missing keys in whitelist order.
pub fn parse_env(contents: &str) -> Result<EnvValues, ConfigError> {
    let mut values = EnvValues::new();

    for (index, raw) in contents.lines().enumerate() {
        let line_num = index + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, value) = line.split_once('=').ok_or_else(|| ConfigError::InvalidLine {
            line: line_num,
            content: line.to_string(),
        })?;
        let key = key.trim();
        let value = strip_quotes(value.trim());

        if !ALLOWED_KEYS.contains(&key) {
            return Err(ConfigError::KeyNotAllowed {
                key: key.to_string(),
                allowed: ALLOWED_KEYS.join(", "),
            });
        }

        if key == KEY_ENV && !ALLOWED_ENVIRONMENTS.contains(&value) {
            return Err(ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
                reason: format!("Allowed values: {}", ALLOWED_ENVIRONMENTS.join(", ")),
            });
        }

        if value.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: key.to_string(),
                value: String::new(),
                reason: format!("value cannot be empty (line {})", line_num),
            });
        }

        if values.insert(key.to_string(), value.to_string()).is_some() {
            debug!("Key {} assigned more than once, keeping line {}", key, line_num);
        }
    }

    let missing: Vec<String> = ALLOWED_KEYS
        .iter()
        .filter(|key| !values.contains_key(**key))
        .map(|key| key.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(ConfigError::MissingRequired { keys: missing });
    }

    Ok(values)
}

/// Removes one matching pair of outer `"` or `'` quotes.
pub fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() > 1 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn required<'a>(values: &'a EnvValues, key: &str) -> Result<&'a str, ConfigError> {
    values
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| ConfigError::MissingRequired {
            keys: vec![key.to_string()],
        })
}

pub fn value_parse<T>(values: &EnvValues, key: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value = required(values, key)?;
    value.parse().map_err(|e| ConfigError::ParseError {
        key: key.to_string(),
        message: format!("{}", e),
    })
}
