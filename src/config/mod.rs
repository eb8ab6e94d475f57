// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - NOXTERM
//
//! Octa scripts configuration module
//! All values come from a whitelisted `.env` file in the working directory.


mod error;
mod loader;
mod types;
mod validation;

pub use error::ConfigError;
pub use loader::{parse_env, strip_quotes, value_parse};
pub use types::{
    AdminConfig, Config, DatabaseConfig, EnvValues, Environment, OctaConfig, ServerConfig,
    ALLOWED_ENVIRONMENTS, ALLOWED_KEYS, ENV_FILE_NAME, KEY_ADMIN_KEY, KEY_ENV, KEY_MONGODB_URI,
    KEY_PORT, KEY_X_API_KEY_OCTA,
};
