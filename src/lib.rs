// Octa chat scripts
// Shared library for the octa-chats and clean-octa-chats binaries

pub mod admin;
pub mod config;
pub mod errors;
pub mod logging;
pub mod octa;
pub mod scan;

pub use admin::AdminClient;
pub use config::{Config, ConfigError, Environment};
pub use errors::ApiError;
pub use octa::{Chat, ChatApi, Message, MessageInfo, OctaClient};
pub use scan::{collect_latest, latest_message, ScanOptions, ScanOutcome};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const BUILD_TIME: &str = include_str!(concat!(env!("OUT_DIR"), "/build_time.txt"));
pub const GIT_HASH: &str = env!("GIT_HASH");
