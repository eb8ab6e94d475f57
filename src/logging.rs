// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - NOXTERM
//! Tracing subscriber setup shared by the binaries.
//! Logs go to stderr so stdout only carries script output.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "octa_chats=info,clean_octa_chats=info";

pub fn init(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
