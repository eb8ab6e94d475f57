// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - NOXTERM
//
//! Octadesk chat API payloads

use serde::{Deserialize, Serialize};
use std::fmt;

/// A chat returned by the chat search endpoint. Only the id is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: String,
}

/// A message returned by the per-chat messages endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub chat_id: String,
    pub time: String,
}

/// Chat id paired with the timestamp of its most recent message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageInfo {
    pub chat_id: String,
    pub time: String,
}

impl fmt::Display for MessageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.chat_id, self.time)
    }
}
