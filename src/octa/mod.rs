// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - NOXTERM
//
//! Octadesk chat API access

mod client;
mod models;

pub use client::{OctaClient, DEFAULT_BASE_URL};
pub use models::{Chat, Message, MessageInfo};

use crate::errors::ApiError;
use async_trait::async_trait;

/// Read side of the chat service, as used by the latest-message scan.
#[async_trait]
pub trait ChatApi: Send + Sync {
    async fn list_chats(&self) -> Result<Vec<Chat>, ApiError>;

    async fn chat_messages(&self, chat_id: &str) -> Result<Vec<Message>, ApiError>;
}
