// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - NOXTERM
//! Octadesk REST client

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::models::{Chat, Message};
use super::ChatApi;
use crate::config::OctaConfig;
use crate::errors::ApiError;

pub const DEFAULT_BASE_URL: &str = "https://artearena.api004.octadesk.services";

/// First page of the chat search, newest first.
const CHAT_SEARCH_QUERY: &str =
    "page=1&limit=100&sort[direction]=desc&sort[property]=createdAt";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct OctaClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl OctaClient {
    pub fn new(config: &OctaConfig) -> Result<Self, ApiError> {
        Self::with_base_url(config, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(config: &OctaConfig, base_url: &str) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::ClientBuildFailed(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn chats_url(&self) -> String {
        format!("{}/chat?{}", self.base_url, CHAT_SEARCH_QUERY)
    }

    pub fn messages_url(&self, chat_id: &str) -> String {
        format!("{}/chat/{}/messages", self.base_url, chat_id)
    }

    /// Chat search response body, undecoded.
    pub async fn list_chats_raw(&self) -> Result<String, ApiError> {
        self.get_text(&self.chats_url()).await
    }

    async fn get_text(&self, url: &str) -> Result<String, ApiError> {
        debug!("GET {}", url);
        let res = self
            .http
            .get(url)
            .header("accept", "application/json")
            .header("X-API-KEY", &self.api_key)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| ApiError::RequestFailed(format!("reading response body: {}", e)))?;

        if status != StatusCode::OK {
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let body = self.get_text(url).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl ChatApi for OctaClient {
    async fn list_chats(&self) -> Result<Vec<Chat>, ApiError> {
        self.get_json(&self.chats_url()).await
    }

    async fn chat_messages(&self, chat_id: &str) -> Result<Vec<Message>, ApiError> {
        self.get_json(&self.messages_url(chat_id)).await
    }
}
