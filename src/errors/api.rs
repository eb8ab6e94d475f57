// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - NOXTERM
//! HTTP API error types

use std::fmt;
#[derive(Debug)]
pub enum ApiError {
    ClientBuildFailed(String),
    RequestFailed(String),
    UnexpectedStatus { status: u16, body: String },
    InvalidResponse(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::ClientBuildFailed(msg) => write!(f, "HTTP client setup failed: {}", msg),
            ApiError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            ApiError::UnexpectedStatus { status, body } => {
                write!(f, "Unexpected status {}: {}", status, body)
            }
            ApiError::InvalidResponse(msg) => write!(f, "Invalid response body: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
