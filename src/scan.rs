// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - NOXTERM
//
//! Latest-message scan
//!
//! Walks the listed chats in order and records the timestamp of each chat's
//! most recent message. A chat whose messages cannot be fetched is logged and
//! skipped without counting toward the limit.

use tracing::{debug, info, warn};

use crate::octa::{Chat, ChatApi, Message, MessageInfo};

pub const DEFAULT_CHAT_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    /// Maximum number of successfully fetched chats.
    pub limit: usize,
    /// Hand each result to the sink as soon as it is known.
    pub print_immediately: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_CHAT_LIMIT,
            print_immediately: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    pub items: Vec<MessageInfo>,
    pub failed: Vec<String>,
    pub without_messages: usize,
}

/// The API returns messages oldest first, so the last one is the newest.
pub fn latest_message(messages: &[Message]) -> Option<&Message> {
    messages.last()
}

pub async fn collect_latest<A, F>(
    api: &A,
    chats: &[Chat],
    options: ScanOptions,
    mut sink: F,
) -> ScanOutcome
where
    A: ChatApi + ?Sized,
    F: FnMut(&MessageInfo),
{
    let mut outcome = ScanOutcome::default();
    let mut count = 0usize;

    for chat in chats {
        if count >= options.limit {
            debug!("Chat limit {} reached", options.limit);
            break;
        }

        let messages = match api.chat_messages(&chat.id).await {
            Ok(messages) => messages,
            Err(e) => {
                warn!("Error fetching messages for chat {}: {}", chat.id, e);
                outcome.failed.push(chat.id.clone());
                continue;
            }
        };

        match latest_message(&messages) {
            Some(last) => {
                let info = MessageInfo {
                    chat_id: chat.id.clone(),
                    time: last.time.clone(),
                };
                if options.print_immediately {
                    sink(&info);
                }
                outcome.items.push(info);
            }
            None => {
                debug!("Chat {} has no messages", chat.id);
                outcome.without_messages += 1;
            }
        }

        count += 1;
    }

    info!(
        "Scanned {} chats: {} with messages, {} empty, {} failed",
        count,
        outcome.items.len(),
        outcome.without_messages,
        outcome.failed.len()
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeApi {
        messages: HashMap<String, Result<Vec<Message>, u16>>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeApi {
        fn with(mut self, chat_id: &str, times: &[&str]) -> Self {
            let msgs = times
                .iter()
                .map(|t| Message {
                    chat_id: chat_id.to_string(),
                    time: t.to_string(),
                })
                .collect();
            self.messages.insert(chat_id.to_string(), Ok(msgs));
            self
        }

        fn failing(mut self, chat_id: &str, status: u16) -> Self {
            self.messages.insert(chat_id.to_string(), Err(status));
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatApi for FakeApi {
        async fn list_chats(&self) -> Result<Vec<Chat>, ApiError> {
            Ok(self
                .messages
                .keys()
                .map(|id| Chat { id: id.clone() })
                .collect())
        }

        async fn chat_messages(&self, chat_id: &str) -> Result<Vec<Message>, ApiError> {
            self.calls.lock().unwrap().push(chat_id.to_string());
            match self.messages.get(chat_id) {
                Some(Ok(msgs)) => Ok(msgs.clone()),
                Some(Err(status)) => Err(ApiError::UnexpectedStatus {
                    status: *status,
                    body: "boom".to_string(),
                }),
                None => Err(ApiError::UnexpectedStatus {
                    status: 404,
                    body: "not found".to_string(),
                }),
            }
        }
    }

    fn chats(ids: &[&str]) -> Vec<Chat> {
        ids.iter().map(|id| Chat { id: id.to_string() }).collect()
    }

    fn info(chat_id: &str, time: &str) -> MessageInfo {
        MessageInfo {
            chat_id: chat_id.to_string(),
            time: time.to_string(),
        }
    }

    #[test]
    fn test_latest_message_is_last_element() {
        let msgs = vec![
            Message {
                chat_id: "c1".to_string(),
                time: "t1".to_string(),
            },
            Message {
                chat_id: "c1".to_string(),
                time: "t2".to_string(),
            },
        ];
        assert_eq!(latest_message(&msgs).map(|m| m.time.as_str()), Some("t2"));
        assert!(latest_message(&[]).is_none());
    }

    #[tokio::test]
    async fn test_collects_last_message_per_chat() {
        let api = FakeApi::default()
            .with("a", &["t1", "t2"])
            .with("b", &["t3"]);

        let mut printed = Vec::new();
        let outcome = collect_latest(&api, &chats(&["a", "b"]), ScanOptions::default(), |i| {
            printed.push(i.to_string())
        })
        .await;

        assert_eq!(outcome.items, vec![info("a", "t2"), info("b", "t3")]);
        assert_eq!(printed, vec!["(a, t2)", "(b, t3)"]);
    }

    #[tokio::test]
    async fn test_failures_are_skipped_and_not_counted() {
        let api = FakeApi::default()
            .failing("a", 500)
            .with("b", &["t1"])
            .with("c", &["t2"])
            .with("d", &["t3"]);

        let options = ScanOptions {
            limit: 2,
            print_immediately: true,
        };
        let outcome = collect_latest(&api, &chats(&["a", "b", "c", "d"]), options, |_| {}).await;

        assert_eq!(outcome.items, vec![info("b", "t1"), info("c", "t2")]);
        assert_eq!(outcome.failed, vec!["a".to_string()]);
        assert_eq!(api.calls(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_empty_chats_count_toward_limit() {
        let api = FakeApi::default()
            .with("a", &[])
            .with("b", &["t1"])
            .with("c", &["t2"]);

        let options = ScanOptions {
            limit: 2,
            print_immediately: true,
        };
        let outcome = collect_latest(&api, &chats(&["a", "b", "c"]), options, |_| {}).await;

        assert_eq!(outcome.items, vec![info("b", "t1")]);
        assert_eq!(outcome.without_messages, 1);
        assert_eq!(api.calls(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_deferred_mode_does_not_emit() {
        let api = FakeApi::default().with("a", &["t1"]);
        let options = ScanOptions {
            limit: 5,
            print_immediately: false,
        };

        let mut emitted = 0;
        let outcome = collect_latest(&api, &chats(&["a"]), options, |_| emitted += 1).await;

        assert_eq!(emitted, 0);
        assert_eq!(outcome.items, vec![info("a", "t1")]);
    }

    #[tokio::test]
    async fn test_zero_limit_fetches_nothing() {
        let api = FakeApi::default().with("a", &["t1"]);
        let options = ScanOptions {
            limit: 0,
            print_immediately: true,
        };
        let outcome = collect_latest(&api, &chats(&["a"]), options, |_| {}).await;
        assert!(outcome.items.is_empty());
        assert!(api.calls().is_empty());
    }
}
