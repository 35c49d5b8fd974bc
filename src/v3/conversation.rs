/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::api::{ApiParams, seg};
use crate::v3::errors::ImgurError;
use crate::v3::properties::require;
use crate::v3::Client;
use serde_json::Value;

/// Private message endpoints. All of them require a signed in user.
#[derive(Debug, Clone)]
pub struct ConversationApi {
    client: Client,
}

impl ConversationApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn conversations(&self) -> Result<Value, ImgurError> {
        self.client.get("conversations", &ApiParams::new()).await
    }

    /// Messages of one conversation, `offset` skips messages within the page
    pub async fn conversation(
        &self,
        conversation_id: &str,
        page: u32,
        offset: u32,
    ) -> Result<Value, ImgurError> {
        let conversation_id = require("conversation id", conversation_id)?;
        let path = format!("conversations/{}/{page}/{offset}", seg(conversation_id));
        self.client.get(&path, &ApiParams::new()).await
    }

    pub async fn send_message(&self, recipient: &str, body: &str) -> Result<Value, ImgurError> {
        let recipient = require("recipient", recipient)?;
        let params = ApiParams::new().text("body", require("message body", body)?);
        self.client
            .post(&format!("conversations/{}", seg(recipient)), &params)
            .await
    }

    pub async fn delete(&self, conversation_id: &str) -> Result<Value, ImgurError> {
        let conversation_id = require("conversation id", conversation_id)?;
        self.client
            .delete(&format!("conversations/{}", seg(conversation_id)), &ApiParams::new())
            .await
    }
}
