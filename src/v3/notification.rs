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

/// Notification endpoints for the signed in user
#[derive(Debug, Clone)]
pub struct NotificationApi {
    client: Client,
}

impl NotificationApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn notifications(&self, new_only: bool) -> Result<Value, ImgurError> {
        let params = ApiParams::new().text("new", new_only.to_string());
        self.client.get("notification", &params).await
    }

    pub async fn notification(&self, notification_id: &str) -> Result<Value, ImgurError> {
        let notification_id = require("notification id", notification_id)?;
        self.client
            .get(&format!("notification/{}", seg(notification_id)), &ApiParams::new())
            .await
    }

    pub async fn mark_as_read(&self, notification_ids: &[&str]) -> Result<Value, ImgurError> {
        if notification_ids.is_empty() {
            return Err(ImgurError::validation("at least one notification id is required"));
        }
        let params = ApiParams::new().text("ids", notification_ids.join(","));
        self.client.post("notification", &params).await
    }
}
