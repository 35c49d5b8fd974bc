/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::api::{ApiParams, seg};
use crate::v3::errors::ImgurError;
use crate::v3::properties::{Vote, require};
use crate::v3::Client;
use serde_json::Value;

/// Comment endpoints
#[derive(Debug, Clone)]
pub struct CommentApi {
    client: Client,
}

impl CommentApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn comment(&self, comment_id: &str) -> Result<Value, ImgurError> {
        let comment_id = require("comment id", comment_id)?;
        self.client
            .get(&format!("comment/{}", seg(comment_id)), &ApiParams::new())
            .await
    }

    /// Comments on a gallery image
    pub async fn create(&self, image_id: &str, comment: &str) -> Result<Value, ImgurError> {
        let params = comment_params(image_id, comment)?;
        self.client.post("comment", &params).await
    }

    pub async fn reply(&self, parent_id: &str, image_id: &str, comment: &str) -> Result<Value, ImgurError> {
        let parent_id = require("parent comment id", parent_id)?;
        let params = comment_params(image_id, comment)?;
        self.client
            .post(&format!("comment/{}", seg(parent_id)), &params)
            .await
    }

    pub async fn delete(&self, comment_id: &str) -> Result<Value, ImgurError> {
        let comment_id = require("comment id", comment_id)?;
        self.client
            .delete(&format!("comment/{}", seg(comment_id)), &ApiParams::new())
            .await
    }

    pub async fn vote(&self, comment_id: &str, vote: Vote) -> Result<Value, ImgurError> {
        let comment_id = require("comment id", comment_id)?;
        self.client
            .post(&format!("comment/{}/vote/{vote}", seg(comment_id)), &ApiParams::new())
            .await
    }
}

fn comment_params(image_id: &str, comment: &str) -> Result<ApiParams, ImgurError> {
    Ok(ApiParams::new()
        .text("image_id", require("image id", image_id)?)
        .text("comment", require("comment", comment)?))
}
