/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::api::{ApiParams, seg};
use crate::v3::errors::ImgurError;
use crate::v3::properties::{Pager, SortOrder, require};
use crate::v3::Client;
use serde_json::Value;

/// Account endpoints. `me` can be used as the username of the signed in user.
///
/// See [Imgur API Docs](https://apidocs.imgur.com/#account) for the returned fields.
#[derive(Debug, Clone)]
pub struct AccountApi {
    client: Client,
}

impl AccountApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Basic information about an account
    pub async fn base(&self, username: &str) -> Result<Value, ImgurError> {
        let username = require("username", username)?;
        self.client
            .get(&format!("account/{}", seg(username)), &ApiParams::new())
            .await
    }

    /// Settings of the signed in account
    pub async fn settings(&self) -> Result<Value, ImgurError> {
        self.client.get("account/me/settings", &ApiParams::new()).await
    }

    pub async fn images(&self, username: &str, pager: Pager) -> Result<Value, ImgurError> {
        let username = require("username", username)?;
        let path = format!("account/{}/images/{}", seg(username), pager.page);
        self.client.get(&path, &pager.params()).await
    }

    pub async fn albums(&self, username: &str, pager: Pager) -> Result<Value, ImgurError> {
        let username = require("username", username)?;
        let path = format!("account/{}/albums/{}", seg(username), pager.page);
        self.client.get(&path, &pager.params()).await
    }

    pub async fn gallery_favorites(
        &self,
        username: &str,
        pager: Pager,
        sort: SortOrder,
    ) -> Result<Value, ImgurError> {
        let username = require("username", username)?;
        let path = format!(
            "account/{}/gallery_favorites/{}/{sort}",
            seg(username),
            pager.page
        );
        self.client.get(&path, &pager.params()).await
    }

    /// Deletes an image owned by the account using its delete hash
    pub async fn delete_image(&self, username: &str, delete_hash: &str) -> Result<Value, ImgurError> {
        let username = require("username", username)?;
        let delete_hash = require("delete hash", delete_hash)?;
        let path = format!("account/{}/image/{}", seg(username), seg(delete_hash));
        self.client.delete(&path, &ApiParams::new()).await
    }
}
