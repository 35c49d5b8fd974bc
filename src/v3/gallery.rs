/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::api::{ApiParams, seg};
use crate::v3::errors::ImgurError;
use crate::v3::properties::{CommentSort, GallerySection, GallerySort, Vote, Window, require};
use crate::v3::Client;
use serde_json::Value;

/// Gallery endpoints
///
/// See [Imgur API Docs](https://apidocs.imgur.com/#gallery) for the returned fields.
#[derive(Debug, Clone)]
pub struct GalleryApi {
    client: Client,
}

impl GalleryApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists gallery posts. The window only affects the `top` section.
    pub async fn gallery(
        &self,
        section: GallerySection,
        sort: GallerySort,
        window: Window,
        page: u32,
        show_viral: bool,
    ) -> Result<Value, ImgurError> {
        let path = format!("gallery/{section}/{sort}/{window}/{page}");
        let params = ApiParams::new().text("showViral", show_viral.to_string());
        self.client.get(&path, &params).await
    }

    pub async fn search(
        &self,
        query: &str,
        sort: GallerySort,
        window: Window,
        page: u32,
    ) -> Result<Value, ImgurError> {
        let query = require("query", query)?;
        let path = format!("gallery/search/{sort}/{window}/{page}");
        self.client.get(&path, &ApiParams::new().text("q", query)).await
    }

    /// Fetches a single gallery album or image
    pub async fn item(&self, gallery_id: &str) -> Result<Value, ImgurError> {
        let gallery_id = require("gallery id", gallery_id)?;
        self.client
            .get(&format!("gallery/{}", seg(gallery_id)), &ApiParams::new())
            .await
    }

    pub async fn vote(&self, gallery_id: &str, vote: Vote) -> Result<Value, ImgurError> {
        let gallery_id = require("gallery id", gallery_id)?;
        self.client
            .post(&format!("gallery/{}/vote/{vote}", seg(gallery_id)), &ApiParams::new())
            .await
    }

    pub async fn comments(&self, gallery_id: &str, sort: CommentSort) -> Result<Value, ImgurError> {
        let gallery_id = require("gallery id", gallery_id)?;
        self.client
            .get(&format!("gallery/{}/comments/{sort}", seg(gallery_id)), &ApiParams::new())
            .await
    }
}
