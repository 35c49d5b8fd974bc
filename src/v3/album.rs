/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::api::{ApiParams, seg};
use crate::v3::errors::ImgurError;
use crate::v3::properties::{PrivacyLevel, require};
use crate::v3::Client;
use serde_json::Value;

/// Fields accepted when creating or updating an album. Unset fields are not sent.
#[derive(Debug, Clone, Default)]
pub struct AlbumProps {
    pub title: Option<String>,
    pub description: Option<String>,
    pub privacy: Option<PrivacyLevel>,
    /// Image id to use as the cover
    pub cover: Option<String>,
    pub ids: Vec<String>,
    pub delete_hashes: Vec<String>,
}

impl AlbumProps {
    fn to_params(&self) -> ApiParams {
        let privacy = self.privacy.map(|p| <&'static str>::from(p));
        let params = ApiParams::new()
            .opt_text("title", self.title.as_deref())
            .opt_text("description", self.description.as_deref())
            .opt_text("privacy", privacy)
            .opt_text("cover", self.cover.as_deref());
        let params = self.ids.iter().fold(params, |p, id| p.text("ids[]", id.as_str()));
        self.delete_hashes
            .iter()
            .fold(params, |p, hash| p.text("deletehashes[]", hash.as_str()))
    }
}

/// Album endpoints
///
/// See [Imgur API Docs](https://apidocs.imgur.com/#album) for the returned fields.
#[derive(Debug, Clone)]
pub struct AlbumApi {
    client: Client,
}

impl AlbumApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn album(&self, album_id: &str) -> Result<Value, ImgurError> {
        let album_id = require("album id", album_id)?;
        self.client
            .get(&format!("album/{}", seg(album_id)), &ApiParams::new())
            .await
    }

    pub async fn images(&self, album_id: &str) -> Result<Value, ImgurError> {
        let album_id = require("album id", album_id)?;
        self.client
            .get(&format!("album/{}/images", seg(album_id)), &ApiParams::new())
            .await
    }

    pub async fn create(&self, props: &AlbumProps) -> Result<Value, ImgurError> {
        self.client.post("album", &props.to_params()).await
    }

    /// Updates an album. Anonymous albums are addressed by their delete hash.
    pub async fn update(&self, album_id: &str, props: &AlbumProps) -> Result<Value, ImgurError> {
        let album_id = require("album id", album_id)?;
        self.client
            .put(&format!("album/{}", seg(album_id)), &props.to_params())
            .await
    }

    pub async fn delete(&self, album_id: &str) -> Result<Value, ImgurError> {
        let album_id = require("album id", album_id)?;
        self.client
            .delete(&format!("album/{}", seg(album_id)), &ApiParams::new())
            .await
    }

    /// Toggles the favorite flag of an album for the signed in user
    pub async fn favorite(&self, album_id: &str) -> Result<Value, ImgurError> {
        let album_id = require("album id", album_id)?;
        self.client
            .post(&format!("album/{}/favorite", seg(album_id)), &ApiParams::new())
            .await
    }

    pub async fn add_images(&self, album_id: &str, image_ids: &[&str]) -> Result<Value, ImgurError> {
        let album_id = require("album id", album_id)?;
        if image_ids.is_empty() {
            return Err(ImgurError::validation("at least one image id is required"));
        }
        let params = image_ids
            .iter()
            .fold(ApiParams::new(), |p, id| p.text("ids[]", *id));
        self.client
            .post(&format!("album/{}/add", seg(album_id)), &params)
            .await
    }
}
