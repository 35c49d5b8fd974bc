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
use bytes::Bytes;
use serde_json::Value;
use std::path::PathBuf;

/// Where the uploaded image comes from
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Local file, sent as multipart form data. Read with blocking I/O, large
    /// uploads from async code should load the data and use [`ImageSource::Bytes`].
    File(PathBuf),
    /// Raw file contents, sent as multipart form data
    Bytes { file_name: String, data: Bytes },
    /// Remote URL the API fetches itself
    Url(String),
    Base64(String),
}

/// An image upload request
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub source: ImageSource,
    pub album: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl ImageUpload {
    pub fn new(source: ImageSource) -> Self {
        Self {
            source,
            album: None,
            name: None,
            title: None,
            description: None,
        }
    }

    pub fn album(mut self, album: &str) -> Self {
        self.album = Some(album.into());
        self
    }

    /// File name reported to the API
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.into());
        self
    }

    fn to_params(&self) -> Result<ApiParams, ImgurError> {
        let params = match &self.source {
            ImageSource::File(path) => ApiParams::new().text("type", "file").file("image", path.clone()),
            ImageSource::Bytes { file_name, data } => ApiParams::new()
                .text("type", "file")
                .bytes("image", file_name, data.clone()),
            ImageSource::Url(url) => ApiParams::new()
                .text("type", "url")
                .text("image", require("image url", url)?),
            ImageSource::Base64(encoded) => ApiParams::new()
                .text("type", "base64")
                .text("image", require("image data", encoded)?),
        };
        Ok(params
            .opt_text("album", self.album.as_deref())
            .opt_text("name", self.name.as_deref())
            .opt_text("title", self.title.as_deref())
            .opt_text("description", self.description.as_deref()))
    }
}

/// Image endpoints
///
/// See [Imgur API Docs](https://apidocs.imgur.com/#image) for the returned fields.
#[derive(Debug, Clone)]
pub struct ImageApi {
    client: Client,
}

impl ImageApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn image(&self, image_id: &str) -> Result<Value, ImgurError> {
        let image_id = require("image id", image_id)?;
        self.client
            .get(&format!("image/{}", seg(image_id)), &ApiParams::new())
            .await
    }

    pub async fn upload(&self, upload: &ImageUpload) -> Result<Value, ImgurError> {
        self.client.post("image", &upload.to_params()?).await
    }

    /// Updates the title and/or description of an image
    pub async fn update(
        &self,
        image_id: &str,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<Value, ImgurError> {
        let image_id = require("image id", image_id)?;
        if title.is_none() && description.is_none() {
            return Err(ImgurError::validation("title or description is required"));
        }
        let params = ApiParams::new()
            .opt_text("title", title)
            .opt_text("description", description);
        self.client
            .post(&format!("image/{}", seg(image_id)), &params)
            .await
    }

    /// Deletes an image by id, or by delete hash for anonymous uploads
    pub async fn delete(&self, image_id: &str) -> Result<Value, ImgurError> {
        let image_id = require("image id", image_id)?;
        self.client
            .delete(&format!("image/{}", seg(image_id)), &ApiParams::new())
            .await
    }

    pub async fn favorite(&self, image_id: &str) -> Result<Value, ImgurError> {
        let image_id = require("image id", image_id)?;
        self.client
            .post(&format!("image/{}/favorite", seg(image_id)), &ApiParams::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v3::api::ParamValue;

    fn text_param(params: &ApiParams, name: &str) -> Option<String> {
        params.iter().find_map(|(k, v)| match v {
            ParamValue::Text(t) if k == name => Some(t.clone()),
            _ => None,
        })
    }

    #[test]
    fn builder_fields_become_params() {
        let upload = ImageUpload::new(ImageSource::Url("https://example.com/cat.png".into()))
            .name("cat.png")
            .title("Cat")
            .album("abc");
        let params = upload.to_params().unwrap();
        assert_eq!(text_param(&params, "type").as_deref(), Some("url"));
        assert_eq!(text_param(&params, "name").as_deref(), Some("cat.png"));
        assert_eq!(text_param(&params, "title").as_deref(), Some("Cat"));
        assert_eq!(text_param(&params, "album").as_deref(), Some("abc"));
        assert_eq!(text_param(&params, "description"), None);
    }

    #[test]
    fn blank_url_is_rejected() {
        let upload = ImageUpload::new(ImageSource::Url(" ".into()));
        assert!(matches!(upload.to_params(), Err(ImgurError::Validation(_))));
    }
}
