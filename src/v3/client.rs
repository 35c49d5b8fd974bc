/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::api::{ApiClient, ApiParams};
use crate::v3::config::ClientConfig;
use crate::v3::errors::ImgurError;
use crate::v3::oauth2::Authenticator;
use crate::v3::token::TokenStore;
use crate::v3::{
    AccountApi, AlbumApi, CommentApi, ConversationApi, GalleryApi, ImageApi, NotificationApi,
};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Handle to the Imgur API. Cheap to clone, clones share the token.
///
/// ```rust,no_run
/// use imgur::v3::{Client, ClientConfig, Creds, GallerySection, GallerySort, Window};
///
/// # async fn run() -> Result<(), imgur::v3::ImgurError> {
/// let client = Client::new(ClientConfig::new(Creds::anonymous("my-client-id")))?;
/// let viral = client
///     .gallery()
///     .gallery(GallerySection::Hot, GallerySort::Viral, Window::Day, 0, true)
///     .await?;
/// println!("{viral}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    api_client: Arc<ApiClient>,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self, ImgurError> {
        Ok(Self {
            api_client: Arc::new(ApiClient::new(config)?),
        })
    }

    /// OAuth2 login and refresh operations sharing this client's token
    pub fn authenticator(&self) -> Authenticator {
        Authenticator::new(self.api_client.clone())
    }

    pub fn tokens(&self) -> &TokenStore {
        self.api_client.tokens()
    }

    /// Performs a request and returns the complete `{data, success, status}` envelope
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        params: &ApiParams,
    ) -> Result<Value, ImgurError> {
        if self.api_client.config().auto_refresh {
            self.authenticator().refresh_if_expired().await?;
        }
        self.api_client.execute(method, path, params).await
    }

    pub async fn get(&self, path: &str, params: &ApiParams) -> Result<Value, ImgurError> {
        self.data(Method::GET, path, params).await
    }

    pub async fn post(&self, path: &str, params: &ApiParams) -> Result<Value, ImgurError> {
        self.data(Method::POST, path, params).await
    }

    pub async fn put(&self, path: &str, params: &ApiParams) -> Result<Value, ImgurError> {
        self.data(Method::PUT, path, params).await
    }

    pub async fn delete(&self, path: &str, params: &ApiParams) -> Result<Value, ImgurError> {
        self.data(Method::DELETE, path, params).await
    }

    /// GET that deserializes the `data` field into `T`
    pub async fn get_as<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &ApiParams,
    ) -> Result<T, ImgurError> {
        Ok(serde_json::from_value(self.get(path, params).await?)?)
    }

    async fn data(&self, method: Method, path: &str, params: &ApiParams) -> Result<Value, ImgurError> {
        let mut envelope = self.execute(method, path, params).await?;
        match envelope.get_mut("data") {
            Some(data) => Ok(data.take()),
            None => Ok(envelope),
        }
    }

    pub fn account(&self) -> AccountApi {
        AccountApi::new(self.clone())
    }

    pub fn album(&self) -> AlbumApi {
        AlbumApi::new(self.clone())
    }

    pub fn image(&self) -> ImageApi {
        ImageApi::new(self.clone())
    }

    pub fn gallery(&self) -> GalleryApi {
        GalleryApi::new(self.clone())
    }

    pub fn comment(&self) -> CommentApi {
        CommentApi::new(self.clone())
    }

    pub fn conversation(&self) -> ConversationApi {
        ConversationApi::new(self.clone())
    }

    pub fn notification(&self) -> NotificationApi {
        NotificationApi::new(self.clone())
    }
}
