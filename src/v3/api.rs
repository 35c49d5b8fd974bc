/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::auth::authorization_header_value;
use crate::v3::classifier::classify;
use crate::v3::config::{ClientConfig, Creds};
use crate::v3::errors::ImgurError;
use crate::v3::token::TokenStore;
use bytes::Bytes;
use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder};
use serde_json::{Value, json};
use std::borrow::Cow;
use std::path::PathBuf;

// Escapes a caller supplied id for use as a single path segment
pub(crate) fn seg(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// A single request parameter
#[derive(Debug, Clone)]
pub enum ParamValue {
    Text(String),
    /// Path to a local file, its contents are uploaded as a multipart part.
    ///
    /// The file is read with blocking I/O while the request is built. Use
    /// [`ParamValue::Bytes`] to upload data already loaded by the caller.
    File(PathBuf),
    /// In memory file contents uploaded as a multipart part
    Bytes { file_name: String, data: Bytes },
}

/// Ordered request parameters.
///
/// Sent as the query string for GET requests and as the body otherwise. A body
/// containing any file parameter goes out as `multipart/form-data`.
#[derive(Debug, Clone, Default)]
pub struct ApiParams {
    items: Vec<(String, ParamValue)>,
}

impl ApiParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.items.push((name.into(), ParamValue::Text(value.into())));
        self
    }

    /// Adds the parameter only if a value was given
    pub fn opt_text(self, name: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.text(name, v),
            None => self,
        }
    }

    /// Uploads a local file. It is read synchronously when the request is sent.
    pub fn file(mut self, name: &str, path: impl Into<PathBuf>) -> Self {
        self.items.push((name.into(), ParamValue::File(path.into())));
        self
    }

    pub fn bytes(mut self, name: &str, file_name: &str, data: impl Into<Bytes>) -> Self {
        self.items.push((
            name.into(),
            ParamValue::Bytes {
                file_name: file_name.into(),
                data: data.into(),
            },
        ));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_multipart(&self) -> bool {
        self.items
            .iter()
            .any(|(_, v)| !matches!(v, ParamValue::Text(_)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, ParamValue)> {
        self.items.iter()
    }

    fn text_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter().filter_map(|(k, v)| match v {
            ParamValue::Text(t) => Some((k.as_str(), t.as_str())),
            _ => None,
        })
    }

    fn to_form_body(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.text_pairs())
            .finish()
    }

    fn to_multipart(&self) -> Result<Form, ImgurError> {
        let mut form = Form::new();
        for (name, value) in &self.items {
            form = match value {
                ParamValue::Text(t) => form.text(name.clone(), t.clone()),
                ParamValue::File(path) => {
                    let data = std::fs::read(path)?;
                    let file_name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| name.clone());
                    form.part(name.clone(), Part::bytes(data).file_name(file_name))
                }
                ParamValue::Bytes { file_name, data } => form.part(
                    name.clone(),
                    Part::stream(data.clone()).file_name(file_name.clone()),
                ),
            };
        }
        Ok(form)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for ApiParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |p, (k, v)| p.text(k.as_ref(), v.as_ref()))
    }
}

/// Directly communicates with the API.
///
/// Every call signs, dispatches, classifies and decodes. The token store is shared
/// with the OAuth2 flow, so a refresh is picked up by the next request.
pub struct ApiClient {
    config: ClientConfig,
    https_client: reqwest::Client,
    tokens: TokenStore,
    pub(crate) refresh_lock: futures::lock::Mutex<()>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ImgurError> {
        let https_client = config.build_http_client()?;
        Ok(Self {
            config,
            https_client,
            tokens: TokenStore::new(),
            refresh_lock: futures::lock::Mutex::new(()),
        })
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn creds(&self) -> &Creds {
        &self.config.creds
    }

    pub(crate) fn https_client(&self) -> &reqwest::Client {
        &self.https_client
    }

    /// Resolves a resource path such as `account/me` against the base url
    pub fn url_for(&self, path: &str) -> Result<url::Url, ImgurError> {
        Ok(url::Url::parse(&self.config.base_url)?.join(path.trim_start_matches('/'))?)
    }

    /// Performs a request and returns the whole decoded envelope.
    ///
    /// An empty success body decodes as `{"data": [], "success": false}`.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        params: &ApiParams,
    ) -> Result<Value, ImgurError> {
        let mut req_url = self.url_for(path)?;
        if method == Method::GET && !params.is_empty() {
            req_url.query_pairs_mut().extend_pairs(params.text_pairs());
        }

        debug!("{method} {req_url}");
        let auth = authorization_header_value(self.tokens.token().as_ref(), &self.config.creds.client_id);
        let mut req = self
            .https_client
            .request(method.clone(), req_url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, auth);
        if method != Method::GET {
            req = self.attach_body(req, params)?;
        }

        let resp = req.send().await?;
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.text().await?;
        debug!("{method} {path} -> {status}");

        classify(status, &headers, &body)?;

        if body.trim().is_empty() {
            return Ok(json!({"data": [], "success": false}));
        }
        serde_json::from_str::<Value>(&body).map_err(|_| ImgurError::Transport {
            message: body,
            status: Some(status.as_u16()),
        })
    }

    fn attach_body(
        &self,
        req: RequestBuilder,
        params: &ApiParams,
    ) -> Result<RequestBuilder, ImgurError> {
        if params.is_multipart() {
            return Ok(req.multipart(params.to_multipart()?));
        }
        Ok(req
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(params.to_form_body()))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("creds", &self.config.creds)
            .field("base_url", &self.config.base_url)
            .finish()
    }
}
