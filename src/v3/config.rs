/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::ImgurError;
use std::time::Duration;

// Root Imgur API
pub const API_ORIGIN: &str = "https://api.imgur.com/3/";
pub const AUTHORIZATION_ENDPOINT: &str = "https://api.imgur.com/oauth2/authorize";
pub const TOKEN_ENDPOINT: &str = "https://api.imgur.com/oauth2/token";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = concat!("imgur-rs/", env!("CARGO_PKG_VERSION"));

/// Application credentials registered with Imgur
#[derive(Default, Clone)]
pub struct Creds {
    pub(crate) client_id: String,
    pub(crate) client_secret: String,
}

impl Creds {
    pub fn new(client_id: &str, client_secret: &str) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Credentials that can only make anonymous (Client-ID) requests
    pub fn anonymous(client_id: &str) -> Self {
        Self::new(client_id, "")
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creds")
            .field("client_id", &self.client_id)
            .field("client_secret", &"xxx")
            .finish()
    }
}

/// Everything a [`crate::v3::Client`] needs at construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub(crate) creds: Creds,
    pub(crate) base_url: String,
    pub(crate) authorization_endpoint: String,
    pub(crate) token_endpoint: String,
    pub(crate) timeout: Duration,
    pub(crate) user_agent: String,
    pub(crate) auto_refresh: bool,
    pub(crate) http_client: Option<reqwest::Client>,
}

impl ClientConfig {
    pub fn new(creds: Creds) -> Self {
        Self {
            creds,
            base_url: API_ORIGIN.into(),
            authorization_endpoint: AUTHORIZATION_ENDPOINT.into(),
            token_endpoint: TOKEN_ENDPOINT.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.into(),
            auto_refresh: true,
            http_client: None,
        }
    }

    /// Builds a config from `IMGUR_CLIENT_ID` and the optional `IMGUR_CLIENT_SECRET`
    pub fn from_env() -> Result<Self, ImgurError> {
        let client_id = std::env::var("IMGUR_CLIENT_ID")
            .map_err(|_| ImgurError::validation("IMGUR_CLIENT_ID is not set"))?;
        let client_secret = std::env::var("IMGUR_CLIENT_SECRET").unwrap_or_default();
        Ok(Self::new(Creds::new(&client_id, &client_secret)))
    }

    /// Root the resource paths are joined onto. A trailing `/` is added if missing.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = if base_url.ends_with('/') {
            base_url.into()
        } else {
            format!("{base_url}/")
        };
        self
    }

    pub fn authorization_endpoint(mut self, url: &str) -> Self {
        self.authorization_endpoint = url.into();
        self
    }

    pub fn token_endpoint(mut self, url: &str) -> Self {
        self.token_endpoint = url.into();
        self
    }

    /// Per request timeout. Ignored when a transport is supplied with [`Self::http_client`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: &str) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Whether an expired token is refreshed before a request is dispatched
    pub fn auto_refresh(mut self, enabled: bool) -> Self {
        self.auto_refresh = enabled;
        self
    }

    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn creds(&self) -> &Creds {
        &self.creds
    }

    pub(crate) fn build_http_client(&self) -> Result<reqwest::Client, ImgurError> {
        if let Some(client) = &self.http_client {
            return Ok(client.clone());
        }
        Ok(reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .build()?)
    }
}
