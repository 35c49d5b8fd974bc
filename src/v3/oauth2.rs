/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::api::ApiClient;
use crate::v3::errors::ImgurError;
use crate::v3::token::Token;
use log::{debug, info};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use std::sync::Arc;
use strum_macros::{EnumString, IntoStaticStr};

/// What the authorization endpoint should hand back to the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ResponseType {
    Code,
    Token,
    Pin,
}

/// How the value obtained from the authorization endpoint is exchanged for a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrantKind {
    #[default]
    AuthorizationCode,
    Pin,
}

/// Drives the OAuth2 login and refresh exchanges and keeps the token store current.
#[derive(Debug, Clone)]
pub struct Authenticator {
    api_client: Arc<ApiClient>,
}

impl Authenticator {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self { api_client }
    }

    /// URL the user is sent to in order to grant this application access.
    ///
    /// Parameters are always emitted in `client_id`, `response_type`, `state` order.
    pub fn build_authorization_url(&self, response_type: ResponseType, state: Option<&str>) -> String {
        let config = self.api_client.config();
        let response_type: &'static str = response_type.into();
        let mut url = format!(
            "{}?client_id={}&response_type={}",
            config.authorization_endpoint,
            urlencoding::encode(&config.creds.client_id),
            response_type
        );
        if let Some(state) = state {
            url.push_str("&state=");
            url.push_str(&urlencoding::encode(state));
        }
        url
    }

    /// Exchanges an authorization code (or pin) for a token and stores it
    pub async fn request_access_token(&self, code: &str, kind: GrantKind) -> Result<Token, ImgurError> {
        let creds = self.api_client.creds();
        let mut form = vec![
            ("client_id", creds.client_id.as_str()),
            ("client_secret", creds.client_secret.as_str()),
        ];
        match kind {
            GrantKind::AuthorizationCode => {
                form.push(("grant_type", "authorization_code"));
                form.push(("code", code));
            }
            GrantKind::Pin => {
                form.push(("grant_type", "pin"));
                form.push(("pin", code));
            }
        }

        let token = self
            .exchange(&form, "Request for access token failed. ")
            .await?;
        info!("Obtained access token for {:?}", token.account_username);
        Ok(token)
    }

    /// Trades the stored refresh token for a new token.
    ///
    /// Fails without a request when no refresh token is held.
    pub async fn refresh_token(&self) -> Result<Token, ImgurError> {
        let _guard = self.api_client.refresh_lock.lock().await;
        self.refresh_locked().await
    }

    /// Refreshes only if the stored token has expired and can be refreshed.
    ///
    /// Concurrent callers queue on the same lock and the expiry is checked again once
    /// it's held, so only the first one goes to the network.
    pub async fn refresh_if_expired(&self) -> Result<Option<Token>, ImgurError> {
        if !self.needs_refresh() {
            return Ok(None);
        }
        let _guard = self.api_client.refresh_lock.lock().await;
        if !self.needs_refresh() {
            return Ok(None);
        }
        self.refresh_locked().await.map(Some)
    }

    pub fn check_access_token_expired(&self) -> bool {
        self.api_client.tokens().is_expired()
    }

    /// Stores a token payload obtained outside of this client (e.g. implicit grant)
    pub fn set_access_token(&self, payload: &Value) -> Result<Token, ImgurError> {
        self.api_client.tokens().set_token(payload)
    }

    pub fn access_token(&self) -> Option<Token> {
        self.api_client.tokens().token()
    }

    pub fn logout(&self) {
        self.api_client.tokens().clear();
    }

    fn needs_refresh(&self) -> bool {
        let tokens = self.api_client.tokens();
        tokens.token().is_some_and(|t| t.refresh_token.is_some()) && tokens.is_expired()
    }

    async fn refresh_locked(&self) -> Result<Token, ImgurError> {
        let refresh_token = self
            .api_client
            .tokens()
            .token()
            .and_then(|t| t.refresh_token)
            .ok_or_else(|| ImgurError::auth("No refresh token available.", None))?;

        let creds = self.api_client.creds();
        let form = [
            ("refresh_token", refresh_token.as_str()),
            ("client_id", creds.client_id.as_str()),
            ("client_secret", creds.client_secret.as_str()),
            ("grant_type", "refresh_token"),
        ];
        let token = self
            .exchange(&form, "Request for refresh access token failed. ")
            .await?;
        info!("Refreshed access token");
        Ok(token)
    }

    // The token store is only touched once a 200 response has been decoded
    async fn exchange(&self, form: &[(&str, &str)], failure: &str) -> Result<Token, ImgurError> {
        let endpoint = &self.api_client.config().token_endpoint;
        debug!("POST {endpoint}");
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(form)
            .finish();
        let resp = self
            .api_client
            .https_client()
            .post(endpoint.as_str())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;
        let status = resp.status();
        let text = resp.text().await?;

        if status != reqwest::StatusCode::OK {
            return Err(ImgurError::auth(
                format!("{failure}{}", exchange_error(&text)),
                Some(status.as_u16()),
            ));
        }

        let payload = serde_json::from_str::<Value>(&text)
            .map_err(|_| ImgurError::auth(format!("{failure}{text}"), Some(status.as_u16())))?;
        self.api_client.tokens().set_token(&payload)
    }
}

// Token endpoint errors come as {"error": ...} or wrapped in {"data": {"error": ...}}
fn exchange_error(body: &str) -> String {
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return body.to_string();
    };
    json.get("error")
        .or_else(|| json.pointer("/data/error"))
        .map(|e| match e {
            Value::String(s) => s.clone(),
            other => other
                .get("message")
                .and_then(Value::as_str)
                .map_or_else(|| other.to_string(), String::from),
        })
        .unwrap_or_default()
}
