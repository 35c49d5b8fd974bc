/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::ImgurError;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::RwLock;

/// Seconds shaved off `expires_in` so a token is refreshed before the API rejects it
pub const TOKEN_LATENCY_MARGIN: i64 = 30;

/// OAuth2 access/refresh credentials with the bookkeeping needed to detect expiry.
///
/// The effective expiry is `created_at + expires_in`. Serializable so callers can
/// persist it between runs and reinstate it with [`TokenStore::restore`].
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    #[serde(default)]
    pub expires_in: i64,

    #[serde(default)]
    pub created_at: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_username: Option<String>,
}

impl Token {
    /// Epoch second at which this token stops being usable
    pub fn expires_at(&self) -> i64 {
        self.created_at.saturating_add(self.expires_in)
    }

    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.expires_at()
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"xxx")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "xxx"))
            .field("expires_in", &self.expires_in)
            .field("created_at", &self.created_at)
            .field("account_username", &self.account_username)
            .finish()
    }
}

/// Holds the current token. Reads are concurrent, replacement is atomic.
#[derive(Debug, Default)]
pub struct TokenStore {
    token: RwLock<Option<Token>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current token with one decoded from a raw token endpoint payload.
    pub fn set_token(&self, payload: &Value) -> Result<Token, ImgurError> {
        self.set_token_at(payload, Utc::now().timestamp())
    }

    pub(crate) fn set_token_at(&self, payload: &Value, now: i64) -> Result<Token, ImgurError> {
        let mut token = parse_token_payload(payload)?;
        token.created_at = now;
        token.expires_in = token.expires_in.saturating_sub(TOKEN_LATENCY_MARGIN);

        *self.token.write().unwrap_or_else(|e| e.into_inner()) = Some(token.clone());
        Ok(token)
    }

    /// Reinstates a previously persisted token as is
    pub fn restore(&self, token: Token) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = Some(token);
    }

    /// Forgets the current token (logout)
    pub fn clear(&self) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    pub fn token(&self) -> Option<Token> {
        self.token.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// A store that never received a token counts as expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp())
    }

    pub(crate) fn is_expired_at(&self, now: i64) -> bool {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .is_none_or(|t| t.is_expired_at(now))
    }
}

fn parse_token_payload(payload: &Value) -> Result<Token, ImgurError> {
    if !payload.is_object() {
        return Err(ImgurError::auth("Token is not a valid json object.", None));
    }

    // Some endpoints wrap the token in the usual {"data": ...} envelope
    let payload = match payload.get("data") {
        Some(data) if data.get("access_token").is_some() => data,
        _ => payload,
    };

    if payload.get("access_token").is_none_or(Value::is_null) {
        return Err(ImgurError::auth(
            "Access token could not be retrieved from the decoded json response.",
            None,
        ));
    }

    serde_json::from_value::<Token>(payload.clone())
        .map_err(|e| ImgurError::auth(format!("Token payload is malformed: {e}"), None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_store_is_expired() {
        let store = TokenStore::new();
        assert!(store.token().is_none());
        assert!(store.is_expired());
    }

    #[test]
    fn rejects_null_and_missing_access_token() {
        let store = TokenStore::new();
        assert!(store.set_token(&Value::Null).unwrap_err().is_auth());
        assert!(store.set_token(&json!({})).unwrap_err().is_auth());
        assert!(store.set_token(&json!("T0K3N")).unwrap_err().is_auth());
        assert!(store.token().is_none());
    }

    #[test]
    fn stamps_creation_and_subtracts_margin() {
        let store = TokenStore::new();
        let token = store
            .set_token_at(&json!({"access_token": "T0K3N", "expires_in": 3600}), 1_000)
            .unwrap();

        assert_eq!(token.access_token, "T0K3N");
        assert_eq!(token.expires_in, 3570);
        assert_eq!(token.created_at, 1_000);
        assert_eq!(store.token(), Some(token));

        assert!(!store.is_expired_at(1_000));
        assert!(!store.is_expired_at(4_569));
        assert!(store.is_expired_at(4_570));
    }

    #[test]
    fn extreme_lifetimes_do_not_overflow() {
        let store = TokenStore::new();
        let token = store
            .set_token_at(&json!({"access_token": "x", "expires_in": i64::MIN}), 1_000)
            .unwrap();
        assert_eq!(token.expires_in, i64::MIN);
        assert!(store.is_expired_at(1_000));

        let token = store
            .set_token_at(&json!({"access_token": "x", "expires_in": i64::MAX}), 1_000)
            .unwrap();
        assert_eq!(token.expires_at(), i64::MAX);
        assert!(!store.is_expired_at(1_000));
        assert!(!store.is_expired());
    }

    #[test]
    fn fresh_token_is_not_expired() {
        let store = TokenStore::new();
        store
            .set_token(&json!({"access_token": "abc", "expires_in": 3600}))
            .unwrap();
        assert!(!store.is_expired());
    }

    #[test]
    fn unwraps_envelope_and_replaces_previous_token() {
        let store = TokenStore::new();
        store
            .set_token(&json!({"access_token": "first", "refresh_token": "r1", "expires_in": 60}))
            .unwrap();
        store
            .set_token(&json!({"data": {"access_token": "second", "expires_in": 60}}))
            .unwrap();

        let token = store.token().unwrap();
        assert_eq!(token.access_token, "second");
        assert_eq!(token.refresh_token, None);
    }

    #[test]
    fn restore_keeps_persisted_fields() {
        let store = TokenStore::new();
        let persisted = Token {
            access_token: "abc".into(),
            refresh_token: Some("def".into()),
            expires_in: 100,
            created_at: 50,
            token_type: Some("bearer".into()),
            scope: None,
            account_username: Some("someone".into()),
        };
        store.restore(persisted.clone());
        assert_eq!(store.token(), Some(persisted));
        assert!(store.is_expired_at(150));

        store.clear();
        assert!(store.token().is_none());
    }

    #[test]
    fn debug_redacts_secrets() {
        let token = Token {
            access_token: "secret-access".into(),
            refresh_token: Some("secret-refresh".into()),
            expires_in: 0,
            created_at: 0,
            token_type: None,
            scope: None,
            account_username: None,
        };
        let out = format!("{token:?}");
        assert!(!out.contains("secret"));
    }
}
