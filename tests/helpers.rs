/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use imgur::v3::{Client, ClientConfig, Creds, Token};
use serde_json::{Value, json};
use wiremock::MockServer;

pub(crate) const CLIENT_ID: &str = "123";
pub(crate) const CLIENT_SECRET: &str = "456";

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Config pointing every endpoint at the mock server
pub(crate) fn config_for(server: &MockServer) -> ClientConfig {
    init_logging();
    ClientConfig::new(Creds::new(CLIENT_ID, CLIENT_SECRET))
        .base_url(&format!("{}/3/", server.uri()))
        .authorization_endpoint(&format!("{}/oauth2/authorize", server.uri()))
        .token_endpoint(&format!("{}/oauth2/token", server.uri()))
}

pub(crate) fn client_for(server: &MockServer) -> Client {
    Client::new(config_for(server)).unwrap()
}

/// Successful API envelope around `data`
#[allow(dead_code)]
pub(crate) fn envelope(data: Value) -> Value {
    json!({"data": data, "success": true, "status": 200})
}

#[allow(dead_code)]
pub(crate) fn token(access_token: &str, refresh_token: Option<&str>, created_at: i64, expires_in: i64) -> Token {
    serde_json::from_value(json!({
        "access_token": access_token,
        "refresh_token": refresh_token,
        "created_at": created_at,
        "expires_in": expires_in,
    }))
    .unwrap()
}

#[allow(dead_code)]
pub(crate) fn now() -> i64 {
    chrono::Utc::now().timestamp()
}
