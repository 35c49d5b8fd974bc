/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Turns failed HTTP responses into [`ImgurError`]s.
//!
//! The API is not consistent about the shape of its error bodies, so classification
//! walks an ordered list of rules and the first one that recognizes the response wins.
//! Exhausted rate limit pools take precedence over anything the body says.

use crate::v3::errors::ImgurError;
use chrono::{Local, TimeZone};
use log::warn;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde_json::Value;

/// Rate limit state reported by the headers of a single response
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RateLimitSnapshot {
    pub user_remaining: Option<i64>,
    pub user_limit: Option<i64>,
    pub user_reset_epoch: Option<i64>,
    pub client_remaining: Option<i64>,
    pub client_limit: Option<i64>,
    pub post_remaining: Option<i64>,
    pub post_limit: Option<i64>,
    pub post_reset_epoch: Option<i64>,
}

impl RateLimitSnapshot {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            user_remaining: header_number(headers, "x-ratelimit-userremaining"),
            user_limit: header_number(headers, "x-ratelimit-userlimit"),
            user_reset_epoch: header_number(headers, "x-ratelimit-userreset"),
            client_remaining: header_number(headers, "x-ratelimit-clientremaining"),
            client_limit: header_number(headers, "x-ratelimit-clientlimit"),
            post_remaining: header_number(headers, "x-post-rate-limit-remaining"),
            post_limit: header_number(headers, "x-post-rate-limit-limit"),
            post_reset_epoch: header_number(headers, "x-post-rate-limit-reset"),
        }
    }
}

fn header_number(headers: &HeaderMap, name: &str) -> Option<i64> {
    let raw = headers.get(name)?.to_str().ok()?.trim();
    raw.parse::<i64>()
        .ok()
        .or_else(|| {
            raw.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(|v| v.floor() as i64)
        })
}

fn is_exhausted(remaining: Option<i64>) -> bool {
    remaining.is_some_and(|r| r < 1)
}

fn display_limit(limit: Option<i64>) -> String {
    limit.map_or_else(|| "unknown".to_string(), |l| l.to_string())
}

/// Formats an epoch second as a local `YYYY-MM-DD HH:MM:SS` timestamp
pub fn format_reset_time(epoch: i64) -> Option<String> {
    Local
        .timestamp_opt(epoch, 0)
        .single()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
}

/// Everything the rules are allowed to look at
struct FailedResponse<'a> {
    status: u16,
    limits: RateLimitSnapshot,
    body: &'a str,
    json: Option<Value>,
}

type Rule = fn(&FailedResponse<'_>) -> Option<ImgurError>;

// Evaluated top to bottom, first match wins
const RULES: &[Rule] = &[
    user_credits_exhausted,
    client_credits_exhausted,
    post_credits_exhausted,
    request_error_envelope,
    error_message_envelope,
    undecodable_body,
];

/// Inspects a response and returns the error it represents, if any.
///
/// Responses with a status below 400 always pass. A JSON body none of the rules
/// understand is reported by its status code alone.
pub fn classify(status: StatusCode, headers: &HeaderMap, body: &str) -> Result<(), ImgurError> {
    if !(status.is_client_error() || status.is_server_error()) {
        return Ok(());
    }

    let resp = FailedResponse {
        status: status.as_u16(),
        limits: RateLimitSnapshot::from_headers(headers),
        body,
        json: serde_json::from_str::<Value>(body).ok(),
    };

    let err = RULES
        .iter()
        .find_map(|rule| rule(&resp))
        .unwrap_or_else(|| api_error(format!("Error code: {}", resp.status), resp.status, None));
    warn!("Imgur request failed ({}): {}", resp.status, err);
    Err(err)
}

fn rate_limited(message: String, status: u16, reset_at: Option<i64>) -> ImgurError {
    ImgurError::RateLimit {
        message,
        status,
        reset_at,
    }
}

fn api_error(message: String, status: u16, request: Option<String>) -> ImgurError {
    ImgurError::Api {
        message,
        status,
        request,
    }
}

fn user_credits_exhausted(resp: &FailedResponse<'_>) -> Option<ImgurError> {
    let l = &resp.limits;
    is_exhausted(l.user_remaining).then(|| {
        rate_limited(
            format!(
                "No user credits available. The limit is {}",
                display_limit(l.user_limit)
            ),
            resp.status,
            l.user_reset_epoch,
        )
    })
}

fn client_credits_exhausted(resp: &FailedResponse<'_>) -> Option<ImgurError> {
    let l = &resp.limits;
    // The client pool has no reset header of its own, the user reset is what applies
    is_exhausted(l.client_remaining).then(|| {
        rate_limited(
            format!(
                "No application credits available. The limit is {} and will be reset at {}",
                display_limit(l.client_limit),
                reset_text(l.user_reset_epoch)
            ),
            resp.status,
            l.user_reset_epoch,
        )
    })
}

fn post_credits_exhausted(resp: &FailedResponse<'_>) -> Option<ImgurError> {
    let l = &resp.limits;
    is_exhausted(l.post_remaining).then(|| {
        rate_limited(
            format!(
                "No post credits available. The limit is {} and will be reset at {}",
                display_limit(l.post_limit),
                reset_text(l.post_reset_epoch)
            ),
            resp.status,
            l.post_reset_epoch,
        )
    })
}

fn reset_text(epoch: Option<i64>) -> String {
    epoch
        .and_then(format_reset_time)
        .unwrap_or_else(|| "unknown".to_string())
}

// {"data": {"request": "/3/...", "error": "message"}}
fn request_error_envelope(resp: &FailedResponse<'_>) -> Option<ImgurError> {
    let data = resp.json.as_ref()?.get("data")?;
    let request = data.get("request")?.as_str()?;
    let error = data.get("error")?.as_str()?;
    Some(api_error(
        format!("Request to: {request} failed with: \"{error}\""),
        resp.status,
        Some(request.to_string()),
    ))
}

// {"data": {"error": {"message": "..."}, "request"?: "..."}} or {"data": {"error": "..."}}
fn error_message_envelope(resp: &FailedResponse<'_>) -> Option<ImgurError> {
    let data = resp.json.as_ref()?.get("data")?;
    let error = data.get("error")?;
    let message = match error {
        Value::String(s) => s.as_str(),
        Value::Object(obj) => obj.get("message")?.as_str()?,
        _ => return None,
    };
    let request = data.get("request").and_then(Value::as_str);
    let text = match request {
        Some(request) => format!("Request to: {request} failed with: \"{message}\""),
        None => format!("Request failed with: \"{message}\""),
    };
    Some(api_error(text, resp.status, request.map(String::from)))
}

fn undecodable_body(resp: &FailedResponse<'_>) -> Option<ImgurError> {
    resp.json.is_none().then(|| ImgurError::Transport {
        message: resp.body.to_string(),
        status: Some(resp.status),
    })
}
