/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use std::io;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum ImgurError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    /// Token payload was malformed, or a code/pin exchange or refresh was rejected.
    #[error("{message}")]
    Auth { message: String, status: Option<u16> },

    /// One of the user, client or post credit pools is exhausted.
    #[error("{message}")]
    RateLimit {
        message: String,
        status: u16,
        reset_at: Option<i64>,
    },

    /// The API answered with an error envelope describing the failed operation.
    #[error("{message}")]
    Api {
        message: String,
        status: u16,
        request: Option<String>,
    },

    /// Failure below the API layer: connection problems or a body that isn't JSON.
    #[error("{message}")]
    Transport { message: String, status: Option<u16> },

    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Raised locally before any request is sent.
    #[error("Invalid argument. {0}")]
    Validation(String),

    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),
}

impl ImgurError {
    pub(crate) fn auth(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Auth {
            message: message.into(),
            status,
        }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// HTTP status code associated with the failure, when there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { status, .. } | Self::Transport { status, .. } => *status,
            Self::RateLimit { status, .. } | Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimit { .. })
    }

    /// True when the caller should restart the login flow
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }
}

impl From<reqwest::Error> for ImgurError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::Timeout(err.to_string());
        }
        Self::Transport {
            message: err.to_string(),
            status: err.status().map(|s| s.as_u16()),
        }
    }
}
