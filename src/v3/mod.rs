/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod api;
pub mod auth;
pub mod classifier;
pub mod client;
pub mod config;
pub mod errors;
pub mod oauth2;
pub mod properties;
pub mod token;

pub mod account;
pub mod album;
pub mod comment;
pub mod conversation;
pub mod gallery;
pub mod image;
pub mod notification;

pub use account::*;
pub use album::*;
pub use api::{ApiClient, ApiParams, ParamValue};
pub use auth::*;
pub use classifier::{RateLimitSnapshot, classify, format_reset_time};
pub use client::*;
pub use comment::*;
pub use config::*;
pub use conversation::*;
pub use errors::*;
pub use gallery::*;
pub use image::*;
pub use notification::*;
pub use oauth2::*;
pub use properties::*;
pub use token::*;
