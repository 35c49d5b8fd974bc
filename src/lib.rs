/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Imgur
//!
//! This Imgur library was created for working with the Imgur API v3 interface.
//!
//! For further details on the Rest API refer to the [Imgur API Docs](https://apidocs.imgur.com/)
//!
//! ## Features
//!
//! - OAuth2 login (code, pin and token response types), token exchange and refresh
//! - Automatic refresh of an expired token before a request is sent
//! - Requests signed with `Bearer` or `Client-ID` authorization as appropriate
//! - Rate limit and error responses mapped to [`v3::ImgurError`]
//! - Thin wrappers for the account, album, image, gallery, comment, conversation and
//!   notification endpoints
//! - Lower level interface for handling the raw communication
//!
//! *The library keeps the token in memory only. Persisting it between runs is left up
//! to the consumer, [`v3::Token`] is serializable and can be put back with
//! [`v3::TokenStore::restore`]*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! imgur = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! **You will need to register an application with Imgur to get a client id/secret**
//!
//! ```rust,no_run
//! use imgur::v3::{Client, ClientConfig, Creds, GrantKind, ResponseType};
//!
//! async fn login_and_list_albums(client_id: &str, client_secret: &str) -> anyhow::Result<()> {
//!     let client = Client::new(ClientConfig::new(Creds::new(client_id, client_secret)))?;
//!
//!     // Send the user here and have them paste back the pin
//!     let auth = client.authenticator();
//!     println!("{}", auth.build_authorization_url(ResponseType::Pin, None));
//!     let pin = "1234567890";
//!     auth.request_access_token(pin, GrantKind::Pin).await?;
//!
//!     // Requests are now signed as the user
//!     let albums = client.account().albums("me", Default::default()).await?;
//!     println!("{albums:#}");
//!     Ok(())
//! }
//! ```
//!
pub mod v3;
