/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::token::Token;

/// Computes the `Authorization` header value for one outgoing request.
///
/// A token with a non-empty access token signs the request as the user, otherwise the
/// request is only identified by the application's client id. Must be evaluated for
/// every request since the token can be replaced between calls.
pub fn authorization_header_value(token: Option<&Token>, client_id: &str) -> String {
    match token {
        Some(t) if !t.access_token.is_empty() => format!("Bearer {}", t.access_token),
        _ => format!("Client-ID {client_id}"),
    }
}
