/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use dotenvy::dotenv;
use imgur::v3::{Client, ClientConfig, GrantKind, ResponseType, Token};
use std::io::BufRead;
use std::path::PathBuf;

// Walks through the pin based OAuth2 flow and caches the token in a json file so the
// next run can skip the login.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let cache: PathBuf = std::env::var("IMGUR_TOKEN_CACHE")
        .unwrap_or_else(|_| "imgur_token.json".into())
        .into();
    let client = Client::new(ClientConfig::from_env()?)?;
    let auth = client.authenticator();

    if let Ok(data) = std::fs::read(&cache) {
        client.tokens().restore(serde_json::from_slice::<Token>(&data)?);
        // Stale tokens are refreshed lazily by the first request
        println!("Loaded cached token from {}", cache.display());
    } else {
        println!("Open this url and paste the pin below:");
        println!("{}", auth.build_authorization_url(ResponseType::Pin, None));

        let pin = std::io::stdin()
            .lock()
            .lines()
            .next()
            .transpose()?
            .unwrap_or_default();
        auth.request_access_token(pin.trim(), GrantKind::Pin).await?;
    }

    let account = client.account().base("me").await?;
    println!("Signed in as {}", account["url"]);

    if let Some(token) = auth.access_token() {
        std::fs::write(&cache, serde_json::to_vec_pretty(&token)?)?;
    }
    Ok(())
}
