//! Log in through the locator and list the caller's sessions.
//!
//! Run with: cargo run --example list_sessions -- <locator-url> <username> <password>

use anyhow::{bail, Context};
use locator_rest_client::logging::init_logging;
use locator_rest_client::{ClientRole, RestClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging("locator_rest_client=debug");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [locator, username, password] = args.as_slice() else {
        bail!("usage: list_sessions <locator-url> <username> <password>");
    };

    let anonymous = RestClient::new(ClientRole::external(locator.as_str()), None)?;
    let token = anonymous
        .issue_token(username, password)
        .await
        .context("login failed")?;
    let token_key = token["tokenKey"]
        .as_str()
        .context("token reply has no tokenKey")?;

    let client = anonymous.with_token(token_key);
    let sessions = client.list_sessions().await.context("listing sessions")?;

    for session in sessions.as_array().into_iter().flatten() {
        println!("{}\t{}", session["sessionId"], session["name"]);
    }

    Ok(())
}
