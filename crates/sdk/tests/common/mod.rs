//! Shared setup for the wiremock-backed integration tests.

use unleash_admin_sdk::Client;
use wiremock::MockServer;

#[allow(dead_code)]
pub const TOKEN: &str = "*:*.integration-token";

/// Start a mock server and a client pointed at its `/api` prefix.
pub async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let client = Client::builder()
        .base_url(format!("{}/api", server.uri()))
        .auth_token(TOKEN)
        .build()
        .expect("client builds against mock server");
    (server, client)
}
