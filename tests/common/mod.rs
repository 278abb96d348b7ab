//! Common test utilities for integration tests

use contab_cli::client::ApiClient;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Session token the mock login endpoint hands out
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-token";

/// User id the mock login endpoint hands out
#[allow(dead_code)]
pub const TEST_USER_ID: &str = "42";

/// Mounts a login endpoint that accepts any credentials.
#[allow(dead_code)]
pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/public/login"))
        .and(query_param("keepConnected", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": TEST_TOKEN,
            "userId": TEST_USER_ID,
        })))
        .mount(server)
        .await;
}

/// Creates a client pointed at the mock server and logs it in.
#[allow(dead_code)]
pub async fn logged_in_client(server: &MockServer) -> ApiClient {
    mount_login(server).await;
    let mut client = ApiClient::new(&server.uri()).expect("mock server uri is valid");
    client
        .login("user@example.com", "secret")
        .await
        .expect("mock login succeeds");
    client
}

/// Two tax documents for 2016-06, as the listing endpoint returns them
#[allow(dead_code)]
pub fn sample_tax_documents() -> serde_json::Value {
    json!([
        {"id": "11", "descGuia": "Nota Fiscal 72", "valorTotal": 18013.04},
        {"id": "22", "descGuia": "DAS", "valorTotal": 10.5}
    ])
}
