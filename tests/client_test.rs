//! Tests for login, listings and the tax-document download flow

mod common;

use common::{logged_in_client, sample_tax_documents, TEST_TOKEN, TEST_USER_ID};
use contab_cli::client::{pdf_filename, ApiClient};
use contab_cli::errors::AppError;
use contab_cli::period::Period;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PERIOD: Period = Period {
    month: 6,
    year: 2016,
};

#[tokio::test]
async fn test_login_stores_session_and_sends_auth_headers() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;

    let session = client.session().unwrap();
    assert_eq!(session.token, TEST_TOKEN);
    assert_eq!(session.user_id, TEST_USER_ID);

    // The listing mock only matches when both session headers are echoed back
    Mock::given(method("GET"))
        .and(path("/impostopagar/list/6/2016"))
        .and(header("strinfs-token", TEST_TOKEN))
        .and(header("userId", TEST_USER_ID))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_tax_documents()))
        .expect(1)
        .mount(&server)
        .await;

    let documents = client.list_tax_documents(PERIOD).await.unwrap();
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].id, "11");
    assert_eq!(documents[0].description, "Nota Fiscal 72");
    assert_eq!(documents[1].total_value, 10.5);
}

#[tokio::test]
async fn test_login_rejected_with_401_makes_no_further_calls() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/public/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "invalid credentials"})),
        )
        .mount(&server)
        .await;

    let mut client = ApiClient::new(&server.uri()).unwrap();
    let result = client.login("user@example.com", "wrong").await;

    assert!(matches!(result, Err(AppError::AuthError(_))));
    // The client stays unauthenticated and the login was the only request
    assert!(client.session().is_err());
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_listing_before_login_fails_without_a_request() {
    let server = MockServer::start().await;
    let client = ApiClient::new(&server.uri()).unwrap();

    let result = client.list_tax_documents(PERIOD).await;
    assert!(matches!(result, Err(AppError::AuthError(_))));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_download_all_writes_one_file_per_document() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/impostopagar/list/6/2016"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_tax_documents()))
        .expect(1)
        .mount(&server)
        .await;

    // The download URL embeds the live session token, one request per document
    Mock::given(method("GET"))
        .and(path(format!("/impostopagar/download/{TEST_TOKEN}/11")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.4 doc11".to_vec()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/impostopagar/download/{TEST_TOKEN}/22")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.4 doc22".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let output_dir = TempDir::new().unwrap();
    let count = client
        .download_all_tax_documents(PERIOD, output_dir.path())
        .await
        .unwrap();

    assert_eq!(count, 2);
    let first = output_dir.path().join("2016-06_Nota_Fiscal_72-18013.04.pdf");
    let second = output_dir.path().join("2016-06_DAS-10.50.pdf");
    assert_eq!(std::fs::read(&first).unwrap(), b"%PDF-1.4 doc11");
    assert_eq!(std::fs::read(&second).unwrap(), b"%PDF-1.4 doc22");
}

#[tokio::test]
async fn test_failed_download_is_skipped_and_batch_continues() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/impostopagar/list/6/2016"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_tax_documents()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/impostopagar/download/{TEST_TOKEN}/11")))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/impostopagar/download/{TEST_TOKEN}/22")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.4 doc22".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let output_dir = TempDir::new().unwrap();
    let count = client
        .download_all_tax_documents(PERIOD, output_dir.path())
        .await
        .unwrap();

    // The 404 is reported and skipped; the second document still lands
    assert_eq!(count, 1);
    assert!(!output_dir
        .path()
        .join("2016-06_Nota_Fiscal_72-18013.04.pdf")
        .exists());
    assert!(output_dir.path().join("2016-06_DAS-10.50.pdf").exists());
}

#[tokio::test]
async fn test_download_overwrites_existing_file() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("/impostopagar/download/{TEST_TOKEN}/11")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.4 fresh".to_vec()))
        .mount(&server)
        .await;

    let output_dir = TempDir::new().unwrap();
    let filename = pdf_filename(PERIOD, "Nota Fiscal 72", 18013.04);
    let target = output_dir.path().join(&filename);
    std::fs::write(&target, b"stale").unwrap();

    let written = client.download_tax_document("11", &target).await.unwrap();
    assert!(written);
    assert_eq!(std::fs::read(&target).unwrap(), b"%PDF-1.4 fresh");
}

#[tokio::test]
async fn test_listing_error_surfaces_status_and_body() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/movimentacaousuario/listextrato/6/2016"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "internal failure"})),
        )
        .mount(&server)
        .await;

    let result = client.list_bank_transactions(PERIOD).await;
    match result.unwrap_err() {
        AppError::ApiError { status, body, .. } => {
            assert_eq!(status, 500);
            assert!(body.contains("internal failure"));
        }
        other => panic!("Expected ApiError, got: {other}"),
    }
}

#[tokio::test]
async fn test_invoice_listing_uses_fixed_cursor_and_limit() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/nota002/list/6/2016"))
        .and(query_param("cursor", "0"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"itens": []})))
        .expect(1)
        .mount(&server)
        .await;

    let value = client.list_invoices(PERIOD).await.unwrap();
    assert!(value["itens"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_cash_ledger_listing_passes_json_through() {
    let server = MockServer::start().await;
    let client = logged_in_client(&server).await;

    let body = json!([{"id": 1, "descricao": "Pro-labore", "valor": 1000.0}]);
    Mock::given(method("GET"))
        .and(path("/movimentacaousuario/listcaixa/6/2016"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let value = client.list_cash_ledger(PERIOD).await.unwrap();
    assert_eq!(value, body);
}
