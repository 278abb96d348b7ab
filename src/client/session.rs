use crate::errors::{AppError, AppResult};
use crate::models::LoginData;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info};
use url::Url;

/// Client for the accounting-service REST API.
///
/// Holds the HTTP client, the base URL and, after [`ApiClient::login`], the
/// session headers every authenticated call carries. The only state
/// transition is unauthenticated -> authenticated, triggered once by login.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: Option<Session>,
}

/// Token and user id issued at login, echoed as headers on all
/// subsequent authenticated calls. Lives for the process lifetime only.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user_id: String,
}

impl ApiClient {
    /// Creates an unauthenticated client against the given base URL.
    pub fn new(base_url: &str) -> AppResult<Self> {
        let base_url = Url::parse(base_url)?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            session: None,
        })
    }

    /// Returns the active session, or an error when login has not happened yet.
    pub fn session(&self) -> AppResult<&Session> {
        self.session
            .as_ref()
            .ok_or_else(|| AppError::AuthError("not logged in; call login() first".to_string()))
    }

    /// Builds an absolute URL for a path relative to the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// Authenticates against the service.
    ///
    /// Sends HTTP Basic credentials plus the JSON-encoded login payload the
    /// vendor expects in the query string, then stores the issued token and
    /// user id as the session for all subsequent calls.
    pub async fn login(&mut self, email: &str, password: &str) -> AppResult<&Session> {
        let login_json = serde_json::json!({ "email": email, "senha": password }).to_string();
        let url = self.endpoint("/public/login");
        debug!(url = %url, "POST");

        let response = self
            .http
            .post(&url)
            .basic_auth(email, Some(password))
            .query(&[("keepConnected", "true"), ("login", login_json.as_str())])
            .send()
            .await?;
        let response = check_status(response, "/public/login").await?;

        let data: LoginData = response.json().await.map_err(|e| {
            AppError::ParseError(format!("Login response missing expected fields: {e}"))
        })?;

        info!(email = email, user_id = %data.user_id, "Logged in to accounting service");
        self.session = Some(Session {
            token: data.token,
            user_id: data.user_id,
        });
        self.session()
    }

    /// Session headers (`strinfs-token` and `userId`) for authenticated calls.
    fn auth_headers(&self) -> AppResult<HeaderMap> {
        let session = self.session()?;
        let mut headers = HeaderMap::new();
        headers.insert(
            "strinfs-token",
            HeaderValue::from_str(&session.token)
                .map_err(|e| AppError::InvalidInput(format!("Invalid session token: {e}")))?,
        );
        headers.insert(
            "userId",
            HeaderValue::from_str(&session.user_id)
                .map_err(|e| AppError::InvalidInput(format!("Invalid user id: {e}")))?,
        );
        Ok(headers)
    }

    /// Authenticated GET returning the parsed JSON body unmodified in shape.
    pub(crate) async fn get_json(&self, path: &str) -> AppResult<Value> {
        let url = self.endpoint(path);
        debug!(url = %url, "GET");

        let response = self
            .http
            .get(&url)
            .headers(self.auth_headers()?)
            .send()
            .await?;
        let response = check_status(response, path).await?;

        response.json::<Value>().await.map_err(|e| {
            AppError::ParseError(format!("Failed to decode response from {path}: {e}"))
        })
    }

    /// Authenticated POST of a JSON body, returning the parsed JSON response.
    pub(crate) async fn post_json<T>(&self, path: &str, body: &T) -> AppResult<Value>
    where
        T: Serialize + ?Sized,
    {
        let url = self.endpoint(path);
        debug!(url = %url, "POST");

        let response = self
            .http
            .post(&url)
            .headers(self.auth_headers()?)
            .json(body)
            .send()
            .await?;
        let response = check_status(response, path).await?;

        response.json::<Value>().await.map_err(|e| {
            AppError::ParseError(format!("Failed to decode response from {path}: {e}"))
        })
    }

    /// Plain GET to an absolute URL, status left to the caller.
    /// Used by the streamed PDF download, which must not abort the batch.
    pub(crate) async fn send_get(&self, url: &str) -> AppResult<Response> {
        Ok(self.http.get(url).send().await?)
    }
}

/// Verifies the response status, rendering the error body the way the service
/// reports it: pretty-printed when the body is JSON, plain text otherwise.
///
/// 401/403 map to an authentication error so a rejected login stops the run
/// before any further calls.
pub(crate) async fn check_status(response: Response, endpoint: &str) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false);
    let body = response.text().await.unwrap_or_default();
    let body = if is_json {
        serde_json::from_str::<Value>(&body)
            .and_then(|v| serde_json::to_string_pretty(&v))
            .unwrap_or(body)
    } else {
        body
    };

    error!(
        status = status.as_u16(),
        endpoint = endpoint,
        body = %body,
        "Request failed"
    );

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(AppError::AuthError(format!(
            "Authentication rejected by {endpoint} (status {})",
            status.as_u16()
        )));
    }

    Err(AppError::ApiError {
        status: status.as_u16(),
        endpoint: endpoint.to_string(),
        body,
    })
}
