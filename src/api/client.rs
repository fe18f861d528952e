//! API client for the Shelf backend.
//!
//! Translates typed intents (login, register, fetch books, ...) into HTTP
//! requests, attaches the bearer token from the session store when an
//! operation requires authentication, and normalizes response envelopes.
//!
//! This layer performs no UI side effects: every operation returns a
//! `Result` and the app layer decides how failures are surfaced.

use serde::{Deserialize, Serialize};

use crate::adapters::ReqwestHttpClient;
use crate::api::envelope;
use crate::api::error::ApiError;
use crate::models::{Book, Page, User};
use crate::session::SessionStore;
use crate::traits::{Headers, HttpClient, Response};

/// Login form payload.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration form payload.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Successful login payload: the issued token plus the user's profile.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub user: User,
}

/// Client for the Shelf backend API.
///
/// Generic over the HTTP transport so tests can substitute
/// [`crate::adapters::MockHttpClient`].
#[derive(Debug, Clone)]
pub struct ApiClient<H: HttpClient = ReqwestHttpClient> {
    base_url: String,
    http: H,
    session: SessionStore,
}

impl ApiClient<ReqwestHttpClient> {
    /// Create a production client against `base_url`.
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self::with_http(base_url, ReqwestHttpClient::new(), session)
    }
}

impl<H: HttpClient> ApiClient<H> {
    /// Create a client with a custom transport.
    pub fn with_http(base_url: impl Into<String>, http: H, session: SessionStore) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http,
            session,
        }
    }

    /// The session store this client reads tokens from.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Sign in. On success the returned token is persisted via the session
    /// store before this returns.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginData, ApiError> {
        let response = self
            .post("/login", request, self.json_headers(), "Login failed")
            .await?;

        let data: LoginData = envelope::normalize_data(&response.body)?;
        self.session.set_token(&data.token);
        Ok(data)
    }

    /// Create an account. Does not sign the user in.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.post(
            "/register",
            request,
            self.json_headers(),
            "Registration failed",
        )
        .await?;
        Ok(())
    }

    /// Sign out.
    ///
    /// The token is cleared before the backend is notified, so logout is
    /// reliable even when the network request fails; a backend failure is
    /// only logged. With no stored token this is a no-op.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let Ok(headers) = self.bearer_headers() else {
            return Ok(());
        };
        self.session.clear();

        if let Err(err) = self
            .post("/logout", &serde_json::json!({}), headers, "Logout failed")
            .await
        {
            tracing::warn!("logout request failed after clearing session: {}", err);
        }
        Ok(())
    }

    /// Fetch the authenticated user's profile.
    pub async fn profile(&self) -> Result<User, ApiError> {
        let headers = self.bearer_headers()?;
        let response = self
            .get("/profile", headers, "Failed to load profile")
            .await?;
        envelope::normalize_item(&response.body, "user")
    }

    /// Fetch one page of the catalog.
    pub async fn books(&self, page: usize, per_page: usize) -> Result<Page<Book>, ApiError> {
        let headers = self.bearer_headers()?;
        let path = format!("/books?page={}&per_page={}", page, per_page);
        let response = self.get(&path, headers, "Failed to load books").await?;
        envelope::normalize_list(&response.body, "books")
    }

    /// Fetch a single book by id.
    pub async fn book(&self, id: u64) -> Result<Book, ApiError> {
        let headers = self.bearer_headers()?;
        let path = format!("/books/view/{}", id);
        let response = self.get(&path, headers, "Failed to load book").await?;
        envelope::normalize_item(&response.body, "book")
    }

    /// Fetch one page of the user's reading history.
    pub async fn user_history(&self, page: usize, per_page: usize) -> Result<Page<Book>, ApiError> {
        let headers = self.bearer_headers()?;
        let path = format!("/users/history?page={}&per_page={}", page, per_page);
        let response = self
            .get(&path, headers, "Failed to load reading history")
            .await?;
        envelope::normalize_list(&response.body, "userhistory")
    }

    fn json_headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers
    }

    /// JSON headers plus the bearer token. Fails fast with
    /// [`ApiError::Unauthenticated`] before any network call when no token
    /// is stored.
    fn bearer_headers(&self) -> Result<Headers, ApiError> {
        let token = self.session.token().ok_or(ApiError::Unauthenticated)?;
        let mut headers = self.json_headers();
        headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        Ok(headers)
    }

    async fn get(
        &self,
        path: &str,
        headers: Headers,
        fallback: &str,
    ) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url, &headers).await?;
        Self::check_status(response, fallback)
    }

    async fn post<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        headers: Headers,
        fallback: &str,
    ) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let body = serde_json::to_string(body)
            .map_err(|e| ApiError::MalformedResponse(format!("failed to encode body: {}", e)))?;
        let response = self.http.post(&url, &body, &headers).await?;
        Self::check_status(response, fallback)
    }

    fn check_status(response: Response, fallback: &str) -> Result<Response, ApiError> {
        if response.is_success() {
            return Ok(response);
        }
        Err(ApiError::RequestFailed {
            status: response.status,
            message: envelope::error_message(&response.body, fallback),
        })
    }
}
