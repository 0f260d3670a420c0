//! Typed access to the REST backend.
//!
//! An [`ApiClient`] is built from the current session and carries the bearer
//! token explicitly. Every response body is decoded with serde and then
//! checked with [`Validate`] before it reaches a page.

pub mod error;

pub use error::{ApiError, ApiErrorKind};

use contracts::domain::common::AggregateRoot;
use contracts::shared::response::CreatedResponse;
use contracts::shared::validation::Validate;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::{api_base, api_url};
use crate::system::auth::context::AuthState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    access_token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, access_token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token,
        }
    }

    /// Client for the signed-in user of `state`
    pub fn from_session(state: &AuthState) -> Self {
        Self::with_token(state.access_token.clone())
    }

    /// Client against the default backend
    pub fn with_token(access_token: Option<String>) -> Self {
        Self::new(api_base(), access_token)
    }

    /// Client for the public auth endpoints
    pub fn anonymous() -> Self {
        Self::new(api_base(), None)
    }

    pub fn url(&self, path: &str) -> String {
        api_url(&self.base_url, path)
    }

    fn bearer(&self) -> Result<String, ApiError> {
        match self.access_token.as_deref() {
            Some(token) if !token.is_empty() => Ok(format!("Bearer {}", token)),
            _ => Err(ApiError::auth("You are not signed in")),
        }
    }

    /// GET an authenticated resource
    pub async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Validate,
    {
        let url = self.url(path);
        log::debug!("GET {}", url);
        let response = Request::get(&url)
            .header("Authorization", &self.bearer()?)
            .send()
            .await
            .map_err(|e| ApiError::network(format!("Failed to send request: {}", e)))?;
        read(response).await
    }

    /// POST to an authenticated resource with a fresh idempotency key
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned + Validate,
    {
        let url = self.url(path);
        let idempotency_key = uuid::Uuid::new_v4().to_string();
        log::debug!("POST {} ({})", url, idempotency_key);
        let response = Request::post(&url)
            .header("Authorization", &self.bearer()?)
            .header("Idempotency-Key", &idempotency_key)
            .json(body)
            .map_err(|e| ApiError::validation(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::network(format!("Failed to send request: {}", e)))?;
        read(response).await
    }

    /// POST without a bearer token (login)
    pub async fn post_public<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned + Validate,
    {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::validation(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::network(format!("Failed to send request: {}", e)))?;
        read(response).await
    }

    /// POST whose response body is ignored (logout)
    pub async fn post_no_content<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::validation(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::network(format!("Failed to send request: {}", e)))?;
        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(response.status(), &body));
        }
        Ok(())
    }

    /// Whole collection of an aggregate
    pub async fn list<R>(&self) -> Result<Vec<R>, ApiError>
    where
        R: AggregateRoot + DeserializeOwned,
    {
        let items: Vec<R> = self.get(R::endpoint()).await?;
        log::debug!("{}: loaded {} records", R::full_name(), items.len());
        Ok(items)
    }

    /// Create a record and return its new id.
    ///
    /// The body is validated before anything is sent.
    pub async fn create<R, B>(&self, body: &B) -> Result<String, ApiError>
    where
        R: AggregateRoot,
        B: Serialize + Validate,
    {
        body.validate().map_err(ApiError::validation)?;
        let created: CreatedResponse = self.post(R::endpoint(), body).await?;
        log::debug!("{}: created {}", R::full_name(), created.id);
        Ok(created.id)
    }
}

async fn read<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned + Validate,
{
    let status = response.status();
    let ok = response.ok();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::network(format!("Failed to read response: {}", e)))?;
    if !ok {
        return Err(ApiError::from_status(status, &body));
    }
    decode(&body)
}

/// Decode and validate a success body
pub fn decode<T>(body: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_str(body)
        .map_err(|e| ApiError::server(format!("Failed to parse response: {}", e)))?;
    value
        .validate()
        .map_err(|e| ApiError::server(format!("Invalid response: {}", e)))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_aml_case::{AmlCase, AmlCaseStatus};

    #[test]
    fn test_decode_valid_collection() {
        let body = r#"[{"id":"aml-1","client_name":"Acme Ltd","risk_level":"high",
            "status":"approved","assigned_to":null,"id_document_expiry":"2026-11-02",
            "next_review_date":null}]"#;
        let cases: Vec<AmlCase> = decode(body).unwrap();
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].status, Some(AmlCaseStatus::Approved));
    }

    #[test]
    fn test_decode_rejects_invalid_records() {
        let body = r#"[{"id":"","client_name":"Acme Ltd","risk_level":null,"status":null,
            "assigned_to":null,"id_document_expiry":null,"next_review_date":null}]"#;
        let err = decode::<Vec<AmlCase>>(body).unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Server);
        assert!(err.message.contains("item #0"), "{}", err.message);
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        let err = decode::<CreatedResponse>("<html>").unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Server);
    }

    #[test]
    fn test_missing_token_is_auth_error() {
        let client = ApiClient::new("http://localhost:3000", None);
        assert_eq!(client.bearer().unwrap_err().kind, ApiErrorKind::Auth);

        let client = ApiClient::new("http://localhost:3000", Some("t0k".into()));
        assert_eq!(client.bearer().unwrap(), "Bearer t0k");
        assert_eq!(
            client.url("/tax/vat-returns"),
            "http://localhost:3000/api/tax/vat-returns"
        );
    }
}
