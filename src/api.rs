//! AgroView V4 API client.
//!
//! Every public operation performs exactly one HTTP round trip with bearer
//! authentication and returns the decoded body verbatim. Failures are
//! normalized into the small [`ApiError`] taxonomy so the command layer can
//! print one human-readable line and exit.

use crate::configuration::Configuration;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tracing::{debug, trace};

/// Default page size for list operations.
pub const DEFAULT_LIST_LIMIT: u32 = 50;

/// Error emitted by the AgroView API client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Authentication failed. Check your API key with 'agcli config show'.")]
    Authentication,
    #[error("Permission denied. Your API key does not grant access to this resource.")]
    Permission,
    #[error("Resource not found.")]
    NotFound,
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimit,
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    pub fn new(configuration: &Configuration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: configuration.base_url.clone(),
            api_key: configuration.api_key.clone(),
        }
    }

    pub async fn list_fields(&self, limit: Option<u32>) -> Result<Value, ApiError> {
        self.get_list("/v4/fields", limit).await
    }

    pub async fn get_field(&self, id: &str) -> Result<Value, ApiError> {
        self.get_one("/v4/fields", id).await
    }

    /// Creates a field. `name` is required by the API; `acres` and the
    /// GeoJSON `boundary` are sent only when given.
    pub async fn create_field(
        &self,
        name: &str,
        acres: Option<f64>,
        boundary: Option<&str>,
    ) -> Result<Value, ApiError> {
        let mut body = json!({ "name": name });
        if let Some(acres) = acres {
            body["acres"] = json!(acres);
        }
        if let Some(boundary) = boundary {
            // a GeoJSON document is passed through as structure, anything else verbatim
            body["boundary"] = serde_json::from_str(boundary).unwrap_or_else(|_| json!(boundary));
        }

        let url = format!("{}/v4/fields", self.base_url);
        debug!("POST {}", url);
        self.execute(self.client.post(url).json(&body)).await
    }

    pub async fn list_farms(&self, limit: Option<u32>) -> Result<Value, ApiError> {
        self.get_list("/v4/farms", limit).await
    }

    pub async fn get_farm(&self, id: &str) -> Result<Value, ApiError> {
        self.get_one("/v4/farms", id).await
    }

    pub async fn list_boundaries(&self, limit: Option<u32>) -> Result<Value, ApiError> {
        self.get_list("/v4/boundaries", limit).await
    }

    pub async fn get_boundary(&self, id: &str) -> Result<Value, ApiError> {
        self.get_one("/v4/boundaries", id).await
    }

    pub async fn list_harvest_activities(&self, limit: Option<u32>) -> Result<Value, ApiError> {
        self.get_list("/v4/activitySummaries/harvest", limit).await
    }

    pub async fn get_harvest_activity(&self, id: &str) -> Result<Value, ApiError> {
        self.get_one("/v4/activitySummaries/harvest", id).await
    }

    pub async fn list_planting_activities(&self, limit: Option<u32>) -> Result<Value, ApiError> {
        self.get_list("/v4/activitySummaries/planting", limit).await
    }

    pub async fn get_planting_activity(&self, id: &str) -> Result<Value, ApiError> {
        self.get_one("/v4/activitySummaries/planting", id).await
    }

    async fn get_list(&self, path: &str, limit: Option<u32>) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT);
        debug!("GET {}?limit={}", url, limit);
        self.execute(self.client.get(url).query(&[("limit", limit)]))
            .await
    }

    async fn get_one(&self, path: &str, id: &str) -> Result<Value, ApiError> {
        let url = format!("{}{}/{}", self.base_url, path, id);
        debug!("GET {}", url);
        self.execute(self.client.get(url)).await
    }

    /// Attaches authentication, sends the request, and maps the outcome.
    /// Transport failures become [`ApiError::Network`]; non-2xx statuses go
    /// through [`map_error_status`]; a 2xx body is decoded as JSON.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value, ApiError> {
        let response = request
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if status.is_success() {
            trace!("Raw response text for deserialization: {}", body);
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(map_error_status(status, &body))
        }
    }
}

/// Maps a non-2xx response to its error kind. The first four statuses map
/// unconditionally, regardless of body content.
pub fn map_error_status(status: StatusCode, body: &str) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Authentication,
        StatusCode::FORBIDDEN => ApiError::Permission,
        StatusCode::NOT_FOUND => ApiError::NotFound,
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimit,
        _ => ApiError::Api {
            status: status.as_u16(),
            message: error_message_from_body(body),
        },
    }
}

/// Server-supplied `message` field, else `error` field, else the body text.
fn error_message_from_body(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value.get("message").and_then(Value::as_str) {
            return message.to_string();
        }
        if let Some(error) = value.get("error").and_then(Value::as_str) {
            return error.to_string();
        }
    }
    body.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_statuses_map_regardless_of_body() {
        assert!(matches!(
            map_error_status(StatusCode::UNAUTHORIZED, r#"{"message":"nope"}"#),
            ApiError::Authentication
        ));
        assert!(matches!(
            map_error_status(StatusCode::FORBIDDEN, ""),
            ApiError::Permission
        ));
        assert!(matches!(
            map_error_status(StatusCode::NOT_FOUND, "gone"),
            ApiError::NotFound
        ));
        assert!(matches!(
            map_error_status(StatusCode::TOO_MANY_REQUESTS, r#"{"error":"slow down"}"#),
            ApiError::RateLimit
        ));
    }

    #[test]
    fn other_statuses_carry_the_body_message() {
        let error = map_error_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"message":"database unavailable"}"#,
        );
        match error {
            ApiError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "database unavailable");
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }

    #[test]
    fn message_field_wins_over_error_field() {
        let error = map_error_status(
            StatusCode::BAD_REQUEST,
            r#"{"message":"bad acres","error":"validation"}"#,
        );
        match error {
            ApiError::Api { message, .. } => assert_eq!(message, "bad acres"),
            other => panic!("unexpected error kind: {other:?}"),
        }
    }

    #[test]
    fn error_field_is_used_when_message_is_absent() {
        let error = map_error_status(StatusCode::BAD_REQUEST, r#"{"error":"validation"}"#);
        match error {
            ApiError::Api { message, .. } => assert_eq!(message, "validation"),
            other => panic!("unexpected error kind: {other:?}"),
        }
    }

    #[test]
    fn unparseable_body_is_passed_through() {
        let error = map_error_status(StatusCode::BAD_GATEWAY, "<html>502</html>");
        match error {
            ApiError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "<html>502</html>");
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }
}
