use std::fmt;
use thiserror::Error;

/// Failure class of an API call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The request never reached the server
    Network,
    /// 401/403 or no session token
    Auth,
    /// 400/422 or a client-side required-field check
    Validation,
    /// 5xx, any other status, or an unusable payload
    Server,
}

impl ApiErrorKind {
    /// Heading shown above the error message
    pub fn title(&self) -> &'static str {
        match self {
            ApiErrorKind::Network => "Connection problem",
            ApiErrorKind::Auth => "Not authorised",
            ApiErrorKind::Validation => "Check the entered data",
            ApiErrorKind::Server => "Server error",
        }
    }

    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ApiErrorKind::Auth,
            400 | 422 => ApiErrorKind::Validation,
            _ => ApiErrorKind::Server,
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ApiErrorKind::Network => "network",
            ApiErrorKind::Auth => "auth",
            ApiErrorKind::Validation => "validation",
            ApiErrorKind::Server => "server",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} error: {message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, message)
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Auth, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Validation, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Server, message)
    }

    /// Classify a non-success response.
    ///
    /// The message is taken from an `error` or `message` field of a JSON body,
    /// then from the raw body text, then from the status code.
    pub fn from_status(status: u16, body: &str) -> Self {
        let kind = ApiErrorKind::from_status(status);
        let from_json = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                ["error", "message"]
                    .iter()
                    .find_map(|key| v.get(*key).and_then(|m| m.as_str()).map(str::to_string))
            });
        let message = match from_json {
            Some(m) if !m.trim().is_empty() => m,
            _ if !body.trim().is_empty() && !body.trim_start().starts_with('{') => {
                body.trim().to_string()
            }
            _ => format!("HTTP {}", status),
        };
        Self::new(kind, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classes() {
        assert_eq!(ApiError::from_status(401, "").kind, ApiErrorKind::Auth);
        assert_eq!(ApiError::from_status(403, "").kind, ApiErrorKind::Auth);
        assert_eq!(ApiError::from_status(400, "").kind, ApiErrorKind::Validation);
        assert_eq!(ApiError::from_status(422, "").kind, ApiErrorKind::Validation);
        assert_eq!(ApiError::from_status(503, "").kind, ApiErrorKind::Server);
        assert_eq!(ApiError::from_status(404, "").kind, ApiErrorKind::Server);
    }

    #[test]
    fn test_message_from_json_body() {
        let err = ApiError::from_status(422, r#"{"error":"Client is required"}"#);
        assert_eq!(err.message, "Client is required");

        let err = ApiError::from_status(500, r#"{"message":"db down"}"#);
        assert_eq!(err.message, "db down");
    }

    #[test]
    fn test_message_fallbacks() {
        assert_eq!(ApiError::from_status(502, "Bad Gateway").message, "Bad Gateway");
        assert_eq!(ApiError::from_status(503, "").message, "HTTP 503");
        assert_eq!(ApiError::from_status(500, r#"{"detail":1}"#).message, "HTTP 500");
    }

    #[test]
    fn test_display() {
        let err = ApiError::auth("no session");
        assert_eq!(err.to_string(), "auth error: no session");
        assert_eq!(err.kind.title(), "Not authorised");
    }
}
