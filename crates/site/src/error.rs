//! Site error types and handling

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    // Tenant resolution
    #[error("Tenant not found for host: {0}")]
    TenantNotFound(String),
    #[error("Tenant not identified")]
    TenantNotIdentified,
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // Unresolved hosts get a bare text body; nothing tenant-specific exists yet
            SiteError::TenantNotFound(_) => {
                return (
                    StatusCode::NOT_FOUND,
                    [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                    self.to_string(),
                )
                    .into_response();
            }
            SiteError::TenantNotIdentified => (StatusCode::BAD_REQUEST, "TENANT_NOT_IDENTIFIED", self.to_string()),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type alias for site handlers
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_tenant_not_found_is_plain_text_404() {
        let response = SiteError::TenantNotFound("unknown.example.com".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Tenant not found for host: unknown.example.com");
    }

    #[tokio::test]
    async fn test_tenant_not_identified_uses_json_envelope() {
        let response = SiteError::TenantNotIdentified.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "TENANT_NOT_IDENTIFIED");
        assert_eq!(json["error"]["message"], "Tenant not identified");
    }
}
