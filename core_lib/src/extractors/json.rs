//! JSON extractor whose rejections use the API error body

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;

pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(ApiJsonRejection::from(rejection)),
        }
    }
}

#[derive(Debug)]
pub enum ApiJsonRejection {
    MissingContentType,
    InvalidJson(String),
    Other(StatusCode, String),
}

impl From<JsonRejection> for ApiJsonRejection {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => ApiJsonRejection::MissingContentType,
            JsonRejection::JsonDataError(e) => ApiJsonRejection::InvalidJson(e.body_text()),
            JsonRejection::JsonSyntaxError(e) => ApiJsonRejection::InvalidJson(e.body_text()),
            other => ApiJsonRejection::Other(other.status(), other.body_text()),
        }
    }
}

impl IntoResponse for ApiJsonRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiJsonRejection::MissingContentType => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Expected request with `Content-Type: application/json`".to_string(),
            ),
            ApiJsonRejection::InvalidJson(detail) => {
                tracing::debug!("Rejected lead JSON: {}", detail);
                (StatusCode::BAD_REQUEST, "Invalid lead JSON".to_string())
            }
            ApiJsonRejection::Other(status, detail) => {
                tracing::debug!("Failed to read JSON body: {}", detail);
                let message = if status == StatusCode::PAYLOAD_TOO_LARGE {
                    "Request body too large".to_string()
                } else {
                    "Failed to parse JSON request".to_string()
                };
                (status, message)
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

impl std::fmt::Display for ApiJsonRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiJsonRejection::MissingContentType => write!(f, "Missing JSON content type"),
            ApiJsonRejection::InvalidJson(msg) => write!(f, "Invalid JSON: {}", msg),
            ApiJsonRejection::Other(_, msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for ApiJsonRejection {}
