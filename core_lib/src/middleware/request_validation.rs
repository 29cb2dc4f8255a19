//! Request validation middleware for content type and size limits

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::convert::Infallible;

const ACCEPTED_CONTENT_TYPES: [&str; 2] = ["application/json", "application/x-www-form-urlencoded"];

const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
    script-src 'self' 'unsafe-inline' https://js.hcaptcha.com https://*.hcaptcha.com; \
    frame-src https://*.hcaptcha.com https://hcaptcha.com; \
    style-src 'self' 'unsafe-inline' https://*.hcaptcha.com; \
    connect-src 'self' https://*.hcaptcha.com https://hcaptcha.com; \
    img-src 'self' data: https:";

fn reject(status: StatusCode, message: String) -> Response {
    let body = Json(json!({
        "error": message,
        "status": status.as_u16(),
    }));
    (status, body).into_response()
}

/// Lead posts must be JSON or a urlencoded form and fit in `max_body_bytes`.
pub async fn request_validation_middleware(
    State(max_body_bytes): State<usize>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, Infallible> {
    let (parts, body) = request.into_parts();

    if parts.method == axum::http::Method::POST {
        let content_type = parts
            .headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");

        if !ACCEPTED_CONTENT_TYPES
            .iter()
            .any(|accepted| content_type.starts_with(accepted))
        {
            return Ok(reject(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Unsupported content type. Expected application/json or application/x-www-form-urlencoded".to_string(),
            ));
        }
    }

    let length = parts
        .headers
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<usize>().ok());

    if let Some(length) = length {
        if length > max_body_bytes {
            return Ok(reject(
                StatusCode::PAYLOAD_TOO_LARGE,
                format!(
                    "Request body too large. Maximum size is {} bytes",
                    max_body_bytes
                ),
            ));
        }
    }

    let request = Request::from_parts(parts, body);
    Ok(next.run(request).await)
}

pub async fn security_headers_middleware(
    request: Request<Body>,
    next: Next,
) -> Result<Response, Infallible> {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();

    headers.insert("X-Content-Type-Options", HeaderValue::from_static("nosniff"));
    headers.insert("X-Frame-Options", HeaderValue::from_static("DENY"));
    headers.insert(
        "Referrer-Policy",
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        "Content-Security-Policy",
        HeaderValue::from_static(CONTENT_SECURITY_POLICY),
    );

    Ok(response)
}
