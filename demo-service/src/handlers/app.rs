use axum::{
    extract::State,
    http::Uri,
    response::{IntoResponse, Redirect},
    Json,
};
use chrono::{DateTime, Local};
use serde::Serialize;
use service_core::error::AppError;

use crate::models::{User, USERS};
use crate::startup::{AppState, INDEX_PATH};

/// Local date-time without offset, always with microseconds.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub server: String,
}

pub fn format_timestamp(now: DateTime<Local>) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

pub async fn index(State(state): State<AppState>) -> Json<IndexResponse> {
    Json(IndexResponse {
        message: format!("Hello from {}!", state.service.display_name),
        timestamp: format_timestamp(Local::now()),
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        server: state.service.label.clone(),
    })
}

pub async fn users() -> Json<&'static [User]> {
    Json(&USERS[..])
}

/// `/flask` without the trailing slash permanently redirects to the index,
/// keeping any query string.
pub async fn redirect_to_index(uri: Uri) -> Redirect {
    match uri.query() {
        Some(query) => Redirect::permanent(&format!("{}?{}", INDEX_PATH, query)),
        None => Redirect::permanent(INDEX_PATH),
    }
}

pub async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!(path = %uri.path(), "No route matched");
    AppError::NotFound(anyhow::anyhow!("{}", uri.path()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceSettings;
    use crate::startup::build_router;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use chrono::{NaiveDateTime, TimeZone};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn get(uri: &str) -> Response {
        build_router(AppState::new(ServiceSettings::default()))
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec()
    }

    #[test]
    fn timestamp_always_has_six_fractional_digits() {
        let on_the_second = Local.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(format_timestamp(on_the_second), "2024-01-01T12:00:00.000000");

        let rendered = format_timestamp(Local::now());
        assert!(NaiveDateTime::parse_from_str(&rendered, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(rendered.len(), "2024-01-01T12:00:00.000000".len());
    }

    #[tokio::test]
    async fn health_reports_configured_label() {
        let response = get("/flask/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let body = body_bytes(response).await;
        assert_eq!(body, br#"{"status":"ok","server":"flask"}"#);
    }

    #[tokio::test]
    async fn index_greets_with_display_name() {
        let settings = ServiceSettings {
            label: "rust".to_string(),
            display_name: "Rust".to_string(),
        };
        let response = build_router(AppState::new(settings))
            .oneshot(Request::builder().uri("/flask/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["message"], "Hello from Rust!");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn users_are_served_in_order() {
        let response = get("/flask/users").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = String::from_utf8(body_bytes(response).await).unwrap();
        assert_eq!(
            body,
            r#"[{"id":1,"name":"田中太郎"},{"id":2,"name":"山田花子"}]"#
        );
    }

    #[tokio::test]
    async fn missing_trailing_slash_redirects() {
        let response = get("/flask").await;
        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/flask/");
    }

    #[tokio::test]
    async fn redirect_keeps_query_string() {
        let response = get("/flask?x=1&lang=ja").await;
        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/flask/?x=1&lang=ja");
    }

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let response = get("/flask/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Not found: /flask/nope" }));
    }

    #[tokio::test]
    async fn wrong_method_keeps_framework_default() {
        let response = build_router(AppState::new(ServiceSettings::default()))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/flask/users")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
