use axum::{extract::State, Json};

use crate::api::body::{json_object, required_string_field, JsonPayload};
use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::domain::CompileReport;

/// Placeholder: acknowledges the source without rendering it.
pub async fn compile_latex(
    State(state): State<AppState>,
    payload: JsonPayload,
) -> Result<Json<CompileReport>, ApiError> {
    let body = json_object(payload, state.config.max_body_bytes)?;
    let latex = required_string_field(&body, "latex")?;

    let report = state.compile_service.compile(&latex).await?;
    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::api::routes::test_support::{send, send_raw, test_app};

    #[tokio::test]
    async fn test_compile_accepts_latex() {
        let (status, body) = send(
            &test_app(),
            "POST",
            "/api/v1/compile",
            Some(json!({ "latex": "\\documentclass{article}" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["input_length"], 23);
        assert!(body["message"].as_str().unwrap().contains("client-side"));
    }

    #[tokio::test]
    async fn test_compile_requires_latex_field() {
        let (status, body) = send(
            &test_app(),
            "POST",
            "/api/v1/compile",
            Some(json!({ "other": "data" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing 'latex' field in request body");
    }

    #[tokio::test]
    async fn test_compile_requires_json() {
        let (status, body) =
            send_raw(&test_app(), "POST", "/api/v1/compile", "text/plain", "not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_compile_rejects_non_string_latex() {
        let (status, _) = send(
            &test_app(),
            "POST",
            "/api/v1/compile",
            Some(json!({ "latex": 42 })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_compile_requires_post() {
        let (status, body) = send(&test_app(), "GET", "/api/v1/compile", None).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"], "Method not allowed");
    }
}
