use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::api::body::{json_object, string_field, JsonPayload};
use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::domain::{Document, DocumentPatch, NewDocument};

#[derive(Debug, Serialize)]
pub struct DocumentListResponse {
    pub documents: Vec<Document>,
}

pub async fn create_document(
    State(state): State<AppState>,
    payload: JsonPayload,
) -> Result<(StatusCode, Json<Document>), ApiError> {
    let body = json_object(payload, state.config.max_body_bytes)?;
    if body.is_empty() {
        return Err(ApiError::bad_request("Request body is empty"));
    }

    let content = string_field(&body, "content")?
        .ok_or_else(|| ApiError::bad_request("Missing 'content' field in request body"))?;
    let title = string_field(&body, "title")?;

    let doc = state
        .document_service
        .create(NewDocument { title, content })
        .await?;
    Ok((StatusCode::CREATED, Json(doc)))
}

pub async fn list_documents(
    State(state): State<AppState>,
) -> Result<Json<DocumentListResponse>, ApiError> {
    let documents = state.document_service.list().await?;
    Ok(Json(DocumentListResponse { documents }))
}

pub async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Document>, ApiError> {
    Ok(Json(state.document_service.get(&id).await?))
}

pub async fn update_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: JsonPayload,
) -> Result<Json<Document>, ApiError> {
    let body = json_object(payload, state.config.max_body_bytes)?;
    let patch = DocumentPatch {
        title: string_field(&body, "title")?,
        content: string_field(&body, "content")?,
    };

    Ok(Json(state.document_service.update(&id, patch).await?))
}

pub async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.document_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
