use axum::Json;
use serde::Serialize;

pub const SERVICE_NAME: &str = "latex-editor-api";
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub service: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EndpointInfo {
    pub path: &'static str,
    pub method: &'static str,
    pub description: &'static str,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub api_version: String,
    pub endpoints: &'static [EndpointInfo],
}

/// Every route served by the router in `routes::create_router`.
pub const ENDPOINTS: &[EndpointInfo] = &[
    EndpointInfo {
        path: "/health",
        method: "GET",
        description: "Health check",
    },
    EndpointInfo {
        path: "/api/v1/status",
        method: "GET",
        description: "API status",
    },
    EndpointInfo {
        path: "/api/v1/compile",
        method: "POST",
        description: "Compile LaTeX (future)",
    },
    EndpointInfo {
        path: "/api/v1/documents",
        method: "GET",
        description: "List documents",
    },
    EndpointInfo {
        path: "/api/v1/documents",
        method: "POST",
        description: "Create document",
    },
    EndpointInfo {
        path: "/api/v1/documents/{id}",
        method: "GET",
        description: "Get document",
    },
    EndpointInfo {
        path: "/api/v1/documents/{id}",
        method: "PUT",
        description: "Update document",
    },
    EndpointInfo {
        path: "/api/v1/documents/{id}",
        method: "DELETE",
        description: "Delete document",
    },
];

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        version: API_VERSION.into(),
        service: SERVICE_NAME.into(),
    })
}

pub async fn api_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        api_version: API_VERSION.into(),
        endpoints: ENDPOINTS,
    })
}
