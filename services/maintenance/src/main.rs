//! Millwright Maintenance Service
//!
//! Service manual and required-parts lookups for the equipment fleet,
//! backed by the maintenance reference tables.

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use millwright_database::initialize_database;
use millwright_models::{EquipmentPart, EquipmentSummary, ServiceManual};
use millwright_utils::{init_logging, AppConfig, ErrorResponse, MillwrightError};

mod report;
mod service;
mod store;

use service::MaintenanceService;
use store::PgManualStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|_| {
        eprintln!("Failed to load configuration, using defaults");
        AppConfig::default()
    });

    // Initialize logging
    init_logging(&config.logging)?;
    info!("Starting Millwright Maintenance Service");

    // Initialize database
    let pool = initialize_database(&config.database).await?;
    info!("Database connection established");

    let service = MaintenanceService::new(Arc::new(PgManualStore::new(pool)));

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/equipment", get(list_equipment))
        .route("/api/v1/equipment/:id/manual", get(get_manual))
        .route("/api/v1/equipment/:id/parts", get(get_parts))
        .route("/api/v1/reports/equipment", get(equipment_report))
        .route("/api/v1/reports/equipment/:id/manual", get(manual_report))
        .route("/api/v1/reports/equipment/:id/parts", get(parts_report))
        .layer(TraceLayer::new_for_http())
        .with_state(service);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(&addr).await?;
    info!("Maintenance Service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "millwright-maintenance",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[derive(Debug, Serialize)]
struct EquipmentListResponse {
    total: usize,
    equipment: Vec<EquipmentSummary>,
}

#[derive(Debug, Serialize)]
struct ManualResponse {
    manual: ServiceManual,
    parts: Vec<EquipmentPart>,
    total_quantity: i64,
}

impl ManualResponse {
    fn new(manual: ServiceManual, parts: Vec<EquipmentPart>) -> Self {
        let total_quantity = parts.iter().map(|p| p.quantity as i64).sum();
        Self {
            manual,
            parts,
            total_quantity,
        }
    }
}

/// Markdown report body.
struct Markdown(String);

impl IntoResponse for Markdown {
    fn into_response(self) -> Response {
        (
            [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
            self.0,
        )
            .into_response()
    }
}

/// Fleet catalog with per-equipment parts counts.
async fn list_equipment(
    State(service): State<MaintenanceService>,
) -> Result<Json<EquipmentListResponse>, (StatusCode, Json<ErrorResponse>)> {
    let equipment = service.list_equipment().await.map_err(error_response)?;

    Ok(Json(EquipmentListResponse {
        total: equipment.len(),
        equipment,
    }))
}

/// Service manual and required parts for one equipment unit.
async fn get_manual(
    State(service): State<MaintenanceService>,
    Path(equipment_id): Path<i32>,
) -> Result<Json<ManualResponse>, (StatusCode, Json<ErrorResponse>)> {
    let (manual, parts) = service
        .get_service_manual(equipment_id)
        .await
        .map_err(error_response)?;

    Ok(Json(ManualResponse::new(manual, parts)))
}

/// Required-parts list for one equipment unit.
async fn get_parts(
    State(service): State<MaintenanceService>,
    Path(equipment_id): Path<i32>,
) -> Result<Json<ManualResponse>, (StatusCode, Json<ErrorResponse>)> {
    let (manual, parts) = service
        .get_equipment_parts(equipment_id)
        .await
        .map_err(error_response)?;

    Ok(Json(ManualResponse::new(manual, parts)))
}

/// Markdown fleet catalog.
async fn equipment_report(
    State(service): State<MaintenanceService>,
) -> Result<Markdown, (StatusCode, Json<ErrorResponse>)> {
    let equipment = service.list_equipment().await.map_err(error_response)?;

    Ok(Markdown(report::render_equipment_list(&equipment)))
}

/// Markdown service manual.
async fn manual_report(
    State(service): State<MaintenanceService>,
    Path(equipment_id): Path<i32>,
) -> Result<Markdown, (StatusCode, Json<ErrorResponse>)> {
    let (manual, parts) = service
        .get_service_manual(equipment_id)
        .await
        .map_err(error_response)?;

    Ok(Markdown(report::render_service_manual(&manual, &parts)))
}

/// Markdown parts list.
async fn parts_report(
    State(service): State<MaintenanceService>,
    Path(equipment_id): Path<i32>,
) -> Result<Markdown, (StatusCode, Json<ErrorResponse>)> {
    let (manual, parts) = service
        .get_equipment_parts(equipment_id)
        .await
        .map_err(error_response)?;

    Ok(Markdown(report::render_equipment_parts(&manual, &parts)))
}

fn error_response(error: MillwrightError) -> (StatusCode, Json<ErrorResponse>) {
    error!(code = error.error_code(), "Request failed: {}", error);
    let status = StatusCode::from_u16(error.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::from(error)))
}
