//! Millwright Procurement Service
//!
//! Parts-list stock checks, procurement order generation and inventory
//! summaries over the parts stock reference data.

use anyhow::Result;
use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

use millwright_database::initialize_database;
use millwright_models::{
    OrderDecision, ProcurementOrder, StockAssessment, StockRecord, StockSummary,
};
use millwright_utils::{init_logging, AppConfig, ErrorResponse, MillwrightError};

mod reconcile;
mod report;
mod service;
mod store;

use service::ProcurementService;
use store::PgStockStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|_| {
        eprintln!("Failed to load configuration, using defaults");
        AppConfig::default()
    });

    // Initialize logging
    init_logging(&config.logging)?;
    info!("Starting Millwright Procurement Service");

    // Initialize database
    let pool = initialize_database(&config.database).await?;
    info!("Database connection established");

    let service = ProcurementService::new(Arc::new(PgStockStore::new(pool)));

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/stock/check", post(check_stock))
        .route("/api/v1/stock/summary", get(stock_summary))
        .route("/api/v1/orders/generate", post(generate_order))
        .route("/api/v1/reports/stock", post(stock_report))
        .route("/api/v1/reports/order", post(order_report))
        .route("/api/v1/reports/summary", get(summary_report))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .with_state(service);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(&addr).await?;
    info!("Procurement Service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "millwright-procurement",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[derive(Debug, Deserialize)]
struct PartsListRequest {
    parts_list: String,
}

#[derive(Debug, Serialize)]
struct StockCheckResponse {
    parts_requested: usize,
    assessments: Vec<StockAssessment>,
}

#[derive(Debug, Serialize)]
struct OrderResponse {
    order_needed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<ProcurementOrder>,
}

impl From<OrderDecision> for OrderResponse {
    fn from(decision: OrderDecision) -> Self {
        match decision {
            OrderDecision::NotRequired => Self {
                order_needed: false,
                order: None,
            },
            OrderDecision::Required(order) => Self {
                order_needed: true,
                order: Some(order),
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct StockSummaryResponse {
    summary: StockSummary,
    low_stock_items: Vec<StockRecord>,
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

/// Assess stock for every line of a free-text parts list.
async fn check_stock(
    State(service): State<ProcurementService>,
    Json(payload): Json<PartsListRequest>,
) -> Result<Json<StockCheckResponse>, (StatusCode, Json<ErrorResponse>)> {
    let assessments = service
        .check_stock(&payload.parts_list)
        .await
        .map_err(error_response)?;

    Ok(Json(StockCheckResponse {
        parts_requested: assessments.len(),
        assessments,
    }))
}

/// Reconcile a parts list into a procurement order.
async fn generate_order(
    State(service): State<ProcurementService>,
    Json(payload): Json<PartsListRequest>,
) -> Result<Json<OrderResponse>, (StatusCode, Json<ErrorResponse>)> {
    let decision = service
        .generate_order(&payload.parts_list)
        .await
        .map_err(error_response)?;

    Ok(Json(OrderResponse::from(decision)))
}

/// Shelf-level inventory summary.
async fn stock_summary(
    State(service): State<ProcurementService>,
) -> Result<Json<StockSummaryResponse>, (StatusCode, Json<ErrorResponse>)> {
    let (summary, low_stock_items) = service.stock_summary().await.map_err(error_response)?;

    Ok(Json(StockSummaryResponse {
        summary,
        low_stock_items,
    }))
}

/// Markdown stock analysis for a parts list.
async fn stock_report(
    State(service): State<ProcurementService>,
    Json(payload): Json<PartsListRequest>,
) -> Result<Markdown, (StatusCode, Json<ErrorResponse>)> {
    let assessments = service
        .check_stock(&payload.parts_list)
        .await
        .map_err(error_response)?;

    Ok(Markdown(report::render_stock_analysis(&assessments)))
}

/// Markdown procurement order for a parts list.
async fn order_report(
    State(service): State<ProcurementService>,
    Json(payload): Json<PartsListRequest>,
) -> Result<Markdown, (StatusCode, Json<ErrorResponse>)> {
    let decision = service
        .generate_order(&payload.parts_list)
        .await
        .map_err(error_response)?;

    Ok(Markdown(report::render_order_decision(&decision)))
}

/// Markdown inventory summary.
async fn summary_report(
    State(service): State<ProcurementService>,
) -> Result<Markdown, (StatusCode, Json<ErrorResponse>)> {
    let (summary, low_stock) = service.stock_summary().await.map_err(error_response)?;

    Ok(Markdown(report::render_stock_summary(&summary, &low_stock)))
}

fn error_response(error: MillwrightError) -> (StatusCode, Json<ErrorResponse>) {
    error!(code = error.error_code(), "Request failed: {}", error);
    let status = StatusCode::from_u16(error.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::from(error)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_response_shapes() {
        let response = OrderResponse::from(OrderDecision::NotRequired);
        assert!(!response.order_needed);
        assert!(response.order.is_none());

        let rendered = serde_json::to_value(&response).unwrap();
        assert_eq!(rendered, serde_json::json!({ "order_needed": false }));
    }

    #[test]
    fn test_error_response_status_mapping() {
        let (status, body) = error_response(MillwrightError::invalid_input("bad parts list"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.code, "INVALID_INPUT");

        let (status, _) = error_response(MillwrightError::database("connection refused"));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
