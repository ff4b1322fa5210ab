//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::domain::{LineName, StationName};

use super::dto::*;
use super::error::AppError;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations).post(register_station))
        .route("/lines", get(list_lines).post(create_line))
        .route("/lines/:name", get(get_line).delete(remove_line))
        .route("/lines/:name/sections", post(add_section))
        .route("/lines/:name/sections/:station", delete(delete_section))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List registered stations.
async fn list_stations(State(state): State<AppState>) -> Json<StationListResponse> {
    let network = state.network.read().await;
    let stations = network
        .stations()
        .names()
        .into_iter()
        .map(ToString::to_string)
        .collect();

    Json(StationListResponse { stations })
}

/// Register a new station.
async fn register_station(
    State(state): State<AppState>,
    Json(req): Json<RegisterStationRequest>,
) -> Result<(StatusCode, Json<StationResponse>), AppError> {
    let name = StationName::parse(&req.name)?;

    let mut network = state.network.write().await;
    if !network.register_station(name.clone()) {
        return Err(AppError::Conflict {
            message: format!("station {name} is already registered"),
        });
    }

    Ok((
        StatusCode::CREATED,
        Json(StationResponse {
            name: name.into_inner(),
        }),
    ))
}

/// List all lines with their stations.
async fn list_lines(State(state): State<AppState>) -> Json<LineListResponse> {
    let network = state.network.read().await;
    let lines = network.lines().iter().map(LineResponse::from_line).collect();

    Json(LineListResponse { lines })
}

/// Create a line between two registered stations.
async fn create_line(
    State(state): State<AppState>,
    Json(req): Json<CreateLineRequest>,
) -> Result<(StatusCode, Json<LineResponse>), AppError> {
    let name = LineName::parse(&req.name)?;

    let mut network = state.network.write().await;
    let line = network.add_line(name, &req.up_terminus, &req.down_terminus)?;

    Ok((StatusCode::CREATED, Json(LineResponse::from_line(line))))
}

/// Fetch one line.
async fn get_line(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<LineResponse>, AppError> {
    let network = state.network.read().await;
    let line = network.lines().get(&name).ok_or_else(|| AppError::NotFound {
        message: format!("line {name} does not exist"),
    })?;

    Ok(Json(LineResponse::from_line(line)))
}

/// Remove a line.
async fn remove_line(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut network = state.network.write().await;
    network.remove_line(&name)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Insert a station into a line.
async fn add_section(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(req): Json<AddSectionRequest>,
) -> Result<(StatusCode, Json<LineResponse>), AppError> {
    let mut network = state.network.write().await;
    let line = network.add_section(&name, &req.station, req.position)?;

    Ok((StatusCode::CREATED, Json(LineResponse::from_line(line))))
}

/// Remove a station from a line.
async fn delete_section(
    State(state): State<AppState>,
    Path((name, station)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let mut network = state.network.write().await;
    network.delete_section(&name, &station)?;

    Ok(StatusCode::NO_CONTENT)
}
