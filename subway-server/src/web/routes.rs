//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::domain::{LineId, StationId};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", post(create_station).get(list_stations))
        .route("/stations/:id", delete(delete_station))
        .route("/lines", post(create_line).get(list_lines))
        .route(
            "/lines/:id",
            get(get_line).put(update_line).delete(delete_line),
        )
        .route(
            "/lines/:id/sections",
            post(add_section).delete(remove_station),
        )
        .route("/paths", get(find_path))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn create_station(
    State(state): State<AppState>,
    Json(req): Json<CreateStationRequest>,
) -> (StatusCode, Json<StationResponse>) {
    let station = state.network.create_station(req.name).await;
    (StatusCode::CREATED, Json(StationResponse::from(&station)))
}

async fn list_stations(State(state): State<AppState>) -> Json<Vec<StationResponse>> {
    let stations = state.network.stations().await;
    Json(stations.iter().map(StationResponse::from).collect())
}

async fn delete_station(
    State(state): State<AppState>,
    id: Result<Path<StationId>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    state.network.delete_station(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn create_line(
    State(state): State<AppState>,
    Json(req): Json<CreateLineRequest>,
) -> Result<(StatusCode, Json<LineResponse>), AppError> {
    let view = state.network.create_line(req.into()).await?;
    Ok((StatusCode::CREATED, Json(view.into())))
}

async fn list_lines(State(state): State<AppState>) -> Json<Vec<LineResponse>> {
    let lines = state.network.lines().await;
    Json(lines.into_iter().map(LineResponse::from).collect())
}

async fn get_line(
    State(state): State<AppState>,
    id: Result<Path<LineId>, PathRejection>,
) -> Result<Json<LineResponse>, AppError> {
    let Path(id) = id?;
    let view = state.network.line(id).await?;
    Ok(Json(view.into()))
}

async fn update_line(
    State(state): State<AppState>,
    id: Result<Path<LineId>, PathRejection>,
    Json(req): Json<UpdateLineRequest>,
) -> Result<Json<LineResponse>, AppError> {
    let Path(id) = id?;
    let view = state.network.update_line(id, req.name, req.color).await?;
    Ok(Json(view.into()))
}

async fn delete_line(
    State(state): State<AppState>,
    id: Result<Path<LineId>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    state.network.delete_line(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Insert a section, extending the line or splitting one of its sections.
async fn add_section(
    State(state): State<AppState>,
    id: Result<Path<LineId>, PathRejection>,
    Json(req): Json<SectionRequest>,
) -> Result<Json<LineResponse>, AppError> {
    let Path(id) = id?;
    let view = state
        .network
        .add_section(id, req.up_station_id, req.down_station_id, req.distance)
        .await?;
    Ok(Json(view.into()))
}

async fn remove_station(
    State(state): State<AppState>,
    id: Result<Path<LineId>, PathRejection>,
    query: Result<Query<RemoveStationQuery>, QueryRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    let Query(query) = query?;
    state.network.remove_station(id, query.station_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Shortest path between two stations across all lines.
async fn find_path(
    State(state): State<AppState>,
    query: Result<Query<PathQuery>, QueryRejection>,
) -> Result<Json<PathResponse>, AppError> {
    let Query(query) = query?;
    let result = state.network.find_path(query.source, query.target).await?;
    Ok(Json(result.into()))
}
