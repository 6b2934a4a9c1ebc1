//! Data transfer objects for web requests and responses.

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{LineId, Station, StationId};
use crate::network::{LineView, NetworkError, NewLine};
use crate::path::{PathError, PathResult};

/// Request to register a station.
#[derive(Debug, Deserialize)]
pub struct CreateStationRequest {
    pub name: String,
}

/// A station in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationResponse {
    pub id: StationId,
    pub name: String,
}

/// Request to open a line with its first section.
#[derive(Debug, Deserialize)]
pub struct CreateLineRequest {
    pub name: String,
    pub color: String,
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: u32,
}

/// Request to rename or recolor a line.
#[derive(Debug, Deserialize)]
pub struct UpdateLineRequest {
    pub name: String,
    pub color: String,
}

/// A line with its stations in travel order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineResponse {
    pub id: LineId,
    pub name: String,
    pub color: String,
    pub stations: Vec<StationResponse>,
    pub total_distance: u64,
}

/// Request to add a section to a line.
#[derive(Debug, Deserialize)]
pub struct SectionRequest {
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: u32,
}

/// Query for removing a station from a line.
#[derive(Debug, Deserialize)]
pub struct RemoveStationQuery {
    pub station_id: StationId,
}

/// Query for a shortest path.
#[derive(Debug, Deserialize)]
pub struct PathQuery {
    pub source: StationId,
    pub target: StationId,
}

/// Shortest path between two stations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResponse {
    pub stations: Vec<StationResponse>,
    pub distance: u64,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl From<&Station> for StationResponse {
    fn from(station: &Station) -> Self {
        Self {
            id: station.id(),
            name: station.name().to_string(),
        }
    }
}

impl From<CreateLineRequest> for NewLine {
    fn from(req: CreateLineRequest) -> Self {
        Self {
            name: req.name,
            color: req.color,
            up_station: req.up_station_id,
            down_station: req.down_station_id,
            distance: req.distance,
        }
    }
}

impl From<LineView> for LineResponse {
    fn from(view: LineView) -> Self {
        Self {
            id: view.line.id,
            name: view.line.name,
            color: view.line.color,
            stations: view.stations.iter().map(StationResponse::from).collect(),
            total_distance: view.total_distance,
        }
    }
}

impl From<PathResult> for PathResponse {
    fn from(result: PathResult) -> Self {
        let (stations, distance) = result.into_parts();
        Self {
            stations: stations.iter().map(StationResponse::from).collect(),
            distance,
        }
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        let message = e.to_string();
        match e {
            NetworkError::StationNotFound(_)
            | NetworkError::LineNotFound(_)
            | NetworkError::Path(PathError::StationNotFound(_))
            | NetworkError::Path(PathError::NoRoute { .. }) => AppError::NotFound { message },
            NetworkError::DuplicateLineName(_) | NetworkError::StationInUse { .. } => {
                AppError::Conflict { message }
            }
            NetworkError::InvalidDistance(_)
            | NetworkError::Section(_)
            | NetworkError::Path(PathError::SameStation(_)) => AppError::BadRequest { message },
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
