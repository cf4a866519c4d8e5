//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::domain::LineId;
use crate::planner::{Planner, SearchConfig};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/lines", get(list_lines))
        .route("/api/lines/:id", get(get_line))
        .route("/api/stops", get(list_stops))
        .route("/api/stops/lines", get(lines_at_stop))
        .route("/api/route", get(plan_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every line, in ascending id order.
async fn list_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let lines = state.network.lines().map(LineResult::from_line).collect();
    Json(LinesResponse { lines })
}

/// Look up one line by number.
async fn get_line(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LineResult>, AppError> {
    let id = LineId::parse(&id).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let line = state.network.line(id).ok_or_else(|| AppError::NotFound {
        message: format!("No line {id}"),
    })?;

    Ok(Json(LineResult::from_line(line)))
}

/// List every stop in alphabetical order.
async fn list_stops(State(state): State<AppState>) -> Json<StopsResponse> {
    Json(StopsResponse {
        stops: state.index.all_stops_sorted().to_vec(),
    })
}

/// Lines serving a stop; an unknown stop has none.
async fn lines_at_stop(
    State(state): State<AppState>,
    Query(req): Query<LinesAtRequest>,
) -> Json<LinesAtResponse> {
    let lines = state
        .index
        .lines_at(&req.stop)
        .iter()
        .map(|id| id.get())
        .collect();

    Json(LinesAtResponse {
        stop: req.stop,
        lines,
    })
}

/// Plan a route between two known stops.
async fn plan_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    // The planner accepts any name; reject unknown ones here so typos
    // aren't reported as "no route"
    for (role, stop) in [("origin", &req.from), ("destination", &req.to)] {
        if !state.index.contains(stop) {
            return Err(AppError::BadRequest {
                message: format!("Unknown {role} stop: {stop}"),
            });
        }
    }

    let planner = Planner::with_config(&state.network, SearchConfig::clone(&state.config));
    let route = planner.find_route(&req.from, &req.to);

    debug!(
        from = %req.from,
        to = %req.to,
        reachable = route.is_some(),
        "Planned route"
    );

    Ok(Json(RouteResponse::from_route(
        &req.from,
        &req.to,
        route.as_ref(),
    )))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
