use axum::{extract::State, Json};

use crate::{model::api::StatusDto, server::state::AppState};

pub static STATUS_TAG: &str = "status";

/// Service status.
///
/// Reports the service version and whether the database answers. Always returns
/// 200 so load balancers can tell a running process from a dead one.
#[utoipa::path(
    get,
    path = "/",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Service is running", body = StatusDto)
    ),
)]
pub async fn get_status(State(state): State<AppState>) -> Json<StatusDto> {
    let database = match state.db.ping().await {
        Ok(()) => "ready",
        Err(err) => {
            tracing::warn!("Database ping failed: {}", err);
            "unreachable"
        }
    };

    Json(StatusDto {
        message: "Rent-a-car API is running".to_string(),
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
    })
}
