use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, sequence::SequenceResetDto},
    server::{error::AppError, service::sequence::SequenceService, state::AppState},
};

pub static SEQUENCE_TAG: &str = "sequence";

/// Reset a sequence counter.
///
/// The next allocation from the sequence returns 1. Identifiers issued before the
/// reset are left untouched, so resetting a sequence whose records still exist
/// leads to duplicate identifiers. Resetting an unused sequence is a no-op.
#[utoipa::path(
    post,
    path = "/api/admin/sequences/{name}/reset",
    tag = SEQUENCE_TAG,
    params(
        ("name" = String, Path, description = "Sequence name, e.g. bookingCounter")
    ),
    responses(
        (status = 200, description = "Sequence reset", body = SequenceResetDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_sequence(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let last_value = SequenceService::new(&state.db).reset(&name).await?;

    Ok((
        StatusCode::OK,
        Json(SequenceResetDto {
            sequence: name,
            last_value,
        }),
    ))
}
