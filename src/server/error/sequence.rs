use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum SequenceError {
    /// Neither the counter record nor the fallback count could be read.
    ///
    /// Raised only after the atomic path and the count fallback have both failed.
    /// Callers must not continue with a guessed value.
    #[error("Sequence '{sequence}' storage unavailable: {source}")]
    StorageUnavailable {
        /// Name of the sequence being allocated
        sequence: String,
        /// Error from the fallback count
        #[source]
        source: DbErr,
    },
}

/// Allocation failures mean the store is down, so the client is told to retry later.
impl IntoResponse for SequenceError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorDto {
                error: "Booking service temporarily unavailable, please try again.".to_string(),
            }),
        )
            .into_response()
    }
}
