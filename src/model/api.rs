use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Service status returned from the root route.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StatusDto {
    pub message: String,
    pub status: String,
    pub version: String,
    /// `"ready"` when the database answered a ping, `"unreachable"` otherwise.
    pub database: String,
}
