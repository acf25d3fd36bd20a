use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SequenceResetDto {
    pub sequence: String,
    /// Stored value after the reset, `null` when the sequence has never been allocated.
    pub last_value: Option<i64>,
}
