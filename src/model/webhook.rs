use serde::{Deserialize, Serialize};

/// Response returned to the marketplace once a sale has been fulfilled
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct FulfillmentDto {
    /// Always `Success`
    pub message: String,
    /// Title of the course the buyer was enrolled in
    pub course: String,
    /// ID of the buyer's account
    pub user: i32,
}
