//! Site model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Work location staff are assigned to and attendance is recorded at
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Site {
    pub id: i32,
    pub name: String,
    /// Free-form "lat,lng" string
    pub geolocation: Option<String>,
    pub owner_id: Option<i32>,
    pub active: bool,
}
