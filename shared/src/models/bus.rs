//! Bus Model

use serde::{Deserialize, Serialize};

/// Bus entity (车辆)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Bus {
    pub id: i64,
    pub bus_number: String,
    /// Nominal seat capacity (hard admission limit)
    pub capacity: i64,
}
