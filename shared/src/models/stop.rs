//! Stop Model

use serde::{Deserialize, Serialize};

/// Stop entity (站点)
///
/// `seq` is the position along the owning route; listings order by it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Stop {
    pub id: i64,
    pub route_id: i64,
    pub name: String,
    pub seq: i64,
}
