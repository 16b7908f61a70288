//! Route Model

use serde::{Deserialize, Serialize};

/// Bus route entity (路线：校园环线、机场线等)
///
/// Immutable reference data, maintained by catalog tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Route {
    pub id: i64,
    /// Short code shown on the bus front board, e.g. "R001"
    pub code: String,
    pub display_name: String,
}
