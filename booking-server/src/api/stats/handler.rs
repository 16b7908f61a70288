//! Stats API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::repository::stats;
use crate::utils::AppResult;
use shared::models::RouteUtilization;

#[derive(Debug, Deserialize)]
pub struct UtilizationQuery {
    pub date: Option<String>,
}

#[derive(Serialize)]
pub struct UtilizationResponse {
    pub utilization: Vec<RouteUtilization>,
}

/// GET /api/stats/route-utilization - 各路线容量利用率
///
/// `removable_buses` 提示：确认订座不足兜底容量一半的路线可考虑减班。
pub async fn route_utilization(
    State(state): State<ServerState>,
    Query(query): Query<UtilizationQuery>,
) -> AppResult<Json<UtilizationResponse>> {
    let removable_threshold = state.config.capacity_policy.default_capacity / 2;
    let utilization = stats::route_utilization(&state.pool, query.date.as_deref())
        .await?
        .into_iter()
        .map(|row| row.into_view(removable_threshold))
        .collect();
    Ok(Json(UtilizationResponse { utilization }))
}
