//! Operational report endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

use super::AuthenticatedUser;

/// Labeled count entry
#[derive(Serialize, ToSchema)]
pub struct ReportEntry {
    pub label: String,
    pub value: i64,
}

/// Average resolution turnaround, None when nothing was ever resolved
#[derive(Serialize, ToSchema)]
pub struct TurnaroundReport {
    pub average_turnaround_days: Option<f64>,
}

/// Equipment count for one working-flag value
#[derive(Serialize, ToSchema)]
pub struct EquipmentStatusEntry {
    pub is_working: bool,
    pub count: i64,
}

/// Most frequent issue categories across all tickets
#[utoipa::path(
    get,
    path = "/reports/frequent-issues",
    tag = "reports",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Issue category counts", body = Vec<ReportEntry>)
    )
)]
pub async fn frequent_issues(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<ReportEntry>>> {
    let report = state.services.reports.frequent_issues().await?;
    Ok(Json(report))
}

/// Average turnaround time over resolved tickets
#[utoipa::path(
    get,
    path = "/reports/turnaround-time",
    tag = "reports",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Average turnaround", body = TurnaroundReport)
    )
)]
pub async fn turnaround_time(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<TurnaroundReport>> {
    let report = state.services.reports.turnaround_time().await?;
    Ok(Json(report))
}

/// Equipment counts grouped by working flag
#[utoipa::path(
    get,
    path = "/reports/equipment-status",
    tag = "reports",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Status counts", body = Vec<EquipmentStatusEntry>)
    )
)]
pub async fn equipment_status(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<EquipmentStatusEntry>>> {
    let report = state.services.reports.equipment_status().await?;
    Ok(Json(report))
}

/// Ticket counts per equipment kind
#[utoipa::path(
    get,
    path = "/analytics/equipment-failure-patterns",
    tag = "reports",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Failure counts per kind", body = Vec<ReportEntry>)
    )
)]
pub async fn failure_patterns(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<ReportEntry>>> {
    let report = state.services.reports.failure_patterns().await?;
    Ok(Json(report))
}

/// Ticket counts per school
#[utoipa::path(
    get,
    path = "/analytics/school-issues",
    tag = "reports",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Issue counts per school", body = Vec<ReportEntry>)
    )
)]
pub async fn school_issues(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<ReportEntry>>> {
    let report = state.services.reports.school_issues().await?;
    Ok(Json(report))
}
