//! Analytics API endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::analytics::{
        BudgetEstimate, EquipmentHealth, IssuePatterns, MaintenancePrediction,
        MaintenanceSchedule,
    },
};

use super::AuthenticatedUser;

/// Health scores for all equipment
#[utoipa::path(
    get,
    path = "/analytics/equipment-health",
    tag = "analytics",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Fleet health overview", body = Vec<EquipmentHealth>)
    )
)]
pub async fn equipment_health_overview(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<EquipmentHealth>>> {
    let overview = state.services.analytics.equipment_health_overview().await?;
    Ok(Json(overview))
}

/// Health score for one equipment unit
#[utoipa::path(
    get,
    path = "/analytics/equipment-health/{id}",
    tag = "analytics",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Health summary", body = EquipmentHealth),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn equipment_health(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<EquipmentHealth>> {
    let health = state.services.analytics.equipment_health(id).await?;
    Ok(Json(health))
}

/// Predicted maintenance needs, most urgent first
#[utoipa::path(
    get,
    path = "/analytics/preventive-maintenance",
    tag = "analytics",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Maintenance predictions", body = Vec<MaintenancePrediction>)
    )
)]
pub async fn preventive_maintenance(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<MaintenancePrediction>>> {
    let predictions = state.services.analytics.predict_maintenance().await?;
    Ok(Json(predictions))
}

/// Preventive maintenance schedule bucketed by cadence
#[utoipa::path(
    get,
    path = "/analytics/maintenance-schedule",
    tag = "analytics",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Maintenance schedule", body = MaintenanceSchedule)
    )
)]
pub async fn maintenance_schedule(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<MaintenanceSchedule>> {
    let schedule = state.services.analytics.maintenance_schedule().await?;
    Ok(Json(schedule))
}

/// Estimated maintenance budget for the next quarter
#[utoipa::path(
    get,
    path = "/analytics/maintenance-budget",
    tag = "analytics",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Budget estimate", body = BudgetEstimate)
    )
)]
pub async fn maintenance_budget(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<BudgetEstimate>> {
    let budget = state.services.analytics.maintenance_budget().await?;
    Ok(Json(budget))
}

/// Issue pattern analysis over the trailing 180 days
#[utoipa::path(
    get,
    path = "/analytics/issue-patterns",
    tag = "analytics",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Issue patterns", body = IssuePatterns)
    )
)]
pub async fn issue_patterns(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<IssuePatterns>> {
    let patterns = state.services.analytics.issue_patterns().await?;
    Ok(Json(patterns))
}
