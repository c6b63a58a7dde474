//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{analytics, auth, equipment, health, reports, tickets};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ICT Lab API",
        version = "1.0.0",
        description = "School ICT equipment maintenance and ticketing REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::register,
        auth::me,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Tickets
        tickets::list_tickets,
        tickets::get_ticket,
        tickets::create_ticket,
        tickets::update_ticket,
        tickets::delete_ticket,
        tickets::list_comments,
        tickets::create_comment,
        // Reports
        reports::frequent_issues,
        reports::turnaround_time,
        reports::equipment_status,
        reports::failure_patterns,
        reports::school_issues,
        // Analytics
        analytics::equipment_health_overview,
        analytics::equipment_health,
        analytics::preventive_maintenance,
        analytics::maintenance_schedule,
        analytics::maintenance_budget,
        analytics::issue_patterns,
    ),
    components(
        schemas(
            // Auth
            crate::models::user::User,
            crate::models::user::CreateUser,
            crate::models::user::LoginRequest,
            crate::models::user::LoginResponse,
            // Enums
            crate::models::enums::EquipmentKind,
            crate::models::enums::TicketStatus,
            crate::models::enums::Role,
            crate::models::enums::Urgency,
            crate::models::enums::SeverityTier,
            crate::models::enums::Cadence,
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            // Tickets
            crate::models::ticket::Ticket,
            crate::models::ticket::CreateTicket,
            crate::models::ticket::UpdateTicket,
            crate::models::ticket::Comment,
            crate::models::ticket::CreateComment,
            // Reports
            reports::ReportEntry,
            reports::TurnaroundReport,
            reports::EquipmentStatusEntry,
            // Analytics
            crate::models::analytics::EquipmentHealth,
            crate::models::analytics::IssueCount,
            crate::models::analytics::MaintenancePrediction,
            crate::models::analytics::ScheduledMaintenance,
            crate::models::analytics::MaintenanceSchedule,
            crate::models::analytics::BudgetEstimate,
            crate::models::analytics::PatternEntry,
            crate::models::analytics::MonthlyTrend,
            crate::models::analytics::IssuePatterns,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "equipment", description = "Equipment inventory management"),
        (name = "tickets", description = "Maintenance ticket management"),
        (name = "reports", description = "Operational reports"),
        (name = "analytics", description = "Equipment health analytics and predictions")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
