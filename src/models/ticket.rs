//! Ticket and comment models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::TicketStatus;

/// Maintenance ticket record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Ticket {
    pub id: i32,
    pub equipment_id: i32,
    /// Free-text issue category (e.g. "won't boot", "paper jam")
    pub issue_category: String,
    pub description: String,
    pub status: TicketStatus,
    pub created_by: i32,
    pub assigned_to: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create ticket request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTicket {
    pub equipment_id: i32,
    #[validate(length(min = 1, max = 100))]
    pub issue_category: String,
    #[validate(length(min = 1))]
    pub description: String,
}

/// Update ticket request (technician only)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTicket {
    #[validate(length(min = 1, max = 100))]
    pub issue_category: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub status: Option<TicketStatus>,
    pub assigned_to: Option<i32>,
}

/// Query filters for listing tickets
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct TicketQuery {
    pub equipment_id: Option<i32>,
    pub status: Option<TicketStatus>,
    pub created_after: Option<DateTime<Utc>>,
}

/// Ticket comment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Comment {
    pub id: i32,
    pub ticket_id: i32,
    pub user_id: i32,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Create comment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateComment {
    #[validate(length(min = 1))]
    pub text: String,
}
