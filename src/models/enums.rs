//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// EquipmentKind
// ---------------------------------------------------------------------------

/// Kind of ICT equipment tracked by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "equipment_kind", rename_all = "lowercase")]
pub enum EquipmentKind {
    Pc,
    Printer,
    Projector,
    Router,
    Ups,
}

impl EquipmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentKind::Pc => "pc",
            EquipmentKind::Printer => "printer",
            EquipmentKind::Projector => "projector",
            EquipmentKind::Router => "router",
            EquipmentKind::Ups => "ups",
        }
    }
}

impl std::fmt::Display for EquipmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TicketStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a maintenance ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "ticket_status", rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// User role. Technicians may modify tickets and equipment; staff may
/// report issues and read everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum Role {
    Staff,
    Technician,
}

// ---------------------------------------------------------------------------
// Urgency
// ---------------------------------------------------------------------------

/// Maintenance urgency tier assigned by the predictor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Urgency {
    /// Sort rank: high urgency first
    pub fn rank(&self) -> u8 {
        match self {
            Urgency::High => 0,
            Urgency::Medium => 1,
            Urgency::Low => 2,
        }
    }
}

// ---------------------------------------------------------------------------
// SeverityTier
// ---------------------------------------------------------------------------

/// Severity tier keying the generic preventive-measure table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    Critical,
    FrequentIssues,
    Declining,
    Routine,
}

// ---------------------------------------------------------------------------
// Cadence
// ---------------------------------------------------------------------------

/// Maintenance scheduling cadence. Daily and annually exist in the
/// schedule shape but are never populated under the current policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Annually,
}
