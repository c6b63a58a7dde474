//! Derived analytics values.
//!
//! Everything here is recomputed per request from the current
//! ticket/equipment snapshot; nothing is persisted.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::enums::{Cadence, EquipmentKind, Urgency};

/// Per-unit health summary for the equipment-health overview
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EquipmentHealth {
    pub equipment_id: i32,
    pub equipment_type: EquipmentKind,
    pub location: String,
    pub serial_number: String,
    /// 0-100, one decimal
    pub health_score: f64,
    /// Excellent / Good / Fair / Poor
    pub status: String,
}

/// Issue category with its occurrence count
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IssueCount {
    pub category: String,
    pub count: i64,
}

/// Predicted maintenance need for one equipment unit
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MaintenancePrediction {
    pub equipment_id: i32,
    pub equipment_type: EquipmentKind,
    pub location: String,
    pub health_score: f64,
    pub urgency: Urgency,
    pub reason: String,
    pub recent_tickets: usize,
    pub predicted_maintenance_date: DateTime<Utc>,
    pub preventive_measures: Vec<String>,
    pub estimated_cost: i64,
    /// Top 3 issue categories by count
    pub common_issues: Vec<IssueCount>,
    pub avg_resolution_days: f64,
}

/// One scheduled maintenance bundle
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScheduledMaintenance {
    pub equipment_id: i32,
    pub equipment_type: EquipmentKind,
    pub location: String,
    pub tasks: Vec<String>,
}

/// Maintenance schedule bucketed by cadence. Daily and annually are
/// always empty under the current scoring policy but kept in the shape
/// consumers expect.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct MaintenanceSchedule {
    pub daily: Vec<ScheduledMaintenance>,
    pub weekly: Vec<ScheduledMaintenance>,
    pub monthly: Vec<ScheduledMaintenance>,
    pub quarterly: Vec<ScheduledMaintenance>,
    pub annually: Vec<ScheduledMaintenance>,
}

impl MaintenanceSchedule {
    /// Append an entry to the bucket for the given cadence
    pub fn push(&mut self, cadence: Cadence, entry: ScheduledMaintenance) {
        match cadence {
            Cadence::Daily => self.daily.push(entry),
            Cadence::Weekly => self.weekly.push(entry),
            Cadence::Monthly => self.monthly.push(entry),
            Cadence::Quarterly => self.quarterly.push(entry),
            Cadence::Annually => self.annually.push(entry),
        }
    }
}

/// Quarterly maintenance budget estimate
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BudgetEstimate {
    pub total_estimated_cost: i64,
    pub high_urgency_cost: i64,
    pub medium_urgency_cost: i64,
    pub low_urgency_cost: i64,
    pub equipment_count: usize,
    pub recommendations: Vec<String>,
}

/// Grouped ticket counts for one pattern key
#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
pub struct PatternEntry {
    pub key: String,
    pub total_issues: i64,
    pub resolved_issues: i64,
}

/// Ticket counts for one calendar month
#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
pub struct MonthlyTrend {
    /// Calendar month number, 1-12
    pub month: u32,
    pub total_issues: i64,
    pub resolved_issues: i64,
}

/// Issue pattern analysis over the trailing 180 days
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IssuePatterns {
    pub equipment_patterns: Vec<PatternEntry>,
    pub location_patterns: Vec<PatternEntry>,
    pub monthly_trends: Vec<MonthlyTrend>,
}
