//! Issue pattern aggregation.
//!
//! Pure counting over the trailing 180-day ticket snapshot, grouped by
//! equipment kind, location and calendar month. No scoring involved.

use chrono::{DateTime, Datelike, Duration, Utc};
use std::collections::{BTreeMap, HashMap};

use crate::models::{
    analytics::{IssuePatterns, MonthlyTrend, PatternEntry},
    enums::TicketStatus,
    equipment::Equipment,
    ticket::Ticket,
};

/// Trailing window considered for pattern analysis, in days
pub const PATTERN_WINDOW_DAYS: i64 = 180;

/// Aggregate ticket counts by equipment kind, location and month.
///
/// Kind and location groups are ordered by total issues descending,
/// ties alphabetically; monthly trends are ordered by month number.
/// Tickets whose equipment is missing from the snapshot still count in
/// the monthly trends but cannot be attributed to a kind or location.
pub fn issue_patterns(
    equipment: &[Equipment],
    tickets: &[Ticket],
    now: DateTime<Utc>,
) -> IssuePatterns {
    let cutoff = now - Duration::days(PATTERN_WINDOW_DAYS);
    let by_id: HashMap<i32, &Equipment> = equipment.iter().map(|e| (e.id, e)).collect();

    let mut by_kind: BTreeMap<String, (i64, i64)> = BTreeMap::new();
    let mut by_location: BTreeMap<String, (i64, i64)> = BTreeMap::new();
    let mut by_month: BTreeMap<u32, (i64, i64)> = BTreeMap::new();

    for ticket in tickets.iter().filter(|t| t.created_at >= cutoff) {
        let resolved = i64::from(ticket.status == TicketStatus::Resolved);

        let month = by_month.entry(ticket.created_at.month()).or_insert((0, 0));
        month.0 += 1;
        month.1 += resolved;

        if let Some(eq) = by_id.get(&ticket.equipment_id) {
            let kind = by_kind
                .entry(eq.equipment_type.as_str().to_string())
                .or_insert((0, 0));
            kind.0 += 1;
            kind.1 += resolved;

            let location = by_location.entry(eq.location.clone()).or_insert((0, 0));
            location.0 += 1;
            location.1 += resolved;
        }
    }

    IssuePatterns {
        equipment_patterns: sorted_entries(by_kind),
        location_patterns: sorted_entries(by_location),
        monthly_trends: by_month
            .into_iter()
            .map(|(month, (total, resolved))| MonthlyTrend {
                month,
                total_issues: total,
                resolved_issues: resolved,
            })
            .collect(),
    }
}

fn sorted_entries(groups: BTreeMap<String, (i64, i64)>) -> Vec<PatternEntry> {
    let mut entries: Vec<PatternEntry> = groups
        .into_iter()
        .map(|(key, (total, resolved))| PatternEntry {
            key,
            total_issues: total,
            resolved_issues: resolved,
        })
        .collect();
    entries.sort_by(|a, b| b.total_issues.cmp(&a.total_issues).then(a.key.cmp(&b.key)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{equipment_at, ticket_for};
    use crate::models::enums::EquipmentKind;

    #[test]
    fn test_patterns_group_by_kind_and_location() {
        let now = Utc::now();
        let fleet = vec![
            equipment_at(1, EquipmentKind::Pc, "Lab A"),
            equipment_at(2, EquipmentKind::Pc, "Lab B"),
            equipment_at(3, EquipmentKind::Printer, "Lab A"),
        ];
        let tickets = vec![
            ticket_for(1, 1, 5, TicketStatus::Resolved),
            ticket_for(2, 1, 10, TicketStatus::Open),
            ticket_for(3, 2, 15, TicketStatus::Open),
            ticket_for(4, 3, 20, TicketStatus::Resolved),
        ];

        let patterns = issue_patterns(&fleet, &tickets, now);

        assert_eq!(
            patterns.equipment_patterns,
            vec![
                PatternEntry {
                    key: "pc".to_string(),
                    total_issues: 3,
                    resolved_issues: 1
                },
                PatternEntry {
                    key: "printer".to_string(),
                    total_issues: 1,
                    resolved_issues: 1
                },
            ]
        );
        assert_eq!(patterns.location_patterns[0].key, "Lab A");
        assert_eq!(patterns.location_patterns[0].total_issues, 3);
        assert_eq!(patterns.location_patterns[1].key, "Lab B");
    }

    #[test]
    fn test_patterns_ignore_tickets_outside_window() {
        let now = Utc::now();
        let fleet = vec![equipment_at(1, EquipmentKind::Router, "Server room")];
        let tickets = vec![
            ticket_for(1, 1, 10, TicketStatus::Open),
            ticket_for(2, 1, 200, TicketStatus::Open),
        ];

        let patterns = issue_patterns(&fleet, &tickets, now);
        assert_eq!(patterns.equipment_patterns[0].total_issues, 1);
        let total: i64 = patterns.monthly_trends.iter().map(|m| m.total_issues).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn test_monthly_trends_are_month_ordered() {
        let now = Utc::now();
        let fleet = vec![equipment_at(1, EquipmentKind::Ups, "Basement")];
        let tickets = vec![
            ticket_for(1, 1, 5, TicketStatus::Open),
            ticket_for(2, 1, 45, TicketStatus::Resolved),
            ticket_for(3, 1, 100, TicketStatus::Open),
        ];

        let patterns = issue_patterns(&fleet, &tickets, now);
        let months: Vec<u32> = patterns.monthly_trends.iter().map(|m| m.month).collect();
        let mut sorted = months.clone();
        sorted.sort_unstable();
        assert_eq!(months, sorted);
        let total: i64 = patterns.monthly_trends.iter().map(|m| m.total_issues).sum();
        assert_eq!(total, 3);
    }
}
