//! Maintenance prediction, scheduling and budget aggregation

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

use crate::models::{
    analytics::{BudgetEstimate, IssueCount, MaintenancePrediction, ScheduledMaintenance},
    enums::{Cadence, SeverityTier, TicketStatus, Urgency},
    equipment::Equipment,
    ticket::Ticket,
};

use super::{
    health::{health_score, round1},
    measures::preventive_measures,
};

/// Trailing window considered for prediction signals, in days
pub const PREDICTION_WINDOW_DAYS: i64 = 90;

/// Outcome of the urgency classification rules
struct Classification {
    urgency: Urgency,
    reason: String,
    tier: SeverityTier,
    cost: i64,
    lead_days: i64,
}

/// Urgency classification, evaluated in strict priority order. The
/// first match wins: a critically low health score beats the
/// ticket-count rule even when both hold, so a unit is never reported
/// twice. A healthy unit (score >= 60, fewer than 3 recent tickets)
/// yields no classification at all.
fn classify(score: f64, ticket_count: usize) -> Option<Classification> {
    if score < 30.0 {
        Some(Classification {
            urgency: Urgency::High,
            reason: format!("Critical health score ({:.1}/100)", score),
            tier: SeverityTier::Critical,
            cost: 500,
            lead_days: 30,
        })
    } else if ticket_count >= 3 {
        Some(Classification {
            urgency: Urgency::Medium,
            reason: format!("{} issues in last 90 days", ticket_count),
            tier: SeverityTier::FrequentIssues,
            cost: 200,
            lead_days: 60,
        })
    } else if score < 60.0 {
        Some(Classification {
            urgency: Urgency::Low,
            reason: format!("Declining health score ({:.1}/100)", score),
            tier: SeverityTier::Declining,
            cost: 100,
            lead_days: 60,
        })
    } else {
        None
    }
}

/// Classify one equipment unit, returning a prediction when maintenance
/// is needed.
pub fn predict_one(
    equipment: &Equipment,
    tickets: &[Ticket],
    now: DateTime<Utc>,
) -> Option<MaintenancePrediction> {
    let score = health_score(tickets, now);

    let cutoff = now - Duration::days(PREDICTION_WINDOW_DAYS);
    let recent: Vec<&Ticket> = tickets.iter().filter(|t| t.created_at >= cutoff).collect();
    let ticket_count = recent.len();

    let Classification {
        urgency,
        reason,
        tier,
        cost,
        lead_days,
    } = classify(score, ticket_count)?;

    Some(MaintenancePrediction {
        equipment_id: equipment.id,
        equipment_type: equipment.equipment_type,
        location: equipment.location.clone(),
        health_score: round1(score),
        urgency,
        reason,
        recent_tickets: ticket_count,
        predicted_maintenance_date: now + Duration::days(lead_days),
        preventive_measures: preventive_measures(equipment.equipment_type, tier),
        estimated_cost: cost,
        common_issues: top_categories(&recent),
        avg_resolution_days: round1(avg_resolution_days(&recent)),
    })
}

/// Order predictions by urgency, most urgent first. The sort is stable,
/// so equipment iteration order breaks ties.
pub fn rank_predictions(mut predictions: Vec<MaintenancePrediction>) -> Vec<MaintenancePrediction> {
    predictions.sort_by_key(|p| p.urgency.rank());
    predictions
}

/// Top 3 issue categories by count, ties broken alphabetically
fn top_categories(tickets: &[&Ticket]) -> Vec<IssueCount> {
    let mut counts: HashMap<&str, i64> = HashMap::new();
    for t in tickets {
        *counts.entry(t.issue_category.as_str()).or_insert(0) += 1;
    }
    let mut entries: Vec<IssueCount> = counts
        .into_iter()
        .map(|(category, count)| IssueCount {
            category: category.to_string(),
            count,
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then(a.category.cmp(&b.category)));
    entries.truncate(3);
    entries
}

/// Mean resolution time in whole days over resolved tickets, 0 when
/// nothing was resolved in the window
fn avg_resolution_days(tickets: &[&Ticket]) -> f64 {
    let times: Vec<i64> = tickets
        .iter()
        .filter(|t| t.status == TicketStatus::Resolved)
        .map(|t| (t.updated_at - t.created_at).num_days())
        .collect();
    if times.is_empty() {
        return 0.0;
    }
    times.iter().sum::<i64>() as f64 / times.len() as f64
}

/// Bucket one equipment unit into a maintenance cadence from its health
/// score. Units scoring 98 or above are in excellent condition and get
/// no scheduled maintenance at all.
pub fn schedule_for(
    equipment: &Equipment,
    tickets: &[Ticket],
    now: DateTime<Utc>,
) -> Option<(Cadence, ScheduledMaintenance)> {
    let score = health_score(tickets, now);

    let (cadence, tier) = if score < 40.0 {
        (Cadence::Weekly, SeverityTier::Critical)
    } else if score < 70.0 {
        (Cadence::Monthly, SeverityTier::Declining)
    } else if score < 98.0 {
        (Cadence::Quarterly, SeverityTier::Routine)
    } else {
        return None;
    };

    Some((
        cadence,
        ScheduledMaintenance {
            equipment_id: equipment.id,
            equipment_type: equipment.equipment_type,
            location: equipment.location.clone(),
            tasks: preventive_measures(equipment.equipment_type, tier),
        },
    ))
}

/// Sum predicted costs into a quarterly budget estimate
pub fn estimate_budget(predictions: &[MaintenancePrediction]) -> BudgetEstimate {
    let cost_for = |urgency: Urgency| -> i64 {
        predictions
            .iter()
            .filter(|p| p.urgency == urgency)
            .map(|p| p.estimated_cost)
            .sum()
    };

    BudgetEstimate {
        total_estimated_cost: predictions.iter().map(|p| p.estimated_cost).sum(),
        high_urgency_cost: cost_for(Urgency::High),
        medium_urgency_cost: cost_for(Urgency::Medium),
        low_urgency_cost: cost_for(Urgency::Low),
        equipment_count: predictions.len(),
        recommendations: vec![
            "Prioritize high urgency maintenance to prevent equipment failure".to_string(),
            "Schedule medium urgency maintenance within 60 days".to_string(),
            "Plan low urgency maintenance for routine maintenance cycles".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{equipment, ticket, ticket_resolved_in};
    use crate::models::enums::EquipmentKind;

    #[test]
    fn test_critical_score_wins_over_ticket_count() {
        // Both the score rule and the count rule hold; the score rule
        // must win and mask the ticket-count reason
        let c = classify(25.0, 5).expect("classification expected");
        assert_eq!(c.urgency, Urgency::High);
        assert_eq!(c.reason, "Critical health score (25.0/100)");
        assert_eq!(c.cost, 500);
        assert_eq!(c.lead_days, 30);
    }

    #[test]
    fn test_score_floor_triggers_count_rule_not_score_rule() {
        let now = Utc::now();
        // 5 unresolved tickets, latest yesterday: 100 - 60 + 0 - 10 = 30,
        // the lowest score the formula can produce, which is not < 30
        let eq = equipment(1, EquipmentKind::Pc);
        let tickets: Vec<_> = (0..5).map(|i| ticket(i, 1, TicketStatus::Open)).collect();
        let p = predict_one(&eq, &tickets, now).expect("prediction expected");
        assert_eq!(p.urgency, Urgency::Medium);
        assert_eq!(p.reason, "5 issues in last 90 days");
    }

    #[test]
    fn test_frequent_issues_classified_medium() {
        let now = Utc::now();
        let eq = equipment(7, EquipmentKind::Printer);
        // 3 tickets, all resolved, latest 40 days ago:
        // 100 - 45 + 20 + 3 = 78, so only the count rule fires
        let tickets: Vec<_> = (0..3)
            .map(|i| ticket_resolved_in(i, 40 + i as i64, 2))
            .collect();
        let p = predict_one(&eq, &tickets, now).expect("prediction expected");
        assert_eq!(p.urgency, Urgency::Medium);
        assert_eq!(p.reason, "3 issues in last 90 days");
        assert_eq!(p.estimated_cost, 200);
        assert_eq!(p.predicted_maintenance_date, now + Duration::days(60));
        assert_eq!(p.avg_resolution_days, 2.0);
    }

    #[test]
    fn test_declining_score_classified_low() {
        let now = Utc::now();
        let eq = equipment(2, EquipmentKind::Projector);
        // 2 unresolved tickets, latest 10 days ago: 100 - 30 + 0 + 0 = 70;
        // one more resolved far back changes rate; use 2 open + latest
        // 3 days ago: 100 - 30 + 0 - 10 = 60, still not < 60. Use 3rd
        // ticket beyond the 90-day window but inside 180: count stays 2,
        // score drops to 100 - 45 + 0 - 10 = 45
        let tickets = vec![
            ticket(1, 3, TicketStatus::Open),
            ticket(2, 20, TicketStatus::Open),
            ticket(3, 120, TicketStatus::Open),
        ];
        let p = predict_one(&eq, &tickets, now).expect("prediction expected");
        assert_eq!(p.urgency, Urgency::Low);
        assert_eq!(p.reason, "Declining health score (45.0/100)");
        assert_eq!(p.estimated_cost, 100);
        assert_eq!(p.recent_tickets, 2);
    }

    #[test]
    fn test_healthy_equipment_is_excluded() {
        let now = Utc::now();
        let eq = equipment(3, EquipmentKind::Router);
        // Single resolved ticket 60 days ago: 100 - 15 + 20 + 9 = 100
        let tickets = vec![ticket_resolved_in(1, 60, 1)];
        assert!(predict_one(&eq, &tickets, now).is_none());
    }

    #[test]
    fn test_prediction_ordering_high_first() {
        let now = Utc::now();
        let make = |id, urgency| MaintenancePrediction {
            equipment_id: id,
            equipment_type: EquipmentKind::Pc,
            location: "Lab".to_string(),
            health_score: 50.0,
            urgency,
            reason: String::new(),
            recent_tickets: 0,
            predicted_maintenance_date: now,
            preventive_measures: vec![],
            estimated_cost: 0,
            common_issues: vec![],
            avg_resolution_days: 0.0,
        };
        let ranked = rank_predictions(vec![
            make(1, Urgency::Low),
            make(2, Urgency::High),
            make(3, Urgency::Medium),
            make(4, Urgency::High),
        ]);
        let ids: Vec<i32> = ranked.iter().map(|p| p.equipment_id).collect();
        assert_eq!(ids, vec![2, 4, 3, 1]);
    }

    #[test]
    fn test_top_categories_orders_by_count_then_name() {
        let now = Utc::now();
        let eq = equipment(4, EquipmentKind::Pc);
        let mut tickets = Vec::new();
        for (i, cat) in ["no display", "no display", "slow", "virus", "slow", "boot loop"]
            .iter()
            .enumerate()
        {
            let mut t = ticket(i as i32, 5, TicketStatus::Open);
            t.issue_category = cat.to_string();
            tickets.push(t);
        }
        let p = predict_one(&eq, &tickets, now).expect("prediction expected");
        let cats: Vec<&str> = p.common_issues.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(cats, vec!["no display", "slow", "boot loop"]);
        assert_eq!(p.common_issues[0].count, 2);
    }

    #[test]
    fn test_schedule_partition_thresholds() {
        let now = Utc::now();
        let eq = equipment(5, EquipmentKind::Ups);

        // score 30: 50 open tickets yesterday -> weekly / critical
        let bad: Vec<_> = (0..50).map(|i| ticket(i, 1, TicketStatus::Open)).collect();
        let (cadence, entry) = schedule_for(&eq, &bad, now).expect("scheduled");
        assert_eq!(cadence, Cadence::Weekly);
        assert_eq!(entry.tasks.len(), 9);

        // score 60: 4 resolved tickets, latest 15 days ago -> monthly
        let fair: Vec<_> = (0..4)
            .map(|i| ticket_resolved_in(i, 15 + i as i64, 1))
            .collect();
        let (cadence, _) = schedule_for(&eq, &fair, now).expect("scheduled");
        assert_eq!(cadence, Cadence::Monthly);

        // score 85: single open ticket 15 days ago -> quarterly, with
        // only the 5 type-specific tasks (routine tier adds none)
        let ok = vec![ticket(1, 15, TicketStatus::Open)];
        let (cadence, entry) = schedule_for(&eq, &ok, now).expect("scheduled");
        assert_eq!(cadence, Cadence::Quarterly);
        assert_eq!(entry.tasks.len(), 5);

        // score 100: no tickets -> excluded entirely
        assert!(schedule_for(&eq, &[], now).is_none());
    }

    #[test]
    fn test_budget_totals_match_per_urgency_sums() {
        let now = Utc::now();
        let make = |id, urgency, cost| MaintenancePrediction {
            equipment_id: id,
            equipment_type: EquipmentKind::Pc,
            location: "Lab".to_string(),
            health_score: 50.0,
            urgency,
            reason: String::new(),
            recent_tickets: 0,
            predicted_maintenance_date: now,
            preventive_measures: vec![],
            estimated_cost: cost,
            common_issues: vec![],
            avg_resolution_days: 0.0,
        };
        let predictions = vec![
            make(1, Urgency::High, 500),
            make(2, Urgency::High, 500),
            make(3, Urgency::Medium, 200),
            make(4, Urgency::Low, 100),
        ];
        let budget = estimate_budget(&predictions);
        assert_eq!(budget.total_estimated_cost, 1300);
        assert_eq!(
            budget.total_estimated_cost,
            budget.high_urgency_cost + budget.medium_urgency_cost + budget.low_urgency_cost
        );
        assert_eq!(budget.equipment_count, 4);
        assert_eq!(budget.recommendations.len(), 3);
    }

    #[test]
    fn test_end_to_end_pc_scenario() {
        let now = Utc::now();
        let eq = equipment(1, EquipmentKind::Pc);
        // 4 tickets in the last 90 days, 2 resolved, most recent created
        // 2 days ago: 100 - 60 + 10 - 10 = 40
        let tickets = vec![
            ticket(1, 2, TicketStatus::Open),
            ticket(2, 10, TicketStatus::InProgress),
            ticket_resolved_in(3, 30, 3),
            ticket_resolved_in(4, 50, 5),
        ];
        assert_eq!(health_score(&tickets, now), 40.0);

        let p = predict_one(&eq, &tickets, now).expect("prediction expected");
        assert_eq!(p.urgency, Urgency::Medium);
        assert_eq!(p.estimated_cost, 200);
        assert_eq!(p.reason, "4 issues in last 90 days");
        assert_eq!(p.health_score, 40.0);
    }
}
