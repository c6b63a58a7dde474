//! Equipment health scoring

use chrono::{DateTime, Duration, Utc};

use crate::models::{enums::TicketStatus, ticket::Ticket};

/// Trailing window considered for health scoring, in days
pub const HEALTH_WINDOW_DAYS: i64 = 180;

/// Compute a 0-100 health score from an equipment unit's ticket history.
///
/// Only tickets created within the trailing 180-day window count; an
/// empty window means perfect health. The score starts at 100 and
/// combines a ticket-volume penalty (15 per ticket, capped at 60), a
/// resolution-rate bonus (capped at 20) and a recency adjustment: an
/// issue within the last week costs 10 points, anything between 8 and
/// 30 days is neutral, and older last issues earn back up to 15.
pub fn health_score(tickets: &[Ticket], now: DateTime<Utc>) -> f64 {
    let cutoff = now - Duration::days(HEALTH_WINDOW_DAYS);
    let recent: Vec<&Ticket> = tickets.iter().filter(|t| t.created_at >= cutoff).collect();

    if recent.is_empty() {
        return 100.0;
    }

    let total = recent.len() as f64;
    let resolved = recent
        .iter()
        .filter(|t| t.status == TicketStatus::Resolved)
        .count() as f64;
    let resolution_rate = resolved / total * 100.0;

    let issue_penalty = (total * 15.0).min(60.0);
    let resolution_bonus = resolution_rate * 0.2;

    // recent is non-empty here, so the minimum age always exists
    let days_since_issue = recent
        .iter()
        .map(|t| (now - t.created_at).num_days())
        .min()
        .unwrap_or(0);

    let time_bonus = if days_since_issue <= 7 {
        -10.0
    } else if days_since_issue <= 30 {
        0.0
    } else {
        ((days_since_issue - 30) as f64 * 0.3).min(15.0)
    };

    (100.0 - issue_penalty + resolution_bonus + time_bonus).clamp(0.0, 100.0)
}

/// Human-readable label for a health score
pub fn health_label(score: f64) -> &'static str {
    if score >= 80.0 {
        "Excellent"
    } else if score >= 60.0 {
        "Good"
    } else if score >= 40.0 {
        "Fair"
    } else {
        "Poor"
    }
}

/// Round to one decimal for reporting
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::ticket;

    #[test]
    fn test_no_tickets_is_perfect_health() {
        let now = Utc::now();
        assert_eq!(health_score(&[], now), 100.0);
    }

    #[test]
    fn test_tickets_outside_window_are_ignored() {
        let now = Utc::now();
        let tickets = vec![
            ticket(1, 200, TicketStatus::Open),
            ticket(2, 365, TicketStatus::Resolved),
        ];
        assert_eq!(health_score(&tickets, now), 100.0);
    }

    #[test]
    fn test_issue_penalty_is_capped_at_60() {
        let now = Utc::now();
        // 100 unresolved tickets, most recent 15 days ago: penalty stays
        // at 60, no resolution bonus, neutral time bonus
        let tickets: Vec<_> = (0..100)
            .map(|i| ticket(i, 15 + i as i64 / 10, TicketStatus::Open))
            .collect();
        assert_eq!(health_score(&tickets, now), 40.0);
    }

    #[test]
    fn test_resolution_bonus_is_capped_at_20() {
        let now = Utc::now();
        // Four resolved tickets, last one 15 days ago: rate 100 gives the
        // full +20 bonus, 100 - 60 + 20 + 0
        let tickets: Vec<_> = (0..4)
            .map(|i| ticket(i, 15 + i as i64, TicketStatus::Resolved))
            .collect();
        assert_eq!(health_score(&tickets, now), 60.0);
    }

    #[test]
    fn test_recent_issue_penalty() {
        let now = Utc::now();
        // Last ticket 3 days ago: 100 - 15 + 0 - 10
        let tickets = vec![ticket(1, 3, TicketStatus::Open)];
        assert_eq!(health_score(&tickets, now), 75.0);
    }

    #[test]
    fn test_neutral_time_window() {
        let now = Utc::now();
        // Last ticket 15 days ago: 100 - 15 + 0 + 0
        let tickets = vec![ticket(1, 15, TicketStatus::Open)];
        assert_eq!(health_score(&tickets, now), 85.0);
    }

    #[test]
    fn test_time_bonus_is_capped_at_15() {
        let now = Utc::now();
        // Last ticket 100 days ago: bonus = min(70 * 0.3, 15) = 15
        let tickets = vec![ticket(1, 100, TicketStatus::Open)];
        assert_eq!(health_score(&tickets, now), 100.0);
    }

    #[test]
    fn test_pathological_volume_stays_in_range() {
        let now = Utc::now();
        // 50 unresolved tickets created yesterday: 100 - 60 + 0 - 10
        let tickets: Vec<_> = (0..50).map(|i| ticket(i, 1, TicketStatus::Open)).collect();
        let score = health_score(&tickets, now);
        assert!((0.0..=100.0).contains(&score));
        assert_eq!(score, 30.0);
    }

    #[test]
    fn test_health_labels() {
        assert_eq!(health_label(95.0), "Excellent");
        assert_eq!(health_label(65.0), "Good");
        assert_eq!(health_label(45.0), "Fair");
        assert_eq!(health_label(10.0), "Poor");
    }
}
