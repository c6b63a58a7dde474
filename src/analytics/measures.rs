//! Preventive-measure lookup tables.
//!
//! Both tables are keyed by closed enums so a new equipment kind or
//! severity tier cannot be added without extending the table here.

use crate::models::enums::{EquipmentKind, SeverityTier};

/// Type-specific maintenance actions, five per equipment kind
fn kind_measures(kind: EquipmentKind) -> [&'static str; 5] {
    match kind {
        EquipmentKind::Pc => [
            "Run disk cleanup and defragmentation",
            "Update antivirus software and run full scan",
            "Check and clean internal components (dust removal)",
            "Update operating system and drivers",
            "Backup important data",
        ],
        EquipmentKind::Printer => [
            "Clean print heads and nozzles",
            "Check ink/toner levels and replace if low",
            "Clean paper feed rollers",
            "Update printer drivers",
            "Check for paper jams and clear if any",
        ],
        EquipmentKind::Projector => [
            "Clean air filters and vents",
            "Check lamp hours and replace if needed",
            "Clean lens and mirrors",
            "Check cooling system",
            "Update firmware if available",
        ],
        EquipmentKind::Router => [
            "Update firmware to latest version",
            "Check and optimize network settings",
            "Clean device and ensure proper ventilation",
            "Check cable connections",
            "Monitor bandwidth usage",
        ],
        EquipmentKind::Ups => [
            "Test battery backup functionality",
            "Check battery health and replace if needed",
            "Clean device and ensure proper ventilation",
            "Update firmware if available",
            "Check load capacity",
        ],
    }
}

/// Generic actions appended per severity tier. Routine carries none:
/// quarterly-cadence equipment gets only the type-specific actions.
fn tier_measures(tier: SeverityTier) -> &'static [&'static str] {
    match tier {
        SeverityTier::Critical => &[
            "Immediate professional inspection required",
            "Schedule emergency maintenance",
            "Consider replacement if cost exceeds repair value",
            "Document all issues for warranty claims",
        ],
        SeverityTier::FrequentIssues => &[
            "Implement regular maintenance schedule",
            "Train users on proper equipment usage",
            "Consider upgrading to newer model",
            "Set up monitoring alerts",
        ],
        SeverityTier::Declining => &[
            "Schedule routine maintenance",
            "Monitor performance metrics",
            "Plan for eventual replacement",
            "Implement preventive maintenance schedule",
        ],
        SeverityTier::Routine => &[],
    }
}

/// Build the ordered preventive-measure list for one (kind, tier) pair.
/// Type-specific actions come first, then the tier-generic ones.
pub fn preventive_measures(kind: EquipmentKind, tier: SeverityTier) -> Vec<String> {
    kind_measures(kind)
        .iter()
        .chain(tier_measures(tier))
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_order_is_type_specific_first() {
        let measures = preventive_measures(EquipmentKind::Pc, SeverityTier::Critical);
        assert_eq!(measures.len(), 9);
        assert_eq!(measures[0], "Run disk cleanup and defragmentation");
        assert_eq!(measures[5], "Immediate professional inspection required");
    }

    #[test]
    fn test_measures_are_deterministic() {
        let a = preventive_measures(EquipmentKind::Router, SeverityTier::FrequentIssues);
        let b = preventive_measures(EquipmentKind::Router, SeverityTier::FrequentIssues);
        assert_eq!(a, b);
    }

    #[test]
    fn test_routine_tier_has_only_type_measures() {
        let measures = preventive_measures(EquipmentKind::Ups, SeverityTier::Routine);
        assert_eq!(measures.len(), 5);
        assert_eq!(measures[0], "Test battery backup functionality");
    }
}
