//! Equipment health analytics.
//!
//! Pure, deterministic computations over ticket/equipment snapshots.
//! Every function takes an explicit `now` so one timestamp can be
//! captured per request and threaded through all window boundaries;
//! nothing in this module touches the database or the clock itself.

pub mod health;
pub mod measures;
pub mod patterns;
pub mod predict;

pub use health::{health_label, health_score, round1, HEALTH_WINDOW_DAYS};
pub use measures::preventive_measures;
pub use patterns::{issue_patterns, PATTERN_WINDOW_DAYS};
pub use predict::{estimate_budget, predict_one, rank_predictions, schedule_for};
