//! Query helpers for battle decision making
//!
//! Type matchup questions the scorer asks about a snapshot.

mod matchup;

pub use matchup::{is_coverage_hit, is_immune_to, is_weak_to_any, resists, resists_all};
