// Core algorithm exports
pub mod explain;
pub mod matcher;
pub mod scoring;

pub use explain::generate_reason;
pub use matcher::{MatchOutcome, Matcher};
pub use scoring::{calculate_fit_score, display_roi, proximity_score};
