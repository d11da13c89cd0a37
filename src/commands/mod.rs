//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `buildups.rs` — create/list/show/rename/remove plus layer/tag edits.
//! - `report.rs` — catalog queries, classification tree, contribution view.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate carbon math and classification to `services/*`.
//! - Recompute-then-replace: every layer mutation reruns the calculator and
//!   swaps the stored totals wholesale, never merging into stale sums.

pub mod buildups;
pub mod report;

pub use buildups::handle_buildup_commands;
pub use report::handle_report_commands;
