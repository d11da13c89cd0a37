//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep persisted-state and report structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — build-up state, settings, report/output structs.
//! - `constants.rs` — stable constants (built-in NRM taxonomy, defaults).
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects. All carbon
//! math lives in `services/*`.

pub mod constants;
pub mod models;
