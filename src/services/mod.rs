//! Service layer containing the carbon engine and side-effect helpers.
//!
//! ## Service map
//! - `carbon.rs` — per-layer carbon/mass calculator + assembly aggregator.
//! - `contribution.rs` — toggled-subset bar scaling and percentage shares.
//! - `ordering.rs` — dotted-numeric label comparator (one ordering law).
//! - `taxonomy.rs` — NRM tree builder + exact-node assembly classifier.
//! - `naming.rs` — duplicate build-up name resolution.
//! - `storage.rs` — local state persistence + settings + audit log.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Engine services are pure and total over their inputs: bad user data
//!   degrades to zeros or the Uncategorized bucket, never to an error.
//! - Side effects should be explicit and localized (`storage.rs`).
//! - Keep command handlers thin; delegate to services.

pub mod carbon;
pub mod contribution;
pub mod naming;
pub mod ordering;
pub mod output;
pub mod storage;
pub mod taxonomy;
