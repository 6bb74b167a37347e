//! # bondswap-core — Foundational Types
//!
//! Defines the primitives every other bondswap crate is built from:
//! account identities, asset amounts, and the block-height counter that
//! serves as the time basis for all deadlines.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `AccountId`, `Amount`,
//!    `BlockHeight` are all newtypes. No bare integers for quantities, no
//!    bare strings for identities.
//!
//! 2. **Overflow-checked arithmetic.** `Amount` exposes only checked
//!    operations; there is no way to silently wrap a balance.
//!
//! 3. **Heights, not clocks.** Deadlines in bondswap are comparisons on
//!    `BlockHeight`. Nothing in this workspace reads wall-clock time.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `bondswap-*` crates (this is the leaf of
//!   the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod amount;
pub mod height;
pub mod identity;

// Re-export primary types for ergonomic imports.
pub use amount::Amount;
pub use height::BlockHeight;
pub use identity::AccountId;
