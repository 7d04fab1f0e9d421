//! CIDR block processing logic.
//!
//! This module contains the operations on blocks:
//! - [`relation`] - Overlap and subnet predicates
//! - [`exclusion`] - Excluding a block from an enclosing block
//! - [`overlap`] - Finding overlapping blocks in a list
//! - [`dedup`] - Collapsing duplicate and nested blocks
//! - [`gap_finder`] - Finding free blocks inside a parent

pub mod dedup;
pub mod exclusion;
pub mod gap_finder;
pub mod overlap;
pub mod relation;

// Re-export public functions
pub use dedup::collapse_nested;
pub use exclusion::{address_exclude, exclude, Exclusion};
pub use gap_finder::free_blocks;
pub use overlap::{find_overlaps, log_overlaps, OverlapConflict, OverlapKind};
pub use relation::{overlaps, subnet_of};
