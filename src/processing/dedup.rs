//! Block de-duplication logic.
//!
//! Handles removing duplicate and nested blocks from a list.

use crate::models::{AddressFamily, Cidr};

/// Remove duplicates and blocks nested inside another block of the list.
///
/// The result is sorted by address and no two of its blocks overlap.
pub fn collapse_nested<F: AddressFamily>(mut blocks: Vec<Cidr<F>>) -> Vec<Cidr<F>> {
    // Sorted by address then prefix, a covering block always comes first.
    blocks.sort();
    let original_count = blocks.len();

    let mut kept: Vec<Cidr<F>> = Vec::with_capacity(blocks.len());
    for block in blocks {
        if let Some(last) = kept.last() {
            if last.includes(&block) {
                log::debug!("Dropping {block}: covered by {last}");
                continue;
            }
        }
        kept.push(block);
    }

    let removed = original_count - kept.len();
    if removed > 0 {
        log::info!("Removed {removed} duplicate or nested block(s)");
    }
    kept
}
