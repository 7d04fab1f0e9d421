//! Gap finding inside a parent block.
//!
//! Identifies the unused address ranges of a parent network once a list of
//! allocated blocks is taken out, expressed as CIDR blocks.

use crate::error::ExclusionError;
use crate::models::{AddressFamily, Cidr};

/// Find the blocks of `parent` not covered by any block in `used`.
///
/// Each used block is excluded from whichever free block holds it, so the
/// result is the minimal set of CIDR blocks, sorted by address.
///
/// # Arguments
/// * `parent` - The network to carve up
/// * `used` - Allocated blocks; blocks outside `parent` are skipped
pub fn free_blocks<F: AddressFamily>(
    parent: &Cidr<F>,
    used: &[Cidr<F>],
) -> Result<Vec<Cidr<F>>, ExclusionError> {
    let mut free = vec![*parent];

    for block in used {
        if !parent.overlaps(block) {
            log::warn!("Skipping {block}: outside parent {parent}");
            continue;
        }

        let mut next_free = Vec::with_capacity(free.len() + usize::from(F::BITS));
        for candidate in free {
            if !candidate.overlaps(block) {
                next_free.push(candidate);
            } else if candidate.is_subnet_of(block) {
                log::trace!("{candidate} is fully used by {block}");
            } else {
                next_free.extend(candidate.exclude(block)?);
            }
        }
        free = next_free;
    }

    free.sort();
    log::debug!(
        "Found {} free block(s) in {parent} after {} used block(s)",
        free.len(),
        used.len()
    );
    Ok(free)
}
