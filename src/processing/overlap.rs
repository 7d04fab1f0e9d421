//! Overlapping CIDR detection across a list of blocks.
//!
//! Finds duplicated and nested blocks, for example conflicting firewall
//! rules or address plan entries that were allocated twice.

use crate::models::{AddressFamily, Cidr, IpCidr};
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

/// How two overlapping blocks relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapKind {
    /// Both entries are the same block.
    Duplicate,
    /// `inner` lies strictly inside `outer`.
    Nested,
}

/// Represents a pair of overlapping blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlapConflict {
    pub outer: IpCidr,
    pub inner: IpCidr,
    pub kind: OverlapKind,
}

impl fmt::Display for OverlapConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            OverlapKind::Duplicate => write!(f, "{} is listed more than once", self.outer),
            OverlapKind::Nested => write!(f, "{} is inside {}", self.inner, self.outer),
        }
    }
}

/// Find every pair of overlapping blocks.
///
/// Blocks are only compared with blocks of the same family. Conflicts are
/// sorted by the outer block, then the inner block.
pub fn find_overlaps(blocks: &[IpCidr]) -> Vec<OverlapConflict> {
    let v4: Vec<_> = blocks
        .iter()
        .filter_map(|b| match b {
            IpCidr::V4(c) => Some(*c),
            IpCidr::V6(_) => None,
        })
        .collect();
    let v6: Vec<_> = blocks
        .iter()
        .filter_map(|b| match b {
            IpCidr::V6(c) => Some(*c),
            IpCidr::V4(_) => None,
        })
        .collect();

    let mut conflicts = family_overlaps(&v4, IpCidr::V4);
    conflicts.extend(family_overlaps(&v6, IpCidr::V6));
    conflicts.sort_by_key(|c| (c.outer, c.inner));
    conflicts
}

fn family_overlaps<F: AddressFamily>(
    blocks: &[Cidr<F>],
    wrap: fn(Cidr<F>) -> IpCidr,
) -> Vec<OverlapConflict> {
    blocks
        .iter()
        .tuple_combinations()
        .filter(|(a, b)| a.overlaps(b))
        .map(|(a, b)| {
            // Laminar: overlapping blocks are nested, so the shorter prefix is outside.
            let (outer, inner) = if a.prefix() <= b.prefix() { (a, b) } else { (b, a) };
            let kind = if outer == inner {
                OverlapKind::Duplicate
            } else {
                OverlapKind::Nested
            };
            OverlapConflict {
                outer: wrap(*outer),
                inner: wrap(*inner),
                kind,
            }
        })
        .collect()
}

/// Log overlapping block conflicts as warnings.
pub fn log_overlaps(conflicts: &[OverlapConflict]) {
    if conflicts.is_empty() {
        log::info!("No overlapping CIDR blocks found.");
        return;
    }

    log::warn!("Found {} overlapping CIDR pair(s):", conflicts.len());
    for conflict in conflicts {
        log::warn!("  {conflict}");
    }
}
