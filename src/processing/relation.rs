//! Overlap and subnet predicates between CIDR blocks.
//!
//! CIDR ranges never partially overlap: two blocks are either disjoint or
//! one contains the other. Checking whether a boundary of one block falls
//! inside the other, in both directions, is therefore a complete overlap
//! test.

use crate::error::ExclusionError;
use crate::models::{AddressFamily, Cidr, IpCidr};

/// True if the address ranges of `a` and `b` intersect.
pub fn overlaps<F: AddressFamily>(a: &Cidr<F>, b: &Cidr<F>) -> bool {
    b.includes(a) || b.contains(a.broadcast()) || a.includes(b) || a.contains(b.broadcast())
}

/// True if `b` covers every address of `a`.
pub fn subnet_of<F: AddressFamily>(a: &Cidr<F>, b: &Cidr<F>) -> bool {
    b.includes(a)
}

impl<F: AddressFamily> Cidr<F> {
    /// See [`overlaps`].
    pub fn overlaps(&self, other: &Cidr<F>) -> bool {
        overlaps(self, other)
    }

    /// See [`subnet_of`].
    pub fn is_subnet_of(&self, other: &Cidr<F>) -> bool {
        subnet_of(self, other)
    }
}

pub(crate) fn family_mismatch(expected: &IpCidr, found: &IpCidr) -> ExclusionError {
    ExclusionError::InvalidArgumentType {
        expected: expected.family(),
        found: found.family(),
    }
}

impl IpCidr {
    /// Overlap test for blocks of the same family.
    ///
    /// Fails with [`ExclusionError::InvalidArgumentType`] when the families differ.
    pub fn overlaps(&self, other: &IpCidr) -> Result<bool, ExclusionError> {
        match (self, other) {
            (IpCidr::V4(a), IpCidr::V4(b)) => Ok(overlaps(a, b)),
            (IpCidr::V6(a), IpCidr::V6(b)) => Ok(overlaps(a, b)),
            _ => Err(family_mismatch(self, other)),
        }
    }

    /// Subnet test for blocks of the same family.
    ///
    /// Fails with [`ExclusionError::InvalidArgumentType`] when the families differ.
    pub fn is_subnet_of(&self, other: &IpCidr) -> Result<bool, ExclusionError> {
        match (self, other) {
            (IpCidr::V4(a), IpCidr::V4(b)) => Ok(subnet_of(a, b)),
            (IpCidr::V6(a), IpCidr::V6(b)) => Ok(subnet_of(a, b)),
            _ => Err(family_mismatch(self, other)),
        }
    }
}
