//! CIDR block value type.
//!
//! Provides [`Cidr`] for representing a network block of either family,
//! along with the mask helpers used for containment and splitting.

use super::family::{AddressFamily, V4, V6};
use crate::error::ParseError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// Mask covering every bit of the family's address space.
fn width_mask<F: AddressFamily>() -> u128 {
    if u32::from(F::BITS) >= u128::BITS {
        u128::MAX
    } else {
        (1u128 << F::BITS) - 1
    }
}

/// Mask covering the host part of a block with prefix `len`.
fn host_mask<F: AddressFamily>(len: u8) -> u128 {
    let host_bits = u32::from(F::BITS - len);
    if host_bits >= u128::BITS {
        u128::MAX
    } else {
        (1u128 << host_bits) - 1
    }
}

/// Convert a CIDR prefix length to a network mask.
///
/// # Examples
/// ```
/// use cidr_exclude::models::{get_cidr_mask, V4};
/// assert_eq!(get_cidr_mask::<V4>(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask<F: AddressFamily>(len: u8) -> Result<u128, ParseError> {
    if len > F::BITS {
        Err(ParseError::PrefixTooLong {
            family: F::NAME,
            prefix: len,
            max: F::BITS,
        })
    } else {
        Ok(width_mask::<F>() & !host_mask::<F>(len))
    }
}

/// A CIDR block: a network address plus prefix length.
///
/// Host bits below the prefix are always zero, so two blocks are equal
/// exactly when they cover the same range.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cidr<F: AddressFamily> {
    bits: u128,
    prefix: u8,
    family: PhantomData<F>,
}

/// IPv4 CIDR block.
pub type Ipv4Cidr = Cidr<V4>;

/// IPv6 CIDR block.
pub type Ipv6Cidr = Cidr<V6>;

impl<F: AddressFamily> Cidr<F> {
    /// Create a block from an address and prefix length, clearing host bits.
    pub fn new(addr: F::Addr, prefix: u8) -> Result<Cidr<F>, ParseError> {
        let mask = get_cidr_mask::<F>(prefix)?;
        Ok(Cidr {
            bits: F::to_bits(addr) & mask,
            prefix,
            family: PhantomData,
        })
    }

    /// Network (lowest) address of the block.
    pub fn addr(&self) -> F::Addr {
        F::from_bits(self.bits)
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Number of host bits, `W - prefix`.
    pub fn host_bits(&self) -> u8 {
        F::BITS - self.prefix
    }

    /// Highest address in the block.
    pub fn broadcast(&self) -> F::Addr {
        F::from_bits(self.bits | host_mask::<F>(self.prefix))
    }

    /// True if `addr` falls inside this block.
    pub fn contains(&self, addr: F::Addr) -> bool {
        F::to_bits(addr) & !host_mask::<F>(self.prefix) == self.bits
    }

    /// True if every address of `other` falls inside this block.
    pub fn includes(&self, other: &Cidr<F>) -> bool {
        other.prefix >= self.prefix && other.bits & !host_mask::<F>(self.prefix) == self.bits
    }

    /// Split into the lower and upper halves of prefix `prefix + 1`.
    ///
    /// Returns `None` for a single address block.
    pub fn split(&self) -> Option<(Cidr<F>, Cidr<F>)> {
        if self.prefix >= F::BITS {
            return None;
        }
        let prefix = self.prefix + 1;
        let upper_bit = 1u128 << (F::BITS - prefix);
        let lower = Cidr {
            bits: self.bits,
            prefix,
            family: PhantomData,
        };
        let upper = Cidr {
            bits: self.bits | upper_bit,
            prefix,
            family: PhantomData,
        };
        Some((lower, upper))
    }
}

impl<F: AddressFamily> fmt::Display for Cidr<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr(), self.prefix)
    }
}

impl<F: AddressFamily> fmt::Debug for Cidr<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", F::NAME, self)
    }
}

impl<F: AddressFamily> FromStr for Cidr<F> {
    type Err = ParseError;

    /// Parse `addr/prefix`, or a bare address as a single address block.
    fn from_str(addr_cidr: &str) -> Result<Cidr<F>, ParseError> {
        let addr_cidr = addr_cidr.trim();
        if addr_cidr.is_empty() {
            return Err(ParseError::InvalidFormat(addr_cidr.to_string()));
        }
        let (addr_part, prefix_part) = match addr_cidr.split_once('/') {
            Some((addr, prefix)) => (addr, Some(prefix)),
            None => (addr_cidr, None),
        };
        let addr: F::Addr = addr_part
            .parse()
            .map_err(|_| ParseError::InvalidAddress {
                family: F::NAME,
                value: addr_part.to_string(),
            })?;
        let prefix = match prefix_part {
            Some(p) => parse_prefix(p)?,
            None => F::BITS,
        };
        Cidr::new(addr, prefix)
    }
}

/// Prefix lengths are plain decimal: no sign, no leading zeros.
fn parse_prefix(p: &str) -> Result<u8, ParseError> {
    let digits = !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    if !digits || (p.len() > 1 && p.starts_with('0')) {
        return Err(ParseError::InvalidPrefix(p.to_string()));
    }
    p.parse::<u8>()
        .map_err(|_| ParseError::InvalidPrefix(p.to_string()))
}

impl<F: AddressFamily> Serialize for Cidr<F> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, F: AddressFamily> Deserialize<'de> for Cidr<F> {
    fn deserialize<D>(deserializer: D) -> Result<Cidr<F>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::from_str(&s).map_err(de::Error::custom)
    }
}
