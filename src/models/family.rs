//! Address family markers.
//!
//! A [`Cidr`](super::Cidr) is parameterized by its family, so an IPv4 block
//! can never be compared with an IPv6 block by mistake.

use std::fmt;
use std::hash::Hash;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// An address space of fixed bit width.
pub trait AddressFamily: Copy + Eq + Ord + Hash + fmt::Debug + 'static {
    /// Concrete address type of the family.
    type Addr: Copy + Eq + Ord + fmt::Display + fmt::Debug + FromStr;

    /// Width of an address in bits.
    const BITS: u8;

    /// Display name, used in error messages.
    const NAME: &'static str;

    fn to_bits(addr: Self::Addr) -> u128;

    fn from_bits(bits: u128) -> Self::Addr;
}

/// IPv4 (32 bit) marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum V4 {}

/// IPv6 (128 bit) marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum V6 {}

impl AddressFamily for V4 {
    type Addr = Ipv4Addr;
    const BITS: u8 = 32;
    const NAME: &'static str = "IPv4";

    fn to_bits(addr: Ipv4Addr) -> u128 {
        u128::from(u32::from(addr))
    }

    fn from_bits(bits: u128) -> Ipv4Addr {
        // Callers only pass values already masked to 32 bits.
        Ipv4Addr::from(bits as u32)
    }
}

impl AddressFamily for V6 {
    type Addr = Ipv6Addr;
    const BITS: u8 = 128;
    const NAME: &'static str = "IPv6";

    fn to_bits(addr: Ipv6Addr) -> u128 {
        u128::from(addr)
    }

    fn from_bits(bits: u128) -> Ipv6Addr {
        Ipv6Addr::from(bits)
    }
}
