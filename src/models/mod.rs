//! Network value models.
//!
//! This module contains the CIDR block types consumed by the relation and
//! exclusion operations:
//! - [`Cidr`] - a block of a statically known family ([`Ipv4Cidr`], [`Ipv6Cidr`])
//! - [`IpCidr`] - a block whose family is only known at runtime
//! - [`AddressFamily`] - the family markers [`V4`] and [`V6`]

mod cidr;
mod family;
mod ip_cidr;

// Re-export public types
pub use cidr::{get_cidr_mask, Cidr, Ipv4Cidr, Ipv6Cidr};
pub use family::{AddressFamily, V4, V6};
pub use ip_cidr::IpCidr;
