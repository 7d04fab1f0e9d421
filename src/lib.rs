//! Relations and set differences between CIDR blocks.
//!
//! - [`models`] - CIDR block values for IPv4 and IPv6
//! - [`processing`] - overlap and subnet predicates, exclusion and list utilities
//! - [`output`] - CSV and JSON printing of result blocks
//!
//! ```
//! use cidr_exclude::models::Ipv4Cidr;
//!
//! let net: Ipv4Cidr = "192.168.0.0/24".parse().unwrap();
//! let host: Ipv4Cidr = "192.168.0.5/32".parse().unwrap();
//! let blocks = net.address_exclude(&host).unwrap();
//! assert_eq!(blocks.len(), 8);
//! assert_eq!(blocks[0].to_string(), "192.168.0.128/25");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{ExclusionError, ParseError};
pub use models::{Cidr, IpCidr, Ipv4Cidr, Ipv6Cidr};
pub use processing::{address_exclude, exclude, overlaps, subnet_of, Exclusion};
