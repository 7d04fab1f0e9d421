//! CIDR block of either family, tagged at runtime.

use super::cidr::{Ipv4Cidr, Ipv6Cidr};
use super::family::{AddressFamily, V4, V6};
use crate::error::ParseError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// An IPv4 or IPv6 CIDR block, as read from user input.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum IpCidr {
    V4(Ipv4Cidr),
    V6(Ipv6Cidr),
}

impl IpCidr {
    /// Family name, "IPv4" or "IPv6".
    pub fn family(&self) -> &'static str {
        match self {
            IpCidr::V4(_) => V4::NAME,
            IpCidr::V6(_) => V6::NAME,
        }
    }

    pub fn prefix(&self) -> u8 {
        match self {
            IpCidr::V4(c) => c.prefix(),
            IpCidr::V6(c) => c.prefix(),
        }
    }
}

impl From<Ipv4Cidr> for IpCidr {
    fn from(cidr: Ipv4Cidr) -> Self {
        IpCidr::V4(cidr)
    }
}

impl From<Ipv6Cidr> for IpCidr {
    fn from(cidr: Ipv6Cidr) -> Self {
        IpCidr::V6(cidr)
    }
}

impl fmt::Display for IpCidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpCidr::V4(c) => c.fmt(f),
            IpCidr::V6(c) => c.fmt(f),
        }
    }
}

impl FromStr for IpCidr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<IpCidr, ParseError> {
        // Only IPv6 addresses contain a colon.
        if s.contains(':') {
            Ok(IpCidr::V6(s.parse()?))
        } else {
            Ok(IpCidr::V4(s.parse()?))
        }
    }
}

impl Serialize for IpCidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for IpCidr {
    fn deserialize<D>(deserializer: D) -> Result<IpCidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        IpCidr::from_str(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_detects_family() {
        let v4: IpCidr = "10.0.0.0/8".parse().unwrap();
        assert_eq!(v4.family(), "IPv4");
        assert_eq!(v4.prefix(), 8);

        let v6: IpCidr = "2001:db8::/32".parse().unwrap();
        assert_eq!(v6.family(), "IPv6");
        assert_eq!(v6.to_string(), "2001:db8::/32");

        assert!("10.0.0.0/33".parse::<IpCidr>().is_err());
        assert!("not-an-ip".parse::<IpCidr>().is_err());
    }

    #[test]
    fn test_deserialize_list() {
        let list: Vec<IpCidr> =
            serde_json::from_str(r#"["10.0.0.0/16", "fd00::/8"]"#).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].family(), "IPv6");
    }
}
