//! Exclusion of a CIDR block from an enclosing block.
//!
//! The difference `network - other` is built by halving `network` until one
//! half equals `other`. At every step the half that does not hold `other` is
//! emitted, so blocks come out largest first and the last block emitted is
//! the sibling of `other`.

use super::relation::family_mismatch;
use crate::error::ExclusionError;
use crate::models::{AddressFamily, Cidr, IpCidr};
use std::iter::FusedIterator;

/// Lazy sequence of the blocks covering `network - other`.
///
/// Created by [`exclude`]. Yields exactly `other.prefix() - network.prefix()`
/// blocks.
#[derive(Debug, Clone)]
pub struct Exclusion<F: AddressFamily> {
    halves: Option<(Cidr<F>, Cidr<F>)>,
    other: Cidr<F>,
}

/// Start excluding `other` from `network`.
///
/// Fails with [`ExclusionError::NotContained`] when `other` is not inside
/// `network`. Excluding a block from itself yields nothing.
pub fn exclude<F: AddressFamily>(
    network: &Cidr<F>,
    other: &Cidr<F>,
) -> Result<Exclusion<F>, ExclusionError> {
    if !network.includes(other) {
        return Err(ExclusionError::NotContained {
            network: network.to_string(),
            other: other.to_string(),
        });
    }
    log::debug!("exclude {other} from {network}");

    let halves = if network == other {
        None
    } else {
        match network.split() {
            Some(halves) => Some(halves),
            None => invariant_violation(network, network, other),
        }
    };
    Ok(Exclusion {
        halves,
        other: *other,
    })
}

/// Exclude `other` from `network`, collecting every block.
pub fn address_exclude<F: AddressFamily>(
    network: &Cidr<F>,
    other: &Cidr<F>,
) -> Result<Vec<Cidr<F>>, ExclusionError> {
    let blocks: Vec<Cidr<F>> = exclude(network, other)?.collect();
    log::debug!(
        "exclude {other} from {network} produced {} block(s)",
        blocks.len()
    );
    Ok(blocks)
}

/// The bisection reached a state containment should have ruled out.
fn invariant_violation<F: AddressFamily>(s1: &Cidr<F>, s2: &Cidr<F>, other: &Cidr<F>) -> ! {
    let e = ExclusionError::InternalInvariantViolation {
        s1: s1.to_string(),
        s2: s2.to_string(),
        other: other.to_string(),
    };
    log::error!("{e}");
    panic!("{e}")
}

/// Split a half known to be strictly larger than `other`.
fn split_toward<F: AddressFamily>(
    half: &Cidr<F>,
    sibling: &Cidr<F>,
    other: &Cidr<F>,
) -> (Cidr<F>, Cidr<F>) {
    match half.split() {
        Some(halves) => halves,
        None => invariant_violation(half, sibling, other),
    }
}

impl<F: AddressFamily> Iterator for Exclusion<F> {
    type Item = Cidr<F>;

    fn next(&mut self) -> Option<Cidr<F>> {
        let (s1, s2) = self.halves.take()?;
        let other = &self.other;

        if s1 == *other {
            return Some(s2);
        }
        if s2 == *other {
            return Some(s1);
        }
        // Neither half is `other`, so containment here is strict.
        if other.is_subnet_of(&s1) {
            self.halves = Some(split_toward(&s1, &s2, other));
            Some(s2)
        } else if other.is_subnet_of(&s2) {
            self.halves = Some(split_toward(&s2, &s1, other));
            Some(s1)
        } else {
            invariant_violation(&s1, &s2, other)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match &self.halves {
            Some((s1, _)) => usize::from(self.other.prefix() - s1.prefix()) + 1,
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl<F: AddressFamily> ExactSizeIterator for Exclusion<F> {}

impl<F: AddressFamily> FusedIterator for Exclusion<F> {}

impl<F: AddressFamily> Cidr<F> {
    /// See [`exclude`].
    pub fn exclude(&self, other: &Cidr<F>) -> Result<Exclusion<F>, ExclusionError> {
        exclude(self, other)
    }

    /// See [`address_exclude`].
    pub fn address_exclude(&self, other: &Cidr<F>) -> Result<Vec<Cidr<F>>, ExclusionError> {
        address_exclude(self, other)
    }
}

impl IpCidr {
    /// Exclude `other` from this block.
    ///
    /// Fails with [`ExclusionError::InvalidArgumentType`] when the families
    /// differ, and [`ExclusionError::NotContained`] when `other` lies outside.
    pub fn address_exclude(&self, other: &IpCidr) -> Result<Vec<IpCidr>, ExclusionError> {
        match (self, other) {
            (IpCidr::V4(a), IpCidr::V4(b)) => {
                Ok(address_exclude(a, b)?.into_iter().map(IpCidr::V4).collect())
            }
            (IpCidr::V6(a), IpCidr::V6(b)) => {
                Ok(address_exclude(a, b)?.into_iter().map(IpCidr::V6).collect())
            }
            _ => Err(family_mismatch(self, other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ipv4Cidr, Ipv6Cidr};

    fn v4(s: &str) -> Ipv4Cidr {
        s.parse().unwrap()
    }

    #[test]
    fn test_address_exclude_host() {
        let blocks = address_exclude(&v4("192.168.0.0/24"), &v4("192.168.0.5/32")).unwrap();
        let blocks: Vec<String> = blocks.iter().map(|b| b.to_string()).collect();
        assert_eq!(
            blocks,
            vec![
                "192.168.0.128/25",
                "192.168.0.64/26",
                "192.168.0.32/27",
                "192.168.0.16/28",
                "192.168.0.8/29",
                "192.168.0.0/30",
                "192.168.0.6/31",
                "192.168.0.4/32",
            ]
        );
    }

    #[test]
    fn test_exclude_self_is_empty() {
        let net = v4("10.0.0.0/16");
        let mut blocks = net.exclude(&net).unwrap();
        assert_eq!(blocks.len(), 0);
        assert_eq!(blocks.next(), None);
    }

    #[test]
    fn test_exclude_half() {
        let blocks = v4("10.0.0.0/16").address_exclude(&v4("10.0.128.0/17")).unwrap();
        assert_eq!(blocks, vec![v4("10.0.0.0/17")]);
    }

    #[test]
    fn test_exclude_not_contained() {
        let err = exclude(&v4("10.0.0.0/24"), &v4("10.0.1.0/24")).unwrap_err();
        assert_eq!(
            err,
            ExclusionError::NotContained {
                network: "10.0.0.0/24".to_string(),
                other: "10.0.1.0/24".to_string(),
            }
        );
        // A larger block is never contained in a smaller one.
        assert!(exclude(&v4("10.0.0.0/24"), &v4("10.0.0.0/16")).is_err());
    }

    #[test]
    fn test_exclusion_is_lazy_and_exact_size() {
        let mut blocks = exclude(&v4("0.0.0.0/0"), &v4("255.255.255.255/32")).unwrap();
        assert_eq!(blocks.len(), 32);
        assert_eq!(blocks.next(), Some(v4("0.0.0.0/1")));
        assert_eq!(blocks.len(), 31);
        let rest: Vec<Ipv4Cidr> = blocks.by_ref().collect();
        assert_eq!(rest.last(), Some(&v4("255.255.255.254/32")));
        assert_eq!(blocks.len(), 0);
        assert_eq!(blocks.next(), None);
    }

    #[test]
    fn test_exclude_ipv6() {
        let net: Ipv6Cidr = "2001:db8::/126".parse().unwrap();
        let other: Ipv6Cidr = "2001:db8::3/128".parse().unwrap();
        let blocks: Vec<String> = net
            .address_exclude(&other)
            .unwrap()
            .iter()
            .map(|b| b.to_string())
            .collect();
        assert_eq!(blocks, vec!["2001:db8::/127", "2001:db8::2/128"]);

        let all: Ipv6Cidr = "::/0".parse().unwrap();
        assert_eq!(all.exclude(&other).unwrap().len(), 128);
    }

    #[test]
    fn test_ip_cidr_exclude() {
        let net: IpCidr = "192.168.0.0/30".parse().unwrap();
        let host: IpCidr = "192.168.0.0/32".parse().unwrap();
        let blocks = net.address_exclude(&host).unwrap();
        assert_eq!(
            blocks,
            vec![
                "192.168.0.2/31".parse::<IpCidr>().unwrap(),
                "192.168.0.1/32".parse::<IpCidr>().unwrap(),
            ]
        );

        let v6: IpCidr = "::/0".parse().unwrap();
        assert_eq!(
            net.address_exclude(&v6),
            Err(ExclusionError::InvalidArgumentType {
                expected: "IPv4",
                found: "IPv6"
            })
        );
    }
}
