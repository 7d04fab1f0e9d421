//! Row model shared by the output formats.

use crate::models::{AddressFamily, Cidr, IpCidr};
use serde::Serialize;

/// Represents one block of a result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockRow {
    /// 1-based position in the result list.
    pub j: usize,
    /// "IPv4" or "IPv6".
    pub family: &'static str,
    /// Block in CIDR notation.
    pub cidr: String,
    /// Lowest address.
    pub network: String,
    /// Highest address.
    pub broadcast: String,
    pub prefix: u8,
    /// Host bits; the block holds 2^host_bits addresses.
    pub host_bits: u8,
}

impl BlockRow {
    /// Build a row for the block at position `j`.
    pub fn new(j: usize, block: &IpCidr) -> BlockRow {
        match block {
            IpCidr::V4(c) => row_for(j, c),
            IpCidr::V6(c) => row_for(j, c),
        }
    }
}

fn row_for<F: AddressFamily>(j: usize, block: &Cidr<F>) -> BlockRow {
    BlockRow {
        j,
        family: F::NAME,
        cidr: block.to_string(),
        network: block.addr().to_string(),
        broadcast: block.broadcast().to_string(),
        prefix: block.prefix(),
        host_bits: block.host_bits(),
    }
}

/// Number the blocks from 1.
pub fn block_rows(blocks: &[IpCidr]) -> Vec<BlockRow> {
    blocks
        .iter()
        .enumerate()
        .map(|(i, b)| BlockRow::new(i + 1, b))
        .collect()
}
