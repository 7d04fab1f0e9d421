//! Output formatting for block lists.
//!
//! This module handles formatting and outputting result blocks:
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON output
//! - [`terminal`] - Column helpers

mod csv;
mod json;
mod row;
mod terminal;

pub use csv::{format_csv_row, CSV_HEADER};
pub use json::format_blocks;
pub use row::{block_rows, BlockRow};
pub use terminal::format_field;

use crate::config::OutputFormat;
use crate::models::IpCidr;
use std::error::Error;

/// Print blocks to stdout in the requested format.
pub fn print_blocks(format: OutputFormat, blocks: &[IpCidr]) -> Result<(), Box<dyn Error>> {
    let rows = block_rows(blocks);
    match format {
        OutputFormat::Csv => csv::print_blocks(&rows),
        OutputFormat::Json => json::print_blocks(&rows)?,
    }
    Ok(())
}
