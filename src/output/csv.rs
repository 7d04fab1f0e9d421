//! CSV output formatting for block lists.

use super::row::BlockRow;
use super::terminal::format_field;
use colored::Colorize;

/// Column header, aligned with [`format_csv_row`].
pub const CSV_HEADER: &str = r#" "cnt",    "family",                                     "cidr",                                  "network",                                "broadcast", "prefix", "host_bits""#;

/// Format a single CSV row.
pub fn format_csv_row(row: &BlockRow) -> String {
    format!(
        "{j},{family},{cidr},{network},{broadcast},{prefix},{host_bits}",
        j = format_field(row.j, 6),
        family = format_field(row.family, 10),
        cidr = format_field(&row.cidr, 43),
        network = format_field(&row.network, 41),
        broadcast = format_field(&row.broadcast, 41),
        prefix = format_field(row.prefix, 8),
        host_bits = format_field(row.host_bits, 11),
    )
}

/// Print the rows as CSV to stdout.
pub fn print_blocks(rows: &[BlockRow]) {
    println!("{}", CSV_HEADER.bold());
    for row in rows {
        println!("{}", format_csv_row(row));
    }
}
