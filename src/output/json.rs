//! JSON output for block lists.

use super::row::BlockRow;
use std::error::Error;

/// Render the rows as a pretty printed JSON array.
pub fn format_blocks(rows: &[BlockRow]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(rows)
}

/// Print the rows as JSON to stdout.
pub fn print_blocks(rows: &[BlockRow]) -> Result<(), Box<dyn Error>> {
    let json = format_blocks(rows).map_err(|e| format!("Error serializing JSON: {e}"))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IpCidr;

    #[test]
    fn test_format_blocks() {
        let block: IpCidr = "10.0.0.0/8".parse().unwrap();
        let json = format_blocks(&[BlockRow::new(1, &block)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["cidr"], "10.0.0.0/8");
        assert_eq!(value[0]["broadcast"], "10.255.255.255");
        assert_eq!(value[0]["host_bits"], 24);
    }
}
