//! Reading block lists from files.
//!
//! Two layouts are accepted: a JSON array of CIDR strings, or plain text
//! with blocks separated by whitespace or commas and `#` comments.

use crate::models::IpCidr;
use regex::Regex;
use std::error::Error;
use std::path::Path;
use std::sync::OnceLock;

/// Regex matching a `#` comment up to the end of its line.
static COMMENT_REGEX: OnceLock<Regex> = OnceLock::new();

/// Regex matching runs of separators between blocks.
static SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_comment_regex() -> &'static Regex {
    COMMENT_REGEX.get_or_init(|| Regex::new(r"(?m)#.*$").expect("Invalid Regex"))
}

fn get_separator_regex() -> &'static Regex {
    SEPARATOR_REGEX.get_or_init(|| Regex::new(r"[\s,]+").expect("Invalid Regex"))
}

/// Read a list of blocks from `path`.
///
/// # Returns
/// * `Ok(Vec<IpCidr>)` - The blocks in file order
/// * `Err` - If the file can't be read or an entry is not a valid block
pub fn read_cidr_file<P: AsRef<Path>>(path: P) -> Result<Vec<IpCidr>, Box<dyn Error>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading {}: {e}", path.display()))?;
    log::info!("Reading blocks from file: {}", path.display());

    let blocks = if content.trim_start().starts_with('[') {
        parse_cidr_json(&content)?
    } else {
        parse_cidr_text(&content)?
    };
    log::debug!("Read {} block(s) from {}", blocks.len(), path.display());
    Ok(blocks)
}

/// Parse a JSON array of CIDR strings.
pub fn parse_cidr_json(json: &str) -> Result<Vec<IpCidr>, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let blocks: Vec<IpCidr> = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing JSON block list: path={} error={}", e.path(), e))?;
    Ok(blocks)
}

/// Parse blocks separated by whitespace or commas, ignoring `#` comments.
pub fn parse_cidr_text(text: &str) -> Result<Vec<IpCidr>, Box<dyn Error>> {
    let without_comments = get_comment_regex().replace_all(text, "");
    get_separator_regex()
        .split(&without_comments)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<IpCidr>()
                .map_err(|e| -> Box<dyn Error> { format!("Invalid block '{token}': {e}").into() })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cidr_text() {
        let text = "# allocated\n10.0.0.0/24, 10.0.1.0/24\n\n  fd00::/8 # ula\n";
        let blocks = parse_cidr_text(text).unwrap();
        let blocks: Vec<String> = blocks.iter().map(|b| b.to_string()).collect();
        assert_eq!(blocks, vec!["10.0.0.0/24", "10.0.1.0/24", "fd00::/8"]);
    }

    #[test]
    fn test_parse_cidr_text_invalid() {
        let err = parse_cidr_text("10.0.0.0/24 10.0.0.300/24").unwrap_err();
        assert!(err.to_string().contains("10.0.0.300/24"));
    }

    #[test]
    fn test_parse_cidr_json() {
        let blocks = parse_cidr_json(r#"["10.0.0.0/8", "192.168.0.0/16"]"#).unwrap();
        assert_eq!(blocks.len(), 2);

        let err = parse_cidr_json(r#"["10.0.0.0/8", "10.0.0.0/99"]"#).unwrap_err();
        assert!(err.to_string().contains("path=[1]"), "{err}");
    }

    #[test]
    fn test_read_cidr_file_missing() {
        assert!(read_cidr_file("does/not/exist.txt").is_err());
    }
}
