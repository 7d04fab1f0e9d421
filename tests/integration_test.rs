//! Integration tests for cidr-exclude
//!
//! These tests drive the public API the way a caller such as a firewall
//! rule compiler or address planner would.

use cidr_exclude::cli::{execute, Cli, Outcome};
use clap::Parser;
use cidr_exclude::input::read_cidr_file;
use cidr_exclude::models::{IpCidr, Ipv4Cidr, Ipv6Cidr};
use cidr_exclude::processing::{collapse_nested, free_blocks};
use cidr_exclude::{address_exclude, exclude, overlaps, subnet_of, ExclusionError};
use std::io::Write;

fn v4(s: &str) -> Ipv4Cidr {
    s.parse().expect("valid IPv4 CIDR")
}

#[test]
fn test_exclude_host_from_slash_24() {
    let blocks: Vec<String> = address_exclude(&v4("192.168.0.0/24"), &v4("192.168.0.5/32"))
        .expect("host is inside the network")
        .iter()
        .map(|b| b.to_string())
        .collect();
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
fn test_overlaps_scenarios() {
    assert!(overlaps(&v4("192.168.0.0/20"), &v4("192.168.12.0/22")));
    assert!(!overlaps(&v4("192.168.0.0/20"), &v4("192.168.16.0/22")));
}

#[test]
fn test_subnet_of_scenarios() {
    assert!(subnet_of(&v4("192.168.12.0/22"), &v4("192.168.0.0/20")));
    assert!(!subnet_of(&v4("192.168.12.0/22"), &v4("192.167.0.0/20")));
}

#[test]
fn test_exclude_errors() {
    let net = v4("172.16.0.0/12");
    assert!(exclude(&net, &net).expect("self exclusion").next().is_none());
    assert!(matches!(
        exclude(&net, &v4("172.32.0.0/16")),
        Err(ExclusionError::NotContained { .. })
    ));

    let a: IpCidr = "172.16.0.0/12".parse().unwrap();
    let b: IpCidr = "fd00::/8".parse().unwrap();
    assert!(matches!(
        a.address_exclude(&b),
        Err(ExclusionError::InvalidArgumentType { .. })
    ));
}

#[test]
fn test_lazy_exclusion_can_stop_early() {
    let all: Ipv6Cidr = "::/0".parse().unwrap();
    let host: Ipv6Cidr = "::1".parse().unwrap();
    let first_two: Vec<String> = exclude(&all, &host)
        .unwrap()
        .take(2)
        .map(|b| b.to_string())
        .collect();
    assert_eq!(first_two, vec!["8000::/1", "4000::/2"]);
}

#[test]
fn test_free_blocks_then_collapse() {
    let parent = v4("10.20.0.0/16");
    let used = vec![v4("10.20.0.0/24"), v4("10.20.1.0/24"), v4("10.20.128.0/17")];
    let free = free_blocks(&parent, &used).expect("used blocks are inside parent");
    let free_str: Vec<String> = free.iter().map(|b| b.to_string()).collect();
    assert_eq!(
        free_str,
        vec![
            "10.20.2.0/23",
            "10.20.4.0/22",
            "10.20.8.0/21",
            "10.20.16.0/20",
            "10.20.32.0/19",
            "10.20.64.0/18",
        ]
    );

    let mut everything = free.clone();
    everything.extend(used);
    everything.push(parent);
    assert_eq!(collapse_nested(everything), vec![parent]);
}

#[test]
fn test_cli_reads_block_file() {
    let path = std::env::temp_dir().join(format!("cidr_exclude_used_{}.txt", std::process::id()));
    let mut file = std::fs::File::create(&path).expect("create temp file");
    writeln!(file, "# allocated blocks").unwrap();
    writeln!(file, "10.0.0.0/26, 10.0.0.128/26").unwrap();
    drop(file);

    let blocks = read_cidr_file(&path).expect("read block file");
    assert_eq!(blocks.len(), 2);

    let path_str = path.to_string_lossy().to_string();
    let cli = Cli::try_parse_from([
        "cidr-exclude",
        "free",
        "10.0.0.0/24",
        "--file",
        path_str.as_str(),
    ])
    .expect("parse free command");
    let outcome = execute(&cli.command).expect("free blocks");
    assert_eq!(
        outcome,
        Outcome::Blocks(vec![
            "10.0.0.64/26".parse().unwrap(),
            "10.0.0.192/26".parse().unwrap(),
        ])
    );

    std::fs::remove_file(&path).ok();
}
