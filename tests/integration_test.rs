//! Integration tests for cidr-range
//!
//! These tests drive the public API the way a caller would.

use cidr_range::models::{from_octets, parse_to_integer};
use cidr_range::processing::SharedRange;
use cidr_range::{to_address, to_integer, Range, RangeError};
use rand::Rng;
use std::net::Ipv4Addr;

fn walk(mut range: Range, expected: &[&str]) {
    for (i, ip) in expected.iter().enumerate() {
        assert_eq!(range.current_address_string(), *ip, "step {i}");
        let more = range.advance();
        assert_eq!(more, i + 1 < expected.len(), "advance() after {ip}");
    }
}

#[test]
fn test_range() {
    let range = Range::new("127.0.0.0/30").expect("valid cidr");
    walk(range, &["127.0.0.0", "127.0.0.1", "127.0.0.2", "127.0.0.3"]);
}

#[test]
fn test_range_with_31_prefix() {
    let range = Range::with_block_size("127.0.0.0/30", 31).expect("valid cidr");
    walk(range, &["127.0.0.0", "127.0.0.2"]);
}

#[test]
fn test_range_with_25_prefix() {
    let range = Range::with_block_size("127.0.0.0/23", 25).expect("valid cidr");
    walk(
        range,
        &["127.0.0.0", "127.0.0.128", "127.0.1.0", "127.0.1.128"],
    );
}

#[test]
fn test_range_with_24_prefix() {
    let range = Range::with_block_size("127.0.0.0/22", 24).expect("valid cidr");
    walk(range, &["127.0.0.0", "127.0.1.0", "127.0.2.0", "127.0.3.0"]);
}

#[test]
fn test_range_with_24_prefix_showing_prefix() {
    let mut range = Range::with_block_size("44.44.0.0/16", 24).expect("valid cidr");
    for expected in ["44.44.0.0/24", "44.44.1.0/24", "44.44.2.0/24", "44.44.3.0/24"] {
        assert_eq!(range.current_address_with_prefix_string(), expected);
        range.advance();
    }
}

#[test]
fn test_should_fail_on_bad_cidr() {
    for cidr in ["127.0.0.1/31", "127.0.1.2/30", "127.0.2.127/25", "127.0.3.129/25"] {
        let err = Range::new(cidr).unwrap_err();
        assert_eq!(err, RangeError::InvalidCidr, "didn't fail on {cidr}");
        assert_eq!(err.to_string(), "Invalid cidr");
    }
}

#[test]
fn test_should_fail_on_bad_block_step() {
    for cidr in ["127.0.0.0/31", "127.0.1.0/30", "127.0.2.0/25", "127.0.3.0/25"] {
        let err = Range::with_block_size(cidr, 24).unwrap_err();
        assert_eq!(err, RangeError::InvalidBlockSize, "didn't fail on {cidr}");
        assert_eq!(err.to_string(), "Invalid block size");
    }
}

#[test]
fn test_exhausted_range_stays_put() {
    let mut range = Range::with_block_size("127.0.0.0/23", 25).expect("valid cidr");
    while range.advance() {}
    for _ in 0..5 {
        assert!(!range.advance());
        assert_eq!(range.current_address_string(), "127.0.1.128");
    }
}

#[test]
fn test_sub_blocks_restart() {
    let range = Range::with_block_size("10.0.0.0/24", 26).expect("valid cidr");
    let first: Vec<String> = range.sub_blocks().map(|b| b.to_string()).collect();
    let second: Vec<String> = range.sub_blocks().map(|b| b.to_string()).collect();
    assert_eq!(first, ["10.0.0.0/26", "10.0.0.64/26", "10.0.0.128/26", "10.0.0.192/26"]);
    assert_eq!(first, second);
}

#[test]
fn test_shared_range_drains_all_blocks() {
    let shared = SharedRange::new(Range::with_block_size("10.0.0.0/16", 24).expect("valid cidr"));
    let mut count = 0;
    while shared.next_block().is_some() {
        count += 1;
    }
    assert_eq!(count, 256);
}

#[test]
fn test_ip_to_long() {
    let mut rng = rand::rng();
    for _ in 0..1000 {
        let octets: [u8; 4] = rng.random();
        let ip = Ipv4Addr::from(octets);
        assert_eq!(to_address(to_integer(ip)), ip);
        assert_eq!(from_octets(octets), to_integer(ip));
        assert_eq!(parse_to_integer(&ip.to_string()), Ok(to_integer(ip)));
    }
}

#[test]
fn test_long_to_ip() {
    let mut rng = rand::rng();
    for _ in 0..1000 {
        let long: u32 = rng.random();
        assert_eq!(to_integer(to_address(long)), long);
    }
}
