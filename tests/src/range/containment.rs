#![cfg(test)]
use std::net::{IpAddr, Ipv4Addr};

use anyhow::Context;
use iprange_core::{AddressInput, IpRange, to_packed, to_u128};

use crate::util::{init_tracing, ip, offset};

#[test]
fn ipv4_network_scenario() -> anyhow::Result<()> {
    init_tracing();
    let range = IpRange::parse("192.168.123.0/24").context("network")?;

    assert!(range.contain("192.168.123.0"));
    assert!(range.contain("192.168.123.255"));
    assert!(range.contain(3232267135u32));
    assert!(range.contain(Ipv4Addr::new(192, 168, 123, 123).octets()));

    assert!(!range.contain("192.168.122.255"));
    assert!(!range.contain("192.168.124.0"));
    Ok(())
}

#[test]
fn ipv6_interval_scenario() -> anyhow::Result<()> {
    let range = IpRange::parse("2001:db00::f-2001:db00::ff").context("interval")?;

    assert!(range.contain("2001:db00::f0"));
    assert!(!range.contain("2001:db00::e"));
    assert!(!range.contain("2001:db00::100"));
    Ok(())
}

#[test]
fn bounds_are_inclusive_and_neighbours_excluded() -> anyhow::Result<()> {
    for input in [
        "192.168.123.0/24",
        "10.0.0.17-10.0.0.42",
        "172.16.0.1",
        "2001:db00::f-2001:db00::ff",
        "2001:db8::/120",
        "fe80::1",
    ] {
        let range = IpRange::parse(input).context(input)?;
        let min = range.min().context("min")?;
        let max = range.max().context("max")?;

        assert!(range.contain(min), "{input}: min");
        assert!(range.contain(max), "{input}: max");
        assert!(!range.contain(offset(min, -1)), "{input}: below min");
        assert!(!range.contain(offset(max, 1)), "{input}: above max");
    }
    Ok(())
}

#[test]
fn every_representation_gives_the_same_answer() -> anyhow::Result<()> {
    let v4 = IpRange::parse("192.168.123.0/24").context("v4")?;
    let v6 = IpRange::parse("2001:db00::/112").context("v6")?;

    let candidates = [
        "192.168.123.128",
        "192.168.122.255",
        "2001:db00::1234",
        "2001:db01::1",
    ];

    for range in [v4, v6] {
        for text in candidates {
            let addr = ip(text);
            let expected = range.contain(text);

            assert_eq!(range.contain(to_packed(addr)), expected, "{range} {text} packed");
            assert_eq!(range.contain(addr), expected, "{range} {text} typed");
            assert_eq!(
                range.contain(AddressInput::Numeric(to_u128(addr))),
                expected,
                "{range} {text} integer"
            );
        }
    }
    Ok(())
}

#[test]
fn other_family_is_never_contained() -> anyhow::Result<()> {
    let v4 = IpRange::parse("0.0.0.0/0").context("v4")?;
    let v6 = IpRange::parse("::/0").context("v6")?;

    assert!(!v4.contain("::"));
    assert!(!v4.contain("::ffff:10.0.0.1"));
    assert!(!v6.contain("10.0.0.1"));
    assert!(!v6.contain(IpAddr::V4(Ipv4Addr::BROADCAST)));
    Ok(())
}

#[test]
fn malformed_candidates_are_not_contained() -> anyhow::Result<()> {
    let range = IpRange::parse("0.0.0.0/0").context("v4")?;

    assert!(!range.contain(""));
    assert!(!range.contain("256.0.0.1"));
    assert!(!range.contain("10.0.0.0/8"));
    assert!(!range.contain(vec![10u8, 0, 0]));
    Ok(())
}

#[test]
fn unset_range_contains_nothing() {
    let range = IpRange::new();
    assert!(!range.contain("192.168.0.1"));
    assert!(!range.contain("::1"));
    assert!(!range.contain(0u32));
}

#[test]
fn repeated_queries_agree() -> anyhow::Result<()> {
    let range = IpRange::parse("10.0.0.0/30").context("network")?;
    for candidate in ["10.0.0.2", "10.0.0.4", "bogus"] {
        let first = range.contain(candidate);
        for _ in 0..10 {
            assert_eq!(range.contain(candidate), first);
        }
    }
    Ok(())
}
