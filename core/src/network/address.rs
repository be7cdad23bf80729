//! # Address Input Model
//!
//! Everything that can stand in for a single host address, and the parsers
//! the range logic builds on.
//!
//! An address may be supplied as:
//! * Text in standard notation (`192.168.1.5`, `2001:db8::1`).
//! * An unsigned integer (`3232235777` is `192.168.1.1`).
//! * A packed big-endian byte sequence (4 bytes for IPv4, 16 for IPv6).

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use pnet::ipnetwork::{Ipv4Network, Ipv6Network, ipv4_mask_to_prefix};

use crate::network::error::RangeError;

/// The two address families. A range never spans both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpFamily {
    V4,
    V6,
}

impl IpFamily {
    pub fn of(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => IpFamily::V4,
            IpAddr::V6(_) => IpFamily::V6,
        }
    }

    /// Address width in bits.
    pub fn bits(self) -> u8 {
        match self {
            IpFamily::V4 => 32,
            IpFamily::V6 => 128,
        }
    }
}

impl fmt::Display for IpFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpFamily::V4 => write!(f, "IPv4"),
            IpFamily::V6 => write!(f, "IPv6"),
        }
    }
}

/// A host address in one of its external representations.
///
/// Only `Text` can describe a network or an interval; the other variants are
/// always read as a single host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AddressInput {
    Text(String),
    /// Values up to `u32::MAX` are IPv4, anything larger is IPv6.
    Numeric(u128),
    /// Big-endian bytes, 4 for IPv4 or 16 for IPv6.
    Packed(Vec<u8>),
}

impl AddressInput {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AddressInput::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Parses the input as a single host address.
    pub(crate) fn parse(&self) -> Result<IpAddr, RangeError> {
        match self {
            AddressInput::Text(text) => parse_address(text),
            AddressInput::Numeric(value) => Ok(address_from_u128(*value)),
            AddressInput::Packed(bytes) => address_from_packed(bytes),
        }
    }
}

impl fmt::Display for AddressInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressInput::Text(text) => write!(f, "{text}"),
            AddressInput::Numeric(value) => write!(f, "{value}"),
            AddressInput::Packed(bytes) => {
                write!(f, "0x")?;
                for byte in bytes {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for AddressInput {
    fn from(text: &str) -> Self {
        AddressInput::Text(text.to_string())
    }
}

impl From<String> for AddressInput {
    fn from(text: String) -> Self {
        AddressInput::Text(text)
    }
}

impl From<u32> for AddressInput {
    fn from(value: u32) -> Self {
        AddressInput::Numeric(u128::from(value))
    }
}

impl From<u64> for AddressInput {
    fn from(value: u64) -> Self {
        AddressInput::Numeric(u128::from(value))
    }
}

impl From<u128> for AddressInput {
    fn from(value: u128) -> Self {
        AddressInput::Numeric(value)
    }
}

impl From<[u8; 4]> for AddressInput {
    fn from(bytes: [u8; 4]) -> Self {
        AddressInput::Packed(bytes.to_vec())
    }
}

impl From<[u8; 16]> for AddressInput {
    fn from(bytes: [u8; 16]) -> Self {
        AddressInput::Packed(bytes.to_vec())
    }
}

impl From<&[u8]> for AddressInput {
    fn from(bytes: &[u8]) -> Self {
        AddressInput::Packed(bytes.to_vec())
    }
}

impl From<Vec<u8>> for AddressInput {
    fn from(bytes: Vec<u8>) -> Self {
        AddressInput::Packed(bytes)
    }
}

impl From<IpAddr> for AddressInput {
    fn from(addr: IpAddr) -> Self {
        AddressInput::Packed(to_packed(addr))
    }
}

impl From<Ipv4Addr> for AddressInput {
    fn from(addr: Ipv4Addr) -> Self {
        AddressInput::from(IpAddr::V4(addr))
    }
}

impl From<Ipv6Addr> for AddressInput {
    fn from(addr: Ipv6Addr) -> Self {
        AddressInput::from(IpAddr::V6(addr))
    }
}

/// Integer form of an address.
pub fn to_u128(addr: IpAddr) -> u128 {
    match addr {
        IpAddr::V4(v4) => u128::from(u32::from(v4)),
        IpAddr::V6(v6) => u128::from(v6),
    }
}

/// Packed big-endian form of an address.
pub fn to_packed(addr: IpAddr) -> Vec<u8> {
    match addr {
        IpAddr::V4(v4) => v4.octets().to_vec(),
        IpAddr::V6(v6) => v6.octets().to_vec(),
    }
}

pub(crate) fn parse_address(text: &str) -> Result<IpAddr, RangeError> {
    text.parse::<IpAddr>()
        .map_err(|_| RangeError::InvalidAddress(text.to_string()))
}

fn address_from_u128(value: u128) -> IpAddr {
    match u32::try_from(value) {
        Ok(v4) => IpAddr::V4(Ipv4Addr::from(v4)),
        Err(_) => IpAddr::V6(Ipv6Addr::from(value)),
    }
}

fn address_from_packed(bytes: &[u8]) -> Result<IpAddr, RangeError> {
    if let Ok(octets) = <[u8; 4]>::try_from(bytes) {
        return Ok(IpAddr::V4(Ipv4Addr::from(octets)));
    }
    if let Ok(octets) = <[u8; 16]>::try_from(bytes) {
        return Ok(IpAddr::V6(Ipv6Addr::from(octets)));
    }
    Err(RangeError::InvalidPackedLength(bytes.len()))
}

/// Parses `"<addr>/<prefix>"` or `"<addr>/<mask>"` into the first and last
/// address of the network.
///
/// Host bits set in `<addr>` are masked off rather than rejected. IPv4 also
/// accepts a dotted netmask (`255.255.255.0`) or hostmask (`0.0.0.255`) after
/// the slash; IPv6 only takes a prefix length.
pub(crate) fn parse_network(text: &str) -> Result<(IpAddr, IpAddr), RangeError> {
    let Some((addr_str, suffix)) = text.split_once('/') else {
        return Err(RangeError::InvalidNetwork(text.to_string()));
    };

    match parse_address(addr_str)? {
        IpAddr::V4(ip) => {
            let prefix = ipv4_suffix_to_prefix(suffix)?;
            let network = Ipv4Network::new(ip, prefix)
                .map_err(|e| RangeError::InvalidNetwork(e.to_string()))?;

            Ok((
                IpAddr::V4(network.network()),
                IpAddr::V4(network.broadcast()),
            ))
        }
        IpAddr::V6(ip) => {
            let prefix = parse_prefix(suffix, IpFamily::V6.bits())?;
            let network = Ipv6Network::new(ip, prefix)
                .map_err(|e| RangeError::InvalidNetwork(e.to_string()))?;

            let first = network.network();
            let last = u128::from(first) | !u128::from(network.mask());
            Ok((IpAddr::V6(first), IpAddr::V6(Ipv6Addr::from(last))))
        }
    }
}

/// Decimal prefix length: ASCII digits only, no sign, at most `bits`.
fn parse_prefix(suffix: &str, bits: u8) -> Result<u8, RangeError> {
    let invalid = || RangeError::InvalidPrefix {
        prefix: suffix.to_string(),
        bits,
    };

    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let prefix = suffix.parse::<u8>().map_err(|_| invalid())?;
    if prefix > bits {
        return Err(invalid());
    }
    Ok(prefix)
}

fn ipv4_suffix_to_prefix(suffix: &str) -> Result<u8, RangeError> {
    if suffix.bytes().all(|b| b.is_ascii_digit()) {
        return parse_prefix(suffix, IpFamily::V4.bits());
    }

    let mask = suffix
        .parse::<Ipv4Addr>()
        .map_err(|_| RangeError::InvalidMask(suffix.to_string()))?;

    // Netmask first, then the same bits read as a hostmask.
    ipv4_mask_to_prefix(mask)
        .or_else(|_| ipv4_mask_to_prefix(Ipv4Addr::from(!u32::from(mask))))
        .map_err(|_| RangeError::InvalidMask(suffix.to_string()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
