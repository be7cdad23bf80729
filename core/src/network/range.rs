//! # IP Range Model
//!
//! An inclusive `[min, max]` span of addresses from a single family, built
//! from whichever description the caller has at hand:
//!
//! * A single host (`192.168.1.5`, `3232235777`, `[192, 168, 1, 5]`).
//! * A network, prefix or mask style (`192.168.1.0/24`, `192.168.1.0/255.255.255.0`).
//! * An explicit interval (`192.168.1.10 - 192.168.1.50`).
//!
//! Malformed input is an ordinary negative answer, never an error or a panic.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use tracing::{debug, trace};

use crate::network::address::{self, AddressInput, IpFamily};
use crate::network::error::RangeError;

/// Normalized endpoints. Both ends share a family by construction and
/// `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Bounds {
    V4 { min: Ipv4Addr, max: Ipv4Addr },
    V6 { min: Ipv6Addr, max: Ipv6Addr },
}

impl Bounds {
    fn single(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => Bounds::V4 { min: v4, max: v4 },
            IpAddr::V6(v6) => Bounds::V6 { min: v6, max: v6 },
        }
    }

    /// Puts two endpoints in order. Endpoints of different families are rejected.
    fn ordered(a: IpAddr, b: IpAddr) -> Result<Self, RangeError> {
        match (a, b) {
            (IpAddr::V4(a), IpAddr::V4(b)) => Ok(Bounds::V4 {
                min: a.min(b),
                max: a.max(b),
            }),
            (IpAddr::V6(a), IpAddr::V6(b)) => Ok(Bounds::V6 {
                min: a.min(b),
                max: a.max(b),
            }),
            _ => Err(RangeError::MixedFamilies),
        }
    }

    fn min(&self) -> IpAddr {
        match self {
            Bounds::V4 { min, .. } => IpAddr::V4(*min),
            Bounds::V6 { min, .. } => IpAddr::V6(*min),
        }
    }

    fn max(&self) -> IpAddr {
        match self {
            Bounds::V4 { max, .. } => IpAddr::V4(*max),
            Bounds::V6 { max, .. } => IpAddr::V6(*max),
        }
    }

    fn family(&self) -> IpFamily {
        match self {
            Bounds::V4 { .. } => IpFamily::V4,
            Bounds::V6 { .. } => IpFamily::V6,
        }
    }

    /// An address of the other family is never contained.
    fn contains(&self, addr: IpAddr) -> bool {
        match (self, addr) {
            (Bounds::V4 { min, max }, IpAddr::V4(v4)) => (*min..=*max).contains(&v4),
            (Bounds::V6 { min, max }, IpAddr::V6(v6)) => (*min..=*max).contains(&v6),
            _ => false,
        }
    }
}

/// The ways an input can describe a range, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Form {
    Host,
    Network,
    Interval,
}

type Matcher = fn(&AddressInput) -> Result<Bounds, RangeError>;

const FORMS: [(Form, Matcher); 3] = [
    (Form::Host, match_host),
    (Form::Network, match_network),
    (Form::Interval, match_interval),
];

/// Tries each form in turn and keeps the first one that parses.
pub(crate) fn resolve(input: &AddressInput) -> Option<Bounds> {
    for (form, matcher) in FORMS {
        match matcher(input) {
            Ok(bounds) => {
                debug!(
                    %input,
                    ?form,
                    min = %bounds.min(),
                    max = %bounds.max(),
                    "range form matched"
                );
                return Some(bounds);
            }
            Err(error) => trace!(%input, ?form, %error, "range form rejected"),
        }
    }

    debug!(%input, "input does not describe an IP range");
    None
}

fn match_host(input: &AddressInput) -> Result<Bounds, RangeError> {
    input.parse().map(Bounds::single)
}

fn match_network(input: &AddressInput) -> Result<Bounds, RangeError> {
    let text = input.as_text().ok_or(RangeError::NotText)?;
    let (first, last) = address::parse_network(text)?;
    Bounds::ordered(first, last)
}

/// Matches `"<addr> - <addr>"`. Whitespace around the dash and around the
/// whole string is ignored; the endpoints may come in either order.
fn match_interval(input: &AddressInput) -> Result<Bounds, RangeError> {
    let text = input.as_text().ok_or(RangeError::NotText)?.trim();
    let malformed = || RangeError::MalformedInterval(text.to_string());

    let (start, end) = text.split_once('-').ok_or_else(malformed)?;
    let (start, end) = (start.trim_end(), end.trim_start());
    if !is_address_token(start) || !is_address_token(end) {
        return Err(malformed());
    }

    let start = address::parse_address(start)?;
    let end = address::parse_address(end)?;
    Bounds::ordered(start, end)
}

/// Characters that can appear in a dotted-quad or colon-hex address.
fn is_address_token(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_hexdigit() || c == '.' || c == ':')
}

/// An inclusive range of IPv4 or IPv6 addresses.
///
/// Starts out unset; an unset range contains nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IpRange {
    bounds: Option<Bounds>,
}

impl IpRange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a range in one step, `None` if the input describes no range.
    pub fn parse(input: impl Into<AddressInput>) -> Option<Self> {
        let mut range = Self::new();
        range.set_range(input).then_some(range)
    }

    pub(crate) fn from_bounds(bounds: Option<Bounds>) -> Self {
        Self { bounds }
    }

    /// Sets the range from a host, a network or an interval.
    ///
    /// Tries the input as a single host address first, then as a network
    /// (`addr/prefix` or `addr/mask`, host bits masked off), then as an
    /// `addr-addr` interval. Only text can be a network or an interval.
    ///
    /// Returns `false` and leaves the current range untouched if none of
    /// these apply.
    pub fn set_range(&mut self, input: impl Into<AddressInput>) -> bool {
        match resolve(&input.into()) {
            Some(bounds) => {
                self.bounds = Some(bounds);
                true
            }
            None => false,
        }
    }

    /// Checks whether an address lies within `[min, max]`.
    ///
    /// Unparseable candidates, candidates of the other family and any
    /// candidate tested against an unset range all yield `false`.
    pub fn contain(&self, input: impl Into<AddressInput>) -> bool {
        let Some(bounds) = self.bounds else {
            return false;
        };

        let input = input.into();
        match input.parse() {
            Ok(addr) => bounds.contains(addr),
            Err(error) => {
                trace!(%input, %error, "candidate is not an address");
                false
            }
        }
    }

    pub fn min(&self) -> Option<IpAddr> {
        self.bounds.map(|b| b.min())
    }

    pub fn max(&self) -> Option<IpAddr> {
        self.bounds.map(|b| b.max())
    }

    pub fn family(&self) -> Option<IpFamily> {
        self.bounds.map(|b| b.family())
    }

    pub fn is_set(&self) -> bool {
        self.bounds.is_some()
    }

    pub(crate) fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }
}

impl fmt::Display for IpRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bounds {
            Some(bounds) => write!(f, "{}-{}", bounds.min(), bounds.max()),
            None => write!(f, "unset"),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
