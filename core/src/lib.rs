//! Inclusive IPv4/IPv6 address ranges built from a host, a network or an
//! interval, with membership checks.
//!
//! ```
//! use iprange_core::IpRange;
//!
//! let mut range = IpRange::new();
//! assert!(range.set_range("192.168.123.0/24"));
//! assert!(range.contain("192.168.123.7"));
//! assert!(range.contain(3232267135u32));
//! assert!(!range.contain("192.168.124.0"));
//! ```

pub mod network;

pub use network::address::{AddressInput, IpFamily, to_packed, to_u128};
pub use network::range::IpRange;
pub use network::shared::SharedIpRange;
