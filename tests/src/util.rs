use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Routes library events to the test output. Filter with `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

pub fn ip(s: &str) -> IpAddr {
    s.parse().expect("test address must parse")
}

/// The address `delta` steps away from `addr`, staying in its family.
pub fn offset(addr: IpAddr, delta: i128) -> IpAddr {
    match addr {
        IpAddr::V4(v4) => {
            let value = i128::from(u32::from(v4)) + delta;
            IpAddr::V4(Ipv4Addr::from(u32::try_from(value).expect("IPv4 offset out of range")))
        }
        IpAddr::V6(v6) => {
            let value = u128::from(v6)
                .checked_add_signed(delta)
                .expect("IPv6 offset out of range");
            IpAddr::V6(Ipv6Addr::from(value))
        }
    }
}
