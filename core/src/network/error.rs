use thiserror::Error;

/// Why a single interpretation of a range input was rejected.
///
/// These never leave the crate: the public API answers with `bool` and the
/// reason only shows up in `trace!` events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum RangeError {
    #[error("invalid IP address: {0:?}")]
    InvalidAddress(String),

    #[error("packed address must be 4 or 16 bytes, got {0}")]
    InvalidPackedLength(usize),

    #[error("not a network descriptor: {0:?}")]
    InvalidNetwork(String),

    #[error("invalid prefix length {prefix:?} for a {bits}-bit address")]
    InvalidPrefix { prefix: String, bits: u8 },

    #[error("invalid netmask: {0:?}")]
    InvalidMask(String),

    #[error("not an address interval: {0:?}")]
    MalformedInterval(String),

    #[error("interval mixes IPv4 and IPv6 endpoints")]
    MixedFamilies,

    #[error("only text input can describe a network or an interval")]
    NotText,
}
