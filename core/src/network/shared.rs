use std::sync::{PoisonError, RwLock};

use tracing::debug;

use crate::network::address::AddressInput;
use crate::network::range::{self, IpRange};

/// An [`IpRange`] that can be read and replaced from several threads.
///
/// The endpoints live in one value behind the lock, so readers see either the
/// old pair or the new one, never a mix.
#[derive(Debug, Default)]
pub struct SharedIpRange {
    inner: RwLock<IpRange>,
}

impl SharedIpRange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same rules as [`IpRange::set_range`]. Input is resolved before the
    /// write lock is taken.
    pub fn set_range(&self, input: impl Into<AddressInput>) -> bool {
        let Some(bounds) = range::resolve(&input.into()) else {
            return false;
        };

        // Writers only ever store a complete value, so a poisoned lock
        // still guards a consistent range.
        let updated = IpRange::from_bounds(Some(bounds));
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = updated;
        drop(guard);

        debug!(range = %updated, "shared range replaced");
        true
    }

    pub fn contain(&self, input: impl Into<AddressInput>) -> bool {
        self.snapshot().contain(input)
    }

    /// Copy of the current range.
    pub fn snapshot(&self) -> IpRange {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        IpRange::from_bounds(guard.bounds())
    }
}

impl From<IpRange> for SharedIpRange {
    fn from(range: IpRange) -> Self {
        Self {
            inner: RwLock::new(range),
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
