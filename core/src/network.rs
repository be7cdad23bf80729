pub mod address;
pub(crate) mod error;
pub mod range;
pub mod shared;
