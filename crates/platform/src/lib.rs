//! Host description for CRC-32C implementation selection.
//!
//! This crate is the single source of truth for the two host properties the
//! checksum engine cares about:
//!
//! - [`ByteOrder`]: whether multi-byte words load little- or big-endian.
//! - [`WordSize`]: the native register width used by the table-driven paths.
//!
//! Both are fixed for a compilation target, so [`host()`] is a `const fn`
//! resolved entirely through `cfg!` with no runtime detection and no caching.
//!
//! # Example
//!
//! ```
//! use platform::{ByteOrder, host};
//!
//! let host = host();
//! if host.byte_order == ByteOrder::Little {
//!   // word-at-a-time table paths are available
//! }
//! println!("{host}");
//! ```

#![no_std]

mod host;

pub use host::{ByteOrder, Host, WordSize};

/// Describe the host this crate was compiled for.
#[inline]
#[must_use]
pub const fn host() -> Host {
  Host::current()
}
