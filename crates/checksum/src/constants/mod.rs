//! Precomputed constants for CRC-32C.
//!
//! All tables are computed at compile time by `const fn`; nothing is built or
//! locked at runtime.
//!
//! # Cache Alignment
//!
//! Lookup tables are 64-byte (cache line) aligned using [`Aligned64`] to prevent
//! cache line splits during table lookups.

pub mod crc32c;
pub mod tables;

/// Wrapper type to force 64-byte (cache line) alignment.
///
/// The inner type `T` is accessible via `.0`.
#[derive(Debug)]
#[repr(align(64))]
pub struct Aligned64<T>(pub T);
