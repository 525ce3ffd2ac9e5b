//! Pluggable CRC-32C (Castagnoli) engine.
//!
//! The engine separates *what is being checksummed* from *how*:
//!
//! - [`ChecksumState`] is a plain value the caller owns.
//! - A [`Crc32cAlgorithm`] is a stateless strategy that advances a state by
//!   one byte or one span.
//! - The factory ([`create`]) hands out the best strategy for the host, or
//!   whatever a process-wide override ([`set_global_factory`]) says.
//!
//! # Implementations
//!
//! | Type | Name | Host | Strategy |
//! |------|------|------|----------|
//! | [`Basic`] | `basic` | any | bit-by-bit reference |
//! | [`ManagedLe32`] | `managed/le32` | little-endian 32-bit | slicing-by-12 |
//! | [`ManagedLe64`] | `managed/le64` | little-endian 64-bit | slicing-by-8 |
//! | [`ManagedBe`] | `managed/be` | big-endian | single table |
//!
//! All of them produce bit-identical results for every input.
//!
//! # Example
//!
//! ```rust
//! use checksum::{ChecksumState, Crc32c, Crc32cAlgorithm};
//!
//! // Raw contract: caller-owned state, factory-provided algorithm.
//! let algo = checksum::create();
//! let mut state = ChecksumState::new();
//! algo.ingest_span(&mut state, b"1234");
//! algo.ingest_span(&mut state, b"56789");
//! assert_eq!(state.checksum, 0xE306_9283);
//!
//! // Convenience hasher.
//! let mut hasher = Crc32c::new();
//! hasher.update(b"123456789");
//! assert_eq!(hasher.finalize(), 0xE306_9283);
//! assert_eq!(Crc32c::checksum(b"123456789"), 0xE306_9283);
//! ```
//!
//! # Overriding the Implementation
//!
//! ```rust
//! use checksum::{Basic, Implementation};
//!
//! fn reference() -> Implementation {
//!   &Basic
//! }
//!
//! checksum::set_global_factory(Some(reference));
//! assert_eq!(checksum::selected_backend(), "basic");
//! checksum::set_global_factory(None);
//! ```
//!
//! # Features
//!
//! | Feature | Default | Effect |
//! |---------|---------|--------|
//! | `std` | yes | default selection resolved once and cached |
//! | `tracing` | yes | structured events on selection and override changes |
//!
//! # no_std Support
//!
//! ```toml
//! [dependencies]
//! checksum = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

mod common;
mod constants;
mod crc32c;
pub mod dispatch;

pub use crate::crc32c::{
  Crc32c,
  basic::{Basic, checksum_const},
  managed::{ManagedBe, ManagedLe32, ManagedLe64},
};
pub use dispatch::{
  BackendKind, Implementation, ImplementationFactory, best_managed_kind, create, create_best_managed,
  has_global_factory, selected_backend, set_global_factory,
};
pub use platform::{ByteOrder, Host, WordSize, host};
pub use traits::{Checksum, ChecksumState, Crc32cAlgorithm};

/// Raw kernels on the non-complemented register, for benchmarks and fuzzing.
#[doc(hidden)]
pub mod __internal {
  pub use crate::crc32c::{
    basic::compute as basic_compute,
    managed::{compute_be, compute_le32, compute_le64},
  };
}
