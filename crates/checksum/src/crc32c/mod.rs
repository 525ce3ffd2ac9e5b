//! CRC-32C (Castagnoli) checksum.
//!
//! CRC-32C uses polynomial 0x1EDC6F41, chosen for strong error detection on
//! storage and network payloads.
//!
//! # Implementations
//!
//! | Type | Name | Strategy |
//! |------|------|----------|
//! | [`Basic`](basic::Basic) | `basic` | bit-by-bit reference |
//! | [`ManagedLe32`](managed::ManagedLe32) | `managed/le32` | slicing-by-12 over `u32` |
//! | [`ManagedLe64`](managed::ManagedLe64) | `managed/le64` | slicing-by-8 over `u64` |
//! | [`ManagedBe`](managed::ManagedBe) | `managed/be` | one table, one byte at a time |
//!
//! # Usage
//!
//! ```
//! use checksum::{Checksum, Crc32c};
//!
//! // One-shot computation
//! let crc = Crc32c::checksum(b"hello world");
//!
//! // Incremental computation
//! let mut hasher = Crc32c::new();
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//! assert_eq!(hasher.finalize(), crc);
//! ```

pub mod basic;
pub mod managed;

use core::fmt;

use traits::{Checksum, ChecksumState};

use crate::dispatch::{self, Implementation};

/// Streaming CRC-32C hasher.
///
/// Binds a [`ChecksumState`] to an [`Implementation`] chosen at construction.
/// Later changes to the global factory do not affect an existing hasher.
#[derive(Clone, Copy)]
pub struct Crc32c {
  state: ChecksumState,
  /// Checksum restored by `reset`.
  initial: u32,
  implementation: Implementation,
}

impl Crc32c {
  /// Create a hasher using [`dispatch::create`].
  #[inline]
  #[must_use]
  pub fn new() -> Self {
    Self::with_implementation(dispatch::create())
  }

  /// Create a hasher bound to an explicit implementation.
  #[inline]
  #[must_use]
  pub const fn with_implementation(implementation: Implementation) -> Self {
    Self {
      state: ChecksumState::new(),
      initial: ChecksumState::INITIAL,
      implementation,
    }
  }

  /// Create a hasher to resume from a previous CRC.
  ///
  /// Continuing with the remaining bytes yields the CRC of the whole input.
  #[inline]
  #[must_use]
  pub fn resume(crc: u32) -> Self {
    let mut hasher = Self::new();
    hasher.state = ChecksumState::with_initial(crc);
    hasher.initial = crc;
    hasher
  }

  /// Feed a span.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.implementation.ingest_span(&mut self.state, data);
  }

  /// Feed one byte.
  #[inline]
  pub fn update_byte(&mut self, byte: u8) {
    self.implementation.ingest_byte(&mut self.state, byte);
  }

  /// CRC of everything fed so far.
  #[inline]
  #[must_use]
  pub const fn finalize(&self) -> u32 {
    self.state.checksum
  }

  /// Return to the value the hasher was constructed with.
  #[inline]
  pub fn reset(&mut self) {
    self.state = ChecksumState::with_initial(self.initial);
  }

  /// Current register.
  #[inline]
  #[must_use]
  pub const fn state(&self) -> ChecksumState {
    self.state
  }

  /// Name of the bound implementation.
  #[inline]
  #[must_use]
  pub fn backend_name(&self) -> &'static str {
    self.implementation.name()
  }

  /// One-shot CRC-32C using [`dispatch::create`].
  #[inline]
  #[must_use]
  pub fn checksum(data: &[u8]) -> u32 {
    let mut state = ChecksumState::new();
    dispatch::create().ingest_span(&mut state, data);
    state.checksum
  }
}

impl Default for Crc32c {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for Crc32c {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc32c")
      .field("backend", &self.implementation.name())
      .field("checksum", &format_args!("{:#010x}", self.state.checksum))
      .finish()
  }
}

impl Checksum for Crc32c {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn new() -> Self {
    Self::new()
  }

  #[inline]
  fn with_initial(initial: u32) -> Self {
    Self::resume(initial)
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Self::update(self, data);
  }

  #[inline]
  fn finalize(&self) -> u32 {
    Self::finalize(self)
  }

  #[inline]
  fn reset(&mut self) {
    Self::reset(self);
  }

  #[inline]
  fn checksum(data: &[u8]) -> u32 {
    Self::checksum(data)
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::format;

  use super::*;
  use crate::{Basic, ManagedBe};

  const CHECK: u32 = 0xE306_9283;

  #[test]
  fn test_check_value() {
    assert_eq!(Crc32c::checksum(b"123456789"), CHECK);
    assert_eq!(<Crc32c as Checksum>::checksum(b"123456789"), CHECK);
  }

  #[test]
  fn test_streaming_matches_oneshot() {
    let mut hasher = Crc32c::with_implementation(&ManagedBe);
    hasher.update(b"1234");
    hasher.update(b"");
    hasher.update(b"56789");
    assert_eq!(hasher.finalize(), CHECK);
    assert_eq!(hasher.finalize(), CHECK);
  }

  #[test]
  fn test_update_byte() {
    let mut hasher = Crc32c::with_implementation(&Basic);
    for &b in b"123456789" {
      hasher.update_byte(b);
    }
    assert_eq!(hasher.finalize(), CHECK);
    assert_eq!(hasher.state(), ChecksumState::with_initial(CHECK));
  }

  #[test]
  fn test_resume() {
    let first = Crc32c::checksum(b"1234");
    let mut hasher = Crc32c::resume(first);
    hasher.update(b"56789");
    assert_eq!(hasher.finalize(), CHECK);
  }

  #[test]
  fn test_reset() {
    let mut hasher = Crc32c::new();
    hasher.update(b"garbage");
    hasher.reset();
    assert_eq!(hasher.finalize(), 0);

    let mut resumed = Crc32c::resume(0xDEAD_BEEF);
    resumed.update(b"more");
    resumed.reset();
    assert_eq!(resumed.finalize(), 0xDEAD_BEEF);
  }

  #[test]
  fn test_vectored() {
    let bufs: [&[u8]; 4] = [b"12", b"345", b"", b"6789"];
    let crc = <Crc32c as Checksum>::checksum_vectored(&bufs);
    assert_eq!(crc, CHECK);
  }

  #[test]
  fn test_debug_shows_backend() {
    let hasher = Crc32c::with_implementation(&Basic);
    let out = format!("{hasher:?}");
    assert!(out.contains("basic"), "{out}");
    assert!(out.contains("0x00000000"), "{out}");
  }

  #[test]
  fn test_backend_name() {
    assert_eq!(Crc32c::with_implementation(&ManagedBe).backend_name(), "managed/be");
  }
}
