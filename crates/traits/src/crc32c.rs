//! CRC-32C algorithm contract.
//!
//! The contract splits a checksum computation into two halves:
//!
//! - [`ChecksumState`]: a plain `Copy` value owned by the caller.
//! - [`Crc32cAlgorithm`]: a stateless strategy that mutates a state in place.
//!
//! Because algorithms never keep per-call data, one algorithm object can serve
//! any number of independent computations on any number of threads at once.
//!
//! # Register Convention
//!
//! `checksum` always holds a *finalized* CRC-32C value. Every ingest call
//! complements the register on entry and on exit, so the default state (`0`)
//! is the checksum of the empty sequence and reading `checksum` at any point
//! yields the standard CRC-32C of everything ingested so far.

use core::fmt::Debug;

/// In-progress CRC-32C register.
///
/// There is no invalid state. Resetting means constructing a new value:
///
/// ```
/// use traits::ChecksumState;
///
/// let mut state = ChecksumState::new();
/// state.checksum = 0x1234_5678;
/// state = ChecksumState::new();
/// assert_eq!(state.checksum, 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChecksumState {
  /// Finalized CRC-32C of all bytes ingested so far.
  pub checksum: u32,
}

impl ChecksumState {
  /// Register value of a fresh state: the CRC-32C of the empty sequence.
  pub const INITIAL: u32 = 0;

  /// Create a state holding [`INITIAL`](Self::INITIAL).
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { checksum: Self::INITIAL }
  }

  /// Create a state from an explicit register value.
  ///
  /// Passing a checksum returned by an earlier computation resumes it: further
  /// ingestion produces the checksum of the concatenated input.
  #[inline]
  #[must_use]
  pub const fn with_initial(checksum: u32) -> Self {
    Self { checksum }
  }

  /// Current checksum.
  #[inline]
  #[must_use]
  pub const fn checksum(&self) -> u32 {
    self.checksum
  }
}

/// A CRC-32C strategy.
///
/// # Implementor Requirements
///
/// - `ingest_span(state, bytes)` must leave `state` exactly as calling
///   `ingest_byte` once per byte, in order, would. This holds for every span
///   length (including zero) and every prior state value.
/// - Implementations hold no mutable data. They are shared across threads
///   without synchronization, hence the `Send + Sync` bound.
/// - Ingestion is total: every byte value and every span is valid input.
pub trait Crc32cAlgorithm: Send + Sync + Debug {
  /// Consume exactly one byte.
  fn ingest_byte(&self, state: &mut ChecksumState, byte: u8);

  /// Consume a contiguous span of bytes.
  ///
  /// The provided implementation calls [`ingest_byte`](Self::ingest_byte)
  /// for each byte. Table-driven strategies override it with a wide path.
  #[inline]
  fn ingest_span(&self, state: &mut ChecksumState, bytes: &[u8]) {
    for &byte in bytes {
      self.ingest_byte(state, byte);
    }
  }

  /// Short diagnostic label (e.g. `"managed/le64"`).
  fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Sums bytes into the register; just enough to exercise the default span path.
  #[derive(Debug)]
  struct Summing;

  impl Crc32cAlgorithm for Summing {
    fn ingest_byte(&self, state: &mut ChecksumState, byte: u8) {
      state.checksum = state.checksum.wrapping_add(u32::from(byte));
    }

    fn name(&self) -> &'static str {
      "summing"
    }
  }

  #[test]
  fn default_state_is_initial() {
    assert_eq!(ChecksumState::new(), ChecksumState::default());
    assert_eq!(ChecksumState::new().checksum(), ChecksumState::INITIAL);
  }

  #[test]
  fn with_initial_keeps_value() {
    let state = ChecksumState::with_initial(0xDEAD_BEEF);
    assert_eq!(state.checksum, 0xDEAD_BEEF);
  }

  #[test]
  fn state_is_copy() {
    let a = ChecksumState::with_initial(7);
    let mut b = a;
    b.checksum = 9;
    assert_eq!(a.checksum, 7);
    assert_eq!(b.checksum, 9);
  }

  #[test]
  fn default_span_matches_bytes() {
    let data = [1u8, 2, 3, 250];
    let mut by_span = ChecksumState::new();
    Summing.ingest_span(&mut by_span, &data);

    let mut by_byte = ChecksumState::new();
    for &b in &data {
      Summing.ingest_byte(&mut by_byte, b);
    }
    assert_eq!(by_span, by_byte);
  }

  #[test]
  fn empty_span_is_noop() {
    let mut state = ChecksumState::with_initial(42);
    Summing.ingest_span(&mut state, &[]);
    assert_eq!(state.checksum, 42);
  }

  #[test]
  fn trait_is_object_safe() {
    let algo: &dyn Crc32cAlgorithm = &Summing;
    let mut state = ChecksumState::new();
    algo.ingest_span(&mut state, b"ab");
    assert_eq!(state.checksum, u32::from(b'a') + u32::from(b'b'));
    assert_eq!(algo.name(), "summing");
  }
}
