//! Table-less reference CRC-32C.
//!
//! Processes one bit at a time with branchless polynomial reduction:
//!
//! ```text
//! for each bit:
//!   mask = 0 - (crc & 1)    // 0x00000000 or 0xFFFFFFFF
//!   crc = (crc >> 1) ^ (POLYNOMIAL & mask)
//! ```
//!
//! There are no multi-byte loads anywhere, so the result is independent of
//! host byte order. This is the correctness oracle every table-driven path is
//! checked against, and the universal fallback.

use traits::{ChecksumState, Crc32cAlgorithm};

use crate::constants::crc32c::POLYNOMIAL;

/// Advance the raw (non-complemented) register by one byte.
///
/// This is a `const fn` so known answers can be evaluated at compile time.
#[inline]
#[must_use]
pub const fn compute_byte(mut crc: u32, byte: u8) -> u32 {
  crc ^= byte as u32;

  let mut i = 0;
  while i < 8 {
    let mask = 0u32.wrapping_sub(crc & 1);
    crc = (crc >> 1) ^ (POLYNOMIAL & mask);
    i += 1;
  }

  crc
}

/// Advance the raw register over a span.
#[inline]
#[must_use]
pub fn compute(mut crc: u32, data: &[u8]) -> u32 {
  for &byte in data {
    crc = compute_byte(crc, byte);
  }
  crc
}

/// Finalized CRC-32C of `data`, evaluable in `const` context.
#[must_use]
#[allow(clippy::indexing_slicing)] // `i < data.len()` is the loop condition.
pub const fn checksum_const(data: &[u8]) -> u32 {
  let mut crc = !ChecksumState::INITIAL;
  let mut i = 0;
  while i < data.len() {
    crc = compute_byte(crc, data[i]);
    i += 1;
  }
  !crc
}

/// Bit-by-bit CRC-32C ("basic").
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Basic;

impl Basic {
  pub const NAME: &'static str = "basic";

  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

/// Shared instance handed out by the factory.
pub static BASIC: Basic = Basic::new();

impl Crc32cAlgorithm for Basic {
  #[inline]
  fn ingest_byte(&self, state: &mut ChecksumState, byte: u8) {
    state.checksum = !compute_byte(!state.checksum, byte);
  }

  #[inline]
  fn ingest_span(&self, state: &mut ChecksumState, bytes: &[u8]) {
    state.checksum = !compute(!state.checksum, bytes);
  }

  fn name(&self) -> &'static str {
    Self::NAME
  }
}
