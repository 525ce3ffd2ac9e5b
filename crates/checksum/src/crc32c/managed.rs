//! Table-driven ("managed") CRC-32C.
//!
//! Slicing-by-N replaces the eight shift/XOR rounds per byte with table
//! lookups and folds several bytes per step:
//!
//! | Type | Fast-path step | Lookups per step | Host |
//! |------|----------------|------------------|------|
//! | [`ManagedLe32`] | 3 × `u32` (12 bytes), then 1 × `u32` | 12, then 4 | little-endian |
//! | [`ManagedLe64`] | 1 × `u64` (8 bytes) | 8 | little-endian |
//! | [`ManagedBe`] | 1 byte | 1 | any |
//!
//! For each word group:
//! 1. XOR the current register into the first four bytes
//! 2. Look up each byte in the table matching its distance from the end of the group
//! 3. XOR all lookups to get the new register
//!
//! # Alignment
//!
//! Spans are split by [`split_aligned`] so the word loop only ever touches
//! aligned words. The unaligned prefix and the short suffix go through the
//! single-byte table.
//!
//! # Byte Order
//!
//! Words are loaded in native order and the tables assume byte 0 sits in the
//! low bits, which only holds on little-endian hosts. The `Le` variants assert
//! this in debug builds; big-endian hosts get [`ManagedBe`].

// SAFETY: Every table index is masked to 0..=255 and every table number is a
// literal below TABLE_COUNT.
#![allow(clippy::indexing_slicing)]

use traits::{ChecksumState, Crc32cAlgorithm};

use crate::{common::words::split_aligned, constants::crc32c::TABLES};

/// `TABLES[t]` indexed by the low byte of `v`.
macro_rules! lookup {
  ($t:literal, $v:expr) => {
    TABLES.0[$t][(($v) & 0xFF) as usize]
  };
}

// ─────────────────────────────────────────────────────────────────────────────
// Kernels (raw register, no complement)
// ─────────────────────────────────────────────────────────────────────────────

/// One byte through table 0.
#[inline(always)]
#[must_use]
pub fn compute_byte(crc: u32, byte: u8) -> u32 {
  (crc >> 8) ^ lookup!(0, crc ^ byte as u32)
}

#[inline]
#[must_use]
fn compute_bytes(mut crc: u32, data: &[u8]) -> u32 {
  for &byte in data {
    crc = compute_byte(crc, byte);
  }
  crc
}

/// Fold one little-endian `u32` word.
#[inline(always)]
#[must_use]
fn fold_u32(crc: u32, word: u32) -> u32 {
  let x = crc ^ word;
  lookup!(3, x) ^ lookup!(2, x >> 8) ^ lookup!(1, x >> 16) ^ lookup!(0, x >> 24)
}

/// Fold three consecutive little-endian `u32` words (12 bytes).
#[inline(always)]
#[must_use]
fn fold_u32x3(crc: u32, w0: u32, w1: u32, w2: u32) -> u32 {
  let x = crc ^ w0;
  lookup!(11, x)
    ^ lookup!(10, x >> 8)
    ^ lookup!(9, x >> 16)
    ^ lookup!(8, x >> 24)
    ^ lookup!(7, w1)
    ^ lookup!(6, w1 >> 8)
    ^ lookup!(5, w1 >> 16)
    ^ lookup!(4, w1 >> 24)
    ^ lookup!(3, w2)
    ^ lookup!(2, w2 >> 8)
    ^ lookup!(1, w2 >> 16)
    ^ lookup!(0, w2 >> 24)
}

/// Fold one little-endian `u64` word (8 bytes).
#[inline(always)]
#[must_use]
fn fold_u64(crc: u32, word: u64) -> u32 {
  let x = word ^ u64::from(crc);
  lookup!(7, x)
    ^ lookup!(6, x >> 8)
    ^ lookup!(5, x >> 16)
    ^ lookup!(4, x >> 24)
    ^ lookup!(3, x >> 32)
    ^ lookup!(2, x >> 40)
    ^ lookup!(1, x >> 48)
    ^ lookup!(0, x >> 56)
}

/// Raw slicing-by-12 over 32-bit words.
#[inline]
#[must_use]
pub fn compute_le32(crc: u32, data: &[u8]) -> u32 {
  debug_assert!(cfg!(target_endian = "little"), "managed/le32 selected on a big-endian host");

  let (prefix, words, suffix) = split_aligned::<u32>(data);
  let mut crc = compute_bytes(crc, prefix);

  let mut groups = words.chunks_exact(3);
  for group in groups.by_ref() {
    if let &[w0, w1, w2] = group {
      crc = fold_u32x3(crc, w0, w1, w2);
    }
  }
  for &word in groups.remainder() {
    crc = fold_u32(crc, word);
  }

  compute_bytes(crc, suffix)
}

/// Raw slicing-by-8 over 64-bit words.
#[inline]
#[must_use]
pub fn compute_le64(crc: u32, data: &[u8]) -> u32 {
  debug_assert!(cfg!(target_endian = "little"), "managed/le64 selected on a big-endian host");

  let (prefix, words, suffix) = split_aligned::<u64>(data);
  let mut crc = compute_bytes(crc, prefix);

  for &word in words {
    crc = fold_u64(crc, word);
  }

  compute_bytes(crc, suffix)
}

/// Raw byte-at-a-time table walk; correct on any host.
#[inline]
#[must_use]
pub fn compute_be(crc: u32, data: &[u8]) -> u32 {
  compute_bytes(crc, data)
}

// ─────────────────────────────────────────────────────────────────────────────
// Algorithm objects
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! define_managed {
  (
    $(#[$outer:meta])*
    $name:ident, $label:literal, $kernel:path
  ) => {
    $(#[$outer])*
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct $name;

    impl $name {
      pub const NAME: &'static str = $label;

      #[inline]
      #[must_use]
      pub const fn new() -> Self {
        Self
      }
    }

    impl Crc32cAlgorithm for $name {
      #[inline]
      fn ingest_byte(&self, state: &mut ChecksumState, byte: u8) {
        state.checksum = !compute_byte(!state.checksum, byte);
      }

      #[inline]
      fn ingest_span(&self, state: &mut ChecksumState, bytes: &[u8]) {
        state.checksum = !$kernel(!state.checksum, bytes);
      }

      fn name(&self) -> &'static str {
        Self::NAME
      }
    }
  };
}

define_managed!(
  /// Slicing-by-12 over aligned `u32` words. Little-endian hosts only.
  ManagedLe32, "managed/le32", compute_le32
);

define_managed!(
  /// Slicing-by-8 over aligned `u64` words. Little-endian hosts only.
  ManagedLe64, "managed/le64", compute_le64
);

define_managed!(
  /// Single-table, byte-at-a-time walk. The choice for big-endian hosts.
  ManagedBe, "managed/be", compute_be
);

pub static MANAGED_LE32: ManagedLe32 = ManagedLe32::new();
pub static MANAGED_LE64: ManagedLe64 = ManagedLe64::new();
pub static MANAGED_BE: ManagedBe = ManagedBe::new();
