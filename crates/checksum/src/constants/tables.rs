//! Slicing-by-N lookup table generation.
//!
//! # Table Structure
//!
//! `N` tables of 256 entries:
//! - Table 0: the effect of eight reflected shift/XOR rounds on each byte value
//! - Table k: the contribution of a byte that sits k positions earlier in the
//!   stream, i.e. table 0 followed by k further byte-shifts of the register
//!
//! Equivalently `tables[k][b] = (tables[k-1][b] >> 8) ^ tables[0][tables[k-1][b] & 0xFF]`.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256, 0..N).
#![allow(clippy::indexing_slicing)]

/// Generate the byte-at-a-time table (table 0) for a reflected polynomial.
#[must_use]
pub const fn generate_table_0_32(poly: u32) -> [u32; 256] {
  let mut table = [0u32; 256];
  let mut i = 0usize;

  while i < 256 {
    let mut crc = i as u32;
    let mut j = 0;
    while j < 8 {
      if crc & 1 != 0 {
        crc = (crc >> 1) ^ poly;
      } else {
        crc >>= 1;
      }
      j += 1;
    }
    table[i] = crc;
    i += 1;
  }

  table
}

/// Generate `N` slicing tables for a reflected 32-bit polynomial.
#[must_use]
pub const fn generate_slicing_tables_32<const N: usize>(poly: u32) -> [[u32; 256]; N] {
  let table0 = generate_table_0_32(poly);
  let mut tables = [[0u32; 256]; N];
  if N == 0 {
    return tables;
  }
  tables[0] = table0;

  let mut t = 1;
  while t < N {
    let mut i = 0;
    while i < 256 {
      let prev = tables[t - 1][i];
      tables[t][i] = (prev >> 8) ^ table0[(prev & 0xFF) as usize];
      i += 1;
    }
    t += 1;
  }

  tables
}
