//! CRC-32C (Castagnoli) constants.
//!
//! Polynomial: 0x1EDC6F41 (reflected: 0x82F63B78)
//! Used by: iSCSI, SCTP, Btrfs, ext4, RocksDB, LevelDB

/// CRC-32C polynomial in reflected (bit-reversed) form.
///
/// The normal form is 0x1EDC6F41; the reflected form drives LSB-first processing.
pub const POLYNOMIAL: u32 = 0x82F6_3B78;

/// Number of slicing tables.
///
/// Twelve covers the widest fast path (three `u32` words per step); the
/// 64-bit path uses the first eight, the byte paths only table 0.
pub const TABLE_COUNT: usize = 12;

/// Slicing-by-12 lookup tables.
///
/// Total size: 12 * 256 * 4 = 12KB
pub static TABLES: super::Aligned64<[[u32; 256]; TABLE_COUNT]> =
  super::Aligned64(super::tables::generate_slicing_tables_32(POLYNOMIAL));
