// ─────────────────────────────────────────────────────────────────────────────
// Host Properties
// ─────────────────────────────────────────────────────────────────────────────

use core::fmt;

/// Byte order of multi-byte loads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ByteOrder {
  Little,
  Big,
}

impl ByteOrder {
  /// Byte order of the compilation target.
  #[inline]
  #[must_use]
  pub const fn current() -> Self {
    if cfg!(target_endian = "big") { Self::Big } else { Self::Little }
  }

  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Little => "little-endian",
      Self::Big => "big-endian",
    }
  }
}

/// Native register width.
///
/// Targets narrower than 64 bits (including 16-bit ones) are reported as
/// [`WordSize::Bits32`]: they never benefit from the 64-bit table path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordSize {
  Bits32,
  Bits64,
}

impl WordSize {
  /// Word size of the compilation target.
  #[inline]
  #[must_use]
  pub const fn current() -> Self {
    if cfg!(target_pointer_width = "64") {
      Self::Bits64
    } else {
      Self::Bits32
    }
  }

  /// Width in bits.
  #[inline]
  #[must_use]
  pub const fn bits(self) -> u32 {
    match self {
      Self::Bits32 => 32,
      Self::Bits64 => 64,
    }
  }
}

/// The host properties that drive implementation selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Host {
  pub byte_order: ByteOrder,
  pub word_size: WordSize,
}

impl Host {
  /// Little-endian, 64-bit (x86_64, aarch64, riscv64, ...).
  pub const LE64: Self = Self::new(ByteOrder::Little, WordSize::Bits64);
  /// Little-endian, 32-bit (x86, armv7, wasm32, ...).
  pub const LE32: Self = Self::new(ByteOrder::Little, WordSize::Bits32);
  /// Big-endian, 64-bit (s390x, powerpc64).
  pub const BE64: Self = Self::new(ByteOrder::Big, WordSize::Bits64);
  /// Big-endian, 32-bit (powerpc, mips).
  pub const BE32: Self = Self::new(ByteOrder::Big, WordSize::Bits32);

  #[inline]
  #[must_use]
  pub const fn new(byte_order: ByteOrder, word_size: WordSize) -> Self {
    Self { byte_order, word_size }
  }

  /// The compilation target.
  #[inline]
  #[must_use]
  pub const fn current() -> Self {
    Self::new(ByteOrder::current(), WordSize::current())
  }

  #[inline]
  #[must_use]
  pub const fn is_little_endian(self) -> bool {
    matches!(self.byte_order, ByteOrder::Little)
  }
}

impl fmt::Display for Host {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}-bit", self.byte_order.as_str(), self.word_size.bits())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
