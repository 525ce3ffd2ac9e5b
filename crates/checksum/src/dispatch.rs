//! CRC-32C implementation factory.
//!
//! Every consumer gets its algorithm from here:
//!
//! ```text
//! create() ──► global factory installed? ──yes──► factory()
//!                      │ no
//!                      ▼
//!              best_managed_kind(host())
//! ```
//!
//! # Selection Table
//!
//! | Byte order | Word size | Implementation |
//! |------------|-----------|----------------|
//! | big | any | [`ManagedBe`](crate::ManagedBe) |
//! | little | 64-bit | [`ManagedLe64`](crate::ManagedLe64) |
//! | little | 32-bit | [`ManagedLe32`](crate::ManagedLe32) |
//!
//! # Global Override
//!
//! [`set_global_factory`] swaps a process-wide function pointer with a single
//! atomic store. Readers do one atomic load per [`create`] call and never
//! block. Computations already holding a handle keep using it; only later
//! `create()` calls observe the swap.

use core::{
  fmt,
  ptr,
  sync::atomic::{AtomicPtr, Ordering},
};

use platform::{ByteOrder, Host, WordSize};
use traits::Crc32cAlgorithm;

use crate::crc32c::{
  basic::BASIC,
  managed::{MANAGED_BE, MANAGED_LE32, MANAGED_LE64},
};

/// Shared, stateless handle to a CRC-32C algorithm.
pub type Implementation = &'static dyn Crc32cAlgorithm;

/// Producer of implementations, installable as the process-wide override.
pub type ImplementationFactory = fn() -> Implementation;

// ─────────────────────────────────────────────────────────────────────────────
// Backend Kinds
// ─────────────────────────────────────────────────────────────────────────────

/// Built-in implementations, by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BackendKind {
  /// Bit-by-bit reference.
  Basic,
  /// Slicing-by-12 over `u32` words.
  ManagedLe32,
  /// Slicing-by-8 over `u64` words.
  ManagedLe64,
  /// Single-table byte walk.
  ManagedBe,
}

impl BackendKind {
  /// Every built-in kind, reference first.
  pub const ALL: [Self; 4] = [Self::Basic, Self::ManagedLe32, Self::ManagedLe64, Self::ManagedBe];

  /// Canonical name; equal to the implementation's [`Crc32cAlgorithm::name`].
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Basic => crate::Basic::NAME,
      Self::ManagedLe32 => crate::ManagedLe32::NAME,
      Self::ManagedLe64 => crate::ManagedLe64::NAME,
      Self::ManagedBe => crate::ManagedBe::NAME,
    }
  }

  /// Shared static instance of this kind.
  #[must_use]
  pub fn implementation(self) -> Implementation {
    match self {
      Self::Basic => &BASIC,
      Self::ManagedLe32 => &MANAGED_LE32,
      Self::ManagedLe64 => &MANAGED_LE64,
      Self::ManagedBe => &MANAGED_BE,
    }
  }

  /// Whether this kind produces correct results on `host`.
  ///
  /// The little-endian kinds reinterpret bytes as native words and are only
  /// valid where that reinterpretation is little-endian.
  #[must_use]
  pub const fn supports(self, host: Host) -> bool {
    match self {
      Self::Basic | Self::ManagedBe => true,
      Self::ManagedLe32 | Self::ManagedLe64 => host.is_little_endian(),
    }
  }
}

impl fmt::Display for BackendKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Best built-in kind for `host`.
#[inline]
#[must_use]
pub const fn best_managed_kind(host: Host) -> BackendKind {
  match (host.byte_order, host.word_size) {
    (ByteOrder::Big, _) => BackendKind::ManagedBe,
    (ByteOrder::Little, WordSize::Bits64) => BackendKind::ManagedLe64,
    (ByteOrder::Little, WordSize::Bits32) => BackendKind::ManagedLe32,
  }
}

/// Best built-in implementation for the current host.
///
/// Ignores the global factory.
#[inline]
#[must_use]
pub fn create_best_managed() -> Implementation {
  best_managed_kind(platform::host()).implementation()
}

#[cfg(feature = "std")]
fn resolve_default() -> Implementation {
  let host = platform::host();
  let kind = best_managed_kind(host);
  debug_event!(host = %host, backend = kind.as_str(), "selected default CRC-32C implementation");
  kind.implementation()
}

/// Default implementation, resolved once per process.
#[cfg(feature = "std")]
fn default_implementation() -> Implementation {
  use std::sync::OnceLock;
  static DEFAULT: OnceLock<Implementation> = OnceLock::new();
  *DEFAULT.get_or_init(resolve_default)
}

#[cfg(not(feature = "std"))]
fn default_implementation() -> Implementation {
  create_best_managed()
}

// ─────────────────────────────────────────────────────────────────────────────
// Global Override
// ─────────────────────────────────────────────────────────────────────────────

/// Installed factory as an erased pointer; null means none.
static GLOBAL_FACTORY: AtomicPtr<()> = AtomicPtr::new(ptr::null_mut());

#[inline]
fn global_factory() -> Option<ImplementationFactory> {
  let raw = GLOBAL_FACTORY.load(Ordering::Acquire);
  if raw.is_null() {
    return None;
  }
  // SAFETY: the only non-null values ever stored are `ImplementationFactory`
  // function pointers cast to `*mut ()` in `set_global_factory`.
  #[allow(unsafe_code)]
  let factory = unsafe { core::mem::transmute::<*mut (), ImplementationFactory>(raw) };
  Some(factory)
}

/// Install (`Some`) or clear (`None`) the process-wide factory override.
///
/// Takes effect for every later [`create`] call on every thread.
pub fn set_global_factory(factory: Option<ImplementationFactory>) {
  let raw = factory.map_or(ptr::null_mut(), |f| f as *mut ());
  GLOBAL_FACTORY.store(raw, Ordering::Release);
  debug_event!(installed = factory.is_some(), "CRC-32C global factory changed");
}

/// Whether a global factory override is installed.
#[inline]
#[must_use]
pub fn has_global_factory() -> bool {
  !GLOBAL_FACTORY.load(Ordering::Acquire).is_null()
}

/// Current implementation: the global factory's if one is installed,
/// otherwise the best managed one for the host.
#[inline]
#[must_use]
pub fn create() -> Implementation {
  match global_factory() {
    Some(factory) => factory(),
    None => default_implementation(),
  }
}

/// Name of the implementation [`create`] would return right now.
#[inline]
#[must_use]
pub fn selected_backend() -> &'static str {
  create().name()
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::ToString;

  use super::*;

  // The override slot is process-global; its lifecycle is covered by the
  // single-threaded integration test in tests/factory.rs.

  #[test]
  fn selection_table() {
    assert_eq!(best_managed_kind(Host::LE64), BackendKind::ManagedLe64);
    assert_eq!(best_managed_kind(Host::LE32), BackendKind::ManagedLe32);
    assert_eq!(best_managed_kind(Host::BE64), BackendKind::ManagedBe);
    assert_eq!(best_managed_kind(Host::BE32), BackendKind::ManagedBe);
  }

  #[test]
  fn selection_is_const() {
    const KIND: BackendKind = best_managed_kind(platform::host());
    assert_eq!(create_best_managed().name(), KIND.as_str());
  }

  #[test]
  fn best_managed_is_supported_everywhere() {
    for host in [Host::LE64, Host::LE32, Host::BE64, Host::BE32] {
      assert!(best_managed_kind(host).supports(host), "{host}");
    }
  }

  #[test]
  fn kind_names_match_implementations() {
    for kind in BackendKind::ALL {
      assert_eq!(kind.implementation().name(), kind.as_str());
    }
  }

  #[cfg(feature = "std")]
  #[test]
  fn default_is_best_managed() {
    assert_eq!(default_implementation().name(), create_best_managed().name());
  }

  #[test]
  fn display_matches_as_str() {
    assert_eq!(BackendKind::Basic.to_string(), "basic");
    assert_eq!(BackendKind::ManagedLe32.to_string(), "managed/le32");
  }

  #[test]
  fn support_matrix() {
    assert!(BackendKind::Basic.supports(Host::BE32));
    assert!(BackendKind::ManagedBe.supports(Host::LE64));
    assert!(!BackendKind::ManagedLe32.supports(Host::BE64));
    assert!(!BackendKind::ManagedLe64.supports(Host::BE32));
    assert!(BackendKind::ManagedLe64.supports(Host::LE32));
  }
}
