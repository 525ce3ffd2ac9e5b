//! Streaming checksum trait.
//!
//! [`Crc32cAlgorithm`](crate::Crc32cAlgorithm) is the low-level contract:
//! the caller owns the state and passes it in. `Checksum` is the convenience
//! layer on top of it, bundling state and strategy into a single hasher.

use core::fmt::Debug;

/// Non-cryptographic checksum algorithm.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::{Checksum, Crc32c};
///
/// // One-shot (fastest for data already in memory)
/// let crc = Crc32c::checksum(b"hello world");
///
/// // Streaming (for incremental data)
/// let mut hasher = Crc32c::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.finalize(), crc);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the hasher to its initial state
pub trait Checksum: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher with the default initial value.
  #[must_use]
  fn new() -> Self;

  /// Create a new hasher with a custom initial value.
  ///
  /// Useful for resuming a checksum computation.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Update the hasher with additional data.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the checksum of everything processed so far.
  ///
  /// Does not consume the hasher; further updates remain possible.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }
}
