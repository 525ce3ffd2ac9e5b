//! Aligned word views over byte spans.
//!
//! The word-at-a-time table paths read memory as native `u32`/`u64` words.
//! This module is the only place that reinterprets bytes as words; everything
//! above it works on safe `(prefix, words, suffix)` triples.
//!
//! ```text
//!  bytes:  [p p p|w w w w|w w w w|w w w w|s s]
//!           ^^^^^ prefix: min(len, bytes to the next word boundary)
//!                 ^^^^^^^^^^^^^^^^^^^^^^^ words: whole aligned words
//!                                         ^^^ suffix: < one word
//! ```

use core::mem::{align_of, size_of};

mod sealed {
  pub trait Sealed {}
  impl Sealed for u32 {}
  impl Sealed for u64 {}
}

/// Plain integer word types: no padding, every bit pattern valid.
pub(crate) trait Word: sealed::Sealed + Copy {}

impl Word for u32 {}
impl Word for u64 {}

/// Number of leading bytes to consume one at a time before `bytes` reaches a
/// `W`-aligned address, clamped to the span length.
#[inline]
#[must_use]
pub(crate) fn prefix_len<W: Word>(bytes: &[u8]) -> usize {
  // `align_offset` may report `usize::MAX` when alignment is unreachable; the
  // clamp turns that into "the whole span is prefix".
  bytes.as_ptr().align_offset(align_of::<W>()).min(bytes.len())
}

/// Split `bytes` into an unaligned prefix, a run of aligned native words, and
/// a short suffix.
///
/// The words hold the bytes in *native* order. Callers that need
/// little-endian semantics must only run on little-endian hosts.
#[inline]
#[must_use]
pub(crate) fn split_aligned<W: Word>(bytes: &[u8]) -> (&[u8], &[W], &[u8]) {
  let (prefix, rest) = bytes.split_at(prefix_len::<W>(bytes));
  let count = rest.len() / size_of::<W>();
  let (body, suffix) = rest.split_at(count * size_of::<W>());

  if count == 0 {
    return (prefix, &[], suffix);
  }

  debug_assert_eq!(body.as_ptr().align_offset(align_of::<W>()), 0);

  // SAFETY: `body` starts at a `W`-aligned address (prefix_len consumed up to
  // the boundary and count > 0 means the boundary was reachable), spans exactly
  // `count * size_of::<W>()` initialized bytes borrowed for the same lifetime,
  // and `W` is a plain integer for which every bit pattern is valid.
  #[allow(unsafe_code)]
  let words = unsafe { core::slice::from_raw_parts(body.as_ptr().cast::<W>(), count) };

  (prefix, words, suffix)
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::vec::Vec;

  use super::*;

  /// The three parts must tile the original span exactly, in order.
  fn assert_tiles<W: Word>(span: &[u8], prefix: &[u8], words: &[W], suffix: &[u8]) {
    let base = span.as_ptr() as usize;
    assert_eq!(prefix.as_ptr() as usize, base);
    let words_at = base + prefix.len();
    if !words.is_empty() {
      assert_eq!(words.as_ptr() as usize, words_at);
    }
    let words_bytes = words.len() * size_of::<W>();
    assert_eq!(prefix.len() + words_bytes + suffix.len(), span.len());
    assert_eq!(suffix, &span[prefix.len() + words_bytes..]);
  }

  fn check_all_offsets<W: Word>() {
    let backing: Vec<u8> = (0..=255u8).cycle().take(96).collect();
    for start in 0..16 {
      for len in 0..(backing.len() - start) {
        let span = &backing[start..start + len];
        let (prefix, words, suffix) = split_aligned::<W>(span);

        assert!(prefix.len() < size_of::<W>() || words.is_empty());
        assert!(suffix.len() < size_of::<W>());
        assert_eq!(prefix.len(), prefix_len::<W>(span));
        if !words.is_empty() {
          assert_eq!(words.as_ptr().align_offset(align_of::<W>()), 0);
        }
        assert_tiles(span, prefix, words, suffix);
      }
    }
  }

  #[test]
  fn split_u32_all_offsets() {
    check_all_offsets::<u32>();
  }

  #[test]
  fn split_u64_all_offsets() {
    check_all_offsets::<u64>();
  }

  #[test]
  fn empty_span() {
    let (p, w, s) = split_aligned::<u64>(&[]);
    assert!(p.is_empty() && w.is_empty() && s.is_empty());
  }

  #[test]
  fn short_span_is_all_prefix_or_suffix() {
    let data = [1u8, 2, 3];
    let (p, w, s) = split_aligned::<u32>(&data);
    assert!(w.is_empty());
    assert_eq!(p.len() + s.len(), 3);
  }

  #[test]
  fn prefix_never_exceeds_len() {
    let data = [0u8; 2];
    for start in 0..=2 {
      assert!(prefix_len::<u64>(&data[start..]) <= 2 - start);
    }
  }
}
