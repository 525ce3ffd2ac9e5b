//! Fuzz target for the CRC-32C implementations.
//!
//! Tests that:
//! - No panics on arbitrary input
//! - Every host implementation agrees with the reference
//! - Span, byte-at-a-time, split, and resumed ingestion agree

#![no_main]

use arbitrary::Arbitrary;
use checksum::{BackendKind, ChecksumState, Crc32c, Crc32cAlgorithm};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  split_point: usize,
  offset: u8,
  initial: u32,
}

fuzz_target!(|input: Input| {
  let offset = usize::from(input.offset % 8);
  let mut backing = vec![0u8; offset];
  backing.extend_from_slice(&input.data);
  let data = &backing[offset..];
  let split = input.split_point % (data.len() + 1);
  let (a, b) = data.split_at(split);

  let mut reference = ChecksumState::with_initial(input.initial);
  checksum::Basic.ingest_span(&mut reference, data);

  let host = checksum::host();
  for kind in BackendKind::ALL.into_iter().filter(|kind| kind.supports(host)) {
    let imp = kind.implementation();

    let mut span = ChecksumState::with_initial(input.initial);
    imp.ingest_span(&mut span, data);
    assert_eq!(span, reference, "{} span mismatch", imp.name());

    let mut bytes = ChecksumState::with_initial(input.initial);
    for &byte in data {
      imp.ingest_byte(&mut bytes, byte);
    }
    assert_eq!(bytes, reference, "{} byte mismatch", imp.name());

    let mut split_state = ChecksumState::with_initial(input.initial);
    imp.ingest_span(&mut split_state, a);
    imp.ingest_span(&mut split_state, b);
    assert_eq!(split_state, reference, "{} split mismatch", imp.name());
  }

  // Resume through the hasher.
  let oneshot = Crc32c::checksum(data);
  let mut resumed = Crc32c::resume(Crc32c::checksum(a));
  resumed.update(b);
  assert_eq!(resumed.finalize(), oneshot, "resume mismatch");
});
