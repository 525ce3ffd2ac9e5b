//! Differential fuzzing against the `crc32c` crate.

#![no_main]

use checksum::{BackendKind, ChecksumState, Crc32c, Crc32cAlgorithm};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let reference = crc32c::crc32c(data);

  let ours = Crc32c::checksum(data);
  assert_eq!(
    ours, reference,
    "CRC-32C differential mismatch: ours={ours:#010x}, reference={reference:#010x}, len={}",
    data.len()
  );

  let host = checksum::host();
  for kind in BackendKind::ALL.into_iter().filter(|kind| kind.supports(host)) {
    let imp = kind.implementation();
    let mut state = ChecksumState::new();
    imp.ingest_span(&mut state, data);
    assert_eq!(state.checksum, reference, "{} differential mismatch", imp.name());
  }
});
