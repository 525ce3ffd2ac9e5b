//! Global factory override lifecycle.
//!
//! The override slot is process-wide, so everything that touches it lives in
//! a single test function; this binary holds no other tests.

use std::{sync::Barrier, thread};

use checksum::{
  BackendKind, ChecksumState, Crc32c, Crc32cAlgorithm, Implementation, ManagedBe, best_managed_kind,
};

/// Checks nothing; marks results so the test can tell it was used.
#[derive(Debug)]
struct Sentinel;

impl Crc32cAlgorithm for Sentinel {
  fn ingest_byte(&self, state: &mut ChecksumState, _byte: u8) {
    state.checksum = 0x5E57_1E11;
  }

  fn ingest_span(&self, state: &mut ChecksumState, _bytes: &[u8]) {
    state.checksum = 0x5E57_1E11;
  }

  fn name(&self) -> &'static str {
    "sentinel"
  }
}

static SENTINEL: Sentinel = Sentinel;

fn sentinel() -> Implementation {
  &SENTINEL
}

fn reference() -> Implementation {
  BackendKind::Basic.implementation()
}

fn default_name() -> &'static str {
  best_managed_kind(checksum::host()).as_str()
}

#[test]
fn global_factory_lifecycle() {
  // The process environment plays no part in selection.
  // SAFETY: no other thread exists yet in this test binary.
  #[allow(unsafe_code)]
  unsafe {
    std::env::set_var("CRC32C_FORCE", "basic");
  }

  // No override at startup: the best managed implementation.
  assert!(!checksum::has_global_factory());
  assert_eq!(checksum::selected_backend(), default_name());
  assert_eq!(checksum::create().name(), checksum::create_best_managed().name());
  let held_before = Crc32c::new();

  // The best managed choice never depends on overrides.
  let best = checksum::create_best_managed();
  assert_eq!(best.name(), best_managed_kind(checksum::host()).as_str());

  // Without an override, the default and the best managed choice agree on output.
  let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
  let mut from_default = ChecksumState::new();
  checksum::create().ingest_span(&mut from_default, &data);
  let mut from_best = ChecksumState::new();
  best.ingest_span(&mut from_best, &data);
  assert_eq!(from_default, from_best);

  // Install: create() now returns the factory's product.
  checksum::set_global_factory(Some(sentinel));
  assert!(checksum::has_global_factory());
  assert_eq!(checksum::create().name(), "sentinel");
  assert_eq!(Crc32c::checksum(b"123456789"), 0x5E57_1E11);
  assert_eq!(checksum::create_best_managed().name(), best.name());

  // Handles obtained earlier keep working unchanged.
  let mut held = held_before;
  held.update(b"123456789");
  assert_eq!(held.finalize(), 0xE306_9283);
  assert_eq!(held.backend_name(), default_name());

  // Replace: the newest factory wins.
  checksum::set_global_factory(Some(reference));
  assert_eq!(checksum::selected_backend(), "basic");
  assert_eq!(Crc32c::checksum(b"123456789"), 0xE306_9283);

  // Swaps racing with computations never produce a wrong checksum.
  let barrier = Barrier::new(5);
  thread::scope(|s| {
    for _ in 0..4 {
      s.spawn(|| {
        barrier.wait();
        for _ in 0..1000 {
          let imp = checksum::create();
          let mut state = ChecksumState::new();
          imp.ingest_span(&mut state, b"123456789");
          assert!(
            state.checksum == 0xE306_9283 || imp.name() == "sentinel",
            "{} produced {:#010x}",
            imp.name(),
            state.checksum
          );
        }
      });
    }
    barrier.wait();
    for i in 0..1000 {
      let factory: fn() -> Implementation = if i % 2 == 0 { sentinel } else { reference };
      checksum::set_global_factory(Some(factory));
    }
  });

  // Explicit handles ignore the slot entirely.
  let mut pinned = Crc32c::with_implementation(&ManagedBe);
  pinned.update(b"123456789");
  assert_eq!(pinned.finalize(), 0xE306_9283);

  // Clear: back to the best managed implementation.
  checksum::set_global_factory(None);
  assert!(!checksum::has_global_factory());
  assert_eq!(checksum::selected_backend(), default_name());
  assert_eq!(checksum::create().name(), checksum::create_best_managed().name());
  assert_eq!(Crc32c::checksum(b"123456789"), 0xE306_9283);

  // Clearing twice is harmless.
  checksum::set_global_factory(None);
  assert!(!checksum::has_global_factory());
}
