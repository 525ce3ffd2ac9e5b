//! Basic CRC-32C usage: raw contract, streaming hasher, and factory override.
//!
//! Run with: `cargo run --example basic -p checksum`

use checksum::{BackendKind, ChecksumState, Crc32c, Crc32cAlgorithm, Implementation};

fn main() {
  println!("=== CRC-32C Basic Examples ===\n");

  raw_contract_example();
  streaming_example();
  resume_example();
  override_example();
}

/// Caller-owned state, factory-provided algorithm.
fn raw_contract_example() {
  println!("--- Raw Contract ---\n");

  let algo = checksum::create();
  let mut state = ChecksumState::new();
  algo.ingest_span(&mut state, b"1234");
  for &b in b"56789" {
    algo.ingest_byte(&mut state, b);
  }

  println!("host:     {}", checksum::host());
  println!("backend:  {}", algo.name());
  println!("CRC-32C:  0x{:08X}\n", state.checksum);
  assert_eq!(state.checksum, 0xE306_9283);
}

fn streaming_example() {
  println!("--- Streaming Hasher ---\n");

  let mut hasher = Crc32c::new();
  for chunk in [&b"The quick brown fox "[..], b"jumps over ", b"the lazy dog"] {
    hasher.update(chunk);
    println!("after {:>2} bytes: 0x{:08X}", chunk.len(), hasher.finalize());
  }

  let oneshot = Crc32c::checksum(b"The quick brown fox jumps over the lazy dog");
  assert_eq!(hasher.finalize(), oneshot);
  println!("{hasher:?}\n");
}

/// Continue a checksum stored earlier, e.g. alongside a partially written record.
fn resume_example() {
  println!("--- Resume ---\n");

  let stored = Crc32c::checksum(b"12345");
  let mut hasher = Crc32c::resume(stored);
  hasher.update(b"6789");
  println!("resumed from 0x{stored:08X}: 0x{:08X}\n", hasher.finalize());
  assert_eq!(hasher.finalize(), 0xE306_9283);
}

fn reference() -> Implementation {
  BackendKind::Basic.implementation()
}

/// Route every later `create()` through the bit-by-bit reference.
fn override_example() {
  println!("--- Global Override ---\n");

  println!("default:  {}", checksum::selected_backend());
  checksum::set_global_factory(Some(reference));
  println!("override: {}", checksum::selected_backend());
  assert_eq!(Crc32c::checksum(b"123456789"), 0xE306_9283);
  checksum::set_global_factory(None);
  println!("restored: {}", checksum::selected_backend());
}
