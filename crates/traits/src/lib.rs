//! Core contract types for the CRC-32C engine.
//!
//! This crate holds the pieces every implementation and every consumer agree
//! on. It is `no_std` compatible and has zero dependencies.
//!
//! # Contents
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`ChecksumState`] | The caller-owned CRC register (the only mutable entity) |
//! | [`Crc32cAlgorithm`] | Stateless "ingest a byte / ingest a span" strategy |
//! | [`Checksum`] | Streaming hasher interface (`new` / `update` / `finalize`) |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod checksum;
mod crc32c;

pub use checksum::Checksum;
pub use crc32c::{ChecksumState, Crc32cAlgorithm};
