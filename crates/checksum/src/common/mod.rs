//! Common utilities shared by the CRC-32C implementations.

pub(crate) mod words;
