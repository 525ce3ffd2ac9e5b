//! Internal logging macros.
//!
//! Cold-path events (backend selection, override changes) go through these
//! so the crate builds with or without the `tracing` feature. With the
//! feature off they expand to nothing and the arguments are never evaluated.

/// `tracing::debug!` when the `tracing` feature is on, otherwise nothing.
macro_rules! debug_event {
  ($($arg:tt)*) => {
    #[cfg(feature = "tracing")]
    {
      ::tracing::debug!($($arg)*);
    }
  };
}
