// Package identity baked in at build time

/// Crate version, reported by GET /version and the startup log.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
