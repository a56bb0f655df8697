//! optguard core: error types and the canonical value codec.
//!
//! This crate defines the error surface and the size measurement shared by the
//! guard, its host store adapters, and tooling. It carries no store or runtime
//! dependencies so it can be reused by any host.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `OptGuardError`/`Result` so a guard
//! never brings down the host write path.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod codec;
pub mod error;

/// Shared result type.
pub use error::{OptGuardError, Result};
