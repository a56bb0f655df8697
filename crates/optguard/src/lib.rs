//! Top-level facade crate for optguard.
//!
//! Re-exports core types and the guard library so users can depend on a single crate.

pub mod core {
    pub use optguard_core::*;
}

pub mod guard {
    pub use optguard_guard::*;
}
