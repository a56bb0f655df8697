//! optguard guard library entry.
//!
//! This crate wires the config loader, the size/existence guard, its hook
//! traits, and a host store dispatcher into one stack. It is intended to be
//! consumed by hosts, by the replay binary (`main.rs`), and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod guard;
pub mod store;

pub use guard::{BeforeCreate, BeforeUpdate, Guard, GuardSettings, Overrides};
pub use store::{GuardedStore, KvRead, KvWrite, MemoryStore};
