//! Client state persistence for the workforce access core.
//!
//! This crate provides a trait-based session store with a JSON-file
//! implementation and an in-memory one.

#![warn(missing_docs)]

pub mod trait_;
pub mod json_storage;
pub mod memory;

pub use trait_::{SessionStore, StorageError, Result};
pub use json_storage::JsonSessionStore;
pub use memory::MemorySessionStore;
