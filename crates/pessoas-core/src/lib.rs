//! Core types and trait definitions for the Pessoas person registry.
//!
//! This crate is deliberately free of HTTP and database dependencies. The
//! in-memory backend lives here because it needs nothing beyond `std`.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod id;
pub mod memory;
pub mod person;
pub mod service;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use person::{NewPerson, Person};
pub use service::Registry;
pub use store::PersonStore;
