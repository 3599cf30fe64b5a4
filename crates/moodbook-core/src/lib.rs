//! Core types and trait definitions for the Moodbook people roster.
//!
//! This crate is deliberately free of database dependencies. The storage
//! backend (`moodbook-store-sqlite`) and the demo binary both depend on it;
//! it depends on nothing heavier than serde.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod person;
pub mod store;

pub use person::{EmotionalState, Person};
pub use store::PersonStore;
