//! Interoperability with external value representations.
//!
//! This module provides conversion between the crate's [`Value`](crate::Value)
//! model and `serde_json::Value`, the most common carrier of untrusted
//! runtime data in Rust.

mod json;

pub use json::JsonError;
