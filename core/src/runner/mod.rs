// recant/src/runner/mod.rs

//! Defines the `Runner<T, C>` sequential executor: runs a fixed list of commands
//! in order, records the executed prefix, and unwinds it in reverse on request.

pub mod definition;
pub mod execution;

pub use definition::{AsyncRunner, Runner};
