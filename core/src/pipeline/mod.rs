// recant/src/pipeline/mod.rs

//! The top-level entry points: `run` / `run_async`, which clone the caller's
//! context, drive a runner over it and compensate on failure, and the reusable
//! `Pipeline` definition built on top of them.

pub mod definition;
pub mod execution;

pub use definition::{AsyncPipeline, Pipeline};
pub use execution::{run, run_async, run_async_with_outcome, run_with_outcome};
