// recant/src/lib.rs

//! Recant: a compensating-command pipeline for Rust.
//!
//! An ordered sequence of commands mutates one shared context. Any command can
//! signal failure by clearing the context's success indicator; the pipeline then
//! stops and undoes the commands that already ran, in reverse order. This gives
//! saga-like multi-step workflows ("reserve inventory, charge card, send email")
//! inside a single process, without a transaction behind every step.
//!
//! Features:
//!  - Synchronous (`Command`) and asynchronous (`AsyncCommand`) commands with
//!    identical ordering and compensation semantics.
//!  - `run` / `run_async` entry points that never mutate the caller's context.
//!  - `compose` to nest a sub-sequence as a single step, at any depth.
//!  - `cond` to choose a command at execution time from the live context.
//!  - A reusable `Pipeline` definition and a `Guarded` adapter for commands that
//!    should skip themselves once the pipeline has failed.

pub mod composite;
pub mod conditional;
pub mod core;
pub mod error;
pub mod pipeline;
pub mod runner;

// --- Re-exports for the Public API ---

// Building blocks
pub use crate::core::async_command::{async_factory, async_of, lift, AsyncCommand, AsyncCommandFactory, Blocking};
pub use crate::core::command::{factory, of, Command, CommandFactory, Factory};
pub use crate::core::context::CommandContext;
pub use crate::core::context_data::ContextData;
pub use crate::core::control::{CommandState, Outcome};
pub use crate::core::guard::{guarded, guarded_async, Guarded};

// The sequential executor
pub use crate::runner::{AsyncRunner, Runner};

// Combinators
pub use crate::composite::{compose, compose_async, AsyncComposite, Composite};
pub use crate::conditional::{
  cond, cond_async, noop, noop_async, when, when_async, AsyncConditional, Conditional, Noop, Selector,
};

// Entry points
pub use crate::pipeline::{run, run_async, run_async_with_outcome, run_with_outcome, AsyncPipeline, Pipeline};

pub use crate::error::{RecantError, RecantResult};

/*
    Core Workflow:
    1. Define a context struct `MyCtx` with a `success: bool` field and implement
       `CommandContext` for it.
    2. Define commands: structs holding a `ContextData<MyCtx>` that implement
       `Command<MyCtx>` (or `AsyncCommand<MyCtx>`), overriding `undo` where the
       effect can be reversed.
    3. Turn them into factories with `of::<MyCommand, _>()` or `factory(|ctx| ...)`.
    4. Combine with `compose(...)`, `cond(...)`, `when(...)`, `guarded(...)`.
    5. Call `run(&my_ctx, &[...])` (or `.await` on `run_async`) and inspect the
       returned copy of the context.
*/
