// recant/src/conditional/mod.rs

//! Defers the choice of command to execution time.
//!
//! `cond` produces a factory whose commands hold a selector over the context and
//! pick no command when constructed. On `execute` the selector runs against the
//! live context (so mutations by earlier commands in the same pipeline are
//! visible), the chosen factory is instantiated against that same context, and
//! the result is executed and remembered for `undo`.

pub mod delegator;
pub mod selector;

pub use delegator::{cond, cond_async, AsyncConditional, Conditional, Selector};
pub use selector::{noop, noop_async, when, when_async, Noop};
