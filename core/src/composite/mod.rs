// recant/src/composite/mod.rs

//! Lets a fixed sub-sequence of commands act as a single step.
//!
//! `compose` produces a factory whose commands own a private runner over fresh
//! instances of the wrapped factories, all bound to the composite's context. Seen
//! from an enclosing runner, a composite is just another command, so composites
//! nest inside `run`, inside other composites, and inside conditional branches.

pub mod compose;

pub use compose::{compose, compose_async, AsyncComposite, Composite};
