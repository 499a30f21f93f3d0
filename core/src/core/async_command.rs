// recant/src/core/async_command.rs

//! Defines `AsyncCommand<T>`, the suspending counterpart of [`Command`], and the
//! `lift` adapter that lets synchronous commands run inside async pipelines.

use crate::core::command::{Command, CommandFactory, Factory};
use crate::core::context::CommandContext;
use crate::core::context_data::ContextData;
use crate::error::RecantResult;
use async_trait::async_trait;
use std::sync::Arc;

/// A command whose effect and compensation may suspend.
///
/// The engine awaits each call to completion before starting the next one, so an
/// async command's effect is always fully applied before its successor begins.
///
/// Handlers are responsible for dropping any [`ContextData`] lock guard BEFORE
/// reaching an `.await`.
#[async_trait]
pub trait AsyncCommand<T: CommandContext>: Send {
  async fn execute(&mut self) -> RecantResult<()>;

  async fn undo(&mut self) -> RecantResult<()> {
    Ok(())
  }

  fn name(&self) -> &str {
    std::any::type_name::<Self>()
  }
}

/// Factory of asynchronous commands.
pub type AsyncCommandFactory<T> = Factory<T, dyn AsyncCommand<T>>;

pub fn async_factory<T, C, F>(constructor: F) -> AsyncCommandFactory<T>
where
  T: CommandContext,
  C: AsyncCommand<T> + 'static,
  F: Fn(ContextData<T>) -> C + Send + Sync + 'static,
{
  Arc::new(move |ctx: ContextData<T>| -> Box<dyn AsyncCommand<T>> { Box::new(constructor(ctx)) })
}

pub fn async_of<C, T>() -> AsyncCommandFactory<T>
where
  T: CommandContext,
  C: AsyncCommand<T> + From<ContextData<T>> + 'static,
{
  async_factory(C::from)
}

/// Runs a synchronous command as an [`AsyncCommand`] that never suspends.
pub struct Blocking<T: CommandContext> {
  inner: Box<dyn Command<T>>,
}

impl<T: CommandContext> Blocking<T> {
  pub fn new(inner: Box<dyn Command<T>>) -> Self {
    Self { inner }
  }
}

#[async_trait]
impl<T: CommandContext> AsyncCommand<T> for Blocking<T> {
  async fn execute(&mut self) -> RecantResult<()> {
    self.inner.execute()
  }

  async fn undo(&mut self) -> RecantResult<()> {
    self.inner.undo()
  }

  fn name(&self) -> &str {
    self.inner.name()
  }
}

/// Turns a synchronous factory into an async one, so sync and async commands can
/// be mixed in one async pipeline without changing their relative order.
pub fn lift<T: CommandContext>(factory: CommandFactory<T>) -> AsyncCommandFactory<T> {
  Arc::new(move |ctx: ContextData<T>| -> Box<dyn AsyncCommand<T>> { Box::new(Blocking::new(factory(ctx))) })
}
