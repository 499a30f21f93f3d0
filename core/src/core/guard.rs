// recant/src/core/guard.rs

//! The guarded command variant: a wrapper that skips its inner command when the
//! pipeline has already failed, so commands can be chained without each one
//! re-checking the success indicator.

use crate::core::async_command::{AsyncCommand, AsyncCommandFactory};
use crate::core::command::{Command, CommandFactory};
use crate::core::context::CommandContext;
use crate::core::context_data::ContextData;
use crate::error::RecantResult;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{event, Level};

/// Wraps a command so that its `execute` only runs while the context still
/// reports success, and its `undo` only runs if `execute` actually did.
///
/// `C` is `dyn Command<T>` or `dyn AsyncCommand<T>`.
pub struct Guarded<T: CommandContext, C: ?Sized> {
  context: ContextData<T>,
  inner: Box<C>,
  ran: bool,
}

impl<T: CommandContext, C: ?Sized> Guarded<T, C> {
  pub fn new(context: ContextData<T>, inner: Box<C>) -> Self {
    Self {
      context,
      inner,
      ran: false,
    }
  }

  /// Whether the inner command's work was performed during the most recent `execute`.
  pub fn ran(&self) -> bool {
    self.ran
  }

  fn should_run(&self) -> bool {
    self.context.read().success()
  }
}

impl<T: CommandContext> Command<T> for Guarded<T, dyn Command<T>> {
  fn execute(&mut self) -> RecantResult<()> {
    self.ran = false;
    if !self.should_run() {
      event!(Level::DEBUG, command = %self.inner.name(), "Context already failed, skipping guarded command.");
      return Ok(());
    }
    self.ran = true;
    self.inner.execute()
  }

  fn undo(&mut self) -> RecantResult<()> {
    if !self.ran {
      return Ok(());
    }
    self.inner.undo()
  }

  fn name(&self) -> &str {
    self.inner.name()
  }
}

#[async_trait]
impl<T: CommandContext> AsyncCommand<T> for Guarded<T, dyn AsyncCommand<T>> {
  async fn execute(&mut self) -> RecantResult<()> {
    self.ran = false;
    if !self.should_run() {
      event!(Level::DEBUG, command = %self.inner.name(), "Context already failed, skipping guarded command.");
      return Ok(());
    }
    self.ran = true;
    self.inner.execute().await
  }

  async fn undo(&mut self) -> RecantResult<()> {
    if !self.ran {
      return Ok(());
    }
    self.inner.undo().await
  }

  fn name(&self) -> &str {
    self.inner.name()
  }
}

/// Wraps every command `factory` produces in a [`Guarded`].
pub fn guarded<T: CommandContext>(factory: CommandFactory<T>) -> CommandFactory<T> {
  Arc::new(move |ctx: ContextData<T>| -> Box<dyn Command<T>> {
    let inner = factory(ctx.clone());
    Box::new(Guarded::new(ctx, inner))
  })
}

pub fn guarded_async<T: CommandContext>(factory: AsyncCommandFactory<T>) -> AsyncCommandFactory<T> {
  Arc::new(move |ctx: ContextData<T>| -> Box<dyn AsyncCommand<T>> {
    let inner = factory(ctx.clone());
    Box::new(Guarded::new(ctx, inner))
  })
}
