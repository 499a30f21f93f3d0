// recant/src/conditional/selector.rs

//! Ready-made selectors: a two-way branch and a command that does nothing.

use crate::conditional::delegator::{cond, cond_async};
use crate::core::async_command::{AsyncCommand, AsyncCommandFactory};
use crate::core::command::{Command, CommandFactory};
use crate::core::context::CommandContext;
use crate::core::context_data::ContextData;
use crate::error::RecantResult;
use async_trait::async_trait;
use std::sync::Arc;

/// A command with no effect and no compensation.
#[derive(Debug, Default, Clone, Copy)]
pub struct Noop;

impl<T: CommandContext> Command<T> for Noop {
  fn execute(&mut self) -> RecantResult<()> {
    Ok(())
  }

  fn name(&self) -> &str {
    "Noop"
  }
}

#[async_trait]
impl<T: CommandContext> AsyncCommand<T> for Noop {
  async fn execute(&mut self) -> RecantResult<()> {
    Ok(())
  }

  fn name(&self) -> &str {
    "Noop"
  }
}

/// Factory for [`Noop`]; the natural "otherwise" arm of a [`when`].
pub fn noop<T: CommandContext>() -> CommandFactory<T> {
  Arc::new(|_ctx: ContextData<T>| -> Box<dyn Command<T>> { Box::new(Noop) })
}

pub fn noop_async<T: CommandContext>() -> AsyncCommandFactory<T> {
  Arc::new(|_ctx: ContextData<T>| -> Box<dyn AsyncCommand<T>> { Box::new(Noop) })
}

/// Runs `then` when `predicate` holds for the context at execution time,
/// `otherwise` when it does not.
pub fn when<T, P>(predicate: P, then: CommandFactory<T>, otherwise: CommandFactory<T>) -> CommandFactory<T>
where
  T: CommandContext,
  P: Fn(&T) -> bool + Send + Sync + 'static,
{
  cond(move |ctx: &T| {
    if predicate(ctx) {
      then.clone()
    } else {
      otherwise.clone()
    }
  })
}

pub fn when_async<T, P>(
  predicate: P,
  then: AsyncCommandFactory<T>,
  otherwise: AsyncCommandFactory<T>,
) -> AsyncCommandFactory<T>
where
  T: CommandContext,
  P: Fn(&T) -> bool + Send + Sync + 'static,
{
  cond_async(move |ctx: &T| {
    if predicate(ctx) {
      then.clone()
    } else {
      otherwise.clone()
    }
  })
}
