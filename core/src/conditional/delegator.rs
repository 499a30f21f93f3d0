// recant/src/conditional/delegator.rs

//! Defines the conditional delegator commands produced by `cond` / `cond_async`.

use crate::core::async_command::{AsyncCommand, AsyncCommandFactory};
use crate::core::command::{Command, CommandFactory, Factory};
use crate::core::context::CommandContext;
use crate::core::context_data::ContextData;
use crate::error::{RecantError, RecantResult};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{event, Level};

/// Maps the live context to the factory of the command that should run.
pub type Selector<T, C> = Arc<dyn Fn(&T) -> Factory<T, C> + Send + Sync + 'static>;

/// A command that picks its real behavior when executed.
///
/// Holds the shared context and a selector; `chosen` stays `None` until `execute`.
pub struct Conditional<T: CommandContext, C: ?Sized = dyn Command<T>> {
  context: ContextData<T>,
  selector: Selector<T, C>,
  chosen: Option<Box<C>>,
}

pub type AsyncConditional<T> = Conditional<T, dyn AsyncCommand<T>>;

impl<T: CommandContext, C: ?Sized> Conditional<T, C> {
  pub fn new(context: ContextData<T>, selector: Selector<T, C>) -> Self {
    Self {
      context,
      selector,
      chosen: None,
    }
  }

  /// The command picked by the last `execute`, if any.
  pub fn chosen(&self) -> Option<&C> {
    self.chosen.as_deref()
  }

  /// Evaluates the selector against the context as it is right now and builds
  /// the chosen command against the same context.
  fn select(&self) -> Box<C> {
    let factory = {
      let data = self.context.read();
      (self.selector)(&*data)
    };
    factory(self.context.clone())
  }

  fn undo_before_execute() -> RecantError {
    let err = RecantError::UndoBeforeExecute {
      command: format!("Conditional<{}>", std::any::type_name::<T>()),
    };
    event!(Level::ERROR, error = %err, "Contract violation.");
    err
  }
}

impl<T: CommandContext> Command<T> for Conditional<T> {
  fn execute(&mut self) -> RecantResult<()> {
    let selected = self.select();
    event!(Level::DEBUG, chosen = %selected.name(), "Conditional command selected.");
    self.chosen.insert(selected).execute()
  }

  fn undo(&mut self) -> RecantResult<()> {
    match &mut self.chosen {
      Some(command) => command.undo(),
      None => Err(Self::undo_before_execute()),
    }
  }

  fn name(&self) -> &str {
    match &self.chosen {
      Some(command) => command.name(),
      None => "Conditional",
    }
  }
}

#[async_trait]
impl<T: CommandContext> AsyncCommand<T> for AsyncConditional<T> {
  async fn execute(&mut self) -> RecantResult<()> {
    let selected = self.select();
    event!(Level::DEBUG, chosen = %selected.name(), "Conditional command selected.");
    self.chosen.insert(selected).execute().await
  }

  async fn undo(&mut self) -> RecantResult<()> {
    match &mut self.chosen {
      Some(command) => command.undo().await,
      None => Err(Self::undo_before_execute()),
    }
  }

  fn name(&self) -> &str {
    match &self.chosen {
      Some(command) => command.name(),
      None => "AsyncConditional",
    }
  }
}

/// Builds a factory whose commands run whatever `selector` picks at execution time.
pub fn cond<T, F>(selector: F) -> CommandFactory<T>
where
  T: CommandContext,
  F: Fn(&T) -> CommandFactory<T> + Send + Sync + 'static,
{
  let selector: Selector<T, dyn Command<T>> = Arc::new(selector);
  Arc::new(move |ctx: ContextData<T>| -> Box<dyn Command<T>> {
    Box::new(Conditional::new(ctx, selector.clone()))
  })
}

pub fn cond_async<T, F>(selector: F) -> AsyncCommandFactory<T>
where
  T: CommandContext,
  F: Fn(&T) -> AsyncCommandFactory<T> + Send + Sync + 'static,
{
  let selector: Selector<T, dyn AsyncCommand<T>> = Arc::new(selector);
  Arc::new(move |ctx: ContextData<T>| -> Box<dyn AsyncCommand<T>> {
    Box::new(Conditional::new(ctx, selector.clone()))
  })
}
