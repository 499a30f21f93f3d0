// recant/src/composite/compose.rs

use crate::core::async_command::{AsyncCommand, AsyncCommandFactory};
use crate::core::command::{instantiate, Command, CommandFactory, Factory};
use crate::core::context::CommandContext;
use crate::core::context_data::ContextData;
use crate::error::RecantResult;
use crate::runner::definition::Runner;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{event, Level};

/// A command wrapping an inner runner over a fixed sub-sequence.
///
/// `execute` delegates to the inner runner's `execute`; `undo` to its `undo`,
/// which unwinds only the inner commands that actually ran. The composite's own
/// failure is whatever its last attempted inner command left in the context.
pub struct Composite<T: CommandContext, C: ?Sized = dyn Command<T>> {
  runner: Runner<T, C>,
}

pub type AsyncComposite<T> = Composite<T, dyn AsyncCommand<T>>;

impl<T: CommandContext, C: ?Sized> Composite<T, C> {
  /// Builds fresh instances of every factory, bound to `context`.
  pub fn new(context: ContextData<T>, factories: &[Factory<T, C>]) -> Self {
    let commands = instantiate(factories, &context);
    event!(Level::TRACE, num_commands = commands.len(), "Composite built.");
    Self {
      runner: Runner::new(context, commands),
    }
  }

  /// Read-only view of the inner runner.
  pub fn runner(&self) -> &Runner<T, C> {
    &self.runner
  }
}

impl<T: CommandContext> Command<T> for Composite<T> {
  fn execute(&mut self) -> RecantResult<()> {
    self.runner.execute().map(|_| ())
  }

  fn undo(&mut self) -> RecantResult<()> {
    self.runner.undo()
  }

  fn name(&self) -> &str {
    "Composite"
  }
}

#[async_trait]
impl<T: CommandContext> AsyncCommand<T> for AsyncComposite<T> {
  async fn execute(&mut self) -> RecantResult<()> {
    self.runner.execute().await.map(|_| ())
  }

  async fn undo(&mut self) -> RecantResult<()> {
    self.runner.undo().await
  }

  fn name(&self) -> &str {
    "AsyncComposite"
  }
}

/// Wraps `factories` behind a single command factory.
///
/// ```
/// # use recant::{compose, CommandFactory, CommandContext};
/// # fn demo<T: CommandContext>(reserve: CommandFactory<T>, charge: CommandFactory<T>) -> CommandFactory<T> {
/// compose(vec![reserve, charge])
/// # }
/// ```
pub fn compose<T: CommandContext>(factories: Vec<CommandFactory<T>>) -> CommandFactory<T> {
  let factories: Arc<[CommandFactory<T>]> = factories.into();
  Arc::new(move |ctx: ContextData<T>| -> Box<dyn Command<T>> { Box::new(Composite::new(ctx, &factories)) })
}

pub fn compose_async<T: CommandContext>(factories: Vec<AsyncCommandFactory<T>>) -> AsyncCommandFactory<T> {
  let factories: Arc<[AsyncCommandFactory<T>]> = factories.into();
  Arc::new(move |ctx: ContextData<T>| -> Box<dyn AsyncCommand<T>> { Box::new(Composite::new(ctx, &factories)) })
}
