// recant/src/pipeline/definition.rs

//! Contains the reusable `Pipeline<T, C>` definition: an ordered list of
//! factories that can be run any number of times, or folded into one step.

use crate::composite::compose::{compose, compose_async};
use crate::core::async_command::{AsyncCommand, AsyncCommandFactory};
use crate::core::command::{Command, CommandFactory, Factory};
use crate::core::context::CommandContext;
use crate::core::control::Outcome;
use crate::error::RecantResult;
use crate::pipeline::execution::{run_async_with_outcome, run_with_outcome};

/// An ordered, reusable sequence of command factories.
///
/// Each `run` clones the caller's context and builds fresh commands, so one
/// `Pipeline` can serve many independent runs.
///
/// ```
/// use recant::{factory, CommandContext, ContextData, Command, Pipeline, RecantResult};
///
/// #[derive(Clone, Debug)]
/// struct Counter { success: bool, value: i32 }
///
/// impl CommandContext for Counter {
///   fn success(&self) -> bool { self.success }
///   fn set_success(&mut self, success: bool) { self.success = success; }
/// }
///
/// struct Increment(ContextData<Counter>);
///
/// impl Command<Counter> for Increment {
///   fn execute(&mut self) -> RecantResult<()> {
///     self.0.write().value += 1;
///     Ok(())
///   }
/// }
///
/// let pipeline = Pipeline::new().then(factory(Increment)).then(factory(Increment));
/// let result = pipeline.run(&Counter { success: true, value: 0 }).unwrap();
/// assert_eq!(result.value, 2);
/// ```
pub struct Pipeline<T: CommandContext, C: ?Sized = dyn Command<T>> {
  factories: Vec<Factory<T, C>>,
}

pub type AsyncPipeline<T> = Pipeline<T, dyn AsyncCommand<T>>;

impl<T: CommandContext, C: ?Sized> Pipeline<T, C> {
  pub fn new() -> Self {
    Self { factories: Vec::new() }
  }

  /// Appends a step.
  pub fn then(mut self, factory: Factory<T, C>) -> Self {
    self.factories.push(factory);
    self
  }

  pub fn push(&mut self, factory: Factory<T, C>) {
    self.factories.push(factory);
  }

  pub fn factories(&self) -> &[Factory<T, C>] {
    &self.factories
  }

  pub fn len(&self) -> usize {
    self.factories.len()
  }

  pub fn is_empty(&self) -> bool {
    self.factories.is_empty()
  }
}

impl<T: CommandContext> Pipeline<T> {
  pub fn run(&self, context: &T) -> RecantResult<T> {
    self.run_with_outcome(context).map(|(result, _)| result)
  }

  pub fn run_with_outcome(&self, context: &T) -> RecantResult<(T, Outcome)> {
    run_with_outcome(context, &self.factories)
  }

  /// Folds the whole pipeline into a single composite step.
  pub fn into_factory(self) -> CommandFactory<T> {
    compose(self.factories)
  }
}

impl<T: CommandContext> AsyncPipeline<T> {
  pub async fn run(&self, context: &T) -> RecantResult<T> {
    self.run_with_outcome(context).await.map(|(result, _)| result)
  }

  pub async fn run_with_outcome(&self, context: &T) -> RecantResult<(T, Outcome)> {
    run_async_with_outcome(context, &self.factories).await
  }

  pub fn into_factory(self) -> AsyncCommandFactory<T> {
    compose_async(self.factories)
  }
}

impl<T: CommandContext, C: ?Sized> Default for Pipeline<T, C> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: CommandContext, C: ?Sized> Clone for Pipeline<T, C> {
  fn clone(&self) -> Self {
    Self {
      factories: self.factories.clone(),
    }
  }
}

impl<T: CommandContext, C: ?Sized> FromIterator<Factory<T, C>> for Pipeline<T, C> {
  fn from_iter<I: IntoIterator<Item = Factory<T, C>>>(iter: I) -> Self {
    Self {
      factories: iter.into_iter().collect(),
    }
  }
}

impl<T: CommandContext, C: ?Sized> std::fmt::Debug for Pipeline<T, C> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Pipeline")
      .field("context_type", &std::any::type_name::<T>())
      .field("num_commands", &self.factories.len())
      .finish()
  }
}
