// recant/src/core/command.rs

//! Defines the synchronous `Command<T>` contract and the factory values that
//! produce commands bound to a shared context.

use crate::core::context::CommandContext;
use crate::core::context_data::ContextData;
use crate::error::RecantResult;
use std::sync::Arc;

/// A unit of work bound to a shared context.
///
/// Implementors hold a [`ContextData<T>`] clone (usually taken in their
/// constructor) and mutate it from `execute`. Business failure is signalled by
/// clearing the context's success indicator, NOT by returning `Err`; an `Err`
/// means something exceptional happened and is propagated to the caller of `run`.
///
/// `undo` defaults to a no-op, suitable for read-only commands.
pub trait Command<T: CommandContext>: Send {
  /// Performs the command's effect.
  fn execute(&mut self) -> RecantResult<()>;

  /// Reverses the effect of `execute`. Only called if `execute` was invoked.
  fn undo(&mut self) -> RecantResult<()> {
    Ok(())
  }

  /// Human-readable name for tracing.
  fn name(&self) -> &str {
    std::any::type_name::<Self>()
  }
}

/// Given a context, produce a command bound to it.
///
/// `C` is the (unsized) command object type, `dyn Command<T>` or
/// `dyn AsyncCommand<T>`. Factories are `Arc`s so composites and reusable
/// pipelines can share them.
pub type Factory<T, C> = Arc<dyn Fn(ContextData<T>) -> Box<C> + Send + Sync + 'static>;

/// Factory of synchronous commands.
pub type CommandFactory<T> = Factory<T, dyn Command<T>>;

/// Wraps a constructor closure as a [`CommandFactory`].
pub fn factory<T, C, F>(constructor: F) -> CommandFactory<T>
where
  T: CommandContext,
  C: Command<T> + 'static,
  F: Fn(ContextData<T>) -> C + Send + Sync + 'static,
{
  Arc::new(move |ctx: ContextData<T>| -> Box<dyn Command<T>> { Box::new(constructor(ctx)) })
}

/// Factory for any command type constructible from the shared context.
///
/// `of::<ChargeCard, _>()` plays the role of passing the command type itself as a value.
pub fn of<C, T>() -> CommandFactory<T>
where
  T: CommandContext,
  C: Command<T> + From<ContextData<T>> + 'static,
{
  factory(C::from)
}

/// Calls each factory, in order, against the same shared context.
pub(crate) fn instantiate<T, C>(factories: &[Factory<T, C>], ctx: &ContextData<T>) -> Vec<Box<C>>
where
  T: CommandContext,
  C: ?Sized,
{
  factories.iter().map(|make| make(ctx.clone())).collect()
}
