// recant/src/core/context.rs

//! Defines the `CommandContext` contract every pipeline record must satisfy.

/// The record threaded through a pipeline.
///
/// A context is any user struct carrying a boolean success indicator alongside
/// whatever domain fields its commands agree to read and write. The engine only
/// ever looks at the indicator; it never inspects domain fields and never sets
/// the indicator back to `true`.
///
/// `Clone` is the isolation boundary used by [`crate::run`]: the engine operates
/// on `context.clone()`, never on the caller's value. Owned fields are therefore
/// isolated, while fields that are themselves shared handles (`Arc`,
/// [`crate::ContextData`], ...) still alias the caller's state.
///
/// ```
/// use recant::CommandContext;
///
/// #[derive(Clone, Debug)]
/// struct Checkout {
///   success: bool,
///   reserved: u32,
/// }
///
/// impl CommandContext for Checkout {
///   fn success(&self) -> bool {
///     self.success
///   }
///
///   fn set_success(&mut self, success: bool) {
///     self.success = success;
///   }
/// }
/// ```
pub trait CommandContext: Clone + Send + Sync + 'static {
  /// Current value of the success indicator.
  fn success(&self) -> bool;

  /// Overwrites the success indicator.
  fn set_success(&mut self, success: bool);

  /// Signals business failure. Equivalent to `set_success(false)`.
  fn fail(&mut self) {
    self.set_success(false);
  }
}
