// recant/examples/basic_pipeline.rs

use recant::{of, run, Command, CommandContext, ContextData, RecantError, RecantResult};
use tracing::info;

// 1. Define the context shared by every command in the pipeline.
#[derive(Clone, Debug)]
struct BasicContext {
  success: bool,
  message_log: Vec<String>,
  counter: i32,
}

impl CommandContext for BasicContext {
  fn success(&self) -> bool {
    self.success
  }

  fn set_success(&mut self, success: bool) {
    self.success = success;
  }
}

// 2. Define the commands. Each one holds a handle to the shared context.
struct Alpha(ContextData<BasicContext>);
struct Beta(ContextData<BasicContext>);
struct Gamma(ContextData<BasicContext>);

impl From<ContextData<BasicContext>> for Alpha {
  fn from(ctx: ContextData<BasicContext>) -> Self {
    Alpha(ctx)
  }
}

impl From<ContextData<BasicContext>> for Beta {
  fn from(ctx: ContextData<BasicContext>) -> Self {
    Beta(ctx)
  }
}

impl From<ContextData<BasicContext>> for Gamma {
  fn from(ctx: ContextData<BasicContext>) -> Self {
    Gamma(ctx)
  }
}

impl Command<BasicContext> for Alpha {
  fn execute(&mut self) -> RecantResult<()> {
    let mut data = self.0.write();
    data.counter += 1;
    let msg = format!("Alpha executed: counter = {}", data.counter);
    info!("{}", msg);
    data.message_log.push(msg);
    Ok(())
  }
}

impl Command<BasicContext> for Beta {
  fn execute(&mut self) -> RecantResult<()> {
    let mut data = self.0.write();
    data.counter *= 2;
    let msg = format!("Beta executed: counter = {}", data.counter);
    info!("{}", msg);
    data.message_log.push(msg);
    Ok(())
  }
}

impl Command<BasicContext> for Gamma {
  fn execute(&mut self) -> RecantResult<()> {
    let mut data = self.0.write();
    data.counter -= 1;
    let msg = format!("Gamma executed: counter = {}", data.counter);
    info!("{}", msg);
    data.message_log.push(msg);
    Ok(())
  }
}

fn main() -> Result<(), RecantError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Pipeline Example ---");

  // 3. Create an initial context.
  let initial = BasicContext {
    success: true,
    message_log: Vec::new(),
    counter: 5,
  };

  // 4. Run the commands in order. The caller's context is never touched.
  let result = run(&initial, &[of::<Alpha, _>(), of::<Beta, _>(), of::<Gamma, _>()])?;

  // 5. Inspect the returned copy.
  info!("Pipeline succeeded: {}", result.success);
  info!("Final counter value: {}", result.counter);
  for log_entry in &result.message_log {
    info!("- {}", log_entry);
  }

  // (5+1)*2 - 1 = 11
  assert_eq!(result.counter, 11);
  assert_eq!(result.message_log.len(), 3);
  assert_eq!(initial.counter, 5);

  Ok(())
}
