// tests/context_management_tests.rs
mod common;

use common::*;
use recant::{factory, run, Command, CommandContext, ContextData, RecantResult};

#[test]
fn test_commands_share_one_context_instance() {
  setup_tracing();

  struct Check(ContextData<TestContext>, i32);

  impl Command<TestContext> for Check {
    fn execute(&mut self) -> RecantResult<()> {
      let mut guard = self.0.write();
      assert_eq!(guard.value, self.1); // Sees the previous command's write
      guard.value += 1;
      Ok(())
    }
  }

  let result = run(
    &TestContext::default(),
    &[factory(|ctx| Check(ctx, 0)), factory(|ctx| Check(ctx, 1)), factory(|ctx| Check(ctx, 2))],
  )
  .unwrap();

  assert_eq!(result.value, 3);
}

#[test]
fn test_context_data_clone_shares_data() {
  let original_ctx = ContextData::new(TestContext {
    value: 1,
    ..Default::default()
  });
  let cloned_ctx = original_ctx.clone();

  {
    original_ctx.write().value = 5;
  }
  assert_eq!(cloned_ctx.read().value, 5);
  assert!(original_ctx.ptr_eq(&cloned_ctx));

  {
    *cloned_ctx.map_write(|data| &mut data.string) = "mapped".to_string();
  }
  assert_eq!(&*original_ctx.map_read(|data| data.string.as_str()), "mapped");
}

#[test]
fn test_context_data_into_inner_requires_unique_handle() {
  let ctx = ContextData::new(TestContext::default());
  let extra = ctx.clone();

  let ctx = match ctx.into_inner() {
    Ok(_) => panic!("into_inner must fail while another handle is alive"),
    Err(shared) => shared,
  };
  assert_eq!(ctx.snapshot(), TestContext::default());

  drop(extra);
  assert_eq!(ctx.into_inner().ok(), Some(TestContext::default()));
}

#[test]
fn test_into_inner_or_snapshot_falls_back_when_shared() {
  let ctx = ContextData::new(TestContext::default());
  let kept = ctx.clone();
  kept.write().value = 9;

  let data = ctx.into_inner_or_snapshot();

  assert_eq!(data.value, 9);
  assert_eq!(kept.read().value, 9);
}

#[test]
fn test_try_locks() {
  let ctx = ContextData::new(TestContext::default());
  let read_guard = ctx.read();
  assert!(ctx.try_read().is_some());
  assert!(ctx.try_write().is_none());
  drop(read_guard);
  assert!(ctx.try_write().is_some());
}

#[test]
fn test_fail_clears_success_indicator() {
  let mut data = TestContext::default();
  assert!(data.success());
  data.fail();
  assert!(!data.success());
}
