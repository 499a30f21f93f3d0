// recant/examples/conditional.rs

use recant::{cond, factory, noop, run, when, Command, CommandContext, CommandFactory, ContextData, RecantResult};
use tracing::info;

#[derive(Clone, Debug, Default)]
struct ShippingContext {
  success: bool,
  country: String,
  weight_kg: u32,
  carrier: Option<String>,
  surcharge: u32,
}

impl CommandContext for ShippingContext {
  fn success(&self) -> bool {
    self.success
  }

  fn set_success(&mut self, success: bool) {
    self.success = success;
  }
}

struct AssignCarrier {
  ctx: ContextData<ShippingContext>,
  carrier: &'static str,
}

impl Command<ShippingContext> for AssignCarrier {
  fn execute(&mut self) -> RecantResult<()> {
    info!(carrier = self.carrier, "Assigning carrier");
    self.ctx.write().carrier = Some(self.carrier.to_string());
    Ok(())
  }

  fn undo(&mut self) -> RecantResult<()> {
    self.ctx.write().carrier = None;
    Ok(())
  }

  fn name(&self) -> &str {
    self.carrier
  }
}

struct AddSurcharge(ContextData<ShippingContext>);

impl Command<ShippingContext> for AddSurcharge {
  fn execute(&mut self) -> RecantResult<()> {
    let mut data = self.0.write();
    data.surcharge += 15;
    info!(surcharge = data.surcharge, "Heavy parcel surcharge applied");
    Ok(())
  }
}

fn carrier(name: &'static str) -> CommandFactory<ShippingContext> {
  factory(move |ctx| AssignCarrier { ctx, carrier: name })
}

fn main() -> RecantResult<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Conditional Example ---");

  // The selector sees the context as it is when this step is reached.
  let pick_carrier = cond(|ctx: &ShippingContext| match ctx.country.as_str() {
    "US" => carrier("ups"),
    "DE" => carrier("dhl"),
    _ => carrier("postal"),
  });
  let heavy = when(|ctx: &ShippingContext| ctx.weight_kg > 20, factory(AddSurcharge), noop());

  let steps = [pick_carrier, heavy];

  let domestic = run(
    &ShippingContext {
      success: true,
      country: "US".to_string(),
      weight_kg: 3,
      ..Default::default()
    },
    &steps,
  )?;
  assert_eq!(domestic.carrier.as_deref(), Some("ups"));
  assert_eq!(domestic.surcharge, 0);

  let freight = run(
    &ShippingContext {
      success: true,
      country: "DE".to_string(),
      weight_kg: 40,
      ..Default::default()
    },
    &steps,
  )?;
  assert_eq!(freight.carrier.as_deref(), Some("dhl"));
  assert_eq!(freight.surcharge, 15);

  info!("Domestic: {:?}, freight: {:?}", domestic.carrier, freight.carrier);
  Ok(())
}
