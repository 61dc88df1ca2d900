
use anyhow::{anyhow, Result};
use hof::apply;
use hof::config::FpConfig;
use hof::model::value::Value;
use hof::service::curry::curry;
use hof::service::pipeline::{Cancel, Pipeline};
use hof::service::registry::{Function, Registry};
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn int(value: &Value) -> Result<i64> {
    value
        .as_int()
        .ok_or_else(|| anyhow!("expected int, got {}", value.type_name()))
}

fn inc(d: i64, _: &mut Cancel) -> Result<i64> {
    Ok(d + 1)
}

fn double(d: i64, _: &mut Cancel) -> Result<i64> {
    Ok(d * 2)
}

fn stop_above_ten(d: i64, cancel: &mut Cancel) -> Result<i64> {
    if d > 10 {
        cancel.cancel();
    }
    Ok(d)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(fmt::layer())
        .init();

    debug!("Config: {:?}", FpConfig::global());

    let registry = Registry::builder()
        .owner("Math")
        .register(
            "volume",
            Function::new(3, |args| Ok(Value::Int(int(&args[0])? * int(&args[1])? * int(&args[2])?))),
        )
        .build();

    let volume = curry(&registry, "volume", Some("Math"));
    let base = volume.call([2, 3])?;
    info!("volume(2, 3) -> partial: {}", base.is_partial());

    let result = base.call([4])?.into_value().unwrap_or_default();
    info!("volume(2, 3)(4) = {}", serde_json::to_string(&result)?);

    match curry(&registry, "doesNotExist", None).call([1]) {
        Ok(_) => info!("doesNotExist resolved unexpectedly"),
        Err(err) => info!("doesNotExist: {}", err),
    }

    let forward: Pipeline<i64> = apply!(inc, double);
    let backward: Pipeline<i64> = apply!(double, inc);
    info!("apply(inc, double)(5) = {}", forward.run(5)?);
    info!("apply(double, inc)(5) = {}", backward.run(5)?);

    let guarded: Pipeline<i64> = apply!(double, stop_above_ten, double);
    info!("apply(double, stop, double)(3) = {}", guarded.run(3)?);
    info!("apply(double, stop, double)(6) = {}", guarded.run(6)?);

    Ok(())
}
