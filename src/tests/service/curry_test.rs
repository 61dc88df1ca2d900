#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use hof::config::FpConfig;
    use hof::errors::FpError;
    use hof::model::value::Value;
    use hof::service::curry::{curry, curry_fn, Applied};
    use hof::service::registry::{Function, Registry, RegistryBuilder};
    use std::sync::Arc;

    fn registry() -> Arc<Registry> {
        RegistryBuilder::with_config(&FpConfig::default())
            .owner("Strings")
            .register(
                "wrap",
                Function::new(3, |args| {
                    let parts: Option<Vec<&str>> = args.iter().map(Value::as_str).collect();
                    match parts.ok_or_else(|| anyhow!("wrap takes strings"))?.as_slice() {
                        [left, inner, right, ..] => Ok(Value::from(format!("{left}{inner}{right}"))),
                        _ => Err(anyhow!("wrap takes three strings")),
                    }
                }),
            )
            .register(
                "pad",
                Function::with_optional(1, 1, |args| {
                    let text = args[0].as_str().unwrap_or_default();
                    let width = args.get(1).and_then(Value::as_int).unwrap_or(8) as usize;
                    Ok(Value::from(format!("{text:>width$}")))
                }),
            )
            .build()
    }

    fn resolved(applied: Applied) -> Value {
        applied.into_value().expect("expected a value, got a partial")
    }

    #[test]
    fn test_fewer_than_required_returns_partial() {
        let wrap = curry(&registry(), "wrap", Some("Strings"));
        for given in 0..3 {
            let args = vec!["x"; given];
            assert!(wrap.call(args).unwrap().is_partial(), "{given} argument(s)");
        }
    }

    #[test]
    fn test_every_split_gives_the_same_result() {
        let wrap = curry(&registry(), "wrap", Some("Strings"));

        let a = resolved(wrap.call(["<"]).unwrap().call(["b"]).unwrap().call([">"]).unwrap());
        let b = resolved(wrap.call(["<", "b"]).unwrap().call([">"]).unwrap());
        let c = resolved(wrap.call(["<"]).unwrap().call(["b", ">"]).unwrap());
        let d = resolved(wrap.call(["<", "b", ">"]).unwrap());

        assert_eq!(a, Value::from("<b>"));
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(c, d);
    }

    #[test]
    fn test_optional_parameters_do_not_delay_evaluation() {
        let pad = curry(&registry(), "pad", Some("Strings"));
        assert_eq!(resolved(pad.call(["ab"]).unwrap()), Value::from("      ab"));
        assert_eq!(
            resolved(pad.call([Value::from("ab"), Value::from(4)]).unwrap()),
            Value::from("  ab")
        );
    }

    #[test]
    fn test_resolution_error_comes_first() {
        let registry = registry();
        let err = curry(&registry, "doesNotExist", None)
            .call(Vec::<Value>::new())
            .unwrap_err();
        assert!(err.is_resolution());
        assert_eq!(err.to_string(), "cannot resolve owner `global`");

        let err = curry(&registry, "doesNotExist", Some("Strings"))
            .call(["a", "b", "c"])
            .unwrap_err();
        assert!(matches!(err, FpError::UnknownFunction { .. }));
    }

    #[test]
    fn test_target_failure_is_surfaced() {
        let wrap = curry(&registry(), "wrap", Some("Strings"));
        let err = wrap.call([Value::from("a"), Value::from(1), Value::from("c")]).unwrap_err();
        assert_eq!(err.as_target().unwrap().to_string(), "wrap takes strings");
    }

    #[test]
    fn test_anonymous_function() {
        let sum = curry_fn(Function::new(2, |args| {
            Ok(Value::Float(args.iter().filter_map(Value::as_float).sum()))
        }));
        let half = sum.call([0.5]).unwrap();
        assert_eq!(resolved(half.call([1.0]).unwrap()), Value::Float(1.5));
        assert_eq!(resolved(half.call([2.0]).unwrap()), Value::Float(2.5));
    }
}
