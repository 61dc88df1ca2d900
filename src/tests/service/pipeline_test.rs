#[cfg(test)]
mod tests {
    use anyhow::Result;
    use hof::apply;
    use hof::model::value::Value;
    use hof::service::curry::curry_fn;
    use hof::service::pipeline::{Cancel, Flow, Pipeline};
    use hof::service::registry::Function;

    fn f1(d: i64, _: &mut Cancel) -> Result<i64> {
        Ok(d + 1)
    }

    fn f2(d: i64, _: &mut Cancel) -> Result<i64> {
        Ok(d * 2)
    }

    #[test]
    fn test_empty_chain_is_identity() {
        let p: Pipeline<Value> = apply!();
        for x in [Value::Null, Value::from(5), Value::from("five"), Value::from(vec![5])] {
            assert_eq!(p.run(x.clone()).unwrap(), x);
        }
    }

    #[test]
    fn test_order_matters() {
        let forward: Pipeline<i64> = apply!(f1, f2);
        let backward: Pipeline<i64> = apply!(f2, f1);
        assert_eq!(forward.run(5).unwrap(), 12);
        assert_eq!(backward.run(5).unwrap(), 11);
    }

    #[test]
    fn test_cancel_then_rerun() {
        let p: Pipeline<i64> = apply!(
            |d: i64, cancel: &mut Cancel| {
                cancel.cancel();
                Ok(d)
            },
            |d: i64, _: &mut Cancel| Ok(d * 100)
        );
        assert_eq!(p.run(5).unwrap(), 5);
        assert_eq!(p.run(5).unwrap(), 5);
    }

    #[test]
    fn test_stage_sees_fresh_flag() {
        let p: Pipeline<Vec<bool>> = apply!(
            |mut seen: Vec<bool>, cancel: &mut Cancel| {
                seen.push(cancel.is_cancelled());
                Ok(seen)
            },
            |mut seen: Vec<bool>, cancel: &mut Cancel| {
                seen.push(cancel.is_cancelled());
                cancel.cancel();
                Ok(seen)
            }
        );
        assert_eq!(p.run(Vec::new()).unwrap(), vec![false, false]);
        assert_eq!(p.run(Vec::new()).unwrap(), vec![false, false]);
    }

    #[test]
    fn test_curried_function_as_stage() {
        let add = curry_fn(Function::new(2, |args| {
            let a = args[0].as_int().unwrap_or_default();
            let b = args[1].as_int().unwrap_or_default();
            Ok(Value::Int(a + b))
        }));
        let add_ten = add.call([10]).unwrap().into_partial().unwrap();

        let p: Pipeline<Value> = Pipeline::new()
            .stage(move |v: Value, _: &mut Cancel| -> Result<Value> {
                Ok(add_ten.call([v])?.into_value().unwrap_or_default())
            })
            .flow(|v: Value| Ok(Flow::Cancel(v)))
            .map(|_: Value| Value::Null);

        assert_eq!(p.run(Value::from(5)).unwrap(), Value::Int(15));
    }
}
