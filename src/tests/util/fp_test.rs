#[cfg(test)]
mod tests {
    use hof::apply;
    use hof::service::pipeline::{Cancel, Pipeline};
    use hof::util::fp::{curry2, curry3, Pipe};

    #[test]
    fn test_typed_curry_splits_agree() {
        let f = |a: i64, b: i64, c: i64| a * 100 + b * 10 + c;
        let curried = curry3(f);
        assert_eq!(curried(1)(2)(3), f(1, 2, 3));

        let pair = curry2(|a: i64, b: i64| a - b);
        assert_eq!(pair(10)(3), 7);
    }

    #[test]
    fn test_pipe_through_chain() {
        fn trim(s: String, _: &mut Cancel) -> anyhow::Result<String> {
            Ok(s.trim().to_string())
        }

        fn stop_if_empty(s: String, cancel: &mut Cancel) -> anyhow::Result<String> {
            if s.is_empty() {
                cancel.cancel();
            }
            Ok(s)
        }

        fn exclaim(s: String, _: &mut Cancel) -> anyhow::Result<String> {
            Ok(format!("{s}!"))
        }

        let p: Pipeline<String> = apply!(trim, stop_if_empty, exclaim);
        assert_eq!(" hi ".to_string().pipe_through(&p).unwrap(), "hi!");
        assert_eq!("   ".to_string().pipe_through(&p).unwrap(), "");
    }
}
