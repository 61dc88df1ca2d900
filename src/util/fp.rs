use crate::service::pipeline::Pipeline;
use std::sync::Arc;

/// The Pipe trait provides methods to pipe a value through a transformation.
///
/// # Examples
///
/// ```rust
/// use hof::util::fp::Pipe;
/// let result = 5.pipe(|x| x * 2);  // result is 10
/// let string = "hello".pipe(|s| s.to_uppercase());  // string is "HELLO"
/// ```
pub trait Pipe: Sized {
    /// Transforms the current value by applying the given function.
    fn pipe<F, R>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R;

    /// Runs the value through every stage of `pipeline`.
    fn pipe_through<E>(self, pipeline: &Pipeline<Self, E>) -> Result<Self, E>;
}

impl<T> Pipe for T {
    fn pipe<F, R>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }

    fn pipe_through<E>(self, pipeline: &Pipeline<Self, E>) -> Result<Self, E> {
        pipeline.run(self)
    }
}

/// Curries a two-argument function. The arity comes from the signature.
///
/// ```rust
/// use hof::util::fp::curry2;
/// let add = curry2(|a: i32, b: i32| a + b);
/// assert_eq!(add(1)(2), 3);
/// ```
pub fn curry2<A, B, R, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> R>
where
    F: Fn(A, B) -> R + 'static,
    A: Clone + 'static,
    B: 'static,
    R: 'static,
{
    let f = Arc::new(f);
    move |a: A| -> Box<dyn Fn(B) -> R> {
        let f = Arc::clone(&f);
        Box::new(move |b: B| f(a.clone(), b))
    }
}

/// Curries a three-argument function.
pub fn curry3<A, B, C, R, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> R>>
where
    F: Fn(A, B, C) -> R + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    R: 'static,
{
    let f = Arc::new(f);
    move |a: A| -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> R>> {
        let f = Arc::clone(&f);
        Box::new(move |b: B| -> Box<dyn Fn(C) -> R> {
            let f = Arc::clone(&f);
            let a = a.clone();
            Box::new(move |c: C| f(a.clone(), b.clone(), c))
        })
    }
}
