use crate::config::FpConfig;
use crate::errors::{FpError, FpResult};
use crate::model::target::TargetRef;
use crate::model::value::Value;
use crate::service::registry::{Function, Registry};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Curries the function registered as `name` under `owner`, or under the
/// registry's default owner when `owner` is `None`.
///
/// Nothing is looked up here: resolution happens on every call of the
/// returned [`Curried`], so a missing target surfaces as an error from
/// [`Curried::call`].
///
/// ```rust
/// use hof::model::value::Value;
/// use hof::service::curry::curry;
/// use hof::service::registry::{Function, Registry};
///
/// let registry = Registry::builder()
///     .owner("Math")
///     .register("add", Function::new(2, |args| {
///         Ok(Value::Int(args[0].as_int().unwrap_or(0) + args[1].as_int().unwrap_or(0)))
///     }))
///     .build();
///
/// let add = curry(&registry, "add", Some("Math"));
/// let add_one = add.call([1]).unwrap().into_partial().unwrap();
/// assert_eq!(add_one.call([2]).unwrap().into_value(), Some(Value::Int(3)));
/// ```
pub fn curry(registry: &Arc<Registry>, name: &str, owner: Option<&str>) -> Curried {
    Curried {
        source: Source::Named {
            registry: Arc::clone(registry),
            name: name.to_string(),
            owner: owner.map(String::from),
        },
        args: Vec::new(),
    }
}

/// Curries an anonymous function. Resolution cannot fail.
pub fn curry_fn(function: Function) -> Curried {
    Curried {
        source: Source::Inline(function),
        args: Vec::new(),
    }
}

#[derive(Clone)]
enum Source {
    Named {
        registry: Arc<Registry>,
        name: String,
        owner: Option<String>,
    },
    Inline(Function),
}

/// A target plus the arguments applied to it so far.
#[derive(Clone)]
pub struct Curried {
    source: Source,
    args: Vec<Value>,
}

/// Outcome of calling a [`Curried`].
#[derive(Debug, Clone)]
pub enum Applied {
    /// Enough arguments were supplied and the target ran.
    Value(Value),
    /// Still short of the required count.
    Partial(Curried),
}

impl Curried {
    /// Arguments accumulated by earlier partial applications.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// The named target, `None` for anonymous functions.
    pub fn target(&self) -> Option<TargetRef> {
        match &self.source {
            Source::Named {
                registry,
                name,
                owner,
            } => Some(TargetRef::new(
                owner.as_deref().unwrap_or(registry.default_owner()),
                name.as_str(),
            )),
            Source::Inline(_) => None,
        }
    }

    /// Applies `more` after the accumulated arguments.
    ///
    /// The target is resolved first. If the combined argument count reaches
    /// its required count the target runs with exactly those arguments;
    /// otherwise a new `Curried` holding the combined list is returned and
    /// `self` is left untouched.
    pub fn call<I>(&self, more: I) -> FpResult<Applied>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let function = self.resolve()?;

        let mut args = self.args.clone();
        args.extend(more.into_iter().map(Into::into));

        if args.len() >= function.required() {
            if self.log_calls() {
                debug!(
                    "Evaluating {} with {} argument(s)",
                    self.describe(),
                    args.len()
                );
            }
            return function
                .invoke(&args)
                .map(Applied::Value)
                .map_err(FpError::Target);
        }

        trace!("Partial application of {}", self.describe());
        if self.log_calls() {
            debug!(
                "Partially applied {}: {}/{} argument(s)",
                self.describe(),
                args.len(),
                function.required()
            );
        }

        Ok(Applied::Partial(Curried {
            source: self.source.clone(),
            args,
        }))
    }

    fn resolve(&self) -> FpResult<&Function> {
        match &self.source {
            Source::Named {
                registry,
                name,
                owner,
            } => {
                let owner = owner.as_deref().unwrap_or(registry.default_owner());
                registry.resolve(owner, name)
            }
            Source::Inline(function) => Ok(function),
        }
    }

    fn log_calls(&self) -> bool {
        match &self.source {
            Source::Named { registry, .. } => registry.log_calls(),
            Source::Inline(_) => FpConfig::global().log_calls,
        }
    }

    fn describe(&self) -> String {
        self.target()
            .map(|target| target.to_string())
            .unwrap_or_else(|| "<anonymous>".to_string())
    }
}

impl fmt::Debug for Curried {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curried")
            .field("target", &self.describe())
            .field("args", &self.args)
            .finish()
    }
}

impl Applied {
    pub fn is_partial(&self) -> bool {
        matches!(self, Applied::Partial(_))
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Applied::Value(value) => Some(value),
            Applied::Partial(_) => None,
        }
    }

    pub fn into_partial(self) -> Option<Curried> {
        match self {
            Applied::Partial(curried) => Some(curried),
            Applied::Value(_) => None,
        }
    }

    /// Continues a partial application. A resolved value cannot be called.
    pub fn call<I>(&self, more: I) -> FpResult<Applied>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        match self {
            Applied::Partial(curried) => curried.call(more),
            Applied::Value(_) => Err(FpError::AlreadyResolved),
        }
    }
}
