use crate::config::FpConfig;
use crate::errors::{unknown_function, unknown_owner, FpResult};
use crate::model::value::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub type Body = dyn Fn(&[Value]) -> anyhow::Result<Value> + Send + Sync;

/// A callable target together with its declared parameter counts.
///
/// `required` decides when a curried call evaluates. `optional` only records
/// how many trailing defaulted parameters the body understands; the body is
/// responsible for filling them in when it receives fewer arguments.
#[derive(Clone)]
pub struct Function {
    required: usize,
    optional: usize,
    body: Arc<Body>,
}

impl Function {
    pub fn new<F>(required: usize, body: F) -> Self
    where
        F: Fn(&[Value]) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        Self::with_optional(required, 0, body)
    }

    pub fn with_optional<F>(required: usize, optional: usize, body: F) -> Self
    where
        F: Fn(&[Value]) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        Function {
            required,
            optional,
            body: Arc::new(body),
        }
    }

    pub fn required(&self) -> usize {
        self.required
    }

    pub fn optional(&self) -> usize {
        self.optional
    }

    pub fn arity(&self) -> usize {
        self.required + self.optional
    }

    /// Runs the body with exactly `args`. Extra arguments are passed through as-is.
    pub fn invoke(&self, args: &[Value]) -> anyhow::Result<Value> {
        (self.body)(args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("required", &self.required)
            .field("optional", &self.optional)
            .finish_non_exhaustive()
    }
}

/// Named functions grouped by owner. Immutable once built.
#[derive(Debug)]
pub struct Registry {
    default_owner: String,
    log_calls: bool,
    owners: HashMap<String, HashMap<String, Function>>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::with_config(FpConfig::global())
    }

    /// The owner used when a lookup does not name one.
    pub fn default_owner(&self) -> &str {
        &self.default_owner
    }

    pub fn log_calls(&self) -> bool {
        self.log_calls
    }

    pub fn resolve(&self, owner: &str, name: &str) -> FpResult<&Function> {
        self.owners
            .get(owner)
            .ok_or_else(|| unknown_owner(owner))?
            .get(name)
            .ok_or_else(|| unknown_function(owner, name))
    }

    pub fn contains(&self, owner: &str, name: &str) -> bool {
        self.resolve(owner, name).is_ok()
    }

    /// Owner names, sorted.
    pub fn owners(&self) -> Vec<&str> {
        let mut owners: Vec<&str> = self.owners.keys().map(String::as_str).collect();
        owners.sort_unstable();
        owners
    }

    /// Function names registered under `owner`, sorted. Empty for unknown owners.
    pub fn functions(&self, owner: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .owners
            .get(owner)
            .map(|functions| functions.keys().map(String::as_str).collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }
}

pub struct RegistryBuilder {
    default_owner: String,
    log_calls: bool,
    current: String,
    owners: HashMap<String, HashMap<String, Function>>,
}

impl RegistryBuilder {
    pub fn with_config(config: &FpConfig) -> Self {
        RegistryBuilder {
            default_owner: config.default_owner.clone(),
            log_calls: config.log_calls,
            current: config.default_owner.clone(),
            owners: HashMap::new(),
        }
    }

    /// Subsequent `register` calls go under `owner`.
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        let owner = owner.into();
        self.owners.entry(owner.clone()).or_default();
        self.current = owner;
        self
    }

    /// Registers `function` as `name` under the current owner, replacing any
    /// earlier registration with the same name.
    pub fn register(mut self, name: impl Into<String>, function: Function) -> Self {
        self.owners
            .entry(self.current.clone())
            .or_default()
            .insert(name.into(), function);
        self
    }

    pub fn build(self) -> Arc<Registry> {
        Arc::new(Registry {
            default_owner: self.default_owner,
            log_calls: self.log_calls,
            owners: self.owners,
        })
    }
}
