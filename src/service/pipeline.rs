use crate::config::FpConfig;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Cooperative stop signal for one pipeline run.
///
/// A fresh `Cancel` is created for every [`Pipeline::run`]. Once set it stays
/// set for the remainder of that run.
#[derive(Debug, Default)]
pub struct Cancel {
    cancelled: bool,
}

impl Cancel {
    /// Stops the stages after the current one from running.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// Tagged stage result, an alternative to touching [`Cancel`] directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow<T> {
    Continue(T),
    Cancel(T),
}

pub type StageFn<T, E> = dyn Fn(T, &mut Cancel) -> Result<T, E> + Send + Sync;
pub type Stage<T, E = anyhow::Error> = Arc<StageFn<T, E>>;

/// Wraps a closure or fn item as a [`Stage`].
pub fn stage<T, E, F>(f: F) -> Stage<T, E>
where
    F: Fn(T, &mut Cancel) -> Result<T, E> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Builds a pipeline from stages in the order given.
pub fn apply<T, E, I>(stages: I) -> Pipeline<T, E>
where
    I: IntoIterator<Item = Stage<T, E>>,
{
    Pipeline {
        stages: stages.into_iter().collect(),
        log_calls: FpConfig::global().log_calls,
    }
}

/// Builds a [`Pipeline`] from a list of stage closures or functions.
///
/// ```rust
/// use hof::apply;
/// use hof::service::pipeline::{Cancel, Pipeline};
///
/// fn inc(d: i64, _: &mut Cancel) -> anyhow::Result<i64> { Ok(d + 1) }
/// fn double(d: i64, _: &mut Cancel) -> anyhow::Result<i64> { Ok(d * 2) }
///
/// let p: Pipeline<i64> = apply!(inc, double);
/// assert_eq!(p.run(5).unwrap(), 12);
/// ```
#[macro_export]
macro_rules! apply {
    () => {
        $crate::service::pipeline::Pipeline::new()
    };

    ($($stage:expr),+ $(,)?) => {
        $crate::service::pipeline::Pipeline::new()$(.stage($stage))+
    };
}

/// An ordered, fixed chain of stages threading one value through.
pub struct Pipeline<T, E = anyhow::Error> {
    stages: Vec<Stage<T, E>>,
    log_calls: bool,
}

impl<T, E> Pipeline<T, E> {
    pub fn new() -> Self {
        Pipeline {
            stages: Vec::new(),
            log_calls: FpConfig::global().log_calls,
        }
    }

    /// Appends a stage receiving the current value and the run's [`Cancel`].
    pub fn stage<F>(mut self, f: F) -> Self
    where
        F: Fn(T, &mut Cancel) -> Result<T, E> + Send + Sync + 'static,
    {
        self.stages.push(Arc::new(f));
        self
    }

    /// Appends an infallible stage that never cancels.
    pub fn map<F>(self, f: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.stage(move |data, _| Ok(f(data)))
    }

    /// Appends a stage that reports cancellation through its return value.
    pub fn flow<F>(self, f: F) -> Self
    where
        F: Fn(T) -> Result<Flow<T>, E> + Send + Sync + 'static,
    {
        self.stage(move |data, cancel| match f(data)? {
            Flow::Continue(data) => Ok(data),
            Flow::Cancel(data) => {
                cancel.cancel();
                Ok(data)
            }
        })
    }

    /// Overrides `HOF_LOG_CALLS` for this pipeline.
    pub fn log_calls(mut self, enabled: bool) -> Self {
        self.log_calls = enabled;
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs every stage in order on `data`.
    ///
    /// Stops early once a stage cancels, returning the value that stage
    /// produced. A stage error is returned unchanged and ends the run.
    pub fn run(&self, data: T) -> Result<T, E> {
        let mut cancel = Cancel::default();
        let mut data = data;

        for (index, stage) in self.stages.iter().enumerate() {
            trace!("Entering stage {}/{}", index + 1, self.stages.len());
            if self.log_calls {
                debug!("Running stage {}/{}", index + 1, self.stages.len());
            }
            data = stage(data, &mut cancel)?;

            if cancel.is_cancelled() {
                let skipped = self.stages.len() - index - 1;
                if self.log_calls {
                    debug!("Pipeline cancelled at stage {}, skipping {}", index + 1, skipped);
                }
                break;
            }
        }

        Ok(data)
    }
}

impl<T, E> Default for Pipeline<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Clone for Pipeline<T, E> {
    fn clone(&self) -> Self {
        Pipeline {
            stages: self.stages.clone(),
            log_calls: self.log_calls,
        }
    }
}

impl<T, E> fmt::Debug for Pipeline<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}
