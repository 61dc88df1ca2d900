use std::error::Error;
use std::fmt;

pub type FpResult<T> = Result<T, FpError>;

#[derive(Debug)]
pub enum FpError {
    UnknownOwner(String),
    UnknownFunction { owner: String, name: String },

    AlreadyResolved,

    // Whatever the target body returned, untouched.
    Target(anyhow::Error),
}

impl FpError {
    /// True for the two resolution failures.
    pub fn is_resolution(&self) -> bool {
        matches!(self, FpError::UnknownOwner(_) | FpError::UnknownFunction { .. })
    }

    /// The target's own error, if this is one.
    pub fn as_target(&self) -> Option<&anyhow::Error> {
        match self {
            FpError::Target(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for FpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use FpError::*;

        match self {
            UnknownOwner(owner) => write!(f, "cannot resolve owner `{}`", owner),
            UnknownFunction { owner, name } => {
                write!(f, "cannot resolve function `{}::{}`", owner, name)
            }
            AlreadyResolved => write!(f, "curried call already produced a value"),
            Target(err) => write!(f, "{}", err),
        }
    }
}

impl Error for FpError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FpError::Target(err) => err.source(),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for FpError {
    fn from(err: anyhow::Error) -> Self {
        FpError::Target(err)
    }
}

pub fn unknown_owner(owner: &str) -> FpError {
    FpError::UnknownOwner(owner.to_string())
}

pub fn unknown_function(owner: &str, name: &str) -> FpError {
    FpError::UnknownFunction {
        owner: owner.to_string(),
        name: name.to_string(),
    }
}
