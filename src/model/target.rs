use derive_more::Display;

/// A function name bound to the owner it is looked up in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{owner}::{name}")]
pub struct TargetRef {
    pub owner: String,
    pub name: String,
}

impl TargetRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        TargetRef {
            owner: owner.into(),
            name: name.into(),
        }
    }
}
