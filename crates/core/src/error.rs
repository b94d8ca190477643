use thiserror::Error;

use crate::{ComponentName, Value};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("got a key of `{key}`, expected one of [{}]", ComponentName::joined())]
    InvalidComponentName { key: String },

    #[error("got an invalid path {component}: {value}")]
    InvalidPathValue {
        component: ComponentName,
        value: Value,
    },

    #[error("got an invalid quoting policy {component}: {value}, expected a boolean")]
    InvalidPolicyValue {
        component: ComponentName,
        value: Value,
    },

    #[error("{record} supports named field access only and cannot be enumerated as a mapping")]
    NotAMapping { record: &'static str },

    #[error("{record} has no field named `{field}`")]
    UnknownField { record: &'static str, field: String },

    #[error("got a relation type of `{value}`, expected one of [{}]", crate::RelationType::joined())]
    InvalidRelationType { value: String },
}

impl Error {
    /// Component named by the error, if any.
    #[must_use]
    pub fn component(&self) -> Option<ComponentName> {
        match self {
            Self::InvalidPathValue { component, .. } | Self::InvalidPolicyValue { component, .. } => {
                Some(*component)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
