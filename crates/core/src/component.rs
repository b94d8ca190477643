use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// One of the three levels of a qualified relation name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentName {
    Database,
    Schema,
    Identifier,
}

impl ComponentName {
    /// All components in declaration order.
    pub const ALL: [Self; 3] = [Self::Database, Self::Schema, Self::Identifier];

    #[must_use]
    pub const fn list_all() -> [Self; 3] {
        Self::ALL
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Database => "database",
            Self::Schema => "schema",
            Self::Identifier => "identifier",
        }
    }

    pub(crate) fn joined() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ComponentName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for ComponentName {
    type Err = Error;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|component| component.as_str() == key)
            .ok_or_else(|| Error::InvalidComponentName {
                key: key.to_string(),
            })
    }
}

/// Kind of warehouse object a relation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationType {
    Table,
    View,
    Cte,
    MaterializedView,
    External,
}

impl RelationType {
    pub const ALL: [Self; 5] = [
        Self::Table,
        Self::View,
        Self::Cte,
        Self::MaterializedView,
        Self::External,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::View => "view",
            Self::Cte => "cte",
            Self::MaterializedView => "materialized_view",
            Self::External => "external",
        }
    }

    pub(crate) fn joined() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|relation_type| relation_type.as_str() == value)
            .ok_or_else(|| Error::InvalidRelationType {
                value: value.to_string(),
            })
    }
}
