use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    ComponentName, Error, Mapping, QuotingCapability, Record, Result, Truthiness, Value,
    record::{component_overrides, deserialize_record, reject_unknown_fields, serialize_record},
};

/// Per-component decision on whether a relation name part is quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuotingPolicy {
    pub database: bool,
    pub schema: bool,
    pub identifier: bool,
}

pub static QUOTE_ALL: QuotingPolicy = QuotingPolicy::all(true);

pub static QUOTE_NONE: QuotingPolicy = QuotingPolicy::all(false);

impl QuotingPolicy {
    #[must_use]
    pub const fn all(quote: bool) -> Self {
        Self {
            database: quote,
            schema: quote,
            identifier: quote,
        }
    }

    #[must_use]
    pub const fn get_part(&self, component: ComponentName) -> bool {
        match component {
            ComponentName::Database => self.database,
            ComponentName::Schema => self.schema,
            ComponentName::Identifier => self.identifier,
        }
    }

    pub fn get_part_by_name(&self, key: &str) -> Result<bool> {
        key.parse().map(|component| self.get_part(component))
    }

    pub fn replace_parts(&self, parts: &IndexMap<ComponentName, bool>) -> Result<Self> {
        self.incorporate(&component_overrides(parts))
    }
}

impl Default for QuotingPolicy {
    fn default() -> Self {
        Self::all(true)
    }
}

impl Record for QuotingPolicy {
    const NAME: &'static str = "QuotingPolicy";
    const FIELDS: &'static [&'static str] = &["database", "schema", "identifier"];

    fn to_plain_mapping(&self, omit_defaults: bool) -> Mapping {
        let defaults = Self::default();
        ComponentName::ALL
            .into_iter()
            .filter(|component| {
                !omit_defaults || self.get_part(*component) != defaults.get_part(*component)
            })
            .map(|component| {
                (
                    component.as_str().to_string(),
                    Value::Bool(self.get_part(component)),
                )
            })
            .collect()
    }

    fn from_plain_mapping(mapping: &Mapping) -> Result<Self> {
        reject_unknown_fields::<Self>(mapping)?;

        let flag = |component: ComponentName| match mapping.get(component.as_str()) {
            None | Some(Value::Null) => Ok(true),
            Some(Value::Bool(quote)) => Ok(*quote),
            Some(value) => {
                tracing::debug!(%component, %value, "rejected non-boolean quoting flag");
                Err(Error::InvalidPolicyValue {
                    component,
                    value: value.clone(),
                })
            }
        };

        Ok(Self {
            database: flag(ComponentName::Database)?,
            schema: flag(ComponentName::Schema)?,
            identifier: flag(ComponentName::Identifier)?,
        })
    }
}

impl Truthiness for QuotingPolicy {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl QuotingCapability for QuotingPolicy {
    fn should_quote(&self, component: ComponentName) -> bool {
        self.get_part(component)
    }
}

impl Serialize for QuotingPolicy {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_record(self, serializer)
    }
}

impl<'de> Deserialize<'de> for QuotingPolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserialize_record(deserializer)
    }
}
