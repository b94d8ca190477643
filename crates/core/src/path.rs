use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    ComponentName, Error, Mapping, Record, Result, Truthiness, Value,
    record::{component_overrides, deserialize_record, reject_unknown_fields, serialize_record},
};

/// Three-level relation name. Each part is either unset or a string; an unset
/// part is distinct from an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct QualifiedPath {
    database: Option<String>,
    schema: Option<String>,
    identifier: Option<String>,
}

impl QualifiedPath {
    #[must_use]
    pub const fn new(
        database: Option<String>,
        schema: Option<String>,
        identifier: Option<String>,
    ) -> Self {
        Self {
            database,
            schema,
            identifier,
        }
    }

    #[must_use]
    pub fn from_parts(database: &str, schema: &str, identifier: &str) -> Self {
        Self::new(
            Some(database.to_string()),
            Some(schema.to_string()),
            Some(identifier.to_string()),
        )
    }

    #[must_use]
    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    #[must_use]
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    #[must_use]
    pub fn get_part(&self, component: ComponentName) -> Option<&str> {
        match component {
            ComponentName::Database => self.database(),
            ComponentName::Schema => self.schema(),
            ComponentName::Identifier => self.identifier(),
        }
    }

    pub fn get_part_by_name(&self, key: &str) -> Result<Option<&str>> {
        key.parse().map(|component| self.get_part(component))
    }

    /// Lowercased copy of the part; an unset part stays unset.
    #[must_use]
    pub fn get_lowered_part(&self, component: ComponentName) -> Option<String> {
        self.get_part(component).map(str::to_lowercase)
    }

    pub fn replace_parts(&self, parts: &IndexMap<ComponentName, String>) -> Result<Self> {
        self.incorporate(&component_overrides(parts))
    }
}

impl Record for QualifiedPath {
    const NAME: &'static str = "QualifiedPath";
    const FIELDS: &'static [&'static str] = &["database", "schema", "identifier"];

    fn to_plain_mapping(&self, omit_defaults: bool) -> Mapping {
        ComponentName::ALL
            .into_iter()
            .map(|component| (component, self.get_part(component)))
            .filter(|(_, part)| !omit_defaults || part.is_some())
            .map(|(component, part)| (component.as_str().to_string(), Value::from(part)))
            .collect()
    }

    fn from_plain_mapping(mapping: &Mapping) -> Result<Self> {
        reject_unknown_fields::<Self>(mapping)?;

        Ok(Self {
            database: validated_part(mapping, ComponentName::Database)?,
            schema: validated_part(mapping, ComponentName::Schema)?,
            identifier: validated_part(mapping, ComponentName::Identifier)?,
        })
    }
}

// Undefined template placeholders land here as non-string values.
fn validated_part(mapping: &Mapping, component: ComponentName) -> Result<Option<String>> {
    match mapping.get(component.as_str()) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(part)) => Ok(Some(part.clone())),
        Some(value) => {
            tracing::debug!(%component, %value, "rejected non-string path part");
            Err(Error::InvalidPathValue {
                component,
                value: value.clone(),
            })
        }
    }
}

impl Truthiness for QualifiedPath {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Serialize for QualifiedPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_record(self, serializer)
    }
}

impl<'de> Deserialize<'de> for QualifiedPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserialize_record(deserializer)
    }
}
