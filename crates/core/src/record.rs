use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

use crate::{ComponentName, Error, Mapping, Result, Value, deep_merge};

/// Fixed-shape record addressed by field name.
///
/// A record is not a collection: it offers named access and copy-on-write
/// evolution, and every attempt to enumerate it fails with
/// [`Error::NotAMapping`].
pub trait Record: Sized {
    /// Type name used in error messages.
    const NAME: &'static str;

    /// Declared field names, in declaration order.
    const FIELDS: &'static [&'static str];

    /// Snapshot of the record in declaration order.
    ///
    /// With `omit_defaults`, fields still equal to their default are left out.
    fn to_plain_mapping(&self, omit_defaults: bool) -> Mapping;

    /// Builds and validates a record from a plain mapping. Missing fields take
    /// their defaults.
    fn from_plain_mapping(mapping: &Mapping) -> Result<Self>;

    fn read_field(&self, name: &str) -> Result<Value> {
        if !Self::FIELDS.contains(&name) {
            return Err(Error::UnknownField {
                record: Self::NAME,
                field: name.to_string(),
            });
        }

        Ok(self
            .to_plain_mapping(false)
            .shift_remove(name)
            .unwrap_or_default())
    }

    fn try_keys(&self) -> Result<Vec<&'static str>> {
        Err(Error::NotAMapping { record: Self::NAME })
    }

    fn try_len(&self) -> Result<usize> {
        Err(Error::NotAMapping { record: Self::NAME })
    }

    /// Returns a new record with `overrides` deep-merged over the non-default
    /// fields of `self`.
    fn incorporate(&self, overrides: &Mapping) -> Result<Self> {
        let snapshot = self.to_plain_mapping(true);
        let merged = deep_merge(&snapshot, overrides);

        tracing::debug!(
            record = Self::NAME,
            overrides = overrides.len(),
            "incorporating overrides"
        );

        Self::from_plain_mapping(&merged).inspect_err(|error| {
            tracing::debug!(record = Self::NAME, %error, "incorporated record failed validation");
        })
    }
}

pub(crate) fn reject_unknown_fields<R: Record>(mapping: &Mapping) -> Result<()> {
    match mapping.keys().find(|key| !R::FIELDS.contains(&key.as_str())) {
        Some(field) => Err(Error::UnknownField {
            record: R::NAME,
            field: field.clone(),
        }),
        None => Ok(()),
    }
}

pub(crate) fn component_overrides<V>(parts: &IndexMap<ComponentName, V>) -> Mapping
where
    V: Clone + Into<Value>,
{
    parts
        .iter()
        .map(|(component, value)| (component.as_str().to_string(), value.clone().into()))
        .collect()
}

pub(crate) fn serialize_record<R, S>(
    record: &R,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    R: Record,
    S: Serializer,
{
    record.to_plain_mapping(false).serialize(serializer)
}

pub(crate) fn deserialize_record<'de, R, D>(deserializer: D) -> std::result::Result<R, D::Error>
where
    R: Record,
    D: Deserializer<'de>,
{
    let mapping = Mapping::deserialize(deserializer)?;
    R::from_plain_mapping(&mapping).map_err(D::Error::custom)
}
