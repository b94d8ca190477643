use crate::{Mapping, Value};

/// Merges `overrides` into `base` and returns the result.
///
/// Keys holding a mapping on both sides are merged recursively. Any other
/// collision is won by the override. Keys present on only one side are kept,
/// base keys first in base order, then new override keys in override order.
#[must_use]
pub fn deep_merge(base: &Mapping, overrides: &Mapping) -> Mapping {
    let mut merged = base.clone();

    for (key, override_value) in overrides {
        let value = match (merged.get(key), override_value) {
            (Some(Value::Mapping(existing)), Value::Mapping(nested)) => {
                Value::Mapping(deep_merge(existing, nested))
            }
            _ => override_value.clone(),
        };
        merged.insert(key.clone(), value);
    }

    merged
}
