use std::collections::BTreeMap;

use indexmap::IndexMap;
use relpath_core::{
    ComponentName, Error, Mapping, QualifiedPath, QuotingPolicy, Record, Result, Value,
};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    #[default]
    Path,
    Policy,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestCase {
    pub record: RecordKind,
    pub base: Mapping,
    pub overrides: Mapping,
    /// Component-keyed parts applied through `replace_parts` after `overrides`.
    pub replace: Option<Mapping>,
    /// Full (non-compacted) snapshot expected after evolution.
    pub expected: Option<Mapping>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    Passed,
    Failed(String),
}

pub fn load_test_cases_from_str(
    yaml: &str,
) -> std::result::Result<BTreeMap<String, TestCase>, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

pub fn run_test(test: &TestCase) -> TestResult {
    let outcome = validate_expectations(test).and_then(|()| {
        let evolved = match test.record {
            RecordKind::Path => evolve::<QualifiedPath>(test, replace_path_parts),
            RecordKind::Policy => evolve::<QuotingPolicy>(test, replace_policy_parts),
        };
        evaluate_expected_error(test, evolved)
    });

    match outcome {
        Ok(()) => TestResult::Passed,
        Err(message) => TestResult::Failed(message),
    }
}

pub fn run_test_cases(cases: &BTreeMap<String, TestCase>) -> BTreeMap<String, TestResult> {
    cases
        .iter()
        .map(|(name, test)| (name.clone(), run_test(test)))
        .collect()
}

fn validate_expectations(test: &TestCase) -> std::result::Result<(), String> {
    match (&test.expected, &test.error) {
        (Some(_), Some(_)) => Err("`expected` and `error` must not both be set".to_string()),
        _ => Ok(()),
    }
}

fn evolve<R: Record>(
    test: &TestCase,
    replace: impl FnOnce(&R, &Mapping) -> Result<R>,
) -> Result<Mapping> {
    let record = R::from_plain_mapping(&test.base)?.incorporate(&test.overrides)?;
    let record = match &test.replace {
        Some(parts) => replace(&record, parts)?,
        None => record,
    };

    Ok(record.to_plain_mapping(false))
}

fn replace_path_parts(path: &QualifiedPath, parts: &Mapping) -> Result<QualifiedPath> {
    let parts = component_keyed(parts, |component, value| match value {
        Value::String(part) => Ok(part.clone()),
        other => Err(Error::InvalidPathValue {
            component,
            value: other.clone(),
        }),
    })?;

    path.replace_parts(&parts)
}

fn replace_policy_parts(policy: &QuotingPolicy, parts: &Mapping) -> Result<QuotingPolicy> {
    let parts = component_keyed(parts, |component, value| {
        value.as_bool().ok_or_else(|| Error::InvalidPolicyValue {
            component,
            value: value.clone(),
        })
    })?;

    policy.replace_parts(&parts)
}

fn component_keyed<V>(
    parts: &Mapping,
    convert: impl Fn(ComponentName, &Value) -> Result<V>,
) -> Result<IndexMap<ComponentName, V>> {
    parts
        .iter()
        .map(|(key, value)| -> Result<(ComponentName, V)> {
            let component: ComponentName = key.parse()?;
            Ok((component, convert(component, value)?))
        })
        .collect()
}

fn evaluate_expected_error(
    test: &TestCase,
    evolved: Result<Mapping>,
) -> std::result::Result<(), String> {
    let Some(expected_error) = test.error.as_deref() else {
        return match evolved {
            Ok(actual) => assert_expected_snapshot(test.expected.as_ref(), actual),
            Err(error) => Err(error.to_string()),
        };
    };

    match evolved {
        Ok(_) => Err(format!(
            "expected error: {expected_error}, but got no error"
        )),
        Err(actual_error) => {
            let actual_error = actual_error.to_string();
            if actual_error == expected_error {
                Ok(())
            } else {
                Err(format!(
                    "expected error: {expected_error}, but got: {actual_error}"
                ))
            }
        }
    }
}

fn assert_expected_snapshot(
    expected: Option<&Mapping>,
    actual: Mapping,
) -> std::result::Result<(), String> {
    match expected {
        Some(expected) if *expected != actual => Err(format!(
            "expected snapshot: {}, but got: {}",
            Value::Mapping(expected.clone()),
            Value::Mapping(actual)
        )),
        _ => Ok(()),
    }
}
