use relpath_core::{ComponentName, Mapping, Value};

mod yaml_runner;

pub use yaml_runner::{
    RecordKind, TestCase, TestResult, load_test_cases_from_str, run_test, run_test_cases,
};

/// Plain path mapping with all three parts set, for use as a testcase `base`.
pub fn path_fixture(database: &str, schema: &str, identifier: &str) -> Mapping {
    ComponentName::ALL
        .into_iter()
        .zip([database, schema, identifier])
        .map(|(component, part)| (component.as_str().to_string(), Value::from(part)))
        .collect()
}
