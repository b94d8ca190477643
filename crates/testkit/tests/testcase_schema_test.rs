use relpath_core::Value;
use relpath_testkit::{RecordKind, load_test_cases_from_str};

#[test]
fn defaults_record_to_path_and_mappings_to_empty() {
    let yaml = r#"
minimal:
  base:
    identifier: orders
"#;

    let cases = load_test_cases_from_str(yaml).expect("yaml must parse");
    let case = cases.get("minimal").expect("named testcase must be present");

    assert_eq!(case.record, RecordKind::Path);
    assert!(case.overrides.is_empty());
    assert_eq!(case.replace, None);
    assert_eq!(case.expected, None);
    assert_eq!(case.error, None);
    assert_eq!(case.base.get("identifier"), Some(&Value::from("orders")));
}

#[test]
fn preserves_raw_value_types_from_yaml() {
    let yaml = r#"
typed:
  record: policy
  base:
    database: false
    schema: 1
    identifier: ~
"#;

    let cases = load_test_cases_from_str(yaml).expect("yaml must parse");
    let case = cases.get("typed").expect("named testcase must be present");

    assert_eq!(case.record, RecordKind::Policy);
    assert_eq!(case.base.get("database"), Some(&Value::Bool(false)));
    assert_eq!(case.base.get("schema"), Some(&Value::Integer(1)));
    assert_eq!(case.base.get("identifier"), Some(&Value::Null));
}

#[test]
fn rejects_unknown_testcase_fields() {
    let yaml = r#"
typo:
  bsae: {}
"#;

    assert!(load_test_cases_from_str(yaml).is_err());
}
