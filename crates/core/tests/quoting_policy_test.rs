use indexmap::IndexMap;
use relpath_core::{
    ComponentName, Error, Mapping, QUOTE_ALL, QUOTE_NONE, QuotingCapability, QuotingPolicy,
    Record, Value,
};

fn mapping(entries: &[(&str, Value)]) -> Mapping {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_string(), value.clone()))
        .collect()
}

#[test]
fn default_policy_quotes_every_component() {
    let policy = QuotingPolicy::default();

    for component in ComponentName::ALL {
        assert!(policy.get_part(component), "{component} must default to quoted");
    }
    assert_eq!(policy, QUOTE_ALL);
}

#[test]
fn partial_mapping_fills_missing_flags_with_defaults() {
    let policy = QuotingPolicy::from_plain_mapping(&mapping(&[("schema", Value::Bool(false))]))
        .expect("partial policy must construct");

    assert!(policy.database);
    assert!(!policy.schema);
    assert!(policy.identifier);
}

#[test]
fn non_boolean_flag_is_rejected_with_component() {
    let error =
        QuotingPolicy::from_plain_mapping(&mapping(&[("identifier", Value::from("yes"))]))
            .expect_err("string flag must be rejected");

    assert_eq!(
        error,
        Error::InvalidPolicyValue {
            component: ComponentName::Identifier,
            value: Value::from("yes"),
        }
    );
    assert_eq!(error.component(), Some(ComponentName::Identifier));
}

#[test]
fn get_part_by_name_validates_loose_keys() {
    let policy = QUOTE_NONE;

    assert_eq!(policy.get_part_by_name("schema"), Ok(false));
    assert_eq!(
        policy.get_part_by_name("table"),
        Err(Error::InvalidComponentName {
            key: "table".to_string(),
        })
    );
}

#[test]
fn replace_parts_keeps_unspecified_flags() {
    let policy = QuotingPolicy {
        database: false,
        schema: true,
        identifier: false,
    };
    let parts = IndexMap::from([(ComponentName::Schema, false)]);

    let replaced = policy.replace_parts(&parts).expect("replace must succeed");

    assert_eq!(replaced, QUOTE_NONE);
    assert!(policy.schema, "receiver must not change");
}

#[test]
fn replace_parts_can_restore_default_flag() {
    let parts = IndexMap::from([(ComponentName::Database, true)]);

    let replaced = QUOTE_NONE.replace_parts(&parts).expect("replace must succeed");

    assert_eq!(
        replaced,
        QuotingPolicy {
            database: true,
            schema: false,
            identifier: false,
        }
    );
}

#[test]
fn compact_snapshot_keeps_only_disabled_flags() {
    let policy = QuotingPolicy {
        database: true,
        schema: false,
        identifier: true,
    };

    assert_eq!(
        policy.to_plain_mapping(true),
        mapping(&[("schema", Value::Bool(false))])
    );
    assert_eq!(
        policy.to_plain_mapping(false),
        mapping(&[
            ("database", Value::Bool(true)),
            ("schema", Value::Bool(false)),
            ("identifier", Value::Bool(true)),
        ])
    );
}

#[test]
fn policy_exposes_quoting_capability_for_all_components() {
    let policy = QuotingPolicy {
        database: false,
        schema: true,
        identifier: false,
    };

    let quoting: Vec<_> = policy.quoting().into_iter().collect();

    assert_eq!(
        quoting,
        [
            (ComponentName::Database, false),
            (ComponentName::Schema, true),
            (ComponentName::Identifier, false),
        ]
    );
    assert!(policy.should_quote(ComponentName::Schema));
}
