use relpath_core::{
    ComponentName, QualifiedPath, QuotingCapability, QuotingPolicy, RelationConfig, RelationType,
};

#[test]
fn relation_config_defaults_when_sections_are_omitted() {
    let config: RelationConfig = serde_yaml::from_str("{}").expect("empty config must parse");

    assert_eq!(config, RelationConfig::default());
    assert_eq!(config.path, QualifiedPath::default());
    assert_eq!(config.quoting, QuotingPolicy::default());
    assert_eq!(config.relation_type, None);
}

#[test]
fn relation_config_reads_path_quoting_and_type() {
    let yaml = r#"
path:
  database: analytics
  schema: staging
  identifier: Orders
quoting:
  identifier: false
relation_type: materialized_view
"#;

    let config: RelationConfig = serde_yaml::from_str(yaml).expect("config must parse");

    assert_eq!(
        config.path,
        QualifiedPath::from_parts("analytics", "staging", "Orders")
    );
    assert!(config.quoting.should_quote(ComponentName::Database));
    assert!(!config.quoting.should_quote(ComponentName::Identifier));
    assert_eq!(config.relation_type, Some(RelationType::MaterializedView));
}

#[test]
fn relation_config_surfaces_path_validation_errors() {
    let yaml = r#"
path:
  database: 123
"#;

    let error = serde_yaml::from_str::<RelationConfig>(yaml)
        .expect_err("integer database must be rejected");

    assert!(
        error.to_string().contains("got an invalid path database: 123"),
        "unexpected error: {error}"
    );
}

#[test]
fn relation_config_rejects_unknown_sections() {
    let yaml = r#"
path: {}
alias: orders
"#;

    assert!(serde_yaml::from_str::<RelationConfig>(yaml).is_err());
}

#[test]
fn relation_config_snapshot_round_trips() {
    let config = RelationConfig::new(
        QualifiedPath::new(None, Some("s".to_string()), Some("t".to_string())),
        QuotingPolicy {
            database: true,
            schema: false,
            identifier: true,
        },
    )
    .with_relation_type(RelationType::View);

    let yaml = serde_yaml::to_string(&config).expect("config must serialize");
    let parsed: RelationConfig = serde_yaml::from_str(&yaml).expect("snapshot must parse");

    assert_eq!(parsed, config);
}
