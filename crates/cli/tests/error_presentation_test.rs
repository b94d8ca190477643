use std::{
    io::Write,
    process::{Command, Stdio},
};

fn run_relpath_with_stdin(args: &[&str], stdin_yaml: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_relpath"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|error| panic!("failed to run relpath with stdin: {error}"));

    let mut stdin = child
        .stdin
        .take()
        .unwrap_or_else(|| panic!("failed to capture child stdin"));
    stdin
        .write_all(stdin_yaml.as_bytes())
        .unwrap_or_else(|error| panic!("failed to write stdin payload: {error}"));
    drop(stdin);

    child
        .wait_with_output()
        .unwrap_or_else(|error| panic!("failed to wait for relpath: {error}"))
}

#[test]
fn unknown_component_keeps_typed_category_with_cli_context() {
    let output = run_relpath_with_stdin(&["part", "catalog"], "path: {}\n");

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("[component]"),
        "stderr must preserve typed component category, got: {stderr}",
    );
    assert!(
        stderr.contains("while evaluating relation config"),
        "stderr must include CLI context, got: {stderr}",
    );
    assert!(
        stderr.contains("database, schema, identifier"),
        "stderr must list valid components, got: {stderr}",
    );
}

#[test]
fn invalid_path_value_is_reported_as_config_error() {
    let output = run_relpath_with_stdin(&["snapshot"], "path:\n  database: 123\n");

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[config]"), "got: {stderr}");
    assert!(
        stderr.contains("got an invalid path database: 123"),
        "stderr must name the offending part, got: {stderr}",
    );
}

#[test]
fn non_boolean_quote_flag_is_reported_as_value_error() {
    let output = run_relpath_with_stdin(&["replace", "--quote", "schema=maybe"], "{}\n");

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[value]"), "got: {stderr}");
    assert!(stderr.contains("schema: \"maybe\""), "got: {stderr}");
}

#[test]
fn malformed_assignment_is_a_usage_error() {
    let output = run_relpath_with_stdin(&["replace", "--part", "schema"], "{}\n");

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[usage]"), "got: {stderr}");
    assert!(stderr.contains("`schema`"), "got: {stderr}");
}
