// tests/integration_test.rs
use std::io::Write;
use std::process::{Command, Stdio};

use commit_analyzer::{AnalyzerError, Commit, ReleaseResolver, ReleaseRule, ReleaseTypes, RuleMatcher};
use serde_json::json;

fn commit(value: serde_json::Value) -> Commit {
    Commit::from_value(value).unwrap()
}

fn scenario_rules() -> Vec<ReleaseRule> {
    vec![
        ReleaseRule::new(Some("minor")).with_field("type", "feat"),
        ReleaseRule::new(Some("major")).breaking(),
    ]
}

#[test]
fn test_feature_commit_is_minor() {
    let types = ReleaseTypes::default();
    let rules = scenario_rules();
    let result = ReleaseResolver::new(&types)
        .resolve(&rules, &commit(json!({"type": "feat", "notes": []})))
        .unwrap();
    assert_eq!(result, Some("minor"));
}

#[test]
fn test_breaking_fix_is_major() {
    let types = ReleaseTypes::default();
    let rules = scenario_rules();
    let result = ReleaseResolver::new(&types)
        .resolve(
            &rules,
            &commit(json!({"type": "fix", "notes": [{"title": "BREAKING CHANGE"}]})),
        )
        .unwrap();
    assert_eq!(result, Some("major"));
}

#[test]
fn test_unmatched_commit_is_none() {
    let types = ReleaseTypes::default();
    let rules = vec![ReleaseRule::new(Some("patch")).with_field("type", "chore")];
    let result = ReleaseResolver::new(&types)
        .resolve(&rules, &commit(json!({"type": "feat", "notes": []})))
        .unwrap();
    assert_eq!(result, None);
}

#[test]
fn test_pattern_error_propagates() {
    let types = ReleaseTypes::default();
    let rules = vec![ReleaseRule::new(Some("patch")).with_field("scope", "/(unclosed/")];
    let c = commit(json!({"type": "fix", "scope": "api"}));

    assert!(matches!(
        RuleMatcher::matches(&rules[0], &c),
        Err(AnalyzerError::Pattern { .. })
    ));
    assert!(matches!(
        ReleaseResolver::new(&types).resolve(&rules, &c),
        Err(AnalyzerError::Pattern { .. })
    ));
}

#[test]
fn test_unterminated_slash_is_literal() {
    let rule = ReleaseRule::new(Some("patch")).with_field("scope", "/(unclosed");
    assert!(RuleMatcher::matches(&rule, &commit(json!({"scope": "/(unclosed"}))).unwrap());
    assert!(!RuleMatcher::matches(&rule, &commit(json!({"scope": "api"}))).unwrap());
}

#[test]
fn test_concurrent_resolution() {
    let types = ReleaseTypes::default();
    let rules = scenario_rules();
    let commits = vec![
        commit(json!({"type": "feat", "notes": []})),
        commit(json!({"type": "fix", "notes": [{"title": "BREAKING CHANGE"}]})),
        commit(json!({"type": "docs", "notes": []})),
    ];
    let expected = [Some("minor"), Some("major"), None];

    std::thread::scope(|s| {
        let handles: Vec<_> = commits
            .iter()
            .map(|c| {
                let types = &types;
                let rules = &rules;
                s.spawn(move || ReleaseResolver::new(types).resolve(rules, c).unwrap())
            })
            .collect();

        for (handle, expected) in handles.into_iter().zip(expected) {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

fn run_binary(args: &[&str], stdin: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_commit-analyzer"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_binary_help() {
    let output = run_binary(&["--help"], "");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("commit-analyzer"));
    assert!(stdout.contains("Determine the release type"));
}

#[test]
fn test_binary_reads_stdin() {
    let output = run_binary(
        &["--config", "tests/fixtures/config_with_rules.toml"],
        r#"[{"type": "feat", "subject": "add search", "notes": []}]"#,
    );
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("minor release"));
}

#[test]
fn test_binary_list_types() {
    let output = run_binary(
        &["--config", "tests/fixtures/config_with_rules.toml", "--list-types"],
        "",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("1. major"));
    assert!(stdout.contains("3. patch"));
}

#[test]
fn test_binary_rejects_invalid_commits() {
    let output = run_binary(&["--commits", "-"], "not json");
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("JSON array"));
}
