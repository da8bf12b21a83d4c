use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const GEMINI_COMMENTS: &str = r#"[
  {
    "path": "src/api/handler.ts",
    "line": 42,
    "original_line": 40,
    "body": "![critical](https://www.gstatic.com/codereviewagent/critical.svg)\n\nThe token is logged in plain text.",
    "user": {"login": "gemini-code-assist[bot]"}
  },
  {
    "body": "Overall this PR looks good.",
    "user": {"login": "alice"}
  },
  {
    "path": "src/util.ts",
    "line": null,
    "body": "![medium](https://www.gstatic.com/codereviewagent/medium-priority.svg) Prefer const here.",
    "user": {"login": "alice"}
  },
  {
    "path": "src/db.ts",
    "line": 7,
    "body": "🟠 Missing transaction rollback",
    "user": {"login": "bob-reviewer"}
  }
]"#;

fn write_input(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn pr_reader(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pr-reader").unwrap();
    // keep a stray pr-reader.yaml in the developer's cwd out of the tests
    cmd.current_dir(dir).env_remove("PR_READER_CONFIG");
    cmd
}

#[test]
fn parse_prints_summary() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "comments.json", GEMINI_COMMENTS);

    pr_reader(dir.path())
        .arg("parse")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 review comments"))
        .stdout(predicate::str::contains("🔴 CRITICAL - Comment #1"))
        .stdout(predicate::str::contains("File: src/api/handler.ts\nLine: 40\n"))
        .stdout(predicate::str::contains("The token is logged in plain text."))
        .stdout(predicate::str::contains("🟡 MEDIUM - Comment #2"))
        .stdout(predicate::str::contains("Line: N/A"))
        .stdout(predicate::str::contains("\nPrefer const here.\n"))
        .stdout(predicate::str::contains("Overall this PR").not())
        .stdout(predicate::str::contains("gstatic").not());
}

#[test]
fn parse_filters_by_reviewer() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "comments.json", GEMINI_COMMENTS);

    pr_reader(dir.path())
        .arg("parse")
        .arg(&input)
        .arg("BOB")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 review comments"))
        .stdout(predicate::str::contains("🟠 HIGH - Comment #1"))
        .stdout(predicate::str::contains("Reviewer: bob-reviewer"));
}

#[test]
fn parse_empty_array() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "empty.json", "[]");

    pr_reader(dir.path())
        .arg("parse")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 0 review comments"));
}

#[test]
fn parse_blank_file_is_zero_comments() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "blank.json", "\n");

    pr_reader(dir.path())
        .arg("parse")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 0 review comments"));
}

#[test]
fn parse_malformed_json_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "bad.json", "[{\"path\": ");

    pr_reader(dir.path())
        .arg("parse")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed JSON"));
}

#[test]
fn parse_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    pr_reader(dir.path())
        .args(["parse", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn parse_requires_file_argument() {
    let dir = TempDir::new().unwrap();

    pr_reader(dir.path()).arg("parse").assert().failure();
}

#[test]
fn parse_json_format_by_severity() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "comments.json", GEMINI_COMMENTS);

    let output = pr_reader(dir.path())
        .arg("parse")
        .arg(&input)
        .args(["--format", "json", "--by-severity"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total"], 3);
    assert_eq!(report["counts"]["high"], 1);
    let severities: Vec<_> = report["comments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["severity"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(severities, vec!["critical", "high", "medium"]);
    assert_eq!(report["comments"][1]["id"], 3);
    assert!(report["comments"][2]["line"].is_null());
}

#[test]
fn parse_truncates_long_bodies() {
    let dir = TempDir::new().unwrap();
    let body = "a".repeat(600);
    let input = write_input(
        &dir,
        "long.json",
        &format!(r#"[{{"path": "a.rs", "line": 1, "body": "{}"}}]"#, body),
    );

    pr_reader(dir.path())
        .arg("parse")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{}\n...\n", "a".repeat(500))))
        .stdout(predicate::str::contains("a".repeat(501)).not());
}

#[test]
fn config_file_supplies_defaults() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "comments.json", GEMINI_COMMENTS);
    write_input(&dir, "pr-reader.yaml", "reviewer: alice\nexcerpt_chars: 6\n");

    pr_reader(dir.path())
        .arg("parse")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 review comments"))
        .stdout(predicate::str::contains("\nPrefer\n...\n"));
}

#[test]
fn invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "comments.json", "[]");
    let config = write_input(&dir, "custom.yaml", "excerpt_chars: 0\n");

    pr_reader(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("parse")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("excerpt_chars"));
}

#[test]
fn schema_prints_config_schema() {
    let dir = TempDir::new().unwrap();

    pr_reader(dir.path())
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"excerpt_chars\""))
        .stdout(predicate::str::contains("\"gh_binary\""));
}

#[test]
fn fetch_rejects_non_pr_url() {
    let dir = TempDir::new().unwrap();

    pr_reader(dir.path())
        .args(["fetch", "https://github.com/o/r/issues/1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a pull request URL"));
}

#[cfg(unix)]
#[test]
fn fetch_uses_gh_and_saves_raw_json() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let page_one = r#"[{"path":"a.rs","line":1,"body":"![high](x) first","user":{"login":"bot"}}]"#;
    let page_two = r#"[{"path":"b.rs","line":2,"body":"second","user":{"login":"bot"}}]"#;
    let gh = write_input(
        &dir,
        "fake-gh",
        &format!(
            "#!/bin/sh\n[ \"$3\" = \"repos/o/r/pulls/5/comments\" ] || exit 3\nprintf '%s' '{}{}'\n",
            page_one, page_two
        ),
    );
    fs::set_permissions(&gh, fs::Permissions::from_mode(0o755)).unwrap();
    write_input(&dir, "pr-reader.yaml", &format!("gh_binary: {}\n", gh.display()));
    let saved = dir.path().join("raw.json");

    pr_reader(dir.path())
        .args(["fetch", "https://github.com/o/r/pull/5", "--save"])
        .arg(&saved)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 review comments"))
        .stdout(predicate::str::contains("🟠 HIGH - Comment #1"))
        .stdout(predicate::str::contains("\nfirst\n"));

    let raw = fs::read_to_string(&saved).unwrap();
    assert!(raw.starts_with(page_one));
}
