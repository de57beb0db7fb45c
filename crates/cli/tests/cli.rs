use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CALCULATOR: &str = "func add(a, b) {\n    return a + b;\n}\n\nprint(add(1, 2));\n";

const CALCULATOR_TEST: &str = r#"describe("Calculator", func() {
    it("adds numbers", func() {
        assert.equals(add(2, 2), 4);
    });
});
"#;

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("calc.r2"), CALCULATOR).unwrap();
    fs::write(dir.path().join("calc_test.r2"), CALCULATOR_TEST).unwrap();
    fs::write(dir.path().join("notes.txt"), "hello").unwrap();
    dir
}

fn runner(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("r2-runner").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_all_tests_dry_run() {
    let dir = workspace();
    runner(&dir)
        .args(["--dry-run", "test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("r2test"))
        .stderr(predicate::str::contains("R2Lang Tests"));
}

#[test]
fn test_coverage_flags() {
    let dir = workspace();
    runner(&dir)
        .args(["test", "--coverage", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "r2test -coverage -coverage-formats html,json",
        ));
}

#[test]
fn test_configured_test_runner() {
    let dir = workspace();
    fs::write(
        dir.path().join(".r2-runner.json"),
        r#"{ "test_executable_path": "/opt/r2/r2test" }"#,
    )
    .unwrap();

    runner(&dir)
        .args(["--dry-run", "test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/opt/r2/r2test"));
}

#[test]
fn test_flag_overrides_config() {
    let dir = workspace();
    runner(&dir)
        .args(["--dry-run", "--executable", "/usr/local/bin/r2", "run", "calc.r2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/usr/local/bin/r2 "))
        .stdout(predicate::str::contains("calc.r2"));
}

#[test]
fn test_named_test_dry_run() {
    let dir = workspace();
    runner(&dir)
        .args(["--dry-run", "test-one", "adds numbers", "calc_test.r2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("r2test -grep 'adds numbers'"))
        .stdout(predicate::str::contains("Running test: adds numbers"));
}

#[test]
fn test_run_missing_file() {
    let dir = workspace();
    runner(&dir)
        .args(["run", "missing.r2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_run_non_r2lang_file() {
    let dir = workspace();
    runner(&dir)
        .args(["--dry-run", "run", "notes.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Current file is not a R2Lang file"));
}

#[test]
fn test_test_file_requires_suffix() {
    let dir = workspace();
    runner(&dir)
        .args(["--dry-run", "test-file", "calc.r2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must end with _test.r2"));
}

#[test]
fn test_empty_selection() {
    let dir = workspace();
    runner(&dir)
        .args(["--dry-run", "run-selection", "calc.r2", "--lines", "4-4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No text selected"));
}

#[test]
fn test_feed_current_line() {
    let dir = workspace();
    runner(&dir)
        .args(["--dry-run", "feed", "calc.r2:5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("r2repl"))
        .stdout(predicate::str::contains("print(add(1, 2));"));
}

#[test]
fn test_feed_nothing_to_run() {
    let dir = workspace();
    fs::write(dir.path().join("plain.r2"), "let a = 1;\n\nprint(a);\n").unwrap();
    runner(&dir)
        .args(["--dry-run", "feed", "plain.r2:2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No code to run"));
}

#[test]
fn test_repl_in_source_checkout() {
    let dir = workspace();
    fs::write(dir.path().join("main.go"), "package main\n").unwrap();
    runner(&dir)
        .args(["--dry-run", "repl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("&& go run main.go -repl"));
}

#[test]
fn test_analyze_json() {
    let dir = workspace();
    runner(&dir)
        .args(["analyze", "calc_test.r2", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("r2lang.runIndividualTest"))
        .stdout(predicate::str::contains("\"Calculator\""))
        .stdout(predicate::str::contains("\"adds numbers\""));
}

#[test]
fn test_analyze_respects_disabled_lenses() {
    let dir = workspace();
    fs::write(
        dir.path().join("r2-runner.json"),
        r#"{ "enable_test_code_lens": false }"#,
    )
    .unwrap();
    runner(&dir)
        .args(["analyze", "calc_test.r2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No test declarations found."));
}

#[test]
fn test_locate_function() {
    let dir = workspace();
    runner(&dir)
        .args(["locate", "calc.r2:2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("calc.r2:1-3"))
        .stdout(predicate::str::contains("return a + b;"));
}

#[test]
fn test_hover_keyword() {
    let dir = workspace();
    runner(&dir)
        .args(["hover", "calc.r2:1:2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Declares a function"));
}

#[test]
fn test_format_write() {
    let dir = workspace();
    runner(&dir)
        .args(["format", "calc.r2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2: return a + b;"));

    runner(&dir).args(["format", "calc.r2", "--write"]).assert().success();
    let formatted = fs::read_to_string(dir.path().join("calc.r2")).unwrap();
    assert!(formatted.contains("\nreturn a + b;\n"));
}

#[test]
fn test_welcome_dismissal_persists() {
    let dir = workspace();
    runner(&dir)
        .arg("welcome")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to R2Lang!"))
        .stdout(predicate::str::contains("Don't show again"));

    runner(&dir)
        .args(["welcome", "--choice", "Don't show again"])
        .assert()
        .success();
    assert!(dir.path().join(".r2-runner-state.json").exists());

    runner(&dir)
        .arg("welcome")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_welcome_new_file_template() {
    let dir = workspace();
    runner(&dir)
        .args(["welcome", "--choice", "Create New File"])
        .assert()
        .success()
        .stdout(predicate::str::contains("print(\"Hello, R2Lang!\");"));
}

#[test]
fn test_init_writes_config() {
    let dir = workspace();
    runner(&dir).arg("init").assert().success();
    let written = fs::read_to_string(dir.path().join(".r2-runner.json")).unwrap();
    assert!(written.contains("\"repl_executable_path\": \"r2repl\""));

    runner(&dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}
