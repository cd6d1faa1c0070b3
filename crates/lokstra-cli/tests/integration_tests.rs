//! End-to-end tests driving the compiled `lokstra` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn lokstra() -> Command {
    let mut cmd = Command::cargo_bin("lokstra").expect("binary builds");
    cmd.env_remove("LOKSTRA_TEMPLATE")
        .env_remove("LOKSTRA_MODULE_PREFIX")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn write(path: &std::path::Path, content: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    lokstra()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("lint"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag_prints_version() {
    lokstra()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_shows_help_and_fails() {
    lokstra().assert().code(2);
}

#[test]
fn unknown_project_type_exits_with_usage_error() {
    lokstra().args(["init", "webapp", "x"]).assert().code(2);
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Lay down a minimal built-in template tree under `<root>/scaffold/default`.
fn seed_scaffold(root: &std::path::Path) {
    let server = root.join("scaffold/default/server");
    write(
        &server.join("cmd/main.go.tpl"),
        "package main\n\n// {{ app_name }} entry point for {{ module_name }}\n",
    );
    write(&server.join("configs/app.yaml"), "server:\n  port: 8080\n");
}

#[test]
fn init_generates_project_skeleton() {
    let temp = TempDir::new().unwrap();
    seed_scaffold(temp.path());

    lokstra()
        .current_dir(temp.path())
        .args([
            "init",
            "server",
            "demo",
            "--module",
            "github.com/acme/demo",
            "--skip-deps",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("created"));

    let project = temp.path().join("demo");
    assert_eq!(
        std::fs::read_to_string(project.join("go.mod")).unwrap(),
        "module github.com/acme/demo\n\ngo 1.24\n"
    );
    // Marker stripped and variables substituted.
    assert_eq!(
        std::fs::read_to_string(project.join("cmd/main.go")).unwrap(),
        "package main\n\n// demo entry point for github.com/acme/demo\n"
    );
    // Static file copied verbatim.
    assert_eq!(
        std::fs::read_to_string(project.join("configs/app.yaml")).unwrap(),
        "server:\n  port: 8080\n"
    );
}

#[test]
fn init_defaults_the_module_path() {
    let temp = TempDir::new().unwrap();
    seed_scaffold(temp.path());

    lokstra()
        .current_dir(temp.path())
        .args(["init", "server", "demo", "--skip-deps"])
        .assert()
        .success();

    let go_mod = std::fs::read_to_string(temp.path().join("demo/go.mod")).unwrap();
    assert!(go_mod.starts_with("module github.com/example/demo\n"));
}

#[test]
fn init_honors_output_directory() {
    let temp = TempDir::new().unwrap();
    seed_scaffold(temp.path());
    std::fs::create_dir(temp.path().join("workspace")).unwrap();

    lokstra()
        .current_dir(temp.path())
        .args([
            "init", "server", "demo", "--skip-deps", "--output", "workspace",
        ])
        .assert()
        .success();

    assert!(temp.path().join("workspace/demo/go.mod").exists());
    assert!(!temp.path().join("demo").exists());
}

#[test]
fn init_refuses_existing_directory() {
    let temp = TempDir::new().unwrap();
    seed_scaffold(temp.path());
    std::fs::create_dir(temp.path().join("demo")).unwrap();

    lokstra()
        .current_dir(temp.path())
        .args(["init", "server", "demo", "--skip-deps"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_with_missing_template_exits_not_found() {
    let temp = TempDir::new().unwrap();
    // No scaffold tree at all.
    lokstra()
        .current_dir(temp.path())
        .args(["init", "server", "demo", "--skip-deps"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn init_accepts_explicit_template_directory() {
    let temp = TempDir::new().unwrap();
    let custom = temp.path().join("my-templates");
    write(
        &custom.join("service/service.go.tpl"),
        "package {{ app_name }}\n",
    );

    lokstra()
        .current_dir(temp.path())
        .args([
            "init",
            "service",
            "payment",
            "--skip-deps",
            "--template",
            "my-templates",
        ])
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(temp.path().join("payment/service.go")).unwrap(),
        "package payment\n"
    );
}

// ── lint ──────────────────────────────────────────────────────────────────────

#[test]
fn lint_clean_tree_exits_zero() {
    let temp = TempDir::new().unwrap();
    write(
        &temp.path().join("main.go"),
        "package main\n\nvar addr = \"lokstra://auth.UserService/main\"\n",
    );
    write(&temp.path().join("configs/app.yaml"), "server:\n  port: 8080\n");

    lokstra()
        .current_dir(temp.path())
        .arg("lint")
        .assert()
        .success()
        .stdout(predicate::str::contains("no issues found"));
}

#[test]
fn lint_reports_bad_uri_and_exits_two() {
    let temp = TempDir::new().unwrap();
    write(
        &temp.path().join("main.go"),
        "package main\n\nvar addr = \"lokstra://lowercase.service/main\"\n",
    );

    lokstra()
        .current_dir(temp.path())
        .arg("lint")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("main.go"));
}

#[test]
fn lint_reports_invalid_yaml() {
    let temp = TempDir::new().unwrap();
    write(&temp.path().join("configs/app.yaml"), "key: [unclosed\n");

    lokstra()
        .current_dir(temp.path())
        .arg("lint")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("invalid YAML syntax"));
}

#[test]
fn lint_checks_uri_tokens_only_in_go_files() {
    let temp = TempDir::new().unwrap();
    // Valid YAML; the embedded token would fail the URI grammar but YAML
    // files only get the syntax check.
    write(
        &temp.path().join("configs/app.yaml"),
        "service: \"lokstra://user_service/primary\"\n",
    );

    lokstra()
        .current_dir(temp.path())
        .arg("lint")
        .assert()
        .success()
        .stdout(predicate::str::contains("no issues found"));
}

#[test]
fn lint_skips_vendor_directory() {
    let temp = TempDir::new().unwrap();
    write(
        &temp.path().join("vendor/dep.go"),
        "var addr = \"lokstra://broken\"\n",
    );

    lokstra()
        .current_dir(temp.path())
        .arg("lint")
        .assert()
        .success();
}
