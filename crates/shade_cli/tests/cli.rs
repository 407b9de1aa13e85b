//! Integration tests: drive the `shade` binary against temp projects.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn shade(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_shade"))
        .args(args)
        .current_dir(dir)
        .env_remove("SHADE_CONFIG")
        .env_remove("SHADE_LOG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("run shade")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

fn initialized_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let out = shade(dir.path(), &["init"]);
    assert!(out.status.success(), "init failed: {}", stderr(&out));
    dir
}

#[test]
fn init_writes_a_config_that_checks_clean() {
    let dir = initialized_project();
    let written = fs::read_to_string(dir.path().join("shade.toml")).unwrap();
    assert!(written.contains("mode = \"jit\""));
    assert!(written.contains("src/**/*.rs"));

    let out = shade(dir.path(), &["check"]);
    assert!(out.status.success(), "check failed: {}", stderr(&out));
    assert!(stdout(&out).contains("theme config is valid"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = initialized_project();
    let out = shade(dir.path(), &["init"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("already exists"));

    let out = shade(dir.path(), &["init", "--force"]);
    assert!(out.status.success(), "{}", stderr(&out));
}

#[test]
fn color_prints_the_bare_hex_value() {
    let dir = initialized_project();
    let out = shade(dir.path(), &["color", "blue", "600"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out).trim(), "#2563EB");
}

#[test]
fn color_missing_from_extension_fails() {
    let dir = initialized_project();
    let out = shade(dir.path(), &["color", "red", "500"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("red-500"));

    // the built-in palette still has it
    let out = shade(dir.path(), &["color", "red", "500", "--resolved"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out).trim(), "#EF4444");
}

#[test]
fn check_reports_every_problem() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("shade.toml"),
        "plugins = [\"forms\", \"forms\"]\n\n[content]\nfiles = []\n",
    )
    .unwrap();

    let out = shade(dir.path(), &["check"]);
    assert!(!out.status.success());
    let printed = stdout(&out);
    assert!(printed.contains("content.files is empty"), "{printed}");
    assert!(printed.contains("plugin `forms` is listed more than once"), "{printed}");
    assert!(stderr(&out).contains("2 problems"));
}

#[test]
fn malformed_hex_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("shade.toml"),
        "[content]\nfiles = [\"index.html\"]\n\n[theme.extend.colors.blue]\n600 = \"2563EB\"\n",
    )
    .unwrap();

    let out = shade(dir.path(), &["show"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("failed to load"));
}

#[test]
fn load_failure_is_reported_once_in_json_mode() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("shade.toml"), "[content]\nfiles = []\n").unwrap();

    let out = shade(dir.path(), &["-o", "json", "show"]);
    assert!(!out.status.success());
    let err = stderr(&out);
    let lines: Vec<&str> = err.lines().collect();
    assert_eq!(lines.len(), 1, "expected a single error line, got: {err}");
    let msg: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(msg["level"], "error");
    assert!(msg["message"].as_str().unwrap().contains("content.files is empty"));
}

#[test]
fn scan_json_reports_unknown_tokens_and_plan() {
    let dir = initialized_project();
    fs::write(
        dir.path().join("index.html"),
        "<body class=\"bg-gray-900 text-purple-500\">\n  <a class=\"bg-blue-600\">go</a>\n</body>\n",
    )
    .unwrap();

    let out = shade(dir.path(), &["-o", "json", "scan"]);
    assert!(out.status.success(), "{}", stderr(&out));
    let line = stdout(&out);
    let msg: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
    let data = &msg["data"];
    assert_eq!(data["strategy"], "per_file");
    assert_eq!(data["unknown"], serde_json::json!(["purple-500"]));
    assert_eq!(data["plan"], serde_json::json!(["blue-600", "gray-900"]));
    assert_eq!(data["truncated"], false);
}

#[test]
fn export_css_lists_resolved_palette() {
    let dir = initialized_project();
    let out = shade(dir.path(), &["export"]);
    assert!(out.status.success(), "{}", stderr(&out));
    let css = stdout(&out);
    assert!(css.starts_with(":root {"));
    assert!(css.contains("  --color-blue-600: #2563EB;"));
    assert!(css.contains("  --color-gray-900: #121826;"));
    assert!(css.contains("  --color-red-500: #EF4444;"));
}

#[test]
fn config_env_var_is_honored() {
    let project = TempDir::new().unwrap();
    let config = project.path().join("conf").join("theme.json");
    fs::create_dir_all(config.parent().unwrap()).unwrap();
    fs::write(
        &config,
        r##"{ "content": ["index.html"], "theme": { "extend": { "colors": { "brand": { "DEFAULT": "#ff5500" } } } } }"##,
    )
    .unwrap();

    let elsewhere = TempDir::new().unwrap();
    let out = Command::new(env!("CARGO_BIN_EXE_shade"))
        .args(["color", "brand", "DEFAULT"])
        .current_dir(elsewhere.path())
        .env("SHADE_CONFIG", &config)
        .env("NO_COLOR", "1")
        .output()
        .expect("run shade");
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out).trim(), "#FF5500");
}
