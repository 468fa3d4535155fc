//! Integration tests for stamp-cli.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BUNDLED: &[&str] = &["badge.svg", "favicon.svg", "logo.svg"];

/// A `stamp` command isolated from the user's config and `.env`.
fn stamp(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stamp").unwrap();
    cmd.current_dir(cwd)
        .env("XDG_CONFIG_HOME", cwd.join(".config"))
        .env("HOME", cwd)
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

fn write_templates(dir: &Path, templates: &[(&str, &str)]) {
    fs::create_dir_all(dir).unwrap();
    for (name, body) in templates {
        fs::write(dir.join(name), body).unwrap();
    }
}

// ── Basic flags ───────────────────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    stamp(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--string"))
        .stdout(predicate::str::contains("--dir"))
        .stdout(predicate::str::contains("--prefix"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    stamp(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── Generation ────────────────────────────────────────────────────────────────

#[test]
fn test_generates_every_bundled_template() {
    let temp = TempDir::new().unwrap();

    stamp(temp.path())
        .args(["-s", "Acme", "-dir", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generating files in directory: 'out'"))
        .stdout(predicate::str::contains("Done. Successfully generated 3 file(s)."));

    for name in BUNDLED {
        let body = fs::read_to_string(temp.path().join("out").join(name)).unwrap();
        assert!(body.starts_with("<svg"), "{name}");
        assert!(body.contains('A'), "{name}");
        assert!(!body.contains("{{"), "{name}");
    }
}

#[test]
fn test_prefix_is_applied_to_every_file() {
    let temp = TempDir::new().unwrap();

    stamp(temp.path())
        .args(["-s", "Acme", "-dir", "out", "-prefix", "app_"])
        .assert()
        .success();

    let mut names: Vec<String> = fs::read_dir(temp.path().join("out"))
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();

    assert_eq!(
        names,
        vec!["app_badge.svg", "app_favicon.svg", "app_logo.svg"]
    );
}

#[test]
fn test_single_and_double_dash_dir_are_equivalent() {
    let temp = TempDir::new().unwrap();

    stamp(temp.path())
        .args(["-s", "x", "-dir", "single"])
        .assert()
        .success();
    stamp(temp.path())
        .args(["-s", "x", "--dir=double"])
        .assert()
        .success();

    for name in BUNDLED {
        assert_eq!(
            fs::read(temp.path().join("single").join(name)).unwrap(),
            fs::read(temp.path().join("double").join(name)).unwrap()
        );
    }
}

#[test]
fn test_creates_nested_target_directory() {
    let temp = TempDir::new().unwrap();

    stamp(temp.path())
        .args(["-s", "Acme", "-dir", "a/b/c"])
        .assert()
        .success();

    assert!(temp.path().join("a/b/c/logo.svg").is_file());
}

#[test]
fn test_value_is_written_verbatim() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("tpl");
    write_templates(&templates, &[("logo.tmpl", "<svg>{{.}}</svg>")]);

    stamp(temp.path())
        .args(["-s", "hello", "-dir", "out", "-prefix", "app_", "--templates"])
        .arg(&templates)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"))
        .stdout(predicate::str::contains("Done. Successfully generated 1 file(s)."));

    let body = fs::read_to_string(temp.path().join("out/app_logo")).unwrap();
    assert_eq!(body, "<svg>hello</svg>");
}

#[test]
fn test_double_dash_s_sets_the_value() {
    let temp = TempDir::new().unwrap();

    stamp(temp.path())
        .args(["--s", "hello", "-dir", "out"])
        .assert()
        .success();

    assert!(temp.path().join("out/logo.svg").is_file());
}

#[test]
fn test_markup_in_value_is_not_escaped() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("tpl");
    write_templates(&templates, &[("t.txt.tmpl", "[{{ . }}]\n")]);

    stamp(temp.path())
        .args(["-s", "<b>&\"x\"</b>", "-dir", "out", "-templates"])
        .arg(&templates)
        .assert()
        .success();

    let body = fs::read_to_string(temp.path().join("out/t.txt")).unwrap();
    assert_eq!(body, "[<b>&\"x\"</b>]\n");
}

#[test]
fn test_invalid_template_is_skipped() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("tpl");
    write_templates(
        &templates,
        &[
            ("bad.tmpl", "<svg>{{ ."),
            ("good.tmpl", "<svg>{{.}}</svg>"),
            ("README.md", "not a template"),
        ],
    );

    stamp(temp.path())
        .args(["-s", "ok", "-dir", "out", "--templates"])
        .arg(&templates)
        .assert()
        .success()
        .stdout(predicate::str::contains("bad.tmpl"))
        .stdout(predicate::str::contains("Done. Successfully generated 1 file(s)."));

    assert_eq!(
        fs::read_to_string(temp.path().join("out/good")).unwrap(),
        "<svg>ok</svg>"
    );
    assert!(!temp.path().join("out/bad").exists());
    assert!(!temp.path().join("out/README.md").exists());
}

#[test]
fn test_zero_templates_is_success() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("tpl");
    write_templates(&templates, &[("notes.txt", "hello")]);

    stamp(temp.path())
        .args(["-s", "x", "-dir", "out", "--templates"])
        .arg(&templates)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No valid '.tmpl' templates found. Nothing was generated.",
        ));
}

#[test]
fn test_rerun_overwrites_identically() {
    let temp = TempDir::new().unwrap();
    let logo = temp.path().join("out/logo.svg");

    stamp(temp.path()).args(["-s", "one", "-dir", "out"]).assert().success();
    fs::write(&logo, "tampered").unwrap();
    stamp(temp.path()).args(["-s", "one", "-dir", "out"]).assert().success();
    let first = fs::read(&logo).unwrap();
    stamp(temp.path()).args(["-s", "one", "-dir", "out"]).assert().success();

    assert_eq!(first, fs::read(&logo).unwrap());
    assert_ne!(first, b"tampered");
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    stamp(temp.path())
        .args(["-s", "Acme", "-dir", "out", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would create"))
        .stdout(predicate::str::contains("Would generate 3 file(s)"));

    assert!(!temp.path().join("out").exists());
}

#[test]
fn test_config_supplies_defaults() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("stamp.toml");
    fs::write(&config, "[defaults]\ndir = \"icons\"\nprefix = \"cfg_\"\n").unwrap();

    stamp(temp.path())
        .args(["-s", "Acme", "--config"])
        .arg(&config)
        .assert()
        .success();

    assert!(temp.path().join("icons/cfg_logo.svg").is_file());
}

#[test]
fn test_json_output() {
    let temp = TempDir::new().unwrap();

    let assert = stamp(temp.path())
        .args(["-s", "Acme", "-dir", "out", "--output-format", "json"])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json["generated"], 3);
    assert_eq!(json["dry_run"], false);
    assert_eq!(json["outcomes"].as_array().unwrap().len(), 3);
    assert_eq!(json["outcomes"][0]["status"], "written");
}

#[test]
fn test_quiet_suppresses_progress() {
    let temp = TempDir::new().unwrap();

    stamp(temp.path())
        .args(["-q", "-s", "Acme", "-dir", "out"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("out/logo.svg").is_file());
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[test]
fn test_list_shows_output_names() {
    let temp = TempDir::new().unwrap();

    stamp(temp.path())
        .args(["list", "--prefix", "app_"])
        .assert()
        .success()
        .stdout(predicate::str::contains("logo.svg.tmpl"))
        .stdout(predicate::str::contains("app_logo.svg"));
}

#[test]
fn test_global_flags_before_list() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("tpl");
    write_templates(&templates, &[("icon.tmpl", "{{.}}")]);

    stamp(temp.path())
        .args(["-v", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("logo.svg.tmpl"));

    stamp(temp.path())
        .arg("--templates")
        .arg(&templates)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("icon.tmpl"));
}

#[test]
fn test_list_json() {
    let temp = TempDir::new().unwrap();

    let assert = stamp(temp.path())
        .args(["list", "--output-format", "json"])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let outputs: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["output_file"].as_str().unwrap())
        .collect();
    assert_eq!(outputs, BUNDLED);
}

#[test]
fn test_completions_bash() {
    let temp = TempDir::new().unwrap();

    stamp(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stamp"));
}
