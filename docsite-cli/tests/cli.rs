use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::{Value, json};
use tempfile::TempDir;

fn docsite(args: &[&str]) -> Output {
    docsite_with_env(args, &[])
}

fn docsite_with_env(args: &[&str], env: &[(&str, &Path)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_docsite"));
    command
        .args(args)
        .env_remove("DOCSITE_LOG")
        .env_remove("DOCSITE_BUILD__DOCS_ROOT");
    for (key, value) in env {
        command.env(key, value);
    }

    command.output().expect("failed to run docsite")
}

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn site() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "docsite.toml",
        r#"
title = "Engine"
description = "Engine reference"

[theme]
nav = [{ text = "Engine", link = "/engine/" }]

[theme.sidebar]
"/engine/" = { remote = "engine" }
"#,
    );
    write(
        dir.path(),
        "docs/engine/docs.json",
        r#"[{"text":"Overview","link":"engine"}]"#,
    );
    dir
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn resolve_prints_config_object() {
    let dir = site();
    let config = dir.path().join("docsite.toml");

    let output = docsite(&["resolve", "--config", config.to_str().unwrap()]);

    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["title"], "Engine");
    assert_eq!(
        value["themeConfig"]["sidebar"]["/engine/"],
        json!([{ "text": "Overview", "link": "engine" }])
    );
}

#[test]
fn resolve_writes_output_file() {
    let dir = site();
    let config = dir.path().join("docsite.toml");
    let out = dir.path().join("out/config.json");
    fs::create_dir_all(out.parent().unwrap()).unwrap();

    let output = docsite(&[
        "resolve",
        "--compact",
        "-c",
        config.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(written.lines().count(), 1);
    let value: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["description"], "Engine reference");
}

#[test]
fn resolve_fails_when_remote_is_missing() {
    let dir = site();
    fs::remove_file(dir.path().join("docs/engine/docs.json")).unwrap();
    let config = dir.path().join("docsite.toml");

    let output = docsite(&["resolve", "--config", config.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("docs.json"), "stderr: {stderr}");
}

#[test]
fn sidebar_prints_descriptor() {
    let dir = site();
    let config = dir.path().join("docsite.toml");

    let output = docsite(&["sidebar", "engine", "--config", config.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!([{ "text": "Overview", "link": "engine" }])
    );
}

#[test]
fn sidebar_honours_docs_root_override() {
    let dir = site();
    write(
        dir.path(),
        "content/engine/docs.json",
        r#"[{"text":"Moved","link":"engine"}]"#,
    );
    let root = dir.path().join("content");

    let output = docsite(&["sidebar", "engine", "--docs-root", root.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(stdout_json(&output)[0]["text"], "Moved");
}

#[test]
fn sidebar_fails_for_unknown_remote() {
    let dir = site();
    let config = dir.path().join("docsite.toml");

    let output = docsite(&["sidebar", "missing", "--config", config.to_str().unwrap()]);

    assert!(!output.status.success());
}

fn moved_site() -> TempDir {
    let dir = site();
    write(
        dir.path(),
        "content/engine/docs.json",
        r#"[{"text":"From env","link":"engine"}]"#,
    );
    write(
        dir.path(),
        "flag/engine/docs.json",
        r#"[{"text":"From flag","link":"engine"}]"#,
    );
    dir
}

#[test]
fn env_docs_root_applies() {
    let dir = moved_site();
    let config = dir.path().join("docsite.toml");
    let env_root = dir.path().join("content");

    let output = docsite_with_env(
        &["sidebar", "engine", "--config", config.to_str().unwrap()],
        &[("DOCSITE_BUILD__DOCS_ROOT", env_root.as_path())],
    );

    assert!(output.status.success());
    assert_eq!(stdout_json(&output)[0]["text"], "From env");
}

#[test]
fn docs_root_flag_beats_env() {
    let dir = moved_site();
    let env_root = dir.path().join("content");
    let flag_root = dir.path().join("flag");

    let output = docsite_with_env(
        &["sidebar", "engine", "--docs-root", flag_root.to_str().unwrap()],
        &[("DOCSITE_BUILD__DOCS_ROOT", env_root.as_path())],
    );

    assert!(output.status.success());
    assert_eq!(stdout_json(&output)[0]["text"], "From flag");
}

#[test]
fn verbose_logs_go_to_stderr() {
    let dir = site();
    let config = dir.path().join("docsite.toml");

    let output = docsite(&["-v", "resolve", "--config", config.to_str().unwrap()]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("resolved site config"), "stderr: {stderr}");
    // stdout still parses as the config object
    assert_eq!(stdout_json(&output)["title"], "Engine");
}

#[test]
fn quiet_keeps_stderr_clean() {
    let dir = site();
    let config = dir.path().join("docsite.toml");

    let output = docsite(&["-q", "-vv", "resolve", "--config", config.to_str().unwrap()]);

    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn log_env_overrides_flags() {
    let dir = site();
    let config = dir.path().join("docsite.toml");

    let output = docsite_with_env(
        &["-q", "resolve", "--config", config.to_str().unwrap()],
        &[("DOCSITE_LOG", Path::new("debug"))],
    );

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("loading sidebar"), "stderr: {stderr}");
}
