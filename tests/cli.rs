//! End-to-end runs of the binary against temporary directories. `HOME` is
//! pointed at a scratch directory so credentials-file handling never touches
//! the real one.

#![cfg(unix)]

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pypiforge() -> Command {
    Command::cargo_bin("pypiforge").unwrap()
}

struct Scratch {
    target: TempDir,
    home: TempDir,
}

impl Scratch {
    fn new() -> Self {
        Self {
            target: TempDir::new().unwrap(),
            home: TempDir::new().unwrap(),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = pypiforge();
        cmd.env("HOME", self.home.path())
            .arg("-d")
            .arg(self.target.path());
        cmd
    }
}

#[test]
fn scaffolds_a_full_project_tree() {
    let scratch = Scratch::new();

    scratch
        .cmd()
        .args(["-a", "alice", "-t", "pypi-abc", "My_Cool-Pkg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hint:"));

    let project = scratch.target.path().join("my-cool-pkg");
    for name in [
        "setup.cfg",
        "VERSION",
        "pyproject.toml",
        "build",
        "LICENSE",
        "README.md",
        ".gitignore",
        ".env",
        "requirements.txt",
    ] {
        assert!(project.join(name).exists(), "missing {name}");
    }

    let source = project.join("src").join("mycoolpkg");
    for name in ["cli.py", "__main__.py", "__init__.py"] {
        assert!(source.join(name).exists(), "missing src/{name}");
    }

    let setup = fs::read_to_string(project.join("setup.cfg")).unwrap();
    assert!(setup.contains("name = my-cool-pkg"));
    assert!(setup.contains("author = alice"));
    assert!(setup.contains("author_email = alice@example.com"));
    assert!(setup.contains("mycoolpkg = mycoolpkg.cli:main"));

    let main_py = fs::read_to_string(source.join("__main__.py")).unwrap();
    assert!(main_py.contains("from mycoolpkg.cli import main"));

    let pypirc = fs::read_to_string(scratch.home.path().join(".pypirc")).unwrap();
    assert!(pypirc.contains("password = pypi-abc"));
}

#[test]
fn build_script_is_executable_and_fully_rendered() {
    use std::os::unix::fs::PermissionsExt;

    let scratch = Scratch::new();
    scratch.cmd().arg("my-pkg").assert().success();

    let build = scratch.target.path().join("my-pkg").join("build");
    let mode = fs::metadata(&build).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o755);

    let script = fs::read_to_string(&build).unwrap();
    assert!(script.contains("#!/usr/bin/env bash"));
    assert!(script.contains("${SCRIPT_DIR}"));
    assert!(script.contains("src/mypkg/__init__.py"));
    assert!(!script.contains("{{"));
}

#[test]
fn gitignore_is_written_verbatim() {
    let scratch = Scratch::new();
    scratch.cmd().arg("my-pkg").assert().success();

    let written = fs::read_to_string(scratch.target.path().join("my-pkg").join(".gitignore")).unwrap();
    let entries = pypiforge::catalog();
    let gitignore = entries.iter().find(|e| e.name == ".gitignore").unwrap();
    assert!(!gitignore.requires_fields);
    assert_eq!(written, gitignore.template_str);
}

#[test]
fn second_run_without_force_reports_the_conflict() {
    let scratch = Scratch::new();

    scratch
        .cmd()
        .args(["-a", "alice", "my-pkg"])
        .assert()
        .success();

    // The conflict is recovered at the top level: reported, run ended.
    scratch
        .cmd()
        .args(["-a", "bob", "my-pkg"])
        .assert()
        .success()
        .stderr(predicate::str::contains("File exists"))
        .stderr(predicate::str::contains("-f option"));

    // First run's output is untouched.
    let setup = fs::read_to_string(scratch.target.path().join("my-pkg").join("setup.cfg")).unwrap();
    assert!(setup.contains("author = alice"));
}

#[test]
fn force_overwrites_but_never_the_credentials_file() {
    let scratch = Scratch::new();

    scratch
        .cmd()
        .args(["-a", "alice", "-t", "pypi-first", "my-pkg"])
        .assert()
        .success();

    scratch
        .cmd()
        .args(["-a", "bob", "-t", "pypi-second", "-f", "my-pkg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("We don't overwrite it"));

    let setup = fs::read_to_string(scratch.target.path().join("my-pkg").join("setup.cfg")).unwrap();
    assert!(setup.contains("author = bob"));

    let pypirc = fs::read_to_string(scratch.home.path().join(".pypirc")).unwrap();
    assert!(pypirc.contains("password = pypi-first"));
}

#[test]
fn replace_char_shapes_the_source_module_name() {
    let scratch = Scratch::new();

    scratch
        .cmd()
        .args(["--replace-char", "_", "my-cool-pkg"])
        .assert()
        .success();

    let source = scratch
        .target
        .path()
        .join("my-cool-pkg")
        .join("src")
        .join("my_cool_pkg");
    assert!(source.join("cli.py").exists());

    let main_py = fs::read_to_string(source.join("__main__.py")).unwrap();
    assert!(main_py.contains("from my_cool_pkg.cli import main"));
}

#[test]
fn version_flag_prints_the_tool_version() {
    pypiforge()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_package_name_is_a_usage_error() {
    pypiforge().assert().failure();
}
