use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::File;
use std::path::Path;
use tempfile::TempDir;

fn cmd(bin: &str, config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin(bin).expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd
}

fn png_size(path: &Path) -> (i32, i32) {
    let mut file = File::open(path).unwrap();
    let surface = cairo::ImageSurface::create_from_png(&mut file).unwrap();
    (surface.width(), surface.height())
}

#[test]
fn diagrams_without_arguments_prints_usage() {
    let temp = TempDir::new().unwrap();
    cmd("generate-diagrams", temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: generate-diagrams"));
}

#[test]
fn diagrams_help_succeeds() {
    let temp = TempDir::new().unwrap();
    cmd("generate-diagrams", temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("architecture diagrams"));
}

#[test]
fn diagrams_are_written_into_new_directory() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("nested").join("diagrams");

    cmd("generate-diagrams", temp.path())
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generating diagrams..."))
        .stdout(predicate::str::contains("  architecture.png (1200x675)"))
        .stdout(predicate::str::contains("Done."));

    for name in ["architecture.png", "persistence.png", "security.png"] {
        assert_eq!(png_size(&out.join(name)), (1200, 675), "{name}");
    }
}

#[test]
fn extra_positionals_are_ignored() {
    let temp = TempDir::new().unwrap();
    let diagrams = temp.path().join("diagrams");
    let out = temp.path().join("out");

    cmd("generate-diagrams", temp.path())
        .arg(&diagrams)
        .arg("extra")
        .assert()
        .success();
    assert!(diagrams.join("architecture.png").exists());

    cmd("generate-posts", temp.path())
        .arg(&diagrams)
        .arg(temp.path().join("screens"))
        .arg(&out)
        .args(["2", "extra", "more"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  post-2.png (dashboards)"));
    assert!(out.join("post-2.png").exists());
    assert!(!out.join("post-1.png").exists());
}

#[test]
fn posts_require_three_directories() {
    let temp = TempDir::new().unwrap();
    cmd("generate-posts", temp.path())
        .args(["a", "b"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: generate-posts"));
}

#[test]
fn posts_reject_unknown_selector() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    cmd("generate-posts", temp.path())
        .arg(temp.path())
        .arg(temp.path())
        .arg(&out)
        .arg("4")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: generate-posts"))
        .stderr(predicate::str::contains("invalid post selector"));
    assert!(!out.join("post-1.png").exists());
}

#[test]
fn single_selector_writes_only_that_post() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");

    cmd("generate-posts", temp.path())
        .arg(temp.path().join("missing-diagrams"))
        .arg(temp.path().join("missing-screens"))
        .arg(&out)
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generating X post images..."))
        .stdout(predicate::str::contains("  post-2.png (dashboards)"));

    assert!(!out.join("post-1.png").exists());
    assert_eq!(png_size(&out.join("post-2.png")), (1200, 675));
    assert!(!out.join("post-3.png").exists());
}

#[test]
fn all_posts_from_generated_diagrams_and_rerun() {
    let temp = TempDir::new().unwrap();
    let diagrams = temp.path().join("diagrams");
    let out = temp.path().join("posts");

    cmd("generate-diagrams", temp.path())
        .arg(&diagrams)
        .assert()
        .success();

    // Twice: the second run overwrites the same files.
    for _ in 0..2 {
        cmd("generate-posts", temp.path())
            .arg(&diagrams)
            .arg(temp.path().join("screens"))
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::contains("  post-1.png (architecture)"))
            .stdout(predicate::str::contains("  post-3.png (terminal)"))
            .stdout(predicate::str::contains("Done."));
    }

    for name in ["post-1.png", "post-2.png", "post-3.png"] {
        assert_eq!(png_size(&out.join(name)), (1200, 675), "{name}");
    }
}

#[test]
fn explicit_config_file_is_used() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    std::fs::write(
        &config,
        "[branding]\nproduct = \"claw-test\"\n\n[fonts]\ncandidates = []\n",
    )
    .unwrap();
    let out = temp.path().join("out");

    cmd("generate-diagrams", temp.path())
        .arg("--config")
        .arg(&config)
        .arg(&out)
        .assert()
        .success();
    assert!(out.join("security.png").exists());
}

#[test]
fn missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();
    cmd("generate-diagrams", temp.path())
        .arg("--config")
        .arg(temp.path().join("nope.toml"))
        .arg(temp.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
fn schema_dump_is_json() {
    let temp = TempDir::new().unwrap();
    let output = cmd("dump-config-schema", temp.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let schema: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(schema["properties"]["fonts"].is_object());
}
