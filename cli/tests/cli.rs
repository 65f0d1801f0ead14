use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn mdfmt(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mdfmt"))
        .arg("--no-color")
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run mdfmt")
}

fn write_source(dir: &Path, content: &str) -> String {
    let path = dir.join("doc.md");
    fs::write(&path, content).expect("write source");
    path.to_string_lossy().into_owned()
}

#[test]
fn prints_canonical_form() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(dir.path(), "# Title\n\n\nSome   text\nhere.\n\n  - a\n* b\n");

    let output = mdfmt(&[&file]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "# Title\n\nSome text here.\n\n- a\n* b\n"
    );
}

#[test]
fn fmt_subcommand_matches_shorthand() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(dir.path(), "-   x\n");

    let shorthand = mdfmt(&[&file]);
    let explicit = mdfmt(&["fmt", &file]);
    assert_eq!(shorthand.stdout, explicit.stdout);
    assert_eq!(String::from_utf8(explicit.stdout).unwrap(), "-   x\n");
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.md");

    let output = mdfmt(&[&missing.to_string_lossy()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot read"));
}

#[test]
fn check_reports_unformatted_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(dir.path(), "# Title\ntext   here\n");

    let output = mdfmt(&["fmt", "--check", &file]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("file is not formatted"));
}

#[test]
fn write_then_check_passes() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(dir.path(), "# Title\ntext   here\n");

    assert!(mdfmt(&["fmt", "--write", &file]).status.success());
    assert_eq!(fs::read_to_string(&file).unwrap(), "# Title\n\ntext here\n");
    assert!(mdfmt(&["fmt", "--check", &file]).status.success());
}

#[test]
fn lint_reports_heading_fallbacks() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(dir.path(), "#hashtag\n");

    let output = mdfmt(&["fmt", "--lint", &file]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "#hashtag\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("is not a heading"));
}
