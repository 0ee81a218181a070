//! End-to-end tests of the `make-n-ball`, `make-n-sphere` and `persistence`
//! binaries.
//!
//! Logging is switched off with `RUST_LOG=off` so stderr only carries the
//! error diagnostic.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const BALL: &str = env!("CARGO_BIN_EXE_make-n-ball");
const SPHERE: &str = env!("CARGO_BIN_EXE_make-n-sphere");
const PERSISTENCE: &str = env!("CARGO_BIN_EXE_persistence");

fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .env("RUST_LOG", "off")
        .env_remove("FILTRATION_DIR")
        .output()
        .expect("binary should start")
}

fn generate(bin: &str, n: &str, dir: &Path) -> Output {
    run(bin, &[n, "--output-dir", dir.to_str().unwrap()])
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn ball_prints_status_line_and_writes_file() {
    let dir = TempDir::new().unwrap();
    let out = generate(BALL, "1", dir.path());

    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "Dim: 1\n");
    assert!(stderr(&out).is_empty());
    assert_eq!(
        fs::read_to_string(dir.path().join("1-ball.txt")).unwrap(),
        "1 0 1\n1 0 2\n1 0 3\n2 1 1 2\n2 1 1 3\n2 1 2 3\n3 2 1 2 3\n"
    );
}

#[test]
fn sphere_prints_status_line_and_writes_file() {
    let dir = TempDir::new().unwrap();
    let out = generate(SPHERE, "3", dir.path());

    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "Dim: 3\n");
    // 2^5 - 2 subsets of five vertices
    let text = fs::read_to_string(dir.path().join("3-sphere.txt")).unwrap();
    assert_eq!(text.lines().count(), 30);
}

#[test]
fn missing_directory_fails_with_one_line() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let out = generate(BALL, "2", &missing);

    assert!(!out.status.success());
    let err = stderr(&out);
    assert_eq!(err.lines().count(), 1, "stderr: {err}");
    assert!(err.starts_with("error: failed to generate 2-ball: I/O failure on "));
    // The OS cause appears once, at the end of the chain
    let cause = err.rsplit(": ").next().unwrap().trim_end();
    assert_eq!(err.matches(cause).count(), 1, "stderr: {err}");
    assert!(!missing.exists());
}

#[test]
fn no_clobber_refuses_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("2-sphere.txt");
    fs::write(&path, "keep\n").unwrap();

    let out = run(SPHERE, &["2", "--output-dir", dir.path().to_str().unwrap(), "--no-clobber"]);

    assert!(!out.status.success());
    let err = stderr(&out);
    assert_eq!(err.lines().count(), 1, "stderr: {err}");
    assert!(err.contains("refusing to overwrite"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "keep\n");
}

#[test]
fn bad_dimension_is_rejected() {
    let dir = TempDir::new().unwrap();
    for bad in ["0", "-3", "two"] {
        let out = generate(BALL, bad, dir.path());

        assert!(!out.status.success(), "{bad} accepted");
        assert!(stdout(&out).is_empty(), "{bad}: status line printed");
        let err = stderr(&out);
        let first = err.lines().next().unwrap_or_default();
        assert!(first.starts_with("error:"), "{bad}: {err}");
        assert!(first.contains("invalid argument"), "{bad}: {err}");
    }
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn missing_dimension_is_rejected() {
    let out = run(SPHERE, &[]);
    assert!(!out.status.success());
    assert!(stdout(&out).is_empty());
}

#[test]
fn persistence_writes_sphere_intervals() {
    let dir = TempDir::new().unwrap();
    assert!(generate(SPHERE, "2", dir.path()).status.success());

    let input = dir.path().join("2-sphere.txt");
    let output = dir.path().join("intervals.txt");
    let out = run(PERSISTENCE, &[input.to_str().unwrap(), output.to_str().unwrap()]);

    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let text = fs::read_to_string(&output).unwrap();
    let essential: Vec<&str> = text.lines().filter(|l| l.ends_with(" inf")).collect();
    // β₀ = β₂ = 1 for the 2-sphere
    assert_eq!(essential, vec!["0 1 inf", "2 3 inf"]);
    for line in text.lines() {
        assert_eq!(line.split(' ').count(), 3, "bad line {line:?}");
    }
}

#[test]
fn persistence_prints_matrix_on_request() {
    let dir = TempDir::new().unwrap();
    assert!(generate(SPHERE, "1", dir.path()).status.success());

    let input = dir.path().join("1-sphere.txt");
    let output = dir.path().join("intervals.txt");
    let out = run(
        PERSISTENCE,
        &[input.to_str().unwrap(), output.to_str().unwrap(), "--print-matrix"],
    );

    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let printed = stdout(&out);
    assert_eq!(printed.lines().count(), 6);
    assert!(printed.lines().all(|l| l.split(' ').count() == 6));
}

#[test]
fn persistence_missing_input_fails_with_one_line() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("absent.txt");
    let output = dir.path().join("intervals.txt");
    let out = run(PERSISTENCE, &[input.to_str().unwrap(), output.to_str().unwrap()]);

    assert!(!out.status.success());
    let err = stderr(&out);
    assert_eq!(err.lines().count(), 1, "stderr: {err}");
    assert!(err.starts_with("error: reading filtration "));
    assert!(!output.exists());
}
