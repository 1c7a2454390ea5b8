use std::process::{Command, Output};

fn run_textlens(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_textlens"))
        .args(args)
        .env_remove("TEXTLENS_BUCKET")
        .env_remove("TEXTLENS_CREDENTIALS")
        .output()
        .expect("Failed to run textlens")
}

#[test]
fn test_run_with_missing_image_exits_with_error() {
    let output = run_textlens(&["run", "definitely/not/here.png"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("image file not found"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_watch_without_bucket_exits_with_error() {
    let output = run_textlens(&["watch"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("--bucket"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_threshold_must_fit_in_a_byte() {
    let output = run_textlens(&["--threshold", "300", "run", "x.png"]);

    assert!(!output.status.success());
}

#[test]
fn test_help_lists_both_subcommands() {
    let output = run_textlens(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("run"));
    assert!(stdout.contains("watch"));
}
