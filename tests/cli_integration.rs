use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

const ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
const EMPTY: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_calc-hash")
}

fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("write input file");
    path
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn calc-hash");
    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for calc-hash")
}

#[test]
fn hashes_path_argument() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let path = write_file(temp_dir.path(), "abc.txt", b"abc");

    let output = Command::new(bin())
        .arg(&path)
        .output()
        .expect("run calc-hash");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    assert_eq!(stdout, format!("{ABC}  {}\n", path.display()));
}

#[test]
fn prompts_for_path_when_omitted() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let path = write_file(temp_dir.path(), "empty.bin", b"");

    let output = run_with_stdin(&[], &format!("{}\r\n", path.display()));
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    assert!(stdout.starts_with("Enter file path: "));
    assert!(stdout.contains(EMPTY));
}

#[test]
fn empty_prompt_line_fails() {
    let output = run_with_stdin(&[], "\n");
    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    assert_eq!(stdout, "Enter file path: ");
}

#[test]
fn missing_file_reports_stage_without_hash() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let path = temp_dir.path().join("nope.bin");

    let output = Command::new(bin())
        .arg(&path)
        .output()
        .expect("run calc-hash");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).expect("utf-8 stderr");
    assert!(stderr.starts_with("open failed"));
}

#[test]
fn json_report_includes_digest_and_size() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let data: Vec<u8> = (0..10_000u32).map(|idx| (idx % 7) as u8).collect();
    let path = write_file(temp_dir.path(), "data.bin", &data);

    let small = Command::new(bin())
        .arg(&path)
        .args(["--json", "--chunk-size", "3"])
        .output()
        .expect("run calc-hash");
    let large = Command::new(bin())
        .arg(&path)
        .arg("--json")
        .output()
        .expect("run calc-hash");
    assert!(small.status.success());
    assert!(large.status.success());

    let small: serde_json::Value = serde_json::from_slice(&small.stdout).expect("parse json");
    let large: serde_json::Value = serde_json::from_slice(&large.stdout).expect("parse json");
    assert_eq!(small["bytes"], serde_json::Value::from(10_000));
    assert_eq!(small["algorithm"], serde_json::Value::from("sha256"));
    assert_eq!(small["sha256"], large["sha256"]);
    assert!(small.get("error").is_none());
}

#[test]
fn expect_flag_classifies_integrity() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let path = write_file(temp_dir.path(), "abc.txt", b"abc");

    let unchanged = Command::new(bin())
        .arg(&path)
        .args(["--expect", ABC])
        .output()
        .expect("run calc-hash");
    assert!(unchanged.status.success());
    let stdout = String::from_utf8(unchanged.stdout).expect("utf-8 stdout");
    assert_eq!(stdout, format!("unchanged: {}\n", path.display()));

    let modified = Command::new(bin())
        .arg(&path)
        .args(["--expect", EMPTY, "--json"])
        .output()
        .expect("run calc-hash");
    assert_eq!(modified.status.code(), Some(2));
    let report: serde_json::Value =
        serde_json::from_slice(&modified.stdout).expect("parse json");
    assert_eq!(report["status"], serde_json::Value::from("modified"));
    assert_eq!(report["expected"], serde_json::Value::from(EMPTY));
    assert_eq!(report["sha256"], serde_json::Value::from(ABC));
}

#[test]
fn rejects_malformed_expected_digest() {
    let output = Command::new(bin())
        .args(["whatever", "--expect", "1234"])
        .output()
        .expect("run calc-hash");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn rejects_zero_chunk_size() {
    let output = Command::new(bin())
        .args(["whatever", "--chunk-size", "0"])
        .output()
        .expect("run calc-hash");
    assert!(!output.status.success());
}

#[test]
fn help_describes_output_layout() {
    let output = Command::new(bin())
        .arg("--help")
        .output()
        .expect("run calc-hash");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    assert!(stdout.contains("sha256sum layout"));
}
