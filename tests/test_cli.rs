use std::io::Write;
use std::process::Command;

const KALLSYMS_FIXTURE: &str = "\
ffffffff810123a0 T __x64_sys_execve
ffffffff81014780 T sys_execve
ffffffff810b77e0 T SyS_read
";

fn fixture_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("failed to create fixture");
    file.write_all(KALLSYMS_FIXTURE.as_bytes()).expect("failed to write fixture");
    file
}

fn syscallfn() -> Command {
    Command::new(env!("CARGO_BIN_EXE_syscallfn"))
}

#[test]
fn test_resolves_against_fixture_table() {
    let file = fixture_file();

    let output = syscallfn()
        .args(["--arch", "x64", "--kallsyms"])
        .arg(file.path())
        .arg("execve")
        .output()
        .expect("failed to run syscallfn");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("__x64_sys_execve"));
}

#[test]
fn test_unknown_syscall_warns_and_exits_nonzero() {
    let file = fixture_file();

    let output = syscallfn()
        .args(["--arch", "x64", "--kallsyms"])
        .arg(file.path())
        .args(["execve", "frobnicate"])
        .output()
        .expect("failed to run syscallfn");

    assert_eq!(output.status.code(), Some(1));

    // The resolvable name still resolves; the other one warns.
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("__x64_sys_execve"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warning"));
    assert!(stderr.contains("frobnicate"));
}

#[test]
fn test_quiet_suppresses_warnings() {
    let file = fixture_file();

    let output = syscallfn()
        .args(["--quiet", "--arch", "x64", "--kallsyms"])
        .arg(file.path())
        .arg("frobnicate")
        .output()
        .expect("failed to run syscallfn");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).is_empty());
}

#[test]
fn test_json_output_lists_every_request() {
    let file = fixture_file();

    let output = syscallfn()
        .args(["--json", "--arch", "x64", "--kallsyms"])
        .arg(file.path())
        .args(["execve", "frobnicate"])
        .output()
        .expect("failed to run syscallfn");

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON");
    let entries = parsed.as_array().expect("expected a JSON array");
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0]["syscall"], "execve");
    assert_eq!(entries[0]["symbol"], "__x64_sys_execve");
    assert_eq!(entries[1]["syscall"], "frobnicate");
    assert!(entries[1]["symbol"].is_null());
}

#[test]
fn test_unreadable_table_aborts_the_run() {
    let output = syscallfn()
        .args(["--arch", "x64", "--kallsyms", "/nonexistent/kallsyms", "execve"])
        .output()
        .expect("failed to run syscallfn");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error"));
    assert!(stderr.contains("/nonexistent/kallsyms"));
}

#[test]
fn test_arch_override_changes_resolution() {
    let file = fixture_file();

    let output = syscallfn()
        .args(["--arch", "ia32", "--kallsyms"])
        .arg(file.path())
        .arg("execve")
        .output()
        .expect("failed to run syscallfn");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sys_execve"));
    assert!(!stdout.contains("__x64_sys_execve"));
}
