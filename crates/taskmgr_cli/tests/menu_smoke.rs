use std::process::Command;

#[test]
fn cli_smoke_help() {
    let exe = env!("CARGO_BIN_EXE_taskmgr");
    let output = Command::new(exe)
        .arg("--help")
        .output()
        .expect("failed to run taskmgr --help");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.trim().is_empty());
}

#[test]
fn cli_smoke_version() {
    let exe = env!("CARGO_BIN_EXE_taskmgr");
    let output = Command::new(exe)
        .arg("--version")
        .output()
        .expect("failed to run taskmgr --version");

    assert!(output.status.success());
}
