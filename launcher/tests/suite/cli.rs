#![cfg(target_os = "linux")]

use std::ffi::OsStr;
use std::path::Path;

use anyhow::Result;
use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

use super::support::recorded_args;
use super::support::recording_script;
use super::support::write_script;

fn launcher_cmd(bin_path: impl AsRef<OsStr>, cwd: &Path) -> Command {
    let mut cmd = Command::new(bin_path);
    cmd.current_dir(cwd).env_remove("RUST_LOG");
    cmd
}

fn build_cmd(cwd: &Path) -> Command {
    launcher_cmd(env!("CARGO_BIN_EXE_platform-build"), cwd)
}

fn check_cmd(cwd: &Path) -> Command {
    launcher_cmd(env!("CARGO_BIN_EXE_platform-check"), cwd)
}

#[test]
fn build_binary_runs_linux_build_script() -> Result<()> {
    let cwd = tempdir()?;
    write_script(
        cwd.path(),
        "platform-scripts/linux/build.sh",
        &format!("echo building\n{}", recording_script(0)),
    )?;

    build_cmd(cwd.path())
        .arg("--release")
        .arg("--target=x86_64")
        .assert()
        .success()
        .stdout("building\n")
        .stderr("");

    assert_eq!(
        recorded_args(cwd.path())?,
        vec!["--release", "--target=x86_64"]
    );
    Ok(())
}

#[test]
fn check_binary_propagates_failure_code() -> Result<()> {
    let cwd = tempdir()?;
    write_script(
        cwd.path(),
        "platform-scripts/linux/check.sh",
        "echo 'lint failed' >&2\nexit 9",
    )?;

    check_cmd(cwd.path())
        .assert()
        .code(9)
        .stderr("lint failed\n");
    Ok(())
}

#[test]
fn missing_script_reports_os_error() -> Result<()> {
    let cwd = tempdir()?;

    build_cmd(cwd.path())
        .assert()
        .code(127)
        .stderr(contains(
            "Error: failed to launch platform-scripts/linux/build.sh: ",
        ));
    Ok(())
}

#[test]
fn config_file_selects_alternate_check_script() -> Result<()> {
    let cwd = tempdir()?;
    std::fs::write(
        cwd.path().join("launcher.toml"),
        "[scripts.check]\nlinux = \"utils/linux/check.sh\"\n",
    )?;
    write_script(cwd.path(), "utils/linux/check.sh", "exit 4")?;
    write_script(cwd.path(), "platform-scripts/linux/check.sh", "exit 5")?;

    check_cmd(cwd.path()).assert().code(4);
    Ok(())
}

#[test]
fn malformed_config_fails_without_spawning() -> Result<()> {
    let cwd = tempdir()?;
    std::fs::write(cwd.path().join("launcher.toml"), "[scripts.check\n")?;
    write_script(cwd.path(), "platform-scripts/linux/check.sh", "touch spawned")?;

    check_cmd(cwd.path())
        .assert()
        .code(1)
        .stderr(contains("failed to parse"))
        .stderr(contains("launcher.toml"));

    assert!(!cwd.path().join("spawned").exists());
    Ok(())
}

#[test]
fn build_binary_ignores_the_name_it_is_invoked_under() -> Result<()> {
    let cwd = tempdir()?;
    write_script(
        cwd.path(),
        "platform-scripts/linux/build.sh",
        &recording_script(6),
    )?;
    write_script(cwd.path(), "platform-scripts/linux/check.sh", "exit 99")?;
    let links = tempdir()?;

    for name in ["mybuild", "BUILD", "build-x86_64", "check"] {
        let link = links.path().join(name);
        std::os::unix::fs::symlink(env!("CARGO_BIN_EXE_platform-build"), &link)?;

        launcher_cmd(&link, cwd.path())
            .arg(name)
            .assert()
            .code(6);
        assert_eq!(recorded_args(cwd.path())?, vec![name.to_string()]);
    }
    Ok(())
}
