#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::path::PathBuf;

pub const ARGS_FILE: &str = "args.txt";

/// Writes an executable `/bin/sh` script at `relative` under `root`.
pub fn write_script(root: &Path, relative: &str, body: &str) -> std::io::Result<PathBuf> {
    write_script_with_mode(root, relative, body, 0o755)
}

pub fn write_script_with_mode(
    root: &Path,
    relative: &str,
    body: &str,
    mode: u32,
) -> std::io::Result<PathBuf> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, format!("#!/bin/sh\n{body}\n"))?;
    fs::set_permissions(&path, fs::Permissions::from_mode(mode))?;
    Ok(path)
}

/// Script body that records its arguments, one per line, into
/// [`ARGS_FILE`] in the working directory and exits with `code`.
pub fn recording_script(code: i32) -> String {
    format!("printf '%s\\n' \"$@\" > {ARGS_FILE}\nexit {code}")
}

pub fn recorded_args(cwd: &Path) -> std::io::Result<Vec<String>> {
    let contents = fs::read_to_string(cwd.join(ARGS_FILE))?;
    Ok(contents.lines().map(str::to_string).collect())
}
