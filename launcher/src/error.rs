use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::platform::PlatformTarget;

/// Exit status for launch failures that have no more specific convention.
pub const GENERIC_FAILURE_EXIT_CODE: i32 = 1;
/// Shell convention for "found but could not be executed".
pub const NOT_EXECUTABLE_EXIT_CODE: i32 = 126;
/// Shell convention for "command not found".
pub const NOT_FOUND_EXIT_CODE: i32 = 127;

/// Why no script could be selected for an invocation.
///
/// None of these are failures from the caller's point of view: the launcher
/// exits with the neutral status without spawning anything.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("the host platform has no script bindings")]
    UnsupportedPlatform,
    #[error("no `{command}` script is bound for {platform}")]
    UnboundCommand {
        command: String,
        platform: PlatformTarget,
    },
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to resolve {} against {}", script.display(), cwd.display())]
    ResolvePath {
        script: PathBuf,
        cwd: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to launch {}", script.display())]
    Spawn {
        script: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::Spawn { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => NOT_FOUND_EXIT_CODE,
                io::ErrorKind::PermissionDenied => NOT_EXECUTABLE_EXIT_CODE,
                _ => GENERIC_FAILURE_EXIT_CODE,
            },
            LaunchError::ResolvePath { .. } => GENERIC_FAILURE_EXIT_CODE,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
