use std::ffi::OsString;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;

use launcher_utils_absolute_path::AbsolutePathBuf;
use tracing::debug;
use tracing::trace;

use crate::bindings::ScriptBindings;
use crate::error::GENERIC_FAILURE_EXIT_CODE;
use crate::error::LaunchError;
use crate::error::ResolveError;
use crate::invocation::InvocationRequest;
use crate::platform::PlatformTarget;

/// Exit status when there is nothing to run on this host.
pub const NEUTRAL_EXIT_CODE: i32 = 0;

/// Shell convention: a child killed by signal `n` reports `128 + n`.
#[cfg(unix)]
const SIGNAL_EXIT_CODE_BASE: i32 = 128;

/// An invocation whose script has been selected but not yet started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInvocation {
    script: PathBuf,
    argv: Vec<OsString>,
}

impl ResolvedInvocation {
    /// Script path as bound, relative to the launcher's working directory.
    pub fn script(&self) -> &Path {
        &self.script
    }

    /// Full child argument vector; slot 0 is [`Self::script`].
    pub fn argv(&self) -> &[OsString] {
        &self.argv
    }

    pub fn forwarded_args(&self) -> &[OsString] {
        self.argv.get(1..).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No script applies to this host; nothing was spawned.
    Skipped(ResolveError),
    /// The script ran to completion.
    Completed { exit_code: i32 },
}

impl DispatchOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchOutcome::Skipped(_) => NEUTRAL_EXIT_CODE,
            DispatchOutcome::Completed { exit_code } => *exit_code,
        }
    }
}

/// Selects the platform script for an invocation and runs it.
#[derive(Debug, Clone)]
pub struct Launcher {
    platform: PlatformTarget,
    bindings: ScriptBindings,
    cwd: AbsolutePathBuf,
}

impl Launcher {
    pub fn new(platform: PlatformTarget, bindings: ScriptBindings, cwd: AbsolutePathBuf) -> Self {
        Self {
            platform,
            bindings,
            cwd,
        }
    }

    /// Selects the script bound to `command` on this launcher's platform.
    ///
    /// `request`'s argument 0 plays no part: only its forwarded arguments are
    /// carried over.
    pub fn resolve(
        &self,
        command: &str,
        request: &InvocationRequest,
    ) -> Result<ResolvedInvocation, ResolveError> {
        let script = self.bindings.resolve(command, self.platform)?;
        Ok(ResolvedInvocation {
            script: script.to_path_buf(),
            argv: request.with_program(script),
        })
    }

    /// Runs the bound script and waits for it.
    ///
    /// Returns [`DispatchOutcome::Skipped`] without spawning anything when no
    /// script applies. A script that runs and fails is still `Completed`; only
    /// failing to start it is an error.
    pub fn dispatch(
        &self,
        command: &str,
        request: &InvocationRequest,
    ) -> Result<DispatchOutcome, LaunchError> {
        let resolved = match self.resolve(command, request) {
            Ok(resolved) => resolved,
            Err(reason) => {
                debug!(
                    platform = %self.platform,
                    invoked_as = ?request.program(),
                    "nothing to dispatch: {reason}"
                );
                return Ok(DispatchOutcome::Skipped(reason));
            }
        };

        let status = self.spawn(&resolved)?;
        let exit_code = exit_code_from_status(status);
        debug!(script = %resolved.script().display(), exit_code, "script exited");
        Ok(DispatchOutcome::Completed { exit_code })
    }

    fn spawn(&self, resolved: &ResolvedInvocation) -> Result<ExitStatus, LaunchError> {
        let script = resolved.script();
        // Spawn by absolute path so lookup does not depend on how the platform
        // combines a relative program with `current_dir`.
        let program = self
            .cwd
            .join(script)
            .map_err(|source| LaunchError::ResolvePath {
                script: script.to_path_buf(),
                cwd: self.cwd.as_path().to_path_buf(),
                source,
            })?;

        let mut command = Command::new(program.as_path());
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;

            command.arg0(script);
        }
        command
            .args(resolved.forwarded_args())
            .current_dir(&self.cwd);

        trace!(
            program = %program.display(),
            cwd = %self.cwd.display(),
            argv = ?resolved.argv(),
            "spawning script"
        );
        command.status().map_err(|source| LaunchError::Spawn {
            script: script.to_path_buf(),
            source,
        })
    }
}

pub fn exit_code_from_status(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(signal) = status.signal() {
            return SIGNAL_EXIT_CODE_BASE + signal;
        }
    }
    GENERIC_FAILURE_EXIT_CODE
}
