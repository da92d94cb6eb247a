//! Re-invokes the platform-specific build/check script for the host OS.
//!
//! Each launcher binary fixes its logical command (`platform-build` runs
//! `build`, `platform-check` runs `check`) no matter what name it was invoked
//! under. The host OS selects the script and all arguments after argument 0
//! are forwarded verbatim. The process exits with the script's exit status, or
//! with `0` when no script applies to this host.

mod bindings;
mod config;
mod dispatch;
mod error;
mod invocation;
mod platform;

pub use bindings::BUILD_COMMAND;
pub use bindings::CHECK_COMMAND;
pub use bindings::PlatformScripts;
pub use bindings::ScriptBindings;
pub use config::CONFIG_FILE_NAME;
pub use config::LauncherConfig;
pub use config::load_bindings;
pub use dispatch::DispatchOutcome;
pub use dispatch::Launcher;
pub use dispatch::NEUTRAL_EXIT_CODE;
pub use dispatch::ResolvedInvocation;
pub use dispatch::exit_code_from_status;
pub use error::ConfigError;
pub use error::GENERIC_FAILURE_EXIT_CODE;
pub use error::LaunchError;
pub use error::ResolveError;
pub use invocation::InvocationRequest;
pub use platform::PlatformTarget;

use anyhow::Context;
use launcher_utils_absolute_path::AbsolutePathBuf;
use supports_color::Stream;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Process entry point shared by the launcher binaries: dispatches `command`
/// for the host platform. Never returns.
pub fn run_main(command: &str) -> ! {
    init_tracing();

    let request = InvocationRequest::from_env();
    let exit_code = match run(command, &request) {
        Ok(outcome) => outcome.exit_code(),
        #[allow(clippy::print_stderr)]
        Err(err) => {
            eprintln!("Error: {err:#}");
            err.downcast_ref::<LaunchError>()
                .map_or(GENERIC_FAILURE_EXIT_CODE, LaunchError::exit_code)
        }
    };
    std::process::exit(exit_code);
}

fn run(command: &str, request: &InvocationRequest) -> anyhow::Result<DispatchOutcome> {
    // Bail out before touching the filesystem when nothing can apply.
    let platform = PlatformTarget::current();
    if !platform.is_supported() {
        tracing::debug!(os = std::env::consts::OS, "no script bindings for host");
        return Ok(DispatchOutcome::Skipped(ResolveError::UnsupportedPlatform));
    }

    let cwd = AbsolutePathBuf::current_dir().context("failed to read the working directory")?;
    let bindings = load_bindings(cwd.as_path())?;
    let launcher = Launcher::new(platform, bindings, cwd);
    Ok(launcher.dispatch(command, request)?)
}

/// Logs go to stderr; stdout belongs to the script. `RUST_LOG` overrides the
/// default level.
fn init_tracing() {
    let default_level = "error";
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(supports_color::on_cached(Stream::Stderr).is_some())
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
