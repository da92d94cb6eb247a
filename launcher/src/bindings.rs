//! Mapping from (logical command, platform) to the script that implements it.

use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::ResolveError;
use crate::platform::PlatformTarget;

pub const BUILD_COMMAND: &str = "build";
pub const CHECK_COMMAND: &str = "check";

const WINDOWS_BUILD_SCRIPT: &str = r"platform-scripts\windows\build.bat";
const LINUX_BUILD_SCRIPT: &str = "platform-scripts/linux/build.sh";
const LINUX_CHECK_SCRIPT: &str = "platform-scripts/linux/check.sh";

/// Scripts for one logical command, relative to the working directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformScripts {
    #[serde(default)]
    pub windows: Option<PathBuf>,
    #[serde(default)]
    pub linux: Option<PathBuf>,
}

impl PlatformScripts {
    pub fn get(&self, platform: PlatformTarget) -> Option<&Path> {
        match platform {
            PlatformTarget::Windows => self.windows.as_deref(),
            PlatformTarget::Linux => self.linux.as_deref(),
            PlatformTarget::Unsupported => None,
        }
    }

    /// Entries set in `other` replace ours; entries it leaves unset are kept.
    pub fn overlay(&mut self, other: PlatformScripts) {
        if let Some(windows) = other.windows {
            self.windows = Some(windows);
        }
        if let Some(linux) = other.linux {
            self.linux = Some(linux);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptBindings {
    commands: BTreeMap<String, PlatformScripts>,
}

impl ScriptBindings {
    pub fn empty() -> Self {
        Self {
            commands: BTreeMap::new(),
        }
    }

    /// The conventional `platform-scripts/` layout.
    pub fn builtin() -> Self {
        let mut bindings = Self::empty();
        bindings.insert(
            BUILD_COMMAND,
            PlatformScripts {
                windows: Some(PathBuf::from(WINDOWS_BUILD_SCRIPT)),
                linux: Some(PathBuf::from(LINUX_BUILD_SCRIPT)),
            },
        );
        bindings.insert(
            CHECK_COMMAND,
            PlatformScripts {
                windows: None,
                linux: Some(PathBuf::from(LINUX_CHECK_SCRIPT)),
            },
        );
        bindings
    }

    /// Merges `scripts` into whatever is already bound for `command`.
    pub fn insert(&mut self, command: impl Into<String>, scripts: PlatformScripts) {
        self.commands
            .entry(command.into())
            .or_default()
            .overlay(scripts);
    }

    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    pub fn resolve(&self, command: &str, platform: PlatformTarget) -> Result<&Path, ResolveError> {
        if !platform.is_supported() {
            return Err(ResolveError::UnsupportedPlatform);
        }
        self.commands
            .get(command)
            .and_then(|scripts| scripts.get(platform))
            .ok_or_else(|| ResolveError::UnboundCommand {
                command: command.to_string(),
                platform,
            })
    }
}

impl Default for ScriptBindings {
    fn default() -> Self {
        Self::builtin()
    }
}
