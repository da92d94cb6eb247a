//! Optional `launcher.toml` overrides for the built-in script bindings.
//!
//! ```toml
//! [scripts.check]
//! linux = "utils/linux/check.sh"
//!
//! [scripts.test]
//! linux = "platform-scripts/linux/test.sh"
//! windows = 'platform-scripts\windows\test.bat'
//! ```

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::bindings::PlatformScripts;
use crate::bindings::ScriptBindings;
use crate::error::ConfigError;

pub const CONFIG_FILE_NAME: &str = "launcher.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LauncherConfig {
    #[serde(default)]
    pub scripts: BTreeMap<String, PlatformScripts>,
}

impl LauncherConfig {
    pub fn from_toml(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads `launcher.toml` from `dir`. A missing file is not an error.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(ConfigError::Read { path, source }),
        };
        Self::from_toml(&path, &contents).map(Some)
    }

    pub fn apply_to(self, bindings: &mut ScriptBindings) {
        for (command, scripts) in self.scripts {
            bindings.insert(command, scripts);
        }
    }
}

/// Built-in bindings with any `launcher.toml` found in `dir` layered on top.
pub fn load_bindings(dir: &Path) -> Result<ScriptBindings, ConfigError> {
    let mut bindings = ScriptBindings::builtin();
    if let Some(config) = LauncherConfig::load_from_dir(dir)? {
        tracing::debug!(dir = %dir.display(), "applying {CONFIG_FILE_NAME}");
        config.apply_to(&mut bindings);
    }
    Ok(bindings)
}
