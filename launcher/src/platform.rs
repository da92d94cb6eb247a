use std::fmt;

/// Host operating system family used to pick a script binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlatformTarget {
    Windows,
    Linux,
    /// Any host without script bindings (macOS, the BSDs, ...).
    Unsupported,
}

impl PlatformTarget {
    /// Platform of the running host, as reported by [`std::env::consts::OS`].
    pub fn current() -> Self {
        Self::from_os_identifier(std::env::consts::OS)
    }

    /// Maps an operating system identifier to a target.
    ///
    /// Besides Rust's own identifiers this accepts the historical `win32` and
    /// `linux2` spellings that other toolchains still report.
    pub fn from_os_identifier(os: &str) -> Self {
        match os {
            "windows" | "win32" => Self::Windows,
            "linux" | "linux2" => Self::Linux,
            _ => Self::Unsupported,
        }
    }

    pub fn is_supported(self) -> bool {
        self != Self::Unsupported
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for PlatformTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
