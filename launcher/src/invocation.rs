use std::ffi::OsStr;
use std::ffi::OsString;

/// The launcher's own argument vector, captured once at startup.
///
/// Element 0 is whatever name the launcher was invoked under; it is only
/// ever replaced, never interpreted. Everything after it is forwarded to the
/// script untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    args: Vec<OsString>,
}

impl InvocationRequest {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::args_os())
    }

    pub fn program(&self) -> Option<&OsStr> {
        self.args.first().map(OsString::as_os_str)
    }

    pub fn forwarded_args(&self) -> &[OsString] {
        self.args.get(1..).unwrap_or_default()
    }

    /// Returns a new argument vector with `program` in slot 0.
    pub fn with_program(&self, program: impl Into<OsString>) -> Vec<OsString> {
        let forwarded = self.forwarded_args();
        let mut argv = Vec::with_capacity(forwarded.len() + 1);
        argv.push(program.into());
        argv.extend_from_slice(forwarded);
        argv
    }
}
