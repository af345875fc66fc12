//! Exit code definitions for the bkt CLI
//!
//! Every invocation ends in exactly one of two codes: 0 on success, 1 on any
//! failure (usage, service, or local IO). Scripts can rely on this surface.

/// Exit codes for the bkt CLI application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Operation completed successfully
    Success = 0,

    /// Operation failed; details were printed to stderr
    Failure = 1,
}

impl ExitCode {
    /// Convert exit code to i32 for use with std::process::exit
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}
