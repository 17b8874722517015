// src/exit.rs
//! Standardized process exit codes for `tubetally`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum TallyExit {
    /// All artifacts were written.
    Success = 0,
    /// I/O failure or malformed input.
    Error = 1,
    /// Configuration rejected before any work (missing input, start > end).
    InvalidInput = 2,
}

impl TallyExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for TallyExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl<T> From<crate::error::Result<T>> for TallyExit {
    fn from(res: crate::error::Result<T>) -> Self {
        match res {
            Ok(_) => Self::Success,
            Err(e) => e.exit_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TallyError;

    #[test]
    fn test_codes_are_distinct() {
        assert_eq!(TallyExit::Success.code(), 0);
        assert_eq!(TallyExit::Error.code(), 1);
        assert_eq!(TallyExit::InvalidInput.code(), 2);
    }

    #[test]
    fn test_from_result() {
        let ok: crate::error::Result<()> = Ok(());
        assert_eq!(TallyExit::from(ok), TallyExit::Success);

        let bad: crate::error::Result<()> = Err(TallyError::Config("no input".into()));
        assert_eq!(TallyExit::from(bad), TallyExit::InvalidInput);
    }
}
