use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for CLI tools.
///
/// - `Success` (0): Command completed successfully
/// - `Failure` (1): Command completed but refused to act (e.g. config exists)
/// - `Error` (2): Command failed due to internal error (parse error, write error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed but refused to act.
    Failure,
    /// Command failed due to internal error (parse error, write error, etc.).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
