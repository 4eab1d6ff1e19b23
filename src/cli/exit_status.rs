use std::process::ExitCode;

/// Exit status for the CLI, following common conventions for linter tools.
///
/// - `Success` (0): Extraction completed for every file
/// - `Failure` (1): At least one file failed to scan (unterminated comment)
/// - `Error` (2): The command itself failed (unreadable path, bad arguments)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Extraction completed for every file.
    Success,
    /// At least one file failed to scan.
    Failure,
    /// The command itself failed.
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
