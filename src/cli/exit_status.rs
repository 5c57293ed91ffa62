use std::process::ExitCode;

/// Process exit status for strpo commands.
///
/// - `Success` (0): every requested file was written
/// - `Failure` (1): the command refused to run, e.g. `init` over an existing config
/// - `Error` (2): I/O error, malformed catalog or invalid configuration
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
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
