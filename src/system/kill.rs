use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, Signal, System};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KillResult {
    Success(u32),
    Failed(u32, String),
    NotFound(u32),
}

impl KillResult {
    pub fn is_success(&self) -> bool {
        matches!(self, KillResult::Success(_))
    }

    pub fn message(&self) -> String {
        match self {
            KillResult::Success(pid) => format!("Sent SIGTERM to PID {pid}"),
            KillResult::Failed(_, err) => err.clone(),
            KillResult::NotFound(pid) => format!("Process {pid} not found"),
        }
    }
}

/// Sends exactly one SIGTERM to `pid`. Never escalates to SIGKILL; whether
/// the process actually exits is up to it.
pub fn terminate(pid: u32) -> KillResult {
    let sysinfo_pid = Pid::from_u32(pid);
    let mut sys = System::new();
    sys.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[sysinfo_pid]),
        true,
        ProcessRefreshKind::nothing(),
    );

    let result = match sys.process(sysinfo_pid) {
        Some(process) => match process.kill_with(Signal::Term) {
            Some(true) => KillResult::Success(pid),
            Some(false) => {
                KillResult::Failed(pid, format!("Failed to kill PID {pid} (permission denied?)"))
            }
            None => KillResult::Failed(pid, "SIGTERM is not supported on this platform".into()),
        },
        None => KillResult::NotFound(pid),
    };
    info!(pid, ?result, "termination requested");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_pid() {
        assert_eq!(KillResult::Success(42).message(), "Sent SIGTERM to PID 42");
        assert_eq!(KillResult::NotFound(7).message(), "Process 7 not found");
        assert!(KillResult::Success(1).is_success());
        assert!(!KillResult::Failed(1, "nope".into()).is_success());
    }
}
