use tracing::debug;

use super::procfs::ProcFs;
use super::snapshot::ProcessSample;
use super::stat::StatRecord;
use super::users::UserLookup;

/// Samples one process.
///
/// Never fails: a process that exited between enumeration and this read,
/// or whose records are short, comes back with zero/empty fields so it
/// shows up as near-idle for one cycle instead of aborting the cycle.
pub fn sample_process(procfs: &ProcFs, pid: u32, users: &dyn UserLookup) -> ProcessSample {
    let stat = match procfs.read_pid(pid, "stat").map(|line| StatRecord::parse(&line)) {
        Some(StatRecord::Complete(fields)) => Some(fields),
        Some(StatRecord::Incomplete { fields }) => {
            debug!(pid, fields, "short stat record, keeping zero defaults");
            None
        }
        None => {
            debug!(pid, "stat record unreadable, process likely exited");
            None
        }
    };

    let uid = procfs
        .read_pid(pid, "status")
        .as_deref()
        .and_then(parse_uid)
        .unwrap_or(0);

    let stat = stat.unwrap_or_default();
    ProcessSample {
        pid,
        uid,
        owner: users.resolve(uid),
        command: stat.command,
        cpu_ticks_user: stat.user_ticks,
        cpu_ticks_system: stat.system_ticks,
        resident_pages: stat.resident_pages,
        virtual_size_bytes: stat.virtual_size_bytes,
    }
}

/// Real uid from the `Uid:` line of a status record.
pub fn parse_uid(status: &str) -> Option<u32> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("Uid:"))
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|uid| uid.parse().ok())
}
