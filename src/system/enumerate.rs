use std::fs;

use tracing::warn;

use super::procfs::ProcFs;

/// Lists every live pid, i.e. every all-digit entry of the process table
/// directory. An unreadable directory yields an empty list.
pub fn list_pids(procfs: &ProcFs) -> Vec<u32> {
    let entries = match fs::read_dir(procfs.root()) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(root = %procfs.root().display(), %err, "process table unreadable");
            return Vec::new();
        }
    };

    let mut pids: Vec<u32> = entries
        .flatten()
        .filter_map(|entry| parse_pid(&entry.file_name().to_string_lossy()))
        .collect();
    pids.sort_unstable();
    pids
}

pub fn parse_pid(name: &str) -> Option<u32> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse::<u32>().ok().filter(|&pid| pid > 0)
}
