use tracing::warn;

use super::procfs::ProcFs;

/// user, nice, system, idle, iowait, irq, softirq, steal
const CPU_TIME_FIELDS: usize = 8;

/// Sum of the aggregate CPU time counters since boot, or 0 when the
/// counters cannot be read.
pub fn read_total_ticks(procfs: &ProcFs) -> u64 {
    match procfs.read("stat") {
        Some(contents) => parse_total_ticks(&contents),
        None => {
            warn!(root = %procfs.root().display(), "aggregate cpu counters unreadable");
            0
        }
    }
}

pub fn parse_total_ticks(contents: &str) -> u64 {
    let Some(line) = contents
        .lines()
        .find(|line| line.split_whitespace().next() == Some("cpu"))
    else {
        return 0;
    };

    line.split_whitespace()
        .skip(1)
        .take(CPU_TIME_FIELDS)
        .map(|field| field.parse::<u64>().unwrap_or(0))
        .fold(0, u64::saturating_add)
}

/// Installed physical memory in kB, or 0 when unknown.
pub fn read_total_memory_kb(procfs: &ProcFs) -> u64 {
    match procfs.read("meminfo") {
        Some(contents) => parse_total_memory_kb(&contents),
        None => {
            warn!(root = %procfs.root().display(), "memory summary unreadable");
            0
        }
    }
}

pub fn parse_total_memory_kb(contents: &str) -> u64 {
    for line in contents.lines() {
        if let Some(rest) = line.strip_prefix("MemTotal:") {
            return rest
                .split_whitespace()
                .next()
                .and_then(|value| value.parse().ok())
                .unwrap_or(0);
        }
    }
    0
}
