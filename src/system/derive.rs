//! Interval-relative CPU and memory percentages.
//!
//! Kernel counters are cumulative. A percentage for "right now" is the
//! growth of a process's ticks over the growth of the system's ticks since
//! the previous cycle, so the engine carries exactly two pieces of rolling
//! state: the previous system total and the previous tick sum per pid.

use std::collections::HashMap;

use super::snapshot::{Cycle, DerivedMetrics, ProcessRow, ProcessSample, SystemSnapshot};

#[derive(Debug, Clone)]
pub struct Deriver {
    previous_total_ticks: u64,
    /// Last-seen tick sum per pid. Entries are overwritten, never merged
    /// or evicted; a reused pid starts from whatever value is left here.
    previous_ticks: HashMap<u32, u64>,
    page_size: u64,
}

impl Deriver {
    pub fn new(initial_total_ticks: u64, page_size: u64) -> Self {
        Self {
            previous_total_ticks: initial_total_ticks,
            previous_ticks: HashMap::new(),
            page_size,
        }
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn previous_total_ticks(&self) -> u64 {
        self.previous_total_ticks
    }

    pub fn previous_ticks(&self, pid: u32) -> Option<u64> {
        self.previous_ticks.get(&pid).copied()
    }

    /// Combines this cycle's measurements with the retained state, then
    /// rolls the state forward.
    pub fn derive(&mut self, system: SystemSnapshot, samples: Vec<ProcessSample>) -> Cycle {
        let system_delta = system.total_ticks.saturating_sub(self.previous_total_ticks);

        let rows = samples
            .into_iter()
            .map(|sample| {
                let current = sample.total_ticks();
                let previous = self.previous_ticks.get(&sample.pid).copied().unwrap_or(0);
                let metrics = DerivedMetrics {
                    cpu_percent: cpu_percent(current.saturating_sub(previous), system_delta),
                    mem_percent: mem_percent(
                        sample.resident_pages,
                        self.page_size,
                        system.total_memory_kb,
                    ),
                };
                self.previous_ticks.insert(sample.pid, current);
                ProcessRow { sample, metrics }
            })
            .collect();

        self.previous_total_ticks = system.total_ticks;

        Cycle {
            system,
            system_delta,
            rows,
        }
    }
}

/// Zero when no system time elapsed.
pub fn cpu_percent(tick_delta: u64, system_delta: u64) -> f64 {
    if system_delta == 0 {
        return 0.0;
    }
    100.0 * tick_delta as f64 / system_delta as f64
}

/// Zero when total memory is unknown.
pub fn mem_percent(resident_pages: u64, page_size: u64, total_memory_kb: u64) -> f64 {
    if total_memory_kb == 0 {
        return 0.0;
    }
    let resident_kb = resident_pages.saturating_mul(page_size) as f64 / 1024.0;
    100.0 * resident_kb / total_memory_kb as f64
}
