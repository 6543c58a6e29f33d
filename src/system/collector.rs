use tracing::{debug, debug_span};

use super::counters::{read_total_memory_kb, read_total_ticks};
use super::derive::Deriver;
use super::enumerate::list_pids;
use super::platform;
use super::procfs::ProcFs;
use super::sampler::sample_process;
use super::snapshot::{Cycle, ProcessSample, SystemSnapshot};
use super::users::{SystemUsers, UserLookup};

/// Runs sampling cycles against one process table and owns the rolling
/// state between them.
pub struct Collector {
    procfs: ProcFs,
    users: Box<dyn UserLookup>,
    deriver: Deriver,
}

impl Collector {
    pub fn new(procfs: ProcFs) -> Self {
        Self::with_parts(procfs, Box::new(SystemUsers::load()), platform::page_size())
    }

    /// Seeds the previous system total from a reading taken now, so the
    /// first cycle measures the time since construction.
    pub fn with_parts(procfs: ProcFs, users: Box<dyn UserLookup>, page_size: u64) -> Self {
        let initial_total_ticks = read_total_ticks(&procfs);
        Collector {
            procfs,
            users,
            deriver: Deriver::new(initial_total_ticks, page_size),
        }
    }

    pub fn procfs(&self) -> &ProcFs {
        &self.procfs
    }

    pub fn page_size(&self) -> u64 {
        self.deriver.page_size()
    }

    pub fn refresh(&mut self) -> Cycle {
        let _refresh_span = debug_span!("collector.refresh").entered();

        let system = SystemSnapshot {
            total_ticks: read_total_ticks(&self.procfs),
            total_memory_kb: read_total_memory_kb(&self.procfs),
        };
        let samples: Vec<ProcessSample> = list_pids(&self.procfs)
            .into_iter()
            .map(|pid| sample_process(&self.procfs, pid, self.users.as_ref()))
            .collect();

        let cycle = self.deriver.derive(system, samples);
        debug!(
            processes = cycle.rows.len(),
            total_ticks = cycle.system.total_ticks,
            system_delta = cycle.system_delta,
            "sampling cycle complete"
        );
        cycle
    }
}
