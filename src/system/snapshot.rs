/// One process's raw measurement for a single sampling cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessSample {
    pub pid: u32,
    pub uid: u32,
    pub owner: String,
    pub command: String,
    pub cpu_ticks_user: u64,
    pub cpu_ticks_system: u64,
    pub resident_pages: u64,
    pub virtual_size_bytes: u64,
}

impl ProcessSample {
    pub fn total_ticks(&self) -> u64 {
        self.cpu_ticks_user.saturating_add(self.cpu_ticks_system)
    }

    pub fn resident_bytes(&self, page_size: u64) -> u64 {
        self.resident_pages.saturating_mul(page_size)
    }
}

/// System-wide aggregates for a single sampling cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SystemSnapshot {
    pub total_ticks: u64,
    pub total_memory_kb: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DerivedMetrics {
    pub cpu_percent: f64,
    pub mem_percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessRow {
    pub sample: ProcessSample,
    pub metrics: DerivedMetrics,
}

/// Everything one refresh produces.
#[derive(Debug, Clone, Default)]
pub struct Cycle {
    pub system: SystemSnapshot,
    pub system_delta: u64,
    pub rows: Vec<ProcessRow>,
}
