use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PROC_ROOT: &str = "/proc";

/// Read access to a process table laid out like Linux `/proc`.
///
/// Every read is a soft read: a missing or unreadable file is `None`,
/// never an error, because processes routinely vanish between listing
/// and reading.
#[derive(Debug, Clone)]
pub struct ProcFs {
    root: PathBuf,
}

impl Default for ProcFs {
    fn default() -> Self {
        Self::new(DEFAULT_PROC_ROOT)
    }
}

impl ProcFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reads a file directly under the root, e.g. `stat` or `meminfo`.
    pub fn read(&self, name: &str) -> Option<String> {
        read_lossy(&self.root.join(name))
    }

    /// Reads a per-process file, e.g. `<root>/<pid>/stat`.
    pub fn read_pid(&self, pid: u32, name: &str) -> Option<String> {
        read_lossy(&self.root.join(pid.to_string()).join(name))
    }

    /// True when this is the live host table, i.e. pids in it are local
    /// processes that can be signalled.
    pub fn is_host(&self) -> bool {
        self.root == Path::new(DEFAULT_PROC_ROOT)
    }
}

/// Command names are arbitrary bytes, copied unescaped into `stat` and
/// `status`; invalid UTF-8 becomes U+FFFD instead of failing the read.
fn read_lossy(path: &Path) -> Option<String> {
    fs::read(path)
        .ok()
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}
