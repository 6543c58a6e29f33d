const FALLBACK_PAGE_SIZE: u64 = 4096;

/// Size of a memory page in bytes, as reported by the OS.
pub fn page_size() -> u64 {
    #[cfg(unix)]
    {
        // SAFETY: sysconf has no preconditions and only reads system configuration.
        let size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
        if size > 0 {
            return size as u64;
        }
    }
    FALLBACK_PAGE_SIZE
}
