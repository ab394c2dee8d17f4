/// Peak resident set size of this process in KiB, `None` where the platform
/// does not report it.
#[cfg(unix)]
pub fn peak_resident_kb() -> Option<u64> {
    let mut usage = std::mem::MaybeUninit::<libc::rusage>::zeroed();

    // SAFETY: getrusage only writes into the struct we hand it.
    let status = unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) };
    if status != 0 {
        log::debug!("getrusage failed: {}", std::io::Error::last_os_error());
        return None;
    }

    // SAFETY: zero-initialised and filled in by a successful getrusage.
    let usage = unsafe { usage.assume_init() };
    let max_rss = u64::try_from(usage.ru_maxrss).ok()?;

    // macOS reports bytes, everything else kilobytes
    if cfg!(target_os = "macos") {
        Some(max_rss / 1024)
    } else {
        Some(max_rss)
    }
}

#[cfg(not(unix))]
pub fn peak_resident_kb() -> Option<u64> {
    None
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn reports_nonzero_peak() {
        let peak = peak_resident_kb().unwrap();
        assert!(peak > 0);
    }
}
