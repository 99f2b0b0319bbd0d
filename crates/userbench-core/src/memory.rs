//! Process memory snapshot.
//!
//! Reads the resident set and data segment from `/proc/self/status` and the
//! live heap from [`CountingAllocator`]. The report renders each counter as
//! megabytes rounded to two decimals (`"12.5 MB"`).
//!
//! Counters that cannot be read report 0; a snapshot never fails.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Serialize;

static LIVE_HEAP_BYTES: AtomicUsize = AtomicUsize::new(0);

/// Global allocator wrapper that keeps a count of live heap bytes.
///
/// Install it in the binary to get a non-zero `heapUsed`:
///
/// ```ignore
/// #[global_allocator]
/// static GLOBAL: userbench_core::memory::CountingAllocator =
///     userbench_core::memory::CountingAllocator;
/// ```
pub struct CountingAllocator;

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let p = System.alloc(layout);
        if !p.is_null() {
            LIVE_HEAP_BYTES.fetch_add(layout.size(), Ordering::Relaxed);
        }
        p
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let p = System.alloc_zeroed(layout);
        if !p.is_null() {
            LIVE_HEAP_BYTES.fetch_add(layout.size(), Ordering::Relaxed);
        }
        p
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        LIVE_HEAP_BYTES.fetch_sub(layout.size(), Ordering::Relaxed);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let p = System.realloc(ptr, layout, new_size);
        if !p.is_null() {
            if new_size >= layout.size() {
                LIVE_HEAP_BYTES.fetch_add(new_size - layout.size(), Ordering::Relaxed);
            } else {
                LIVE_HEAP_BYTES.fetch_sub(layout.size() - new_size, Ordering::Relaxed);
            }
        }
        p
    }
}

/// Raw counters in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemorySnapshot {
    pub rss_bytes: u64,
    pub heap_total_bytes: u64,
    pub heap_used_bytes: u64,
}

/// Human-readable memory report (`{ rss, heapTotal, heapUsed }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryUsageReport {
    pub rss: String,
    pub heap_total: String,
    pub heap_used: String,
}

impl MemorySnapshot {
    /// Read the current process counters.
    pub fn capture() -> Self {
        let (rss_bytes, heap_total_bytes) = read_proc_status();
        Self {
            rss_bytes,
            heap_total_bytes,
            heap_used_bytes: LIVE_HEAP_BYTES.load(Ordering::Relaxed) as u64,
        }
    }

    pub fn report(&self) -> MemoryUsageReport {
        MemoryUsageReport {
            rss: format_megabytes(self.rss_bytes),
            heap_total: format_megabytes(self.heap_total_bytes),
            heap_used: format_megabytes(self.heap_used_bytes),
        }
    }
}

/// Shortcut for `MemorySnapshot::capture().report()`.
pub fn memory_usage() -> MemoryUsageReport {
    MemorySnapshot::capture().report()
}

/// `bytes` as megabytes, rounded to two decimals, shortest decimal form.
pub fn format_megabytes(bytes: u64) -> String {
    let mb = (bytes as f64 / 1024.0 / 1024.0 * 100.0).round() / 100.0;
    format!("{mb} MB")
}

#[cfg(target_os = "linux")]
fn read_proc_status() -> (u64, u64) {
    match std::fs::read_to_string("/proc/self/status") {
        Ok(s) => parse_proc_status(&s),
        Err(e) => {
            tracing::debug!(error = %e, "read /proc/self/status failed");
            (0, 0)
        }
    }
}

#[cfg(not(target_os = "linux"))]
fn read_proc_status() -> (u64, u64) {
    (0, 0)
}

/// Extract `(VmRSS, VmData)` in bytes from a `/proc/<pid>/status` dump.
pub fn parse_proc_status(status: &str) -> (u64, u64) {
    let mut rss = 0;
    let mut data = 0;
    for line in status.lines() {
        if let Some(v) = line.strip_prefix("VmRSS:") {
            rss = parse_kib(v);
        } else if let Some(v) = line.strip_prefix("VmData:") {
            data = parse_kib(v);
        }
    }
    (rss, data)
}

fn parse_kib(v: &str) -> u64 {
    v.split_whitespace()
        .next()
        .and_then(|n| n.parse::<u64>().ok())
        .map(|kib| kib * 1024)
        .unwrap_or(0)
}
