use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

use crate::search::processor::LARGE_FILE_THRESHOLD;

/// Tracks per-query scan counters shared across worker threads
#[derive(Debug, Clone)]
pub struct ScanMetrics {
    files_scanned: Arc<AtomicU64>,
    files_failed: Arc<AtomicU64>,
    bytes_read: Arc<AtomicU64>,
    small_files_processed: Arc<AtomicU64>,
    mmap_files_processed: Arc<AtomicU64>,
}

impl ScanMetrics {
    /// Creates a new ScanMetrics instance
    pub fn new() -> Self {
        Self {
            files_scanned: Arc::new(AtomicU64::new(0)),
            files_failed: Arc::new(AtomicU64::new(0)),
            bytes_read: Arc::new(AtomicU64::new(0)),
            small_files_processed: Arc::new(AtomicU64::new(0)),
            mmap_files_processed: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Records a file whose contents were read successfully
    pub fn record_file_processing(&self, size: u64) {
        self.files_scanned.fetch_add(1, Ordering::Relaxed);
        self.bytes_read.fetch_add(size, Ordering::Relaxed);
        if size >= LARGE_FILE_THRESHOLD {
            self.mmap_files_processed.fetch_add(1, Ordering::Relaxed);
        } else {
            self.small_files_processed.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Records a file that could not be read
    pub fn record_failure(&self) {
        self.files_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn files_scanned(&self) -> u64 {
        self.files_scanned.load(Ordering::Relaxed)
    }

    pub fn files_failed(&self) -> u64 {
        self.files_failed.load(Ordering::Relaxed)
    }

    /// Gets current scan statistics
    pub fn get_stats(&self) -> ScanStats {
        ScanStats {
            files_scanned: self.files_scanned(),
            files_failed: self.files_failed(),
            bytes_read: self.bytes_read.load(Ordering::Relaxed),
            small_files: self.small_files_processed.load(Ordering::Relaxed),
            mmap_files: self.mmap_files_processed.load(Ordering::Relaxed),
        }
    }

    /// Logs current scan statistics
    pub fn log_stats(&self) {
        let stats = self.get_stats();
        info!(
            "Scan stats:\n\
             Files scanned: {}\n\
             Files failed: {}\n\
             Bytes read: {}\n\
             Files processed (buffered/mmap): {}/{}",
            stats.files_scanned,
            stats.files_failed,
            stats.bytes_read,
            stats.small_files,
            stats.mmap_files
        );
    }
}

impl Default for ScanMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of scan counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    pub files_scanned: u64,
    pub files_failed: u64,
    pub bytes_read: u64,
    pub small_files: u64,
    pub mmap_files: u64,
}
