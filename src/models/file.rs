use std::ffi::OsString;
use std::path::PathBuf;
use chrono::{DateTime, Utc};

/// 來源目錄下的一個一般檔案
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// 相對於來源根目錄，以 `/` 分隔，不含開頭的 `./`；保留原始位元組，不要求 UTF-8
    pub relative_path: OsString,
    pub size_bytes: u64,
    pub modified_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct ScanInput {
    pub root: PathBuf,
    pub show_progress: bool,
}

#[derive(Debug)]
pub struct ScanOutput {
    pub records: Vec<FileRecord>,
    pub total_size: u64,
    pub skipped_entries: usize,
}
