use std::ffi::OsString;
use chrono::{DateTime, Utc};
use crate::models::file::FileRecord;

pub struct SelectionInput {
    pub records: Vec<FileRecord>,
    pub capacity: u64,
}

/// 挑選結果：包含與排除兩組互斥的相對路徑，皆依由新到舊的順序排列
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SelectionResult {
    pub included: Vec<OsString>,
    pub excluded: Vec<OsString>,
    pub included_bytes: u64,
    pub included_files: usize,
    pub excluded_bytes: u64,
    pub excluded_files: usize,
    /// 第一個被排除檔案的修改時間
    pub cutoff: Option<DateTime<Utc>>,
}
