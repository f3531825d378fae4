use std::cmp::Ordering;
use log::debug;
use crate::models::file::FileRecord;
use crate::models::selection::{SelectionInput, SelectionResult};
use crate::service::traits::i_service::SelectionServiceTrait;

/// 容量挑選服務
pub struct SelectionService;

impl SelectionService {
    pub fn new() -> Self {
        SelectionService
    }
}

impl Default for SelectionService {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionServiceTrait for SelectionService {
    fn select(&self, input: SelectionInput) -> SelectionResult {
        select_recent(input.records, input.capacity)
    }
}

/// 新的在前；修改時間相同時依相對路徑遞增
pub fn newest_first(a: &FileRecord, b: &FileRecord) -> Ordering {
    b.modified_at
        .cmp(&a.modified_at)
        .then_with(|| a.relative_path.cmp(&b.relative_path))
}

/// 依修改時間由新到舊逐一檢查，放得下就納入並扣除剩餘容量；
/// 第一個放不下的檔案之後一律排除，即使後面的檔案更小。
/// 容量為 0 時所有檔案（包含 0 位元組的檔案）都排除。
pub fn select_recent(mut records: Vec<FileRecord>, capacity: u64) -> SelectionResult {
    records.sort_by(newest_first);

    let mut result = SelectionResult::default();
    let mut remaining = capacity;
    let mut admitting = capacity > 0;

    for record in records {
        if admitting && record.size_bytes <= remaining {
            remaining -= record.size_bytes;
            result.included_bytes += record.size_bytes;
            result.included_files += 1;
            result.included.push(record.relative_path);
            continue;
        }

        if admitting {
            debug!(
                "{}（{} 位元組）超過剩餘容量 {} 位元組，停止納入",
                record.relative_path.to_string_lossy(),
                record.size_bytes,
                remaining
            );
            admitting = false;
            remaining = 0;
        }
        if result.cutoff.is_none() {
            result.cutoff = Some(record.modified_at);
        }
        result.excluded_bytes += record.size_bytes;
        result.excluded_files += 1;
        result.excluded.push(record.relative_path);
    }

    result
}
