use std::ffi::OsString;
use std::path::{Component, Path};
use chrono::{DateTime, Utc};
use log::{info, warn};
use walkdir::{DirEntry, WalkDir};
use crate::error::{Result, SyncError};
use crate::models::file::{FileRecord, ScanInput, ScanOutput};
use crate::service::traits::i_service::ScanServiceTrait;
use crate::utils::utils::ProgressManager;

/// 每掃描這麼多個檔案回報一次進度
pub const PROGRESS_INTERVAL: usize = 10_000;

/// 目錄掃描服務。不跟隨符號連結，符號連結、目錄與特殊檔案都不列入清單
pub struct ScanService;

impl ScanService {
    pub fn new() -> Self {
        ScanService
    }
}

impl Default for ScanService {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanServiceTrait for ScanService {
    fn scan(&self, input: ScanInput) -> Result<ScanOutput> {
        let root = input.root.as_path();
        let pm = ProgressManager::new_spinner(!input.show_progress);
        let mut records = Vec::new();
        let mut total_size = 0u64;
        let mut skipped_entries = 0usize;

        let walker = WalkDir::new(root).follow_links(false).sort_by_file_name();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf());
                    report_skip(&SyncError::ScanEntry { path, reason: e.to_string() });
                    skipped_entries += 1;
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            match build_record(root, &entry) {
                Ok(record) => {
                    total_size += record.size_bytes;
                    records.push(record);
                    pm.update(records.len() as u64, total_size);
                    if is_progress_checkpoint(records.len()) {
                        info!("已掃描 {} 個檔案", records.len());
                    }
                }
                Err(e) => {
                    report_skip(&e);
                    skipped_entries += 1;
                }
            }
        }

        pm.finish(records.len() as u64, total_size, skipped_entries as u64);
        info!("掃描完成，共 {} 個檔案，跳過 {} 個項目", records.len(), skipped_entries);
        Ok(ScanOutput {
            records,
            total_size,
            skipped_entries,
        })
    }
}

/// 已掃描的檔案數是否到達回報進度的間隔
pub fn is_progress_checkpoint(count: usize) -> bool {
    count > 0 && count % PROGRESS_INTERVAL == 0
}

fn report_skip(error: &SyncError) {
    warn!("{}，跳過", error);
}

fn build_record(root: &Path, entry: &DirEntry) -> Result<FileRecord> {
    let entry_error = |reason: String| SyncError::ScanEntry {
        path: entry.path().to_path_buf(),
        reason,
    };

    let metadata = entry.metadata().map_err(|e| entry_error(e.to_string()))?;
    let modified = metadata.modified().map_err(|e| entry_error(e.to_string()))?;
    let relative_path = relative_path(root, entry.path())
        .ok_or_else(|| entry_error("無法計算相對於來源目錄的路徑".to_string()))?;

    Ok(FileRecord {
        relative_path,
        size_bytes: metadata.len(),
        modified_at: DateTime::<Utc>::from(modified),
    })
}

/// 去掉來源根目錄前綴，並以 `/` 連接各層名稱；名稱保留原始位元組
pub fn relative_path(root: &Path, path: &Path) -> Option<OsString> {
    let relative = pathdiff::diff_paths(path, root)?;
    let mut joined = OsString::new();
    for component in relative.components() {
        match component {
            Component::Normal(name) => {
                if !joined.is_empty() {
                    joined.push("/");
                }
                joined.push(name);
            }
            Component::CurDir => {}
            _ => return None,
        }
    }
    if joined.is_empty() {
        return None;
    }
    Some(joined)
}
