use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 同步流程共用的錯誤型別
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("來源目錄無效：'{path}' 不存在或不是目錄")]
    InvalidSource { path: String },

    #[error("目的目錄無效：'{path}' 不存在或不是目錄")]
    InvalidDestination { path: String },

    #[error("來源與目的指向同一位置：{}", .path.display())]
    SameLocation { path: PathBuf },

    #[error("無效的容量 '{input}'：{reason}")]
    InvalidCapacity { input: String, reason: String },

    #[error("無法讀取項目 {}：{reason}", .path.display())]
    ScanEntry { path: PathBuf, reason: String },

    #[error("同步程式執行失敗，結束狀態：{}", describe_status(.status))]
    Transfer { status: Option<i32> },

    #[error("找不到同步程式 '{program}'：{reason}")]
    TransferUnavailable { program: String, reason: String },

    #[error("同步過程被中斷")]
    Interrupted,

    #[error("I/O 錯誤：{0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SyncError>;

impl SyncError {
    /// 對應的程式結束碼
    pub fn exit_code(&self) -> i32 {
        match self {
            SyncError::InvalidSource { .. }
            | SyncError::InvalidDestination { .. }
            | SyncError::SameLocation { .. }
            | SyncError::InvalidCapacity { .. } => 2,
            SyncError::Transfer { status: Some(code) } if *code != 0 => *code,
            SyncError::Interrupted => 130,
            _ => 1,
        }
    }
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "被訊號終止".to_string(),
    }
}
