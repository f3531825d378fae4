use std::path::PathBuf;
use crate::error::Result;

// 已驗證的應用配置，元件只從這裡讀取設定
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub capacity: u64,
    pub dry_run: bool,
    pub quiet: bool,
    pub no_progress: bool,
    pub rsync_path: String,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> Result<AppConfig>;
}
