use std::path::PathBuf;
use crate::config::ports::AppConfig;

#[derive(Clone)]
pub struct SyncInput {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub capacity: u64,
    pub dry_run: bool,
    pub quiet: bool,
    pub show_progress: bool,
    pub rsync_path: String,
}

impl From<AppConfig> for SyncInput {
    fn from(config: AppConfig) -> Self {
        SyncInput {
            show_progress: !(config.quiet || config.no_progress),
            source: config.source,
            destination: config.destination,
            capacity: config.capacity,
            dry_run: config.dry_run,
            quiet: config.quiet,
            rsync_path: config.rsync_path,
        }
    }
}

#[derive(Debug)]
pub struct SyncOutput {
    pub destination: PathBuf,
    pub included_files: usize,
    pub included_bytes: u64,
    pub excluded_files: usize,
    pub excluded_bytes: u64,
    pub dry_run: bool,
}
