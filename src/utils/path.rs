use std::path::{Path, PathBuf};
use crate::error::{Result, SyncError};

/// 將來源與目的路徑解析為標準絕對路徑，並確認兩者皆為既有且不同的目錄
pub fn normalize_paths(source: &str, destination: &str) -> Result<(PathBuf, PathBuf)> {
    let source_path = canonical_dir(source)
        .ok_or_else(|| SyncError::InvalidSource { path: source.to_string() })?;
    let destination_path = canonical_dir(destination)
        .ok_or_else(|| SyncError::InvalidDestination { path: destination.to_string() })?;

    if source_path == destination_path {
        return Err(SyncError::SameLocation { path: source_path });
    }
    Ok((source_path, destination_path))
}

fn canonical_dir(input: &str) -> Option<PathBuf> {
    if input.is_empty() {
        return None;
    }
    let resolved = dunce::canonicalize(Path::new(input)).ok()?;
    resolved.is_dir().then_some(resolved)
}
