use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// 排除清單中路徑之間的分隔字元，合法路徑中不會出現
pub const SEPARATOR: u8 = b'\0';

const WILDCARDS: &[u8] = b"*?[";

/// 暫存的排除清單檔案，離開作用域時自動刪除
pub struct ExclusionList {
    file: NamedTempFile,
    entries: usize,
}

impl ExclusionList {
    /// 將排除的相對路徑以 NUL 分隔寫入暫存檔
    pub fn write(paths: &[OsString]) -> io::Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("capsync-exclude-")
            .suffix(".lst")
            .tempfile()?;
        file.write_all(&encode_exclusions(paths))?;
        file.flush()?;
        log::debug!("排除清單寫入 {}，共 {} 筆", file.path().display(), paths.len());
        Ok(ExclusionList { file, entries: paths.len() })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }
}

/// 每個路徑寫成以 `/` 開頭、錨定在來源根目錄的 rsync 樣式
pub fn encode_exclusions(paths: &[OsString]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(paths.iter().map(|p| p.len() + 2).sum());
    for (i, path) in paths.iter().enumerate() {
        if i > 0 {
            buffer.push(SEPARATOR);
        }
        buffer.extend_from_slice(&to_pattern(&path_bytes(path)));
    }
    buffer
}

/// 解析 NUL 分隔的排除清單並還原成相對路徑，忽略空項目（包含結尾分隔字元）
pub fn parse_exclusions(data: &[u8]) -> Vec<OsString> {
    data.split(|b| *b == SEPARATOR)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| bytes_to_path(from_pattern(chunk)))
        .collect()
}

// rsync 只在樣式含萬用字元時才把反斜線當跳脫字元，所以只有這種情況才跳脫
fn to_pattern(path: &[u8]) -> Vec<u8> {
    let mut pattern = Vec::with_capacity(path.len() + 1);
    pattern.push(b'/');
    if path.iter().any(|b| WILDCARDS.contains(b)) {
        for &b in path {
            if WILDCARDS.contains(&b) || b == b'\\' {
                pattern.push(b'\\');
            }
            pattern.push(b);
        }
    } else {
        pattern.extend_from_slice(path);
    }
    pattern
}

fn from_pattern(pattern: &[u8]) -> Vec<u8> {
    let body = pattern.strip_prefix(b"/").unwrap_or(pattern);
    if !body.iter().any(|b| WILDCARDS.contains(b)) {
        return body.to_vec();
    }
    let mut path = Vec::with_capacity(body.len());
    let mut bytes = body.iter();
    while let Some(&b) = bytes.next() {
        if b == b'\\' {
            if let Some(&escaped) = bytes.next() {
                path.push(escaped);
            }
        } else {
            path.push(b);
        }
    }
    path
}

#[cfg(unix)]
fn path_bytes(path: &OsStr) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    path.as_bytes().to_vec()
}

#[cfg(not(unix))]
fn path_bytes(path: &OsStr) -> Vec<u8> {
    path.to_string_lossy().into_owned().into_bytes()
}

#[cfg(unix)]
fn bytes_to_path(bytes: Vec<u8>) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(bytes)
}

#[cfg(not(unix))]
fn bytes_to_path(bytes: Vec<u8>) -> OsString {
    OsString::from(String::from_utf8_lossy(&bytes).into_owned())
}
