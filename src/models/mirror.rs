use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Clone)]
pub struct MirrorInput {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub exclusion_list: PathBuf,
    pub rsync_path: String,
    pub dry_run: bool,
    pub quiet: bool,
}

#[derive(Debug)]
pub struct MirrorOutput {
    pub exit_code: i32,
}

/// 交給外部同步程式的一次呼叫
#[derive(Debug, Clone, PartialEq)]
pub struct TransferInvocation {
    pub program: String,
    pub args: Vec<OsString>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferOutcome {
    /// 子程序結束碼，被訊號終止時為 None
    pub code: Option<i32>,
    pub interrupted: bool,
}
