use std::ffi::OsString;
use std::io;
use std::path::{Path, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};
use std::process::{Command, ExitStatus};
use log::{info, warn};
use crate::error::{Result, SyncError};
use crate::models::mirror::{MirrorInput, MirrorOutput, TransferInvocation, TransferOutcome};
use crate::service::traits::i_service::{MirrorServiceTrait, TransferInvoker};

/// 鏡像服務，透過注入的呼叫器執行外部同步程式
pub struct MirrorService {
    invoker: Box<dyn TransferInvoker>,
}

impl MirrorService {
    pub fn new(invoker: Box<dyn TransferInvoker>) -> Self {
        MirrorService { invoker }
    }
}

impl MirrorServiceTrait for MirrorService {
    fn mirror(&self, input: MirrorInput) -> Result<MirrorOutput> {
        let invocation = build_invocation(&input);
        if input.dry_run {
            info!("模擬模式：不會修改目的目錄");
        }
        log::debug!("執行：{} {:?}", invocation.program, invocation.args);

        let outcome = self.invoker.invoke(&invocation).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                SyncError::TransferUnavailable {
                    program: invocation.program.clone(),
                    reason: e.to_string(),
                }
            } else {
                SyncError::Io(e)
            }
        })?;

        if outcome.interrupted {
            return Err(SyncError::Interrupted);
        }
        match outcome.code {
            Some(0) => Ok(MirrorOutput { exit_code: 0 }),
            status => Err(SyncError::Transfer { status }),
        }
    }
}

/// 組出 rsync 參數：封存模式鏡像、刪除多餘與被排除的檔案，並從 NUL 分隔清單讀取排除項目
pub fn build_invocation(input: &MirrorInput) -> TransferInvocation {
    let mut args: Vec<OsString> = vec![
        "-a".into(),
        "--delete".into(),
        "--delete-excluded".into(),
        "--from0".into(),
    ];
    let mut exclude_from = OsString::from("--exclude-from=");
    exclude_from.push(input.exclusion_list.as_os_str());
    args.push(exclude_from);

    if input.dry_run {
        args.push("--dry-run".into());
    }
    if !input.quiet {
        args.push("-v".into());
        args.push("--progress".into());
    }
    args.push(with_trailing_separator(&input.source));
    args.push(with_trailing_separator(&input.destination));

    TransferInvocation {
        program: input.rsync_path.clone(),
        args,
    }
}

// 來源加上結尾分隔字元，讓 rsync 同步目錄內容而非目錄本身
fn with_trailing_separator(path: &Path) -> OsString {
    let mut value = path.as_os_str().to_os_string();
    if !value.to_string_lossy().ends_with(MAIN_SEPARATOR) {
        value.push(MAIN_SEPARATOR_STR);
    }
    value
}

/// 以子程序執行 rsync，等待結束並回報結束碼
pub struct RsyncInvoker;

impl TransferInvoker for RsyncInvoker {
    fn invoke(&self, invocation: &TransferInvocation) -> io::Result<TransferOutcome> {
        let program = which::which(&invocation.program)
            .map_err(|e| io::Error::new(io::ErrorKind::NotFound, e.to_string()))?;
        let mut command = Command::new(program);
        command.args(&invocation.args);
        let (status, interrupted) = run_with_interrupts(&mut command)?;
        Ok(TransferOutcome {
            code: status.code(),
            interrupted,
        })
    }
}

/// 行程共用的訊號攔截：同步程式執行中只記錄中斷，
/// 閒置時交回預設行為，收到 SIGINT/SIGTERM 照常結束程式
#[cfg(unix)]
struct SignalTrap {
    idle: std::sync::Arc<std::sync::atomic::AtomicBool>,
    interrupted: std::sync::Arc<std::sync::atomic::AtomicBool>,
}

#[cfg(unix)]
static SIGNAL_TRAP: std::sync::Mutex<Option<SignalTrap>> = std::sync::Mutex::new(None);

#[cfg(unix)]
impl SignalTrap {
    fn install() -> io::Result<Self> {
        use std::sync::atomic::AtomicBool;
        use std::sync::Arc;
        use signal_hook::consts::{SIGINT, SIGTERM};

        let trap = SignalTrap {
            idle: Arc::new(AtomicBool::new(true)),
            interrupted: Arc::new(AtomicBool::new(false)),
        };
        for signal in [SIGINT, SIGTERM] {
            // 預設行為須先於旗標註冊，閒置時才會先結束程式
            signal_hook::flag::register_conditional_default(signal, Arc::clone(&trap.idle))?;
            signal_hook::flag::register(signal, Arc::clone(&trap.interrupted))?;
        }
        Ok(trap)
    }
}

// 同一時間只執行一個同步程式；訊號在啟動子程序前就已攔截
#[cfg(unix)]
fn run_with_interrupts(command: &mut Command) -> io::Result<(ExitStatus, bool)> {
    use std::sync::atomic::Ordering;
    use std::sync::PoisonError;

    let mut guard = SIGNAL_TRAP.lock().unwrap_or_else(PoisonError::into_inner);
    if guard.is_none() {
        *guard = Some(SignalTrap::install()?);
    }
    let trap = guard
        .as_ref()
        .ok_or_else(|| io::Error::other("訊號攔截未就緒"))?;

    trap.interrupted.store(false, Ordering::SeqCst);
    trap.idle.store(false, Ordering::SeqCst);
    let result = spawn_and_wait(command, &trap.interrupted);
    trap.idle.store(true, Ordering::SeqCst);

    result.map(|status| (status, trap.interrupted.load(Ordering::SeqCst)))
}

#[cfg(unix)]
fn spawn_and_wait(
    command: &mut Command,
    interrupted: &std::sync::atomic::AtomicBool,
) -> io::Result<ExitStatus> {
    use std::sync::atomic::Ordering;
    use std::thread;
    use std::time::Duration;

    let mut child = command.spawn()?;
    let mut killed = false;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }
        if !killed && interrupted.load(Ordering::SeqCst) {
            warn!("收到中斷訊號，終止同步程式");
            if let Err(e) = child.kill() {
                warn!("終止同步程式失敗：{}", e);
            }
            killed = true;
        }
        thread::sleep(Duration::from_millis(100));
    }
}

#[cfg(not(unix))]
fn run_with_interrupts(command: &mut Command) -> io::Result<(ExitStatus, bool)> {
    command.spawn()?.wait().map(|status| (status, false))
}
