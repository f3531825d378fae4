use std::io::{self, Write};
use std::time::{Duration, Instant};
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};

pub fn setup_logging(log_level: &str, quiet: bool) -> io::Result<()> {
    let log_level_filter = if quiet {
        log::LevelFilter::Off
    } else {
        match log_level {
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            _ => log::LevelFilter::Info,
        }
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {:<5} {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .try_init()
        .map_err(|e| io::Error::other(format!("日誌初始化失敗: {}", e)))
}

pub struct ProgressManager {
    pb: ProgressBar,
    hidden: bool,
    start: Instant,
}

impl ProgressManager {
    /// 掃描用的計數轉輪，hidden 時不輸出任何內容
    pub fn new_spinner(hidden: bool) -> Self {
        let pb = if hidden {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
                pb.set_style(style);
            }
            // 兩次更新之間轉輪仍持續轉動
            pb.enable_steady_tick(Duration::from_millis(120));
            pb
        };
        ProgressManager {
            pb,
            hidden,
            start: Instant::now(),
        }
    }

    pub fn update(&self, count: u64, total_size: u64) {
        if self.hidden {
            return;
        }
        let elapsed = self.start.elapsed().as_secs_f64();
        let speed = if elapsed > 0.0 { count as f64 / elapsed } else { 0.0 };
        self.pb.set_message(format!(
            "已掃描：{} 檔案，{}，速度：{:.0} 檔案/秒",
            count,
            format_file_size(total_size),
            speed
        ));
        self.pb.set_position(count);
    }

    pub fn finish(&self, file_count: u64, total_size: u64, skipped: u64) {
        if self.hidden {
            return;
        }
        self.pb.finish_and_clear();
        log::debug!(
            "掃描轉輪結束：{} 個檔案，{}，跳過 {} 個項目，耗時 {:.2} 秒",
            file_count,
            format_file_size(total_size),
            skipped,
            self.start.elapsed().as_secs_f64()
        );
    }
}

pub fn format_file_size(size: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;
    let size_f = size as f64;
    if size < 1024 {
        format!("{} B", size)
    } else if size_f < MB {
        format!("{:.2} KB", size_f / KB)
    } else if size_f < GB {
        format!("{:.2} MB", size_f / MB)
    } else {
        format!("{:.2} GB", size_f / GB)
    }
}
