use clap::Parser;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "capsync",
    about = "依修改時間挑選不超過容量的最新檔案，並鏡像同步到目的目錄",
    long_about = "掃描來源目錄，依修改時間由新到舊挑選檔案，直到第一個放不下的檔案為止；其餘檔案寫入排除清單，交由 rsync 鏡像同步，並刪除目的目錄中不在挑選範圍內的檔案。\n容量可使用位元組數，或加上 M / G 單位（二進位單位，大小寫皆可）。\n使用 `--help` 查看詳細用法。",
    arg_required_else_help = true
)]
pub struct Cli {
    /// 來源目錄
    #[arg(long)]
    pub src: String,
    /// 目的目錄（必須已存在）
    #[arg(long)]
    pub dst: String,
    /// 容量上限，例如 500、750M、2G
    #[arg(long)]
    pub capacity: String,
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, default_value = "rsync")]
    pub rsync_path: String,
    #[arg(long, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
    #[arg(long, default_value_t = false)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["capsync", "--src", "a", "--dst", "b", "--capacity", "1G"]).unwrap();
        assert_eq!(cli.capacity, "1G");
        assert!(!cli.dry_run);
        assert!(!cli.quiet);
        assert_eq!(cli.rsync_path, "rsync");
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_cli_requires_capacity() {
        assert!(Cli::try_parse_from(["capsync", "--src", "a", "--dst", "b"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_log_level() {
        let result = Cli::try_parse_from([
            "capsync", "--src", "a", "--dst", "b", "--capacity", "1", "--log-level", "trace",
        ]);
        assert!(result.is_err());
    }
}
