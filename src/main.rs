use capsync::action::cli::process_cli_mode;
use capsync::utils::utils::format_file_size;

fn main() {
    match process_cli_mode() {
        Ok(output) => {
            log::info!(
                "程式執行完成，目的目錄：{}，保留 {} 個檔案（{}）{}",
                output.destination.display(),
                output.included_files,
                format_file_size(output.included_bytes),
                if output.dry_run { "（模擬）" } else { "" }
            );
        }
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}
