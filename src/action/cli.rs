use clap::Parser;
use crate::config::config::Cli;
use crate::config::ports::{AppConfig, ConfigPort};
use crate::error::Result;
use crate::facade::sync_facade::SyncFacade;
use crate::facade::traits::i_sync::SyncFacadeTrait;
use crate::models::sync::{SyncInput, SyncOutput};
use crate::service::config_service::ConfigService;
use crate::service::mirror::{MirrorService, RsyncInvoker};
use crate::service::scan::ScanService;
use crate::service::selection::SelectionService;
use crate::utils::capacity::parse_capacity;
use crate::utils::path::normalize_paths;
use crate::utils::utils::setup_logging;

pub fn process_cli_mode() -> Result<SyncOutput> {
    let cli = Cli::parse();
    if let Err(e) = setup_logging(&cli.log_level, cli.quiet) {
        eprintln!("{}", e);
    }

    let config_service = ConfigService::new(Box::new(CliConfigAdapter::new(cli.clone())));
    let config = config_service.get_config()?;

    if cli.show_config {
        println!("實際使用的配置：{:#?}", config);
    }

    let facade = SyncFacade::new(
        Box::new(ScanService::new()),
        Box::new(SelectionService::new()),
        Box::new(MirrorService::new(Box::new(RsyncInvoker))),
    );
    facade.execute_sync(SyncInput::from(config))
}

// CLI 配置適配器，負責路徑與容量的驗證
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> Result<AppConfig> {
        let (source, destination) = normalize_paths(&self.cli.src, &self.cli.dst)?;
        let capacity = parse_capacity(&self.cli.capacity)?;

        Ok(AppConfig {
            source,
            destination,
            capacity,
            dry_run: self.cli.dry_run,
            quiet: self.cli.quiet,
            no_progress: self.cli.no_progress,
            rsync_path: self.cli.rsync_path.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyncError;
    use tempfile::tempdir;

    fn cli(src: &str, dst: &str, capacity: &str) -> Cli {
        Cli::try_parse_from(["capsync", "--src", src, "--dst", dst, "--capacity", capacity, "--dry-run"])
            .unwrap()
    }

    #[test]
    fn test_adapter_builds_validated_config() {
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        let adapter = CliConfigAdapter::new(cli(
            src.path().to_str().unwrap(),
            dst.path().to_str().unwrap(),
            "3m",
        ));
        let config = adapter.get_config().unwrap();
        assert_eq!(config.capacity, 3 * 1024 * 1024);
        assert!(config.dry_run);
        assert!(config.source.is_absolute());
    }

    #[test]
    fn test_adapter_checks_paths_before_capacity() {
        let dir = tempdir().unwrap();
        let path = dir.path().to_str().unwrap();
        let adapter = CliConfigAdapter::new(cli(path, path, "bogus"));
        assert!(matches!(adapter.get_config(), Err(SyncError::SameLocation { .. })));
    }

    #[test]
    fn test_adapter_rejects_bad_capacity() {
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        let adapter = CliConfigAdapter::new(cli(
            src.path().to_str().unwrap(),
            dst.path().to_str().unwrap(),
            "5X",
        ));
        assert!(matches!(adapter.get_config(), Err(SyncError::InvalidCapacity { .. })));
    }
}
