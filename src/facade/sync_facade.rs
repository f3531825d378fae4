use log::info;
use crate::error::Result;
use crate::facade::traits::i_sync::SyncFacadeTrait;
use crate::models::file::ScanInput;
use crate::models::mirror::MirrorInput;
use crate::models::selection::SelectionInput;
use crate::models::sync::{SyncInput, SyncOutput};
use crate::service::traits::i_service::{MirrorServiceTrait, ScanServiceTrait, SelectionServiceTrait};
use crate::utils::exclusion::ExclusionList;
use crate::utils::utils::format_file_size;

pub struct SyncFacade {
    scan_service: Box<dyn ScanServiceTrait>,
    selection_service: Box<dyn SelectionServiceTrait>,
    mirror_service: Box<dyn MirrorServiceTrait>,
}

impl SyncFacade {
    pub fn new(
        scan_service: Box<dyn ScanServiceTrait>,
        selection_service: Box<dyn SelectionServiceTrait>,
        mirror_service: Box<dyn MirrorServiceTrait>,
    ) -> Self {
        SyncFacade {
            scan_service,
            selection_service,
            mirror_service,
        }
    }
}

impl SyncFacadeTrait for SyncFacade {
    fn execute_sync(&self, input: SyncInput) -> Result<SyncOutput> {
        info!("來源：{}", input.source.display());
        info!("目的：{}", input.destination.display());
        info!("容量：{} 位元組（{}）", input.capacity, format_file_size(input.capacity));

        let scan_output = self.scan_service.scan(ScanInput {
            root: input.source.clone(),
            show_progress: input.show_progress,
        })?;
        info!(
            "來源共 {} 個檔案，總大小：{}",
            scan_output.records.len(),
            format_file_size(scan_output.total_size)
        );

        let selection = self.selection_service.select(SelectionInput {
            records: scan_output.records,
            capacity: input.capacity,
        });
        info!(
            "納入 {} 個檔案（{}），排除 {} 個檔案（{}）",
            selection.included_files,
            format_file_size(selection.included_bytes),
            selection.excluded_files,
            format_file_size(selection.excluded_bytes)
        );
        if let Some(cutoff) = selection.cutoff {
            info!("排除修改時間不晚於 {} 的檔案", cutoff.format("%Y-%m-%d %H:%M:%S UTC"));
        }

        // 清單在這個作用域結束時刪除，不論同步成功與否
        let exclusion_list = ExclusionList::write(&selection.excluded)?;
        if exclusion_list.is_empty() {
            info!("沒有需要排除的檔案");
        } else {
            info!("排除清單共 {} 筆：{}", exclusion_list.len(), exclusion_list.path().display());
        }
        let mirror_output = self.mirror_service.mirror(MirrorInput {
            source: input.source.clone(),
            destination: input.destination.clone(),
            exclusion_list: exclusion_list.path().to_path_buf(),
            rsync_path: input.rsync_path.clone(),
            dry_run: input.dry_run,
            quiet: input.quiet,
        })?;
        drop(exclusion_list);
        log::debug!("同步程式結束碼：{}", mirror_output.exit_code);

        if input.dry_run {
            info!("模擬完成，目的目錄未變更");
        } else {
            info!("同步完成：{}", input.destination.display());
        }

        Ok(SyncOutput {
            destination: input.destination,
            included_files: selection.included_files,
            included_bytes: selection.included_bytes,
            excluded_files: selection.excluded_files,
            excluded_bytes: selection.excluded_bytes,
            dry_run: input.dry_run,
        })
    }
}
