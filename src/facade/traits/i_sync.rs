use crate::error::Result;
use crate::models::sync::{SyncInput, SyncOutput};

// Facade 接口，負責協調掃描、挑選與鏡像流程
pub trait SyncFacadeTrait: Send + Sync {
    /// 依輸入配置執行一次容量受限的鏡像同步
    /// # 參數
    /// - input: 已驗證的來源、目的、容量與執行模式
    /// # 回傳
    /// - 成功時返回包含與排除的統計，失敗時返回對應錯誤
    fn execute_sync(&self, input: SyncInput) -> Result<SyncOutput>;
}
