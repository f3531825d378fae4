use std::io;
use crate::error::Result;
use crate::models::file::{ScanInput, ScanOutput};
use crate::models::mirror::{MirrorInput, MirrorOutput, TransferInvocation, TransferOutcome};
use crate::models::selection::{SelectionInput, SelectionResult};

// Scan 服務接口，負責走訪來源目錄
pub trait ScanServiceTrait: Send + Sync {
    /// 收集來源目錄下所有一般檔案的相對路徑、大小與修改時間
    /// # 參數
    /// - input: 掃描根目錄與進度顯示設定
    /// # 回傳
    /// - 成功時返回完整清單；單一項目讀取失敗只會跳過，不會中止掃描
    fn scan(&self, input: ScanInput) -> Result<ScanOutput>;
}

// Selection 服務接口，負責在容量內挑選檔案
pub trait SelectionServiceTrait: Send + Sync {
    /// 依修改時間由新到舊挑選檔案，遇到第一個放不下的檔案即停止納入
    fn select(&self, input: SelectionInput) -> SelectionResult;
}

// Mirror 服務接口，負責呼叫外部同步程式
pub trait MirrorServiceTrait: Send + Sync {
    /// 以鏡像、刪除與排除清單設定執行同步
    /// # 回傳
    /// - 外部程式非零結束時返回 Transfer 錯誤並附上結束狀態
    fn mirror(&self, input: MirrorInput) -> Result<MirrorOutput>;
}

// 外部同步程式的呼叫接口，測試時可替換
pub trait TransferInvoker: Send + Sync {
    fn invoke(&self, invocation: &TransferInvocation) -> io::Result<TransferOutcome>;
}
