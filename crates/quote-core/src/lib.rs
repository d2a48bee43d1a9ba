//! 報價引擎核心資料模型
//!
//! 提供報價計算所需的基礎資料結構：材料與表面處理目錄、
//! 報價請求與費用明細。

pub mod breakdown;
pub mod finish;
pub mod material;
pub mod request;

// Re-export 主要類型
pub use breakdown::QuoteBreakdown;
pub use finish::{FinishCatalog, FinishOption};
pub use material::{Material, MaterialCatalog};
pub use request::QuoteRequest;

/// 報價錯誤類型
///
/// 詳細報價路徑唯一的硬錯誤是材料不存在；其餘異常輸入
/// 一律走「退化輸入 → 全零明細」的路徑，不回傳錯誤。
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    /// 找不到材料（錯誤訊息即對外 API 的回應文案）
    #[error("invalid material: {0}")]
    MaterialNotFound(String),
}

/// 報價結果類型
pub type Result<T> = std::result::Result<T, QuoteError>;
