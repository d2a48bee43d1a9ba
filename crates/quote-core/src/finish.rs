//! 表面處理目錄

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 表面處理選項
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishOption {
    /// 處理 ID（查詢鍵）
    pub id: String,
    /// 顯示名稱
    pub name: String,
    /// 價格倍率（乘在材料成本上，1.0 表示不加價）
    #[serde(with = "rust_decimal::serde::float")]
    pub price_multiplier: Decimal,
}

impl FinishOption {
    /// 創建新的表面處理選項
    pub fn new(id: String, name: String, price_multiplier: Decimal) -> Self {
        Self {
            id,
            name,
            price_multiplier,
        }
    }
}

/// 表面處理目錄
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishCatalog {
    finishes: Vec<FinishOption>,
}

impl FinishCatalog {
    /// 以自訂選項清單建立目錄
    pub fn new(finishes: Vec<FinishOption>) -> Self {
        Self { finishes }
    }

    /// 內建標準目錄（四種處理）
    pub fn standard() -> Self {
        Self::new(vec![
            FinishOption::new(
                "as-printed".to_string(),
                "As Printed".to_string(),
                Decimal::ONE,
            ),
            FinishOption::new("sanded".to_string(), "Sanded".to_string(), Decimal::new(12, 1)),
            FinishOption::new(
                "painted".to_string(),
                "Painted".to_string(),
                Decimal::new(15, 1),
            ),
            FinishOption::new(
                "polished".to_string(),
                "Polished".to_string(),
                Decimal::from(2),
            ),
        ])
    }

    /// 依 ID 查找處理選項（區分大小寫）
    pub fn find(&self, id: &str) -> Option<&FinishOption> {
        self.finishes.iter().find(|finish| finish.id == id)
    }

    /// 解析價格倍率
    ///
    /// 未指定或查無此處理時回傳 1.0，表面處理的解析永不失敗。
    pub fn multiplier_for(&self, id: Option<&str>) -> Decimal {
        id.and_then(|id| self.find(id))
            .map(|finish| finish.price_multiplier)
            .unwrap_or(Decimal::ONE)
    }

    /// 列出全部處理選項
    pub fn list(&self) -> &[FinishOption] {
        &self.finishes
    }
}

impl Default for FinishCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
