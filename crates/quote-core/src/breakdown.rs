//! 費用明細

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 詳細報價明細
///
/// 所有欄位皆為已四捨五入到小數點後兩位的金額，序列化時
/// 輸出 JSON 數字而非字串。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBreakdown {
    /// 材料成本
    #[serde(with = "rust_decimal::serde::float")]
    pub material_cost: Decimal,
    /// 機時與人工成本
    #[serde(with = "rust_decimal::serde::float")]
    pub time_cost: Decimal,
    /// 表面處理成本
    #[serde(with = "rust_decimal::serde::float")]
    pub finishing_cost: Decimal,
    /// 運費
    #[serde(with = "rust_decimal::serde::float")]
    pub shipping_cost: Decimal,
    /// 小計（四項成本合計）
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    /// 量大折扣
    #[serde(with = "rust_decimal::serde::float")]
    pub bulk_discount: Decimal,
    /// 急件加價
    #[serde(with = "rust_decimal::serde::float")]
    pub rush_surcharge: Decimal,
    /// 總計
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl QuoteBreakdown {
    /// 全零明細（退化輸入時回傳）
    pub fn zero() -> Self {
        Self {
            material_cost: Decimal::ZERO,
            time_cost: Decimal::ZERO,
            finishing_cost: Decimal::ZERO,
            shipping_cost: Decimal::ZERO,
            subtotal: Decimal::ZERO,
            bulk_discount: Decimal::ZERO,
            rush_surcharge: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }

    /// 是否為全零明細
    pub fn is_zero(&self) -> bool {
        self.material_cost.is_zero()
            && self.time_cost.is_zero()
            && self.finishing_cost.is_zero()
            && self.shipping_cost.is_zero()
            && self.subtotal.is_zero()
            && self.bulk_discount.is_zero()
            && self.rush_surcharge.is_zero()
            && self.total.is_zero()
    }
}
