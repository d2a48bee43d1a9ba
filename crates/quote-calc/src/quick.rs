//! 快速估價
//!
//! 行銷頁面的即時估價小工具走的粗略路徑。數量階梯、急件倍率
//! 與捨入規則都是這條路徑自己的，刻意不跟詳細報價器對齊。

use quote_core::MaterialCatalog;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::geometry::GeometryCalculator;

/// 數量上限，超出以上限計
const MAX_QUANTITY: i64 = 1_000_000_000;

/// 快速估價輸入
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickEstimateInput {
    /// 長（mm）
    pub length: f64,
    /// 寬（mm）
    pub width: f64,
    /// 高（mm）
    pub height: f64,
    /// 材料 ID
    pub material: String,
    /// 數量
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    /// 是否急件
    #[serde(default)]
    pub rush: bool,
}

fn default_quantity() -> i64 {
    1
}

impl QuickEstimateInput {
    /// 創建快速估價輸入
    pub fn new(material: String, length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
            material,
            quantity: 1,
            rush: false,
        }
    }

    /// 建構器模式：設置數量
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    /// 建構器模式：設為急件
    pub fn with_rush(mut self, rush: bool) -> Self {
        self.rush = rush;
        self
    }
}

/// 快速估價器
pub struct QuickEstimator;

impl QuickEstimator {
    /// 粗略估價，回傳捨入到整數的金額
    ///
    /// 材料不存在或任一尺寸無效時回傳 0，這條路徑永不失敗。
    pub fn estimate(materials: &MaterialCatalog, input: &QuickEstimateInput) -> Decimal {
        let material = match materials.find(&input.material) {
            Some(material) => material,
            None => return Decimal::ZERO,
        };
        let volume = match GeometryCalculator::volume_from_dimensions(
            input.length,
            input.width,
            input.height,
        ) {
            Some(volume) => volume,
            None => return Decimal::ZERO,
        };

        let quantity = input.quantity.clamp(1, MAX_QUANTITY);

        // 這條路徑自己的數量階梯: 10 件以上 85 折, 5 件以上 9 折
        let quantity_factor = if quantity > 10 {
            Decimal::new(85, 2)
        } else if quantity > 5 {
            Decimal::new(9, 1)
        } else {
            Decimal::ONE
        };
        let rush_factor = if input.rush {
            Decimal::new(15, 1)
        } else {
            Decimal::ONE
        };

        let base = material.base_price_per_cm3 * volume;
        let estimate = base * Decimal::from(quantity) * quantity_factor * rush_factor;

        round_whole(estimate)
    }
}

/// 捨入到整數金額（0.5 一律進位）
fn round_whole(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn cube_input() -> QuickEstimateInput {
        QuickEstimateInput::new("pla".to_string(), 100.0, 100.0, 100.0)
    }

    #[test]
    fn test_quick_estimate_baseline() {
        let materials = MaterialCatalog::standard();
        // 1000 cm3 × 0.05 = 50
        assert_eq!(
            QuickEstimator::estimate(&materials, &cube_input()),
            Decimal::from(50)
        );
    }

    #[rstest]
    #[case(5, Decimal::from(250))] // 階梯是嚴格大於: 5 件不打折
    #[case(6, Decimal::from(270))]
    #[case(10, Decimal::from(450))]
    #[case(11, Decimal::from(468))] // 467.5 進位
    fn test_quantity_ladder(#[case] quantity: i64, #[case] expected: Decimal) {
        let materials = MaterialCatalog::standard();
        let input = cube_input().with_quantity(quantity);
        assert_eq!(QuickEstimator::estimate(&materials, &input), expected);
    }

    #[test]
    fn test_rush_multiplier() {
        let materials = MaterialCatalog::standard();
        let input = cube_input().with_rush(true);
        assert_eq!(
            QuickEstimator::estimate(&materials, &input),
            Decimal::from(75)
        );

        // 數量階梯與急件倍率相乘: 50 × 11 × 0.85 × 1.5 = 701.25
        let bulk_rush = cube_input().with_quantity(11).with_rush(true);
        assert_eq!(
            QuickEstimator::estimate(&materials, &bulk_rush),
            Decimal::from(701)
        );
    }

    #[test]
    fn test_unresolved_inputs_estimate_zero() {
        let materials = MaterialCatalog::standard();

        let unknown = QuickEstimateInput::new("unobtainium".to_string(), 100.0, 100.0, 100.0);
        assert_eq!(
            QuickEstimator::estimate(&materials, &unknown),
            Decimal::ZERO
        );

        let flat = QuickEstimateInput::new("pla".to_string(), 100.0, 0.0, 100.0);
        assert_eq!(QuickEstimator::estimate(&materials, &flat), Decimal::ZERO);

        let broken = QuickEstimateInput::new("pla".to_string(), f64::NAN, 100.0, 100.0);
        assert_eq!(QuickEstimator::estimate(&materials, &broken), Decimal::ZERO);
    }

    #[test]
    fn test_non_positive_quantity_counts_as_one() {
        let materials = MaterialCatalog::standard();
        let input = cube_input().with_quantity(-4);
        assert_eq!(
            QuickEstimator::estimate(&materials, &input),
            Decimal::from(50)
        );
    }

    #[test]
    fn test_deserialize_widget_payload() {
        // 小工具表單送來的 camelCase JSON，數量與急件可省略
        let input: QuickEstimateInput = serde_json::from_str(
            r#"{"length":100,"width":100,"height":100,"material":"pla"}"#,
        )
        .unwrap();
        assert_eq!(input.quantity, 1);
        assert!(!input.rush);

        let materials = MaterialCatalog::standard();
        assert_eq!(
            QuickEstimator::estimate(&materials, &input),
            Decimal::from(50)
        );
    }
}
