//! 詳細報價計算器
//!
//! 正式報價的權威路徑：逐項計算材料、機時、表面處理與運費，
//! 再套用量大折扣與急件加價，最後統一捨入。

use quote_core::{
    FinishCatalog, MaterialCatalog, QuoteBreakdown, QuoteError, QuoteRequest, Result,
};
use rayon::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::geometry::{self, GeometryCalculator};
use crate::print_time::PrintTimeEstimator;

/// 機台費率（每小時）
const MACHINE_RATE_PER_HOUR: i64 = 5;
/// 人工費率（每小時）
const LABOR_RATE_PER_HOUR: i64 = 15;
/// 基本運費
const SHIPPING_BASE: i64 = 15;
/// 第二件起每件追加運費
const SHIPPING_PER_EXTRA_UNIT: i64 = 5;
/// 數量上限，超出以上限計，避免金額超出 Decimal 可表示範圍
const MAX_QUANTITY: i64 = 1_000_000_000;
/// 單件列印時數上限，超出視為退化輸入，避免金額超出 Decimal 可表示範圍
const MAX_PRINT_HOURS: i64 = 1_000_000_000_000;

/// 詳細報價計算器
///
/// 目錄由外部注入，測試可以帶自訂目錄；正式流程用
/// [`QuoteCalculator::standard`] 取得內建目錄。
pub struct QuoteCalculator {
    materials: MaterialCatalog,
    finishes: FinishCatalog,
}

impl QuoteCalculator {
    /// 以自訂目錄創建計算器
    pub fn new(materials: MaterialCatalog, finishes: FinishCatalog) -> Self {
        Self {
            materials,
            finishes,
        }
    }

    /// 使用內建標準目錄
    pub fn standard() -> Self {
        Self::new(MaterialCatalog::standard(), FinishCatalog::standard())
    }

    /// 材料目錄
    pub fn materials(&self) -> &MaterialCatalog {
        &self.materials
    }

    /// 表面處理目錄
    pub fn finishes(&self) -> &FinishCatalog {
        &self.finishes
    }

    /// 計算詳細報價
    ///
    /// 唯一的硬錯誤是材料不存在。無可用體積、層高非正數或
    /// 工時超出支援範圍都屬於退化輸入，直接回傳全零明細；
    /// 數量小於 1 以 1 計。
    pub fn calculate(&self, request: &QuoteRequest) -> Result<QuoteBreakdown> {
        tracing::debug!(
            "開始報價計算: 材料 {}, 數量 {}",
            request.material,
            request.quantity
        );

        // Step 1: 解析材料，唯一會失敗的步驟
        let material = self
            .materials
            .find(&request.material)
            .ok_or_else(|| QuoteError::MaterialNotFound(request.material.clone()))?;

        // Step 2: 確定體積，直接給定的體積優先於長寬高推導
        let volume = Self::resolve_volume(request);
        let layer_height = geometry::dimension_value(request.layer_height);

        // Step 3: 退化輸入直接回全零明細
        let (volume, layer_height) = match (volume, layer_height) {
            (Some(volume), Some(layer_height)) => (volume, layer_height),
            _ => {
                tracing::debug!("退化輸入(無可用體積或層高), 回傳全零明細");
                return Ok(QuoteBreakdown::zero());
            }
        };

        let quantity = request.quantity.clamp(1, MAX_QUANTITY);
        let quantity_dec = Decimal::from(quantity);

        // Step 4: 材料成本
        let material_cost = volume * material.base_price_per_cm3 * quantity_dec;

        // Step 5: 機時與人工成本，工時超出支援範圍視為退化輸入
        let print_hours =
            match PrintTimeEstimator::estimate(volume, material, layer_height, request.infill) {
                Some(hours) if hours <= Decimal::from(MAX_PRINT_HOURS) => hours,
                _ => {
                    tracing::debug!("列印時間超出支援範圍, 回傳全零明細");
                    return Ok(QuoteBreakdown::zero());
                }
            };
        let hourly_rate = Decimal::from(MACHINE_RATE_PER_HOUR + LABOR_RATE_PER_HOUR);
        let time_cost = print_hours * hourly_rate * quantity_dec;

        // Step 6: 表面處理成本，未解析的處理視為原樣列印
        let multiplier = self.finishes.multiplier_for(request.finish.as_deref());
        let finishing_cost = material_cost * (multiplier - Decimal::ONE);

        // Step 7: 運費
        let shipping_cost = Self::shipping_cost(quantity);

        // Step 8: 小計、折扣與加價都算在未捨入的小計上
        let subtotal = material_cost + time_cost + finishing_cost + shipping_cost;
        let bulk_discount = subtotal * Self::bulk_discount_rate(quantity);
        let rush_surcharge = if request.rush {
            subtotal * Decimal::new(5, 1)
        } else {
            Decimal::ZERO
        };
        let total = subtotal - bulk_discount + rush_surcharge;

        tracing::debug!("體積 {} cm3, 單件列印 {} 小時", volume, print_hours);

        let breakdown = QuoteBreakdown {
            material_cost: round_money(material_cost),
            time_cost: round_money(time_cost),
            finishing_cost: round_money(finishing_cost),
            shipping_cost: round_money(shipping_cost),
            subtotal: round_money(subtotal),
            bulk_discount: round_money(bulk_discount),
            rush_surcharge: round_money(rush_surcharge),
            total: round_money(total),
        };

        tracing::info!(
            "報價完成: 材料 {}, 數量 {}, 總計 {}",
            request.material,
            quantity,
            breakdown.total
        );

        Ok(breakdown)
    }

    /// 批次報價（rayon 平行），結果順序與輸入一致
    ///
    /// 單筆失敗不影響其他請求。
    pub fn calculate_batch(&self, requests: &[QuoteRequest]) -> Vec<Result<QuoteBreakdown>> {
        requests
            .par_iter()
            .map(|request| self.calculate(request))
            .collect()
    }

    fn resolve_volume(request: &QuoteRequest) -> Option<Decimal> {
        request
            .volume
            .and_then(geometry::volume_value)
            .or_else(|| match (request.length, request.width, request.height) {
                (Some(length), Some(width), Some(height)) => {
                    GeometryCalculator::volume_from_dimensions(length, width, height)
                }
                _ => None,
            })
    }

    fn shipping_cost(quantity: i64) -> Decimal {
        if quantity > 1 {
            Decimal::from(SHIPPING_BASE)
                + Decimal::from(quantity - 1) * Decimal::from(SHIPPING_PER_EXTRA_UNIT)
        } else {
            Decimal::from(SHIPPING_BASE)
        }
    }

    /// 量大折扣率: 50 件以上 20%, 20 件 15%, 10 件 10%, 5 件 5%
    fn bulk_discount_rate(quantity: i64) -> Decimal {
        if quantity >= 50 {
            Decimal::new(20, 2)
        } else if quantity >= 20 {
            Decimal::new(15, 2)
        } else if quantity >= 10 {
            Decimal::new(10, 2)
        } else if quantity >= 5 {
            Decimal::new(5, 2)
        } else {
            Decimal::ZERO
        }
    }
}

impl Default for QuoteCalculator {
    fn default() -> Self {
        Self::standard()
    }
}

/// 金額四捨五入到小數點後兩位（0.5 一律進位）
fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
