//! 幾何計算
//!
//! 尺寸（mm）轉體積（cm3），以及從上傳的模型檔推導外觀尺寸。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 單一尺寸上限（mm），超出視為無效輸入
const MAX_DIMENSION_MM: f64 = 10_000_000.0;
/// 體積上限（cm3），直接給定與推導的體積一體適用
const MAX_VOLUME_CM3: i64 = 1_000_000_000_000;

/// 模型外觀尺寸（由模型檔推導，單位同報價請求）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDimensions {
    /// 長（mm）
    pub length: f64,
    /// 寬（mm）
    pub width: f64,
    /// 高（mm）
    pub height: f64,
    /// 邊界盒體積（cm3）
    pub volume: f64,
}

/// 幾何計算器
pub struct GeometryCalculator;

impl GeometryCalculator {
    /// 長寬高（mm）轉體積（cm3）：(長 × 寬 × 高) / 1000
    ///
    /// 任一維度非有限正數、超出支援範圍，或體積捨入後
    /// 歸零時回傳 None。
    pub fn volume_from_dimensions(length: f64, width: f64, height: f64) -> Option<Decimal> {
        let length = dimension_value(length)?;
        let width = dimension_value(width)?;
        let height = dimension_value(height)?;

        let volume = length * width * height / Decimal::from(1000);
        if volume <= Decimal::ZERO || volume > Decimal::from(MAX_VOLUME_CM3) {
            return None;
        }
        Some(volume)
    }

    /// 從 OBJ 檔內容推導模型外觀尺寸
    ///
    /// 解析 `v` 頂點行取得邊界盒；模型單位視為 cm，輸出 mm（×10）。
    /// 無法解析的頂點行直接略過；完全沒有頂點時回傳 100mm 立方的
    /// 範例樣品尺寸，與前端上傳流程的預設樣品一致。
    pub fn dimensions_from_obj(content: &str) -> ModelDimensions {
        let mut min = [f64::INFINITY; 3];
        let mut max = [f64::NEG_INFINITY; 3];
        let mut vertex_count = 0usize;

        for line in content.lines() {
            let line = line.trim();
            if !line.starts_with("v ") {
                continue;
            }

            let coords: Vec<f64> = line
                .split_whitespace()
                .skip(1)
                .take(3)
                .filter_map(|part| part.parse::<f64>().ok())
                .filter(|coord| coord.is_finite())
                .collect();
            if coords.len() != 3 {
                continue;
            }

            for axis in 0..3 {
                min[axis] = min[axis].min(coords[axis]);
                max[axis] = max[axis].max(coords[axis]);
            }
            vertex_count += 1;
        }

        if vertex_count == 0 {
            // 沒有頂點資料：回傳範例樣品尺寸
            return ModelDimensions {
                length: 100.0,
                width: 100.0,
                height: 100.0,
                volume: 1000.0,
            };
        }

        let length = (max[0] - min[0]) * 10.0;
        let width = (max[1] - min[1]) * 10.0;
        let height = (max[2] - min[2]) * 10.0;
        let volume = (length * width * height) / 1000.0;

        ModelDimensions {
            length,
            width,
            height,
            volume,
        }
    }
}

/// 驗證尺寸（mm）：須為有限正數且在支援範圍內。
/// 小於 Decimal 最小刻度的值轉換後歸零，同樣視為無效。
pub(crate) fn dimension_value(value: f64) -> Option<Decimal> {
    if !value.is_finite() || value <= 0.0 || value > MAX_DIMENSION_MM {
        return None;
    }
    Decimal::try_from(value)
        .ok()
        .filter(|converted| *converted > Decimal::ZERO)
}

/// 驗證體積（cm3）：須為有限正數且在支援範圍內。
/// 小於 Decimal 最小刻度的值轉換後歸零，同樣視為無效。
pub(crate) fn volume_value(value: f64) -> Option<Decimal> {
    if !value.is_finite() || value <= 0.0 || value > MAX_VOLUME_CM3 as f64 {
        return None;
    }
    Decimal::try_from(value)
        .ok()
        .filter(|converted| *converted > Decimal::ZERO)
}
