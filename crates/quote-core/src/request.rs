//! 報價請求

use serde::{Deserialize, Serialize};

/// 詳細報價請求
///
/// 尺寸（mm）與體積（cm3）皆為可選：體積優先，缺體積時由
/// 長寬高推導，兩者都沒有就視為退化輸入。所有欄位對應
/// 前端表單的 camelCase JSON 鍵。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// 長（mm）
    pub length: Option<f64>,
    /// 寬（mm）
    pub width: Option<f64>,
    /// 高（mm）
    pub height: Option<f64>,
    /// 體積（cm3），優先於尺寸推導
    pub volume: Option<f64>,
    /// 材料 ID
    pub material: String,
    /// 填充率（%），超過 100 以 100 計
    #[serde(default = "default_infill")]
    pub infill: u8,
    /// 層高（mm）
    #[serde(default = "default_layer_height")]
    pub layer_height: f64,
    /// 數量，小於 1 以 1 計
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    /// 表面處理 ID
    #[serde(default)]
    pub finish: Option<String>,
    /// 是否急件
    #[serde(default)]
    pub rush: bool,
}

fn default_infill() -> u8 {
    20
}

fn default_layer_height() -> f64 {
    0.2
}

fn default_quantity() -> i64 {
    1
}

impl QuoteRequest {
    /// 創建新的報價請求（使用預設參數）
    pub fn new(material: String) -> Self {
        Self {
            length: None,
            width: None,
            height: None,
            volume: None,
            material,
            infill: default_infill(),
            layer_height: default_layer_height(),
            quantity: default_quantity(),
            finish: None,
            rush: false,
        }
    }

    /// 建構器模式：設置長寬高（mm）
    pub fn with_dimensions(mut self, length: f64, width: f64, height: f64) -> Self {
        self.length = Some(length);
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// 建構器模式：直接指定體積（cm3）
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    /// 建構器模式：設置填充率
    pub fn with_infill(mut self, infill: u8) -> Self {
        self.infill = infill.min(100); // 限制在 0-100
        self
    }

    /// 建構器模式：設置層高（mm）
    pub fn with_layer_height(mut self, layer_height: f64) -> Self {
        self.layer_height = layer_height;
        self
    }

    /// 建構器模式：設置數量
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    /// 建構器模式：設置表面處理
    pub fn with_finish(mut self, finish: String) -> Self {
        self.finish = Some(finish);
        self
    }

    /// 建構器模式：設為急件
    pub fn with_rush(mut self, rush: bool) -> Self {
        self.rush = rush;
        self
    }
}
