//! 報價線索

use chrono::{DateTime, Utc};
use quote_core::{QuoteBreakdown, QuoteRequest};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 線索處理狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LeadStatus {
    New,
    Replied,
}

/// 報價線索
///
/// 訪客按下「索取正式報價」時的請求快照，連同當下算出的
/// 估價一起留存，業務後續跟進用。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLead {
    pub id: Uuid,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub material: String,
    pub quantity: i64,
    pub finish: Option<String>,
    pub rush: bool,
    /// 當下計算出的估價總額
    #[serde(with = "rust_decimal::serde::float")]
    pub estimated_price: Decimal,
    pub submitted_at: DateTime<Utc>,
    pub status: LeadStatus,
}

impl QuoteLead {
    /// 由報價請求與明細建立線索
    pub fn from_quote(request: &QuoteRequest, breakdown: &QuoteBreakdown) -> Self {
        let lead = Self {
            id: Uuid::new_v4(),
            length: request.length,
            width: request.width,
            height: request.height,
            material: request.material.clone(),
            quantity: request.quantity,
            finish: request.finish.clone(),
            rush: request.rush,
            estimated_price: breakdown.total,
            submitted_at: Utc::now(),
            status: LeadStatus::New,
        };

        tracing::info!(
            "報價線索: 材料 {}, 數量 {}, 估價 {}",
            lead.material,
            lead.quantity,
            lead.estimated_price
        );

        lead
    }

    /// 標記為已回覆
    pub fn mark_replied(&mut self) {
        self.status = LeadStatus::Replied;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_snapshots_request_and_price() {
        let request = QuoteRequest::new("nylon".to_string())
            .with_dimensions(80.0, 60.0, 40.0)
            .with_quantity(25)
            .with_finish("sanded".to_string())
            .with_rush(true);
        let breakdown = QuoteBreakdown {
            total: Decimal::new(123456, 2),
            ..QuoteBreakdown::zero()
        };

        let lead = QuoteLead::from_quote(&request, &breakdown);
        assert_eq!(lead.material, "nylon");
        assert_eq!(lead.quantity, 25);
        assert_eq!(lead.finish.as_deref(), Some("sanded"));
        assert!(lead.rush);
        assert_eq!(lead.estimated_price, Decimal::new(123456, 2));
        assert_eq!(lead.status, LeadStatus::New);
    }

    #[test]
    fn test_mark_replied() {
        let request = QuoteRequest::new("pla".to_string());
        let mut lead = QuoteLead::from_quote(&request, &QuoteBreakdown::zero());

        lead.mark_replied();
        assert_eq!(lead.status, LeadStatus::Replied);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_value(LeadStatus::New).unwrap();
        assert_eq!(json, serde_json::json!("new"));
        let json = serde_json::to_value(LeadStatus::Replied).unwrap();
        assert_eq!(json, serde_json::json!("replied"));
    }
}
