//! printquote：3D 列印服務報價引擎
//!
//! 匯集三個子 crate 的公開介面：
//! - `quote-core`：資料模型與目錄
//! - `quote-calc`：詳細報價與快速估價
//! - `quote-intake`：前台進件驗證與線索記錄

pub use quote_calc::{
    GeometryCalculator, ModelDimensions, PrintTimeEstimator, QuickEstimateInput, QuickEstimator,
    QuoteCalculator,
};
pub use quote_core::{
    FinishCatalog, FinishOption, Material, MaterialCatalog, QuoteBreakdown, QuoteError,
    QuoteRequest, Result,
};
pub use quote_intake::{
    submit_contact_form, subscribe_newsletter, AttachmentMeta, ContactRecord, ContactSubmission,
    IntakeError, LeadLog, LeadStatus, QuoteLead, SubscriptionRecord,
};
