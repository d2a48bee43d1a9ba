//! 前台進件處理
//!
//! 聯絡表單、電子報訂閱與報價線索的驗證及受理。提交內容
//! 只做驗證、記錄與回傳，不落地儲存；[`LeadLog`] 僅存在
//! 記憶體中，供後台總覽使用。

pub mod contact;
pub mod lead;
pub mod log;
pub mod newsletter;

// Re-export 主要類型
pub use contact::{submit_contact_form, AttachmentMeta, ContactRecord, ContactSubmission};
pub use lead::{LeadStatus, QuoteLead};
pub use log::LeadLog;
pub use newsletter::{subscribe_newsletter, SubscriptionRecord};

/// 進件驗證錯誤
///
/// 錯誤訊息即網站表單的回饋文案，直接顯示給訪客。
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("Name is required.")]
    NameRequired,

    #[error("Email is required.")]
    EmailRequired,

    #[error("Please enter a valid email address.")]
    EmailInvalid,

    #[error("Message is required.")]
    MessageRequired,

    #[error("Message must be at least 20 characters long.")]
    MessageTooShort,

    #[error("File type not allowed. Please upload .stl, .obj, .step, .stp files.")]
    FileTypeNotAllowed,

    #[error("File size must be less than 50MB.")]
    FileTooLarge,
}

/// 進件結果類型
pub type Result<T> = std::result::Result<T, IntakeError>;
