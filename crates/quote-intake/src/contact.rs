//! 聯絡表單

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::lead::LeadStatus;
use crate::{IntakeError, Result};

/// 允許上傳的模型檔副檔名
pub const ALLOWED_FILE_EXTENSIONS: [&str; 4] = ["stl", "obj", "step", "stp"];
/// 單一附件大小上限（50 MB）
pub const MAX_FILE_SIZE_BYTES: u64 = 50 * 1024 * 1024;
/// 留言最短長度（字元數）
pub const MIN_MESSAGE_LENGTH: usize = 20;

/// 附件中繼資料
///
/// 進件只檢查檔名與大小，檔案內容的接收不在這層處理。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentMeta {
    pub file_name: String,
    pub size_bytes: u64,
}

impl AttachmentMeta {
    /// 創建附件中繼資料
    pub fn new(file_name: String, size_bytes: u64) -> Self {
        Self {
            file_name,
            size_bytes,
        }
    }
}

/// 聯絡表單提交內容
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    /// 專案類型（prototyping、custom-parts、design、quote）
    #[serde(default)]
    pub project_type: Option<String>,
    /// 模型複雜度（詢價導流時夾帶）
    #[serde(default)]
    pub complexity: Option<String>,
    /// 材料偏好（詢價導流時夾帶）
    #[serde(default)]
    pub material: Option<String>,
    /// 數量欄位，表單上是自由文字
    #[serde(default)]
    pub quantity: Option<String>,
    /// 期望交期
    #[serde(default)]
    pub delivery_date: Option<NaiveDate>,
    #[serde(default)]
    pub attachments: Vec<AttachmentMeta>,
}

impl ContactSubmission {
    /// 創建新的聯絡表單提交
    pub fn new(name: String, email: String, message: String) -> Self {
        Self {
            name,
            email,
            message,
            project_type: None,
            complexity: None,
            material: None,
            quantity: None,
            delivery_date: None,
            attachments: Vec::new(),
        }
    }

    /// 建構器模式：設置專案類型
    pub fn with_project_type(mut self, project_type: String) -> Self {
        self.project_type = Some(project_type);
        self
    }

    /// 建構器模式：設置詢價導流夾帶的欄位
    pub fn with_quote_fields(
        mut self,
        material: String,
        quantity: String,
        complexity: String,
    ) -> Self {
        self.material = Some(material);
        self.quantity = Some(quantity);
        self.complexity = Some(complexity);
        self
    }

    /// 建構器模式：設置期望交期
    pub fn with_delivery_date(mut self, delivery_date: NaiveDate) -> Self {
        self.delivery_date = Some(delivery_date);
        self
    }

    /// 建構器模式：附加檔案
    pub fn with_attachment(mut self, attachment: AttachmentMeta) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// 驗證提交內容
    ///
    /// 依表單順序檢查，回傳第一個不過的欄位錯誤。
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(IntakeError::NameRequired);
        }
        if self.email.trim().is_empty() {
            return Err(IntakeError::EmailRequired);
        }
        if !is_valid_email(&self.email) {
            return Err(IntakeError::EmailInvalid);
        }
        if self.message.trim().is_empty() {
            return Err(IntakeError::MessageRequired);
        }
        if self.message.trim().chars().count() < MIN_MESSAGE_LENGTH {
            return Err(IntakeError::MessageTooShort);
        }
        for attachment in &self.attachments {
            validate_attachment(attachment)?;
        }
        Ok(())
    }
}

/// 已受理的聯絡表單記錄
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub project_type: Option<String>,
    pub complexity: Option<String>,
    pub material: Option<String>,
    pub quantity: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    /// 附件檔名清單
    pub files: Vec<String>,
    pub submitted_at: DateTime<Utc>,
    pub status: LeadStatus,
}

/// 受理聯絡表單：驗證、記錄並回傳受理記錄
pub fn submit_contact_form(submission: ContactSubmission) -> Result<ContactRecord> {
    submission.validate()?;

    let record = ContactRecord {
        id: Uuid::new_v4(),
        files: submission
            .attachments
            .iter()
            .map(|attachment| attachment.file_name.clone())
            .collect(),
        name: submission.name,
        email: submission.email,
        message: submission.message,
        project_type: submission.project_type,
        complexity: submission.complexity,
        material: submission.material,
        quantity: submission.quantity,
        delivery_date: submission.delivery_date,
        submitted_at: Utc::now(),
        status: LeadStatus::New,
    };

    tracing::info!("收到聯絡表單: {} <{}>", record.name, record.email);
    if let Some(project_type) = &record.project_type {
        tracing::debug!("專案類型: {}", project_type);
    }
    if !record.files.is_empty() {
        tracing::debug!("附件 {} 件", record.files.len());
    }

    Ok(record)
}

/// 檢查 email 形狀，等價於網站端的 `^[^\s@]+@[^\s@]+\.[^\s@]+$` 規則
pub(crate) fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }

    // 網域至少要有一個不在頭尾的句點
    domain
        .match_indices('.')
        .any(|(index, _)| index > 0 && index < domain.len() - 1)
}

fn validate_attachment(attachment: &AttachmentMeta) -> Result<()> {
    // 空檔案視同沒有附件
    if attachment.size_bytes == 0 {
        return Ok(());
    }

    let extension = attachment
        .file_name
        .rsplit_once('.')
        .map(|(_, extension)| extension.to_ascii_lowercase());
    match extension {
        Some(extension) if ALLOWED_FILE_EXTENSIONS.contains(&extension.as_str()) => {}
        _ => return Err(IntakeError::FileTypeNotAllowed),
    }

    if attachment.size_bytes > MAX_FILE_SIZE_BYTES {
        return Err(IntakeError::FileTooLarge);
    }

    Ok(())
}
