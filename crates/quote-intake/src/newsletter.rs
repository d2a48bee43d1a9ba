//! 電子報訂閱

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contact::is_valid_email;
use crate::{IntakeError, Result};

/// 電子報訂閱記錄
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRecord {
    pub id: Uuid,
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
}

/// 受理電子報訂閱
pub fn subscribe_newsletter(email: &str) -> Result<SubscriptionRecord> {
    if email.trim().is_empty() {
        return Err(IntakeError::EmailRequired);
    }
    if !is_valid_email(email) {
        return Err(IntakeError::EmailInvalid);
    }

    let record = SubscriptionRecord {
        id: Uuid::new_v4(),
        email: email.to_string(),
        subscribed_at: Utc::now(),
    };

    tracing::info!("電子報訂閱: {}", record.email);

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_with_valid_email() {
        let record = subscribe_newsletter("maker@example.com").unwrap();
        assert_eq!(record.email, "maker@example.com");
    }

    #[test]
    fn test_subscribe_rejects_bad_input() {
        assert_eq!(
            subscribe_newsletter("   ").unwrap_err(),
            IntakeError::EmailRequired
        );
        assert_eq!(
            subscribe_newsletter("not-an-email").unwrap_err(),
            IntakeError::EmailInvalid
        );
    }
}
