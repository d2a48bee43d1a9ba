//! 線索記錄簿
//!
//! 後台總覽的資料層。只存在記憶體中，行程結束即消失，
//! 持久化儲存明確不在範圍內。

use uuid::Uuid;

use crate::contact::ContactRecord;
use crate::lead::{LeadStatus, QuoteLead};

/// 線索記錄簿
#[derive(Debug, Default)]
pub struct LeadLog {
    quotes: Vec<QuoteLead>,
    messages: Vec<ContactRecord>,
}

impl LeadLog {
    /// 創建空的記錄簿
    pub fn new() -> Self {
        Self::default()
    }

    /// 記錄一筆報價線索
    pub fn record_quote(&mut self, lead: QuoteLead) {
        self.quotes.push(lead);
    }

    /// 記錄一筆聯絡表單
    pub fn record_message(&mut self, record: ContactRecord) {
        self.messages.push(record);
    }

    /// 全部報價線索（依受理順序）
    pub fn quotes(&self) -> &[QuoteLead] {
        &self.quotes
    }

    /// 全部聯絡表單記錄（依受理順序）
    pub fn messages(&self) -> &[ContactRecord] {
        &self.messages
    }

    /// 將指定線索標記為已回覆，回傳是否有找到
    pub fn mark_quote_replied(&mut self, id: Uuid) -> bool {
        match self.quotes.iter_mut().find(|lead| lead.id == id) {
            Some(lead) => {
                lead.mark_replied();
                true
            }
            None => false,
        }
    }

    /// 將指定聯絡表單標記為已回覆，回傳是否有找到
    pub fn mark_message_replied(&mut self, id: Uuid) -> bool {
        match self.messages.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                record.status = LeadStatus::Replied;
                true
            }
            None => false,
        }
    }

    /// 尚未回覆的報價線索數
    pub fn new_quote_count(&self) -> usize {
        self.quotes
            .iter()
            .filter(|lead| lead.status == LeadStatus::New)
            .count()
    }

    /// 尚未回覆的聯絡表單數
    pub fn new_message_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|record| record.status == LeadStatus::New)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{submit_contact_form, ContactSubmission};
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;
    use quote_core::{QuoteBreakdown, QuoteRequest};
    use rand::Rng;

    fn fake_message_record() -> ContactRecord {
        let submission = ContactSubmission::new(
            Name().fake(),
            SafeEmail().fake(),
            "Looking for a small production run of printed parts.".to_string(),
        );
        submit_contact_form(submission).unwrap()
    }

    fn fake_lead() -> QuoteLead {
        let mut rng = rand::thread_rng();
        let request = QuoteRequest::new("pla".to_string())
            .with_dimensions(
                rng.gen_range(10.0..200.0),
                rng.gen_range(10.0..200.0),
                rng.gen_range(10.0..200.0),
            )
            .with_quantity(rng.gen_range(1..=60));
        QuoteLead::from_quote(&request, &QuoteBreakdown::zero())
    }

    #[test]
    fn test_log_keeps_intake_order() {
        let mut log = LeadLog::new();
        for _ in 0..5 {
            log.record_quote(fake_lead());
            log.record_message(fake_message_record());
        }

        assert_eq!(log.quotes().len(), 5);
        assert_eq!(log.messages().len(), 5);
        assert_eq!(log.new_quote_count(), 5);
        assert_eq!(log.new_message_count(), 5);
    }

    #[test]
    fn test_mark_quote_replied() {
        let mut log = LeadLog::new();
        log.record_quote(fake_lead());
        log.record_quote(fake_lead());
        let id = log.quotes()[0].id;

        assert!(log.mark_quote_replied(id));
        assert_eq!(log.new_quote_count(), 1);
        assert_eq!(log.quotes()[0].status, LeadStatus::Replied);

        // 查無此 ID
        assert!(!log.mark_quote_replied(Uuid::new_v4()));
    }

    #[test]
    fn test_mark_message_replied() {
        let mut log = LeadLog::new();
        log.record_message(fake_message_record());
        let id = log.messages()[0].id;

        assert!(log.mark_message_replied(id));
        assert_eq!(log.new_message_count(), 0);
    }
}
