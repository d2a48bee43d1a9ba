//! 進件流程示範
//!
//! 啟用 tracing 訂閱器，走一遍聯絡表單、報價線索與記錄簿的
//! 受理流程。
//!
//! 執行: cargo run --example lead_intake

use chrono::NaiveDate;
use printquote::{
    submit_contact_form, subscribe_newsletter, AttachmentMeta, ContactSubmission, LeadLog,
    QuoteCalculator, QuoteLead, QuoteRequest,
};
use tracing_subscriber::filter::LevelFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    println!("[1] 受理聯絡表單");
    let delivery = NaiveDate::from_ymd_opt(2026, 9, 4).ok_or("invalid date")?;
    let submission = ContactSubmission::new(
        "Lin Wei".to_string(),
        "lin.wei@example.com".to_string(),
        "Need 50 PETG enclosures within two weeks, model attached.".to_string(),
    )
    .with_project_type("quote".to_string())
    .with_quote_fields("petg".to_string(), "50".to_string(), "medium".to_string())
    .with_delivery_date(delivery)
    .with_attachment(AttachmentMeta::new("enclosure.stl".to_string(), 2_400_000));
    let message = submit_contact_form(submission)?;
    println!("   受理編號: {}", message.id);

    println!("\n[2] 產生報價線索");
    let calculator = QuoteCalculator::standard();
    let request = QuoteRequest::new("petg".to_string())
        .with_dimensions(80.0, 60.0, 40.0)
        .with_quantity(50);
    let breakdown = calculator.calculate(&request)?;
    let lead = QuoteLead::from_quote(&request, &breakdown);
    println!("   估價: {}", lead.estimated_price);

    println!("\n[3] 記錄簿");
    let mut log = LeadLog::new();
    let lead_id = lead.id;
    log.record_message(message);
    log.record_quote(lead);
    println!("   待回覆線索: {}", log.new_quote_count());

    log.mark_quote_replied(lead_id);
    println!("   回覆後待回覆線索: {}", log.new_quote_count());

    println!("\n[4] 電子報訂閱");
    let subscription = subscribe_newsletter("lin.wei@example.com")?;
    println!("   訂閱編號: {}", subscription.id);

    Ok(())
}
