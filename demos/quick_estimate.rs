//! 快速估價示範
//!
//! 對應官網首頁的即時估價小工具：輸入尺寸與材料，馬上回一個
//! 粗略的整數金額。
//!
//! 執行: cargo run --example quick_estimate

use printquote::{MaterialCatalog, QuickEstimateInput, QuickEstimator};

fn main() {
    let materials = MaterialCatalog::standard();

    println!("=== 快速估價 ===\n");

    let input = QuickEstimateInput::new("pla".to_string(), 100.0, 100.0, 100.0);
    println!(
        "PLA 100mm 立方 x1: {}",
        QuickEstimator::estimate(&materials, &input)
    );

    let bulk = input.clone().with_quantity(12);
    println!(
        "同件 x12 (85 折): {}",
        QuickEstimator::estimate(&materials, &bulk)
    );

    let rush = bulk.with_rush(true);
    println!(
        "再改急件 (1.5 倍): {}",
        QuickEstimator::estimate(&materials, &rush)
    );

    // 查無材料或尺寸不完整都直接估 0，小工具永不報錯
    let unknown = QuickEstimateInput::new("unobtainium".to_string(), 100.0, 100.0, 100.0);
    println!(
        "查無材料: {}",
        QuickEstimator::estimate(&materials, &unknown)
    );
}
