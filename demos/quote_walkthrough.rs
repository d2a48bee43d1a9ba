//! 詳細報價流程示範
//!
//! 從 camelCase JSON 請求到 JSON 明細的完整流程，
//! 也順帶展示模型檔尺寸推導。
//!
//! 執行: cargo run --example quote_walkthrough

use printquote::{GeometryCalculator, QuoteCalculator, QuoteRequest};

fn main() -> anyhow::Result<()> {
    println!("[1] 建立標準目錄與計算器");
    let calculator = QuoteCalculator::standard();
    for material in calculator.materials().list() {
        println!(
            "   - {} ({}): {}/cm3, {} mm/s",
            material.name, material.id, material.base_price_per_cm3, material.print_speed
        );
    }
    for finish in calculator.finishes().list() {
        println!("   - {} ({}): x{}", finish.name, finish.id, finish.price_multiplier);
    }

    println!("\n[2] 解析前端送來的 JSON 請求");
    let payload = r#"{
        "length": 100,
        "width": 100,
        "height": 100,
        "material": "pla",
        "infill": 20,
        "layerHeight": 0.2,
        "quantity": 10,
        "finish": "painted",
        "rush": true
    }"#;
    let request: QuoteRequest = serde_json::from_str(payload)?;
    println!("   材料 {} x{}, 急件: {}", request.material, request.quantity, request.rush);

    println!("\n[3] 計算費用明細");
    let breakdown = calculator.calculate(&request)?;
    println!("   材料成本: {}", breakdown.material_cost);
    println!("   機時成本: {}", breakdown.time_cost);
    println!("   表面處理: {}", breakdown.finishing_cost);
    println!("   運費:     {}", breakdown.shipping_cost);
    println!("   小計:     {}", breakdown.subtotal);
    println!("   量大折扣: -{}", breakdown.bulk_discount);
    println!("   急件加價: +{}", breakdown.rush_surcharge);
    println!("   總計:     {}", breakdown.total);

    println!("\n[4] 回給前端的 JSON 明細");
    println!("{}", serde_json::to_string_pretty(&breakdown)?);

    println!("\n[5] 由上傳的 OBJ 推導尺寸再報價");
    let obj = "v 0 0 0\nv 8 0 0\nv 8 6 0\nv 0 6 4\n";
    let dims = GeometryCalculator::dimensions_from_obj(obj);
    println!(
        "   邊界盒 {} x {} x {} mm, 體積 {} cm3",
        dims.length, dims.width, dims.height, dims.volume
    );
    let request = QuoteRequest::new("petg".to_string())
        .with_dimensions(dims.length, dims.width, dims.height)
        .with_quantity(3);
    let breakdown = calculator.calculate(&request)?;
    println!("   PETG x3 總計: {}", breakdown.total);

    Ok(())
}
