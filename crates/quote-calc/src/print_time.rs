//! 列印時間模型

use quote_core::Material;
use rust_decimal::Decimal;

/// 列印時間估算器
///
/// 經驗模型：基準時間 = 體積 / (列印速度 × 層高 × 10)，
/// 再依填充率在 0.5～1.0 倍之間縮放。呼叫端負責先驗證體積。
pub struct PrintTimeEstimator;

impl PrintTimeEstimator {
    /// 估算單件列印時間（小時）
    ///
    /// 層高或列印速度非正數時回傳 0 小時，視為退化輸入而非錯誤；
    /// 工時超出 Decimal 可表示範圍時回傳 None。
    pub fn estimate(
        volume_cm3: Decimal,
        material: &Material,
        layer_height_mm: Decimal,
        infill_percent: u8,
    ) -> Option<Decimal> {
        if layer_height_mm <= Decimal::ZERO || material.print_speed <= Decimal::ZERO {
            return Some(Decimal::ZERO);
        }

        let divisor = material
            .print_speed
            .checked_mul(layer_height_mm)?
            .checked_mul(Decimal::from(10))?;
        let base_hours = volume_cm3.checked_div(divisor)?;

        // 填充 0% → 0.5 倍，填充 100% → 1.0 倍
        let infill = Decimal::from(infill_percent.min(100));
        let infill_factor = Decimal::new(5, 1) + infill / Decimal::from(100) * Decimal::new(5, 1);

        base_hours.checked_mul(infill_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_core::MaterialCatalog;

    #[test]
    fn test_estimate_full_infill() {
        // 120 cm3 / (60 mm/s × 0.2 mm × 10) = 1 小時基準
        let catalog = MaterialCatalog::standard();
        let pla = catalog.find("pla").unwrap();

        let hours = PrintTimeEstimator::estimate(Decimal::from(120), pla, Decimal::new(2, 1), 100);
        assert_eq!(hours, Some(Decimal::ONE));
    }

    #[test]
    fn test_infill_scales_between_half_and_full() {
        let catalog = MaterialCatalog::standard();
        let pla = catalog.find("pla").unwrap();
        let volume = Decimal::from(120);
        let layer = Decimal::new(2, 1);

        assert_eq!(
            PrintTimeEstimator::estimate(volume, pla, layer, 0),
            Some(Decimal::new(5, 1))
        );
        assert_eq!(
            PrintTimeEstimator::estimate(volume, pla, layer, 20),
            Some(Decimal::new(6, 1))
        );
        // 超過 100% 以 100% 計
        assert_eq!(
            PrintTimeEstimator::estimate(volume, pla, layer, 255),
            Some(Decimal::ONE)
        );
    }

    #[test]
    fn test_slower_material_takes_longer() {
        let catalog = MaterialCatalog::standard();
        let pla = catalog.find("pla").unwrap();
        let resin = catalog.find("resin").unwrap();
        let volume = Decimal::from(300);
        let layer = Decimal::new(1, 1);

        let pla_hours = PrintTimeEstimator::estimate(volume, pla, layer, 50).unwrap();
        let resin_hours = PrintTimeEstimator::estimate(volume, resin, layer, 50).unwrap();
        assert!(resin_hours > pla_hours);
    }

    #[test]
    fn test_degenerate_inputs_return_zero_hours() {
        let catalog = MaterialCatalog::standard();
        let pla = catalog.find("pla").unwrap();

        assert_eq!(
            PrintTimeEstimator::estimate(Decimal::from(120), pla, Decimal::ZERO, 20),
            Some(Decimal::ZERO)
        );

        let stalled = quote_core::Material::new(
            "stalled".to_string(),
            "Stalled".to_string(),
            Decimal::new(5, 2),
            Decimal::ZERO,
            vec![0.2],
        );
        assert_eq!(
            PrintTimeEstimator::estimate(Decimal::from(120), &stalled, Decimal::new(2, 1), 20),
            Some(Decimal::ZERO)
        );
    }

    #[test]
    fn test_out_of_range_hours_return_none() {
        // 1e12 cm3 配 1e-20 mm 層高，商超出 Decimal 可表示範圍
        let catalog = MaterialCatalog::standard();
        let pla = catalog.find("pla").unwrap();

        let volume = Decimal::from(1_000_000_000_000i64);
        let hours = PrintTimeEstimator::estimate(volume, pla, Decimal::new(1, 20), 20);
        assert!(hours.is_none());
    }
}
