//! 列印材料目錄
//!
//! 目錄在服務啟動時建立，之後唯讀。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 列印材料
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    /// 材料 ID（查詢鍵，慣例為小寫）
    pub id: String,
    /// 顯示名稱
    pub name: String,
    /// 每立方公分單價
    #[serde(with = "rust_decimal::serde::float")]
    pub base_price_per_cm3: Decimal,
    /// 列印速度（mm/s）
    #[serde(with = "rust_decimal::serde::float")]
    pub print_speed: Decimal,
    /// 可選層高（mm），僅供前端選單使用，計算端不驗證
    pub layer_height_options: Vec<f64>,
}

impl Material {
    /// 創建新材料
    pub fn new(
        id: String,
        name: String,
        base_price_per_cm3: Decimal,
        print_speed: Decimal,
        layer_height_options: Vec<f64>,
    ) -> Self {
        Self {
            id,
            name,
            base_price_per_cm3,
            print_speed,
            layer_height_options,
        }
    }
}

/// 材料目錄
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialCatalog {
    materials: Vec<Material>,
}

impl MaterialCatalog {
    /// 以自訂材料清單建立目錄
    pub fn new(materials: Vec<Material>) -> Self {
        Self { materials }
    }

    /// 內建標準目錄（六種材料）
    pub fn standard() -> Self {
        Self::new(vec![
            Material::new(
                "pla".to_string(),
                "PLA".to_string(),
                Decimal::new(5, 2),
                Decimal::from(60),
                vec![0.1, 0.2, 0.25, 0.3],
            ),
            Material::new(
                "abs".to_string(),
                "ABS".to_string(),
                Decimal::new(6, 2),
                Decimal::from(50),
                vec![0.1, 0.2, 0.25, 0.3],
            ),
            Material::new(
                "petg".to_string(),
                "PETG".to_string(),
                Decimal::new(7, 2),
                Decimal::from(50),
                vec![0.1, 0.2, 0.25, 0.3],
            ),
            Material::new(
                "resin".to_string(),
                "Resin".to_string(),
                Decimal::new(15, 2),
                Decimal::from(30),
                vec![0.05, 0.1, 0.15, 0.2],
            ),
            Material::new(
                "nylon".to_string(),
                "Nylon".to_string(),
                Decimal::new(12, 2),
                Decimal::from(40),
                vec![0.1, 0.2, 0.25],
            ),
            Material::new(
                "carbon-fiber".to_string(),
                "Carbon Fiber Nylon".to_string(),
                Decimal::new(25, 2),
                Decimal::from(35),
                vec![0.1, 0.2, 0.25],
            ),
        ])
    }

    /// 依 ID 查找材料（區分大小寫）
    pub fn find(&self, id: &str) -> Option<&Material> {
        self.materials.iter().find(|material| material.id == id)
    }

    /// 列出全部材料
    pub fn list(&self) -> &[Material] {
        &self.materials
    }

    /// 目錄中的材料數量
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// 目錄是否為空
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_standard_catalog_size() {
        let catalog = MaterialCatalog::standard();
        assert_eq!(catalog.len(), 6);
        assert!(!catalog.is_empty());
    }

    #[rstest]
    #[case("pla", "PLA", Decimal::new(5, 2), 60)]
    #[case("abs", "ABS", Decimal::new(6, 2), 50)]
    #[case("petg", "PETG", Decimal::new(7, 2), 50)]
    #[case("resin", "Resin", Decimal::new(15, 2), 30)]
    #[case("nylon", "Nylon", Decimal::new(12, 2), 40)]
    #[case("carbon-fiber", "Carbon Fiber Nylon", Decimal::new(25, 2), 35)]
    fn test_standard_material_seed(
        #[case] id: &str,
        #[case] name: &str,
        #[case] price: Decimal,
        #[case] speed: i64,
    ) {
        let catalog = MaterialCatalog::standard();
        let material = catalog.find(id).unwrap();
        assert_eq!(material.name, name);
        assert_eq!(material.base_price_per_cm3, price);
        assert_eq!(material.print_speed, Decimal::from(speed));
    }

    #[test]
    fn test_find_unknown_material() {
        let catalog = MaterialCatalog::standard();
        assert!(catalog.find("titanium").is_none());
        // 查詢區分大小寫
        assert!(catalog.find("PLA").is_none());
    }

    #[test]
    fn test_resin_layer_heights() {
        let catalog = MaterialCatalog::standard();
        let resin = catalog.find("resin").unwrap();
        assert_eq!(resin.layer_height_options, vec![0.05, 0.1, 0.15, 0.2]);
    }

    #[test]
    fn test_material_json_field_names() {
        let catalog = MaterialCatalog::standard();
        let json = serde_json::to_value(catalog.find("pla").unwrap()).unwrap();
        assert_eq!(json["basePricePerCm3"], serde_json::json!(0.05));
        assert_eq!(json["printSpeed"], serde_json::json!(60.0));
        assert!(json["layerHeightOptions"].is_array());
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = MaterialCatalog::new(vec![Material::new(
            "wood-fill".to_string(),
            "Wood Fill PLA".to_string(),
            Decimal::new(9, 2),
            Decimal::from(45),
            vec![0.2, 0.3],
        )]);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.find("wood-fill").is_some());
        assert!(catalog.find("pla").is_none());
    }
}
