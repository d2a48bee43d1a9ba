//! 報價計算引擎
//!
//! 提供兩條互相獨立的定價路徑：
//! - [`QuoteCalculator`]：逐項費用明細，正式報價用的權威路徑
//! - [`QuickEstimator`]：單一數字的粗略估價，行銷頁面的即時小工具
//!
//! 兩條路徑各自持有常數與捨入規則，估出的數字本來就會有落差，
//! 不應該拿來互相對帳。

pub mod calculator;
pub mod geometry;
pub mod print_time;
pub mod quick;

pub use calculator::QuoteCalculator;
pub use geometry::{GeometryCalculator, ModelDimensions};
pub use print_time::PrintTimeEstimator;
pub use quick::{QuickEstimateInput, QuickEstimator};
