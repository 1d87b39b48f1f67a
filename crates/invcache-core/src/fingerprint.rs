//! 矩陣指紋
//!
//! 指紋是矩陣所有元素的總和（各列總和之和），只用來便宜地偵測變更，
//! 不是密碼學完整性保證：總和相同的兩個不同矩陣會碰撞且無法分辨。

use serde::{Deserialize, Serialize};

use crate::Matrix;

/// 指紋比較容差，吸收浮點捨入誤差
pub const FINGERPRINT_TOLERANCE: f64 = 1e-10;

/// 矩陣內容摘要
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fingerprint(f64);

impl Fingerprint {
    /// 計算矩陣指紋
    ///
    /// 只依賴元素數值，不依賴物件身分或歷史。
    pub fn of(matrix: &Matrix) -> Self {
        Self(matrix.element_sum())
    }

    /// 原始數值
    pub fn value(self) -> f64 {
        self.0
    }

    /// 容差內相等
    ///
    /// 位元完全相同時直接視為相等，同一個總和溢位成 ±inf 或含 NaN 的矩陣
    /// 才能與自己的指紋相符（inf - inf 為 NaN）。
    pub fn matches(self, other: Fingerprint) -> bool {
        self.0.to_bits() == other.0.to_bits()
            || (self.0 - other.0).abs() < FINGERPRINT_TOLERANCE
    }
}

impl From<f64> for Fingerprint {
    fn from(value: f64) -> Self {
        Self(value)
    }
}
