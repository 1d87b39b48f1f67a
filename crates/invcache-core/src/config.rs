//! 快取與求解配置模型

use serde::{Deserialize, Serialize};

use crate::{InvCacheError, Result};

/// 預設主元容差
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;

/// 快取行為配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// 是否同時驗證已快取反矩陣本身的指紋
    /// - true: 反矩陣被竄改時重新計算（預設）
    /// - false: 只要有反矩陣就直接信任
    pub verify_inverse: bool,
}

impl CacheConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            verify_inverse: true,
        }
    }

    /// 建構器模式：設置是否驗證反矩陣指紋
    pub fn with_verify_inverse(mut self, verify: bool) -> Self {
        self.verify_inverse = verify;
        self
    }

    /// 從 JSON 載入
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// 反矩陣求解參數
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveOptions {
    /// 主元絕對值低於此值即視為奇異
    pub pivot_tolerance: f64,
}

impl SolveOptions {
    /// 創建預設參數
    pub fn new() -> Self {
        Self {
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
        }
    }

    /// 建構器模式：設置主元容差
    pub fn with_pivot_tolerance(mut self, tolerance: f64) -> Self {
        self.pivot_tolerance = tolerance;
        self
    }

    /// 檢查參數是否合法
    pub fn validate(&self) -> Result<()> {
        if !self.pivot_tolerance.is_finite() || self.pivot_tolerance < 0.0 {
            return Err(InvCacheError::InvalidOption(format!(
                "pivot_tolerance 必須是非負有限值，實際為 {}",
                self.pivot_tolerance
            )));
        }
        Ok(())
    }

    /// 從 JSON 載入並驗證
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self::new()
    }
}
