//! 快取命中統計

use serde::Serialize;
use std::time::Duration;

/// 快取命中統計
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// 直接回傳快取的次數
    pub hits: u64,

    /// 重新計算反矩陣的次數
    pub misses: u64,

    /// 因矩陣遭竄改而拒絕的次數
    pub rejections: u64,

    /// 最近一次計算反矩陣的耗時
    pub last_compute_time: Option<Duration>,
}

impl CacheStats {
    /// 總請求次數
    pub fn requests(&self) -> u64 {
        self.hits + self.misses + self.rejections
    }

    /// 命中率；沒有任何請求時為 None
    pub fn hit_ratio(&self) -> Option<f64> {
        match self.requests() {
            0 => None,
            total => Some(self.hits as f64 / total as f64),
        }
    }
}
