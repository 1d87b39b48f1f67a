//! 反矩陣快取求解
//!
//! 每次求解依序：
//! 1. 重新計算矩陣指紋並與記錄值比對，不一致即拒絕（不修改快取）
//! 2. 有可信的反矩陣快取時直接回傳
//! 3. 否則計算反矩陣並寫入快取
//!
//! 反矩陣計算失敗直接往上傳遞，不重試也不快取。

use invcache_calc::{InversionCalculator, MatrixInverter};
use invcache_core::{CacheConfig, Fingerprint, Matrix, SolveOptions};
use std::time::Instant;

use crate::CachedMatrix;

/// 單次求解結果
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    /// 快取命中
    Cached(Matrix),

    /// 重新計算並已寫入快取
    Computed(Matrix),

    /// 矩陣被繞過 set_matrix 修改，拒絕求解
    ///
    /// 呼叫端須以正確矩陣呼叫 set_matrix 後重試。
    /// 拒絕時唯一的變動是 [`CacheStats::rejections`](crate::CacheStats) 診斷計數加一，
    /// 矩陣、指紋與反矩陣都不會被修改。
    Rejected,
}

impl SolveOutcome {
    /// 反矩陣；被拒絕時為 None
    pub fn inverse(&self) -> Option<&Matrix> {
        match self {
            Self::Cached(m) | Self::Computed(m) => Some(m),
            Self::Rejected => None,
        }
    }

    /// 取出反矩陣；被拒絕時為 None
    pub fn into_inverse(self) -> Option<Matrix> {
        match self {
            Self::Cached(m) | Self::Computed(m) => Some(m),
            Self::Rejected => None,
        }
    }

    /// 是否為快取命中
    pub fn is_cache_hit(&self) -> bool {
        matches!(self, Self::Cached(_))
    }

    /// 是否被拒絕
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }
}

/// 快取求解器
#[derive(Debug, Clone, Default)]
pub struct CacheSolver<I = InversionCalculator> {
    inverter: I,
    config: CacheConfig,
    options: SolveOptions,
}

impl CacheSolver<InversionCalculator> {
    /// 使用內建 Gauss-Jordan 計算器
    pub fn new() -> Self {
        Self::default()
    }
}

impl<I: MatrixInverter> CacheSolver<I> {
    /// 使用自訂的反矩陣計算器
    pub fn with_inverter(inverter: I) -> Self {
        Self {
            inverter,
            config: CacheConfig::default(),
            options: SolveOptions::default(),
        }
    }

    /// 建構器模式：設置快取配置
    pub fn with_config(mut self, config: CacheConfig) -> Self {
        self.config = config;
        self
    }

    /// 建構器模式：設置求解參數
    pub fn with_options(mut self, options: SolveOptions) -> Self {
        self.options = options;
        self
    }

    /// 快取配置
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// 求解參數
    pub fn options(&self) -> &SolveOptions {
        &self.options
    }

    /// 取得反矩陣（快取或重新計算）
    pub fn solve(&self, cache: &mut CachedMatrix) -> invcache_core::Result<SolveOutcome> {
        let cache_id = cache.id();

        // Step 1: 矩陣指紋比對
        let current = Fingerprint::of(cache.matrix());
        if !cache.matrix_fingerprint().matches(current) {
            tracing::warn!(
                cache_id = %cache_id,
                stored = cache.matrix_fingerprint().value(),
                current = current.value(),
                "矩陣已被修改，請透過 set_matrix 重新設定矩陣"
            );
            cache.stats_mut().rejections += 1;
            return Ok(SolveOutcome::Rejected);
        }

        // Step 2: 快取命中
        if let Some(inverse) = self.trusted_inverse(cache).cloned() {
            tracing::info!(cache_id = %cache_id, "取得快取的反矩陣");
            cache.stats_mut().hits += 1;
            return Ok(SolveOutcome::Cached(inverse));
        }

        // Step 3: 重新計算
        let start_time = Instant::now();
        let inverse = self.inverter.invert(cache.matrix(), &self.options)?;
        let elapsed = start_time.elapsed();

        cache.set_inverse(inverse.clone());
        cache.set_inverse_fingerprint(Fingerprint::of(&inverse));

        let stats = cache.stats_mut();
        stats.misses += 1;
        stats.last_compute_time = Some(elapsed);

        tracing::info!(
            cache_id = %cache_id,
            dim = inverse.rows(),
            elapsed = ?elapsed,
            "已計算並快取反矩陣"
        );

        Ok(SolveOutcome::Computed(inverse))
    }

    /// 可直接回傳的反矩陣
    ///
    /// 啟用 verify_inverse 時，反矩陣指紋缺失或不一致都視為不可信。
    fn trusted_inverse<'a>(&self, cache: &'a CachedMatrix) -> Option<&'a Matrix> {
        let inverse = cache.inverse()?;
        if !self.config.verify_inverse {
            return Some(inverse);
        }

        match cache.inverse_fingerprint() {
            Some(stored) if stored.matches(Fingerprint::of(inverse)) => Some(inverse),
            Some(_) => {
                tracing::warn!(cache_id = %cache.id(), "快取的反矩陣已被修改，重新計算");
                None
            }
            None => {
                tracing::debug!(cache_id = %cache.id(), "反矩陣沒有記錄指紋，重新計算");
                None
            }
        }
    }
}

/// 以預設配置求解
pub fn cache_solve(
    cache: &mut CachedMatrix,
    options: &SolveOptions,
) -> invcache_core::Result<SolveOutcome> {
    CacheSolver::new()
        .with_options(options.clone())
        .solve(cache)
}
