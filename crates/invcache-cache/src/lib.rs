//! # InvCache Cache
//!
//! 反矩陣快取與一致性檢查
//!
//! 單一擁有者、單執行緒。若要跨執行緒共用 [`CachedMatrix`]，
//! 必須在整個求解過程持有同一把鎖（例如 `Mutex<CachedMatrix>`），
//! 否則可能觀察到反矩陣與過期的矩陣指紋並存。

pub mod cached_matrix;
pub mod solve;
pub mod stats;

// Re-export 主要類型
pub use cached_matrix::CachedMatrix;
pub use solve::{cache_solve, CacheSolver, SolveOutcome};
pub use stats::CacheStats;
