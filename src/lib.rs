//! # InvCache
//!
//! 反矩陣快取：矩陣未變更時重複求反直接回傳快取結果，
//! 並以指紋偵測繞過 `set_matrix` 的帶外修改。
//!
//! ```
//! use invcache::{cache_solve, CachedMatrix, Matrix, SolveOptions};
//!
//! let m = Matrix::from_rows(vec![vec![2.0, 0.0], vec![0.0, 2.0]])?;
//! let mut cache = CachedMatrix::new(m);
//!
//! let first = cache_solve(&mut cache, &SolveOptions::default())?;
//! let second = cache_solve(&mut cache, &SolveOptions::default())?;
//! assert!(!first.is_cache_hit());
//! assert!(second.is_cache_hit());
//! # Ok::<(), invcache::InvCacheError>(())
//! ```

pub use invcache_cache::{cache_solve, CacheSolver, CacheStats, CachedMatrix, SolveOutcome};
pub use invcache_calc::{InversionCalculator, MatrixInverter};
pub use invcache_core::{
    CacheConfig, Fingerprint, InvCacheError, Matrix, Result, SolveOptions,
    DEFAULT_PIVOT_TOLERANCE, FINGERPRINT_TOLERANCE,
};
