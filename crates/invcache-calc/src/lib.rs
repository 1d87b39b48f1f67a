//! # InvCache Calculation Engine
//!
//! 稠密矩陣反矩陣計算

pub mod inversion;

// Re-export 主要類型
pub use inversion::InversionCalculator;

use invcache_core::{Matrix, SolveOptions};

/// 反矩陣計算介面
///
/// 快取只透過這個介面呼叫外部的反矩陣例程。
pub trait MatrixInverter {
    /// 計算反矩陣，非方陣或奇異矩陣時失敗
    fn invert(&self, matrix: &Matrix, options: &SolveOptions) -> invcache_core::Result<Matrix>;
}

impl<T: MatrixInverter + ?Sized> MatrixInverter for &T {
    fn invert(&self, matrix: &Matrix, options: &SolveOptions) -> invcache_core::Result<Matrix> {
        (**self).invert(matrix, options)
    }
}
