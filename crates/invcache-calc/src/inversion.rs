//! 反矩陣計算（Gauss-Jordan 消去法，部分主元）

use invcache_core::{InvCacheError, Matrix, SolveOptions};

use crate::MatrixInverter;

/// 反矩陣計算器
#[derive(Debug, Clone, Copy, Default)]
pub struct InversionCalculator;

impl InversionCalculator {
    /// 計算反矩陣
    ///
    /// 對增廣矩陣 [A | I] 做 Gauss-Jordan 消去，每一欄選絕對值最大的列為主元。
    /// 主元絕對值不大於 `options.pivot_tolerance` 時回傳
    /// [`InvCacheError::SingularMatrix`]。
    pub fn calculate(matrix: &Matrix, options: &SolveOptions) -> invcache_core::Result<Matrix> {
        options.validate()?;
        Self::ensure_square(matrix)?;

        let n = matrix.rows();
        tracing::debug!(dim = n, "開始計算反矩陣");

        let mut a = matrix.as_slice().to_vec();
        let mut inv = Matrix::identity(n).as_slice().to_vec();

        for col in 0..n {
            // Step 1: 選主元
            let pivot_row = Self::find_pivot(&a, n, col);
            let pivot = a[pivot_row * n + col];
            // NaN 主元同樣視為奇異
            if !(pivot.abs() > options.pivot_tolerance) {
                tracing::debug!(column = col, pivot, "找不到可用主元");
                return Err(InvCacheError::SingularMatrix { column: col });
            }

            // Step 2: 換列
            if pivot_row != col {
                Self::swap_rows(&mut a, n, col, pivot_row);
                Self::swap_rows(&mut inv, n, col, pivot_row);
            }

            // Step 3: 主元列正規化
            for j in 0..n {
                a[col * n + j] /= pivot;
                inv[col * n + j] /= pivot;
            }

            // Step 4: 消去其他列
            for i in 0..n {
                if i == col {
                    continue;
                }
                let factor = a[i * n + col];
                if factor == 0.0 {
                    continue;
                }
                for j in 0..n {
                    a[i * n + j] -= factor * a[col * n + j];
                    inv[i * n + j] -= factor * inv[col * n + j];
                }
            }
        }

        Matrix::from_vec(n, n, inv)
    }

    /// 行列式（部分主元 LU 消去）
    ///
    /// 主元為零時直接回傳 0.0，不套用容差。
    pub fn determinant(matrix: &Matrix) -> invcache_core::Result<f64> {
        Self::ensure_square(matrix)?;

        let n = matrix.rows();
        let mut a = matrix.as_slice().to_vec();
        let mut det = 1.0;

        for col in 0..n {
            let pivot_row = Self::find_pivot(&a, n, col);
            let pivot = a[pivot_row * n + col];
            if pivot == 0.0 {
                return Ok(0.0);
            }
            if pivot_row != col {
                Self::swap_rows(&mut a, n, col, pivot_row);
                det = -det;
            }
            det *= pivot;

            for i in col + 1..n {
                let factor = a[i * n + col] / pivot;
                for j in col..n {
                    a[i * n + j] -= factor * a[col * n + j];
                }
            }
        }

        Ok(det)
    }

    fn ensure_square(matrix: &Matrix) -> invcache_core::Result<()> {
        if !matrix.is_square() {
            return Err(InvCacheError::NotSquare {
                rows: matrix.rows(),
                cols: matrix.cols(),
            });
        }
        Ok(())
    }

    /// 從 col 列起找該欄絕對值最大的列
    fn find_pivot(a: &[f64], n: usize, col: usize) -> usize {
        let mut best = col;
        for i in col + 1..n {
            if a[i * n + col].abs() > a[best * n + col].abs() {
                best = i;
            }
        }
        best
    }

    fn swap_rows(a: &mut [f64], n: usize, r1: usize, r2: usize) {
        for j in 0..n {
            a.swap(r1 * n + j, r2 * n + j);
        }
    }
}

impl MatrixInverter for InversionCalculator {
    fn invert(&self, matrix: &Matrix, options: &SolveOptions) -> invcache_core::Result<Matrix> {
        Self::calculate(matrix, options)
    }
}
