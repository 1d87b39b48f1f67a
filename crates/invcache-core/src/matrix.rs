//! 稠密矩陣模型

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{InvCacheError, Result};

/// 稠密矩陣（列優先儲存）
///
/// 從快取的角度看是不可變的值：更新一律整體替換，不做逐元素修補。
/// 序列化格式為巢狀陣列 `[[1.0, 0.0], [0.0, 1.0]]`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// 由逐列資料建立矩陣
    ///
    /// 各列長度必須一致，否則回傳 [`InvCacheError::RaggedRows`]。
    /// 空的列集合會得到 0x0 矩陣。
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let row_count = rows.len();
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        let mut data = Vec::with_capacity(row_count * cols);

        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(InvCacheError::RaggedRows {
                    row: index,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }

        Ok(Self {
            rows: row_count,
            cols,
            data,
        })
    }

    /// 由扁平資料建立矩陣
    ///
    /// `rows * cols` 溢位時同樣回傳 [`InvCacheError::DimensionMismatch`]。
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(InvCacheError::DimensionMismatch {
                left: (rows, cols),
                right: (data.len(), 1),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// 全零矩陣
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// 單位矩陣
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// 列數
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// 欄數
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (列數, 欄數)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// 是否為方陣
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// 讀取元素，越界回傳 None
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// 讀取一整列
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.data[start..start + self.cols])
        } else {
            None
        }
    }

    /// 逐列迭代
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |r| &self.data[r * self.cols..(r + 1) * self.cols])
    }

    /// 扁平資料（列優先）
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// 各列總和
    pub fn row_sums(&self) -> Vec<f64> {
        self.iter_rows().map(|row| row.iter().sum()).collect()
    }

    /// 所有元素總和（各列總和之和）
    pub fn element_sum(&self) -> f64 {
        self.row_sums().into_iter().sum()
    }

    /// 矩陣乘法 self * other
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(InvCacheError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }

        let mut out = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self.data[i * self.cols + k];
                if a == 0.0 {
                    continue;
                }
                for j in 0..other.cols {
                    out.data[i * other.cols + j] += a * other.data[k * other.cols + j];
                }
            }
        }
        Ok(out)
    }

    /// 逐元素近似比較
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = InvCacheError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self {
        m.iter_rows().map(<[f64]>::to_vec).collect()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            let cells: Vec<String> = row.iter().map(|v| format!("{v:>10.4}")).collect();
            writeln!(f, "[{}]", cells.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();

        assert_eq!(m.shape(), (2, 2));
        assert!(m.is_square());
        assert_eq!(m.get(1, 0), Some(3.0));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.row(0), Some(&[1.0, 2.0][..]));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();

        assert!(matches!(
            err,
            InvCacheError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_empty_matrix() {
        let m = Matrix::from_rows(vec![]).unwrap();

        assert_eq!(m.shape(), (0, 0));
        assert!(m.is_square());
        assert_eq!(m.element_sum(), 0.0);
        assert!(m.row_sums().is_empty());
    }

    #[test]
    fn test_row_sums() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![-1.0, 0.5, 0.5]]).unwrap();

        assert_eq!(m.row_sums(), vec![6.0, 0.0]);
        assert_eq!(m.element_sum(), 6.0);
    }

    #[test]
    fn test_multiply() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::identity(2);

        assert_eq!(a.multiply(&b).unwrap(), a);

        let c = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0]]).unwrap();
        assert!(matches!(
            a.multiply(&c),
            Err(InvCacheError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_json_nested_rows() {
        let m: Matrix = serde_json::from_str("[[2.0, 0.0], [0.0, 2.0]]").unwrap();
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(serde_json::to_string(&m).unwrap(), "[[2.0,0.0],[0.0,2.0]]");

        assert!(serde_json::from_str::<Matrix>("[[1.0], [1.0, 2.0]]").is_err());
    }

    #[test]
    fn test_from_vec_length_checked() {
        assert!(Matrix::from_vec(2, 2, vec![1.0; 4]).is_ok());
        assert!(Matrix::from_vec(2, 2, vec![1.0; 3]).is_err());
    }

    #[test]
    fn test_from_vec_overflowing_shape() {
        let err = Matrix::from_vec(usize::MAX, 2, vec![1.0; 2]).unwrap_err();

        assert!(matches!(
            err,
            InvCacheError::DimensionMismatch {
                left: (usize::MAX, 2),
                right: (2, 1)
            }
        ));
    }
}
