//! # InvCache Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod fingerprint;
pub mod matrix;

// Re-export 主要類型
pub use config::{CacheConfig, SolveOptions, DEFAULT_PIVOT_TOLERANCE};
pub use fingerprint::{Fingerprint, FINGERPRINT_TOLERANCE};
pub use matrix::Matrix;

/// InvCache 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum InvCacheError {
    #[error("矩陣不是方陣: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("奇異矩陣，第 {column} 欄找不到可用主元")]
    SingularMatrix { column: usize },

    #[error("第 {row} 列長度為 {found}，預期 {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("維度不相容: {left:?} 與 {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("無效的參數: {0}")]
    InvalidOption(String),

    #[error("配置解析錯誤: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InvCacheError>;
