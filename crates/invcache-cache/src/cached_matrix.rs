//! 帶反矩陣快取的矩陣容器

use invcache_core::{Fingerprint, Matrix};
use uuid::Uuid;

use crate::stats::CacheStats;

/// 帶反矩陣快取的矩陣
///
/// 獨佔持有矩陣與其反矩陣。`matrix_fingerprint` 永遠反映最後一次
/// 經由 [`CachedMatrix::set_matrix`] 的寫入，而不是最後一次寫入；
/// 兩者不一致就代表矩陣被繞過正規路徑修改過。
#[derive(Debug, Clone)]
pub struct CachedMatrix {
    /// 快取識別碼（用於日誌）
    id: Uuid,

    /// 目前的矩陣
    matrix: Matrix,

    /// 最後一次正規寫入時記錄的矩陣指紋
    matrix_fingerprint: Fingerprint,

    /// 已快取的反矩陣
    inverse: Option<Matrix>,

    /// 反矩陣寫入快取時的指紋
    inverse_fingerprint: Option<Fingerprint>,

    /// 命中統計
    stats: CacheStats,
}

impl CachedMatrix {
    /// 創建快取，立即記錄矩陣指紋
    ///
    /// 接受任何矩陣，可否求反在求解時才檢查。
    pub fn new(initial: Matrix) -> Self {
        let matrix_fingerprint = Fingerprint::of(&initial);
        Self {
            id: Uuid::new_v4(),
            matrix: initial,
            matrix_fingerprint,
            inverse: None,
            inverse_fingerprint: None,
            stats: CacheStats::default(),
        }
    }

    /// 快取識別碼
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// 替換矩陣（唯一的正規寫入路徑）
    ///
    /// 重新記錄指紋並清除反矩陣與其指紋，呼叫後快取內不會留有過期的反矩陣。
    pub fn set_matrix(&mut self, matrix: Matrix) {
        self.matrix_fingerprint = Fingerprint::of(&matrix);
        self.matrix = matrix;
        self.inverse = None;
        self.inverse_fingerprint = None;
        tracing::debug!(cache_id = %self.id, "矩陣已更新，反矩陣快取已清除");
    }

    /// 目前的矩陣
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// 儲存的矩陣指紋（不重新計算）
    pub fn matrix_fingerprint(&self) -> Fingerprint {
        self.matrix_fingerprint
    }

    /// 已快取的反矩陣，尚未計算時為 None
    pub fn inverse(&self) -> Option<&Matrix> {
        self.inverse.as_ref()
    }

    /// 寫入反矩陣，不影響矩陣與矩陣指紋
    pub fn set_inverse(&mut self, inverse: Matrix) {
        self.inverse = Some(inverse);
    }

    /// 反矩陣寫入快取時記錄的指紋
    pub fn inverse_fingerprint(&self) -> Option<Fingerprint> {
        self.inverse_fingerprint
    }

    /// 記錄反矩陣指紋
    pub fn set_inverse_fingerprint(&mut self, fingerprint: Fingerprint) {
        self.inverse_fingerprint = Some(fingerprint);
    }

    /// 命中統計
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// 清除命中統計
    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    pub(crate) fn stats_mut(&mut self) -> &mut CacheStats {
        &mut self.stats
    }

    /// 模擬帶外竄改：替換矩陣但保留舊指紋與反矩陣
    ///
    /// 不是正常操作。僅用於測試與示範，讓下一次求解偵測到不一致。
    #[cfg(any(test, feature = "tamper"))]
    pub fn corrupt_matrix(&mut self, matrix: Matrix) {
        tracing::debug!(cache_id = %self.id, "矩陣遭繞過 set_matrix 修改");
        self.matrix = matrix;
    }

    /// 模擬帶外竄改：替換已快取反矩陣但保留其指紋
    #[cfg(any(test, feature = "tamper"))]
    pub fn corrupt_inverse(&mut self, inverse: Matrix) {
        tracing::debug!(cache_id = %self.id, "反矩陣遭繞過 set_inverse 修改");
        self.inverse = Some(inverse);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diag(value: f64) -> Matrix {
        Matrix::from_rows(vec![vec![value, 0.0], vec![0.0, value]]).unwrap()
    }

    #[test]
    fn test_new_records_fingerprint() {
        let cache = CachedMatrix::new(diag(2.0));

        assert_eq!(cache.matrix(), &diag(2.0));
        assert_eq!(cache.matrix_fingerprint().value(), 4.0);
        assert!(cache.inverse().is_none());
        assert!(cache.inverse_fingerprint().is_none());
    }

    #[test]
    fn test_set_matrix_clears_inverse() {
        let mut cache = CachedMatrix::new(diag(2.0));
        cache.set_inverse(diag(0.5));
        cache.set_inverse_fingerprint(Fingerprint::of(&diag(0.5)));

        cache.set_matrix(diag(1.0));

        assert_eq!(cache.matrix(), &diag(1.0));
        assert_eq!(cache.matrix_fingerprint().value(), 2.0);
        assert!(cache.inverse().is_none());
        assert!(cache.inverse_fingerprint().is_none());
    }

    #[test]
    fn test_set_inverse_leaves_matrix_alone() {
        let mut cache = CachedMatrix::new(diag(2.0));
        let before = cache.matrix_fingerprint();

        cache.set_inverse(diag(0.5));

        assert_eq!(cache.inverse(), Some(&diag(0.5)));
        assert_eq!(cache.matrix(), &diag(2.0));
        assert_eq!(cache.matrix_fingerprint(), before);
    }

    #[test]
    fn test_corrupt_matrix_keeps_stale_fingerprint() {
        let mut cache = CachedMatrix::new(diag(2.0));
        cache.set_inverse(diag(0.5));

        cache.corrupt_matrix(diag(4.0));

        assert_eq!(cache.matrix(), &diag(4.0));
        assert_eq!(cache.matrix_fingerprint().value(), 4.0);
        assert!(!cache.matrix_fingerprint().matches(Fingerprint::of(cache.matrix())));
        assert_eq!(cache.inverse(), Some(&diag(0.5)));
    }

    #[test]
    fn test_corrupt_inverse_keeps_stale_fingerprint() {
        let mut cache = CachedMatrix::new(diag(2.0));
        cache.set_inverse(diag(0.5));
        cache.set_inverse_fingerprint(Fingerprint::of(&diag(0.5)));

        cache.corrupt_inverse(diag(3.0));

        assert_eq!(cache.inverse(), Some(&diag(3.0)));
        assert_eq!(cache.inverse_fingerprint().map(Fingerprint::value), Some(1.0));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = CachedMatrix::new(diag(1.0));
        let b = CachedMatrix::new(diag(1.0));

        assert_ne!(a.id(), b.id());
    }
}
