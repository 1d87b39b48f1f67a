//! 反矩陣快取示例
//!
//! 執行：`cargo run --example cache_solve_demo`（以 `RUST_LOG=debug` 查看更多訊號）

use invcache::{cache_solve, CachedMatrix, Matrix, SolveOptions, SolveOutcome};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== 反矩陣快取示例 ===\n");

    let options = SolveOptions::default();
    let mut cache = CachedMatrix::new(Matrix::from_rows(vec![
        vec![2.0, 0.0],
        vec![0.0, 2.0],
    ])?);

    println!("原始矩陣:\n{}", cache.matrix());
    report("第一次求解", cache_solve(&mut cache, &options)?);
    report("第二次求解", cache_solve(&mut cache, &options)?);

    cache.set_matrix(Matrix::identity(2));
    report("set_matrix 後求解", cache_solve(&mut cache, &options)?);

    cache.corrupt_matrix(Matrix::from_rows(vec![vec![4.0, 0.0], vec![0.0, 4.0]])?);
    report("繞過 set_matrix 修改後求解", cache_solve(&mut cache, &options)?);

    let mut singular = CachedMatrix::new(Matrix::from_rows(vec![
        vec![1.0, 2.0],
        vec![2.0, 4.0],
    ])?);
    if let Err(e) = cache_solve(&mut singular, &options) {
        println!("奇異矩陣: {e}");
    }

    println!("\n統計: {:?}", cache.stats());

    Ok(())
}

fn report(label: &str, outcome: SolveOutcome) {
    match outcome {
        SolveOutcome::Cached(inv) => println!("{label}（快取）:\n{inv}"),
        SolveOutcome::Computed(inv) => println!("{label}（計算）:\n{inv}"),
        SolveOutcome::Rejected => println!("{label}: 已拒絕，請以 set_matrix 重新設定矩陣\n"),
    }
}
