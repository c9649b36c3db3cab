// apps/fc_cli/src/commands/info.rs

//! 信息显示命令
//!
//! 显示点位表统计与默认配置。

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use fc_config::ProjectConfig;
use fc_geom::curve::split_boundary_points;
use fc_io::table::read_point_table;

/// 信息显示参数
#[derive(Args)]
pub struct InfoArgs {
    /// 点位表文件路径
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// 显示默认配置
    #[arg(long)]
    pub defaults: bool,
}

/// 执行信息命令
pub fn execute(args: InfoArgs) -> Result<()> {
    info!("=== FoamChannel 信息 ===");

    if let Some(input) = &args.input {
        print_table_info(input)?;
    }

    if args.defaults || args.input.is_none() {
        print_default_config()?;
    }

    Ok(())
}

fn print_table_info(path: &PathBuf) -> Result<()> {
    let points = read_point_table(path)
        .with_context(|| format!("读取点位表失败: {}", path.display()))?;
    let curves = split_boundary_points(&points).context("边界点分割失败")?;
    let stats = &curves.statistics;

    println!("=== 点位表统计: {} ===", path.display());
    println!("总点数: {}", stats.total_points);
    println!("内曲线点数: {}", stats.inner_points);
    println!("外曲线点数: {}", stats.outer_points);
    println!("分割线 (平均 X): {:.6}", stats.avg_x);
    println!("X 范围: [{:.6}, {:.6}]", stats.x_range.0, stats.x_range.1);
    println!("Y 范围: [{:.6}, {:.6}]", stats.y_range.0, stats.y_range.1);
    println!("Z 范围: [{:.6}, {:.6}]", stats.z_range.0, stats.z_range.1);

    Ok(())
}

fn print_default_config() -> Result<()> {
    println!("=== 默认配置 ===");
    let config = ProjectConfig::default();
    let json = serde_json::to_string_pretty(&config).context("序列化默认配置失败")?;
    println!("{}", json);
    Ok(())
}
