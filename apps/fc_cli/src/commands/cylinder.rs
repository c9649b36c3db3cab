// apps/fc_cli/src/commands/cylinder.rs

//! 圆柱网格生成命令
//!
//! 不依赖测量数据，按配置参数直接装配圆柱过渡块拓扑。

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use fc_io::writer::write_artifact;
use fc_mesh::transition::CylinderMeshBuilder;

use super::channel::load_config;

/// 圆柱网格生成参数
#[derive(Args)]
pub struct CylinderArgs {
    /// 输出文件路径
    #[arg(short, long, default_value = "system/blockMeshDict")]
    pub output: PathBuf,

    /// 项目配置文件路径（JSON，缺省使用默认参数）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 圆柱半径（覆盖配置文件）
    #[arg(long)]
    pub radius: Option<f64>,

    /// 圆柱高度（覆盖配置文件）
    #[arg(long)]
    pub height: Option<f64>,
}

/// 执行圆柱生成命令
pub fn execute(args: CylinderArgs) -> Result<()> {
    info!("=== FoamChannel 圆柱网格生成 ===");

    let mut config = load_config(args.config.as_deref())?;
    if let Some(radius) = args.radius {
        config.cylinder.radius = radius;
    }
    if let Some(height) = args.height {
        config.cylinder.height = height;
    }
    config.cylinder.validate().context("圆柱参数校验失败")?;

    let p = &config.cylinder;
    info!(
        "圆柱参数: 半径 {}, 高度 {}, 内方形边长 {}, 弯曲半径 {}",
        p.radius, p.height, p.inner_square_side, p.inner_square_curve
    );
    info!("高度方向: x ∈ [{}, {}]", p.base_x, p.outlet_x());

    let dict = CylinderMeshBuilder::new(&config.cylinder)
        .build()
        .context("圆柱拓扑装配失败")?;
    info!(
        "拓扑: {} 顶点, {} 块, {} 弧线",
        dict.vertices.len(),
        dict.blocks.len(),
        dict.edges.len()
    );

    let content = dict.render();
    write_artifact(&args.output, &content)
        .with_context(|| format!("写出失败: {}", args.output.display()))?;

    info!("=== 完成: {} ===", args.output.display());
    Ok(())
}
