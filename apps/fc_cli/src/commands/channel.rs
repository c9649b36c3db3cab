// apps/fc_cli/src/commands/channel.rs

//! 流道网格生成命令
//!
//! 从边界测量点文件走完整链路：读取 -> 分割 -> 重采样 ->
//! 装配 -> 渲染 -> 写出。任何一步失败都不产生输出文件。

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use fc_config::{MeshParameters, ProjectConfig};
use fc_geom::curve::split_boundary_points;
use fc_geom::resample::sample_cross_sections;
use fc_io::table::read_point_table;
use fc_io::writer::write_artifact;
use fc_mesh::revolved::RevolvedMeshBuilder;

/// 流道网格生成参数
#[derive(Args)]
pub struct ChannelArgs {
    /// 边界点文件路径 (csv / tsv / txt / dat)
    #[arg(short, long)]
    pub input: PathBuf,

    /// 输出文件路径
    #[arg(short, long, default_value = "system/blockMeshDict")]
    pub output: PathBuf,

    /// 项目配置文件路径（JSON，缺省使用默认参数）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 纵向截面层数（覆盖配置文件）
    #[arg(long)]
    pub layers: Option<usize>,

    /// 几何缩放因子（覆盖配置文件）
    #[arg(long)]
    pub scale: Option<f64>,
}

/// 执行流道生成命令
pub fn execute(args: ChannelArgs) -> Result<()> {
    info!("=== FoamChannel 流道网格生成 ===");
    let start = Instant::now();

    // 加载配置并应用命令行覆盖
    let mut config = load_config(args.config.as_deref())?;
    if let Some(layers) = args.layers {
        config.mesh.num_layers = layers;
    }
    if let Some(scale) = args.scale {
        config.mesh.scale_factor = scale;
    }
    config.validate().context("配置校验失败")?;
    log_mesh_params(&config.mesh);

    // 读取边界点
    let points = read_point_table(&args.input)
        .with_context(|| format!("读取点位表失败: {}", args.input.display()))?;
    info!("读取 {} 个边界点", points.len());

    // 分割为内外曲线
    let curves = split_boundary_points(&points).context("边界点分割失败")?;
    let stats = &curves.statistics;
    info!(
        "分割完成: 内曲线 {} 点, 外曲线 {} 点, 分割线 x={:.4}",
        stats.inner_points, stats.outer_points, stats.avg_x
    );
    info!(
        "展向范围: z ∈ [{:.4}, {:.4}]",
        stats.z_range.0, stats.z_range.1
    );

    // 重采样为均匀截面
    let sections = sample_cross_sections(&curves, config.mesh.num_layers)
        .context("截面重采样失败")?;
    info!("重采样 {} 个截面", sections.len());

    // 装配拓扑
    let dict = RevolvedMeshBuilder::new(&config.mesh)
        .with_boundary_layer(&config.boundary_layer)
        .build(&sections)
        .context("网格拓扑装配失败")?;
    info!(
        "拓扑: {} 顶点, {} 块, {} 弧线, {} 边界面片",
        dict.vertices.len(),
        dict.blocks.len(),
        dict.edges.len(),
        dict.patches.len()
    );

    // 渲染并写出
    let content = dict.render();
    write_artifact(&args.output, &content)
        .with_context(|| format!("写出失败: {}", args.output.display()))?;

    info!(
        "=== 完成: {} ({:.3} s) ===",
        args.output.display(),
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

/// 加载项目配置
pub fn load_config(path: Option<&std::path::Path>) -> Result<ProjectConfig> {
    match path {
        Some(p) => {
            let config = ProjectConfig::from_json_file(p)
                .with_context(|| format!("加载配置失败: {}", p.display()))?;
            info!("使用配置文件: {}", p.display());
            Ok(config)
        }
        None => Ok(ProjectConfig::default()),
    }
}

fn log_mesh_params(mesh: &MeshParameters) {
    info!(
        "网格参数: {} 层, 网格数 (径向 {}, 圆周 {}, 纵向 {}), 缩放 {}",
        mesh.num_layers,
        mesh.n_cells_radial,
        mesh.n_cells_circum,
        mesh.n_cells_axial,
        mesh.scale_factor
    );
}
