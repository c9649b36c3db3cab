// apps/fc_cli/src/main.rs

//! FoamChannel 命令行界面
//!
//! 提供 blockMeshDict 网格字典生成的命令行工具。
//!
//! # 子命令
//!
//! - `channel`: 从边界测量点生成回转流道网格
//! - `cylinder`: 按参数生成圆柱过渡块网格
//! - `validate`: 验证项目配置与点位表
//! - `info`: 显示数据统计与默认配置

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// FoamChannel 网格字典生成命令行工具
#[derive(Parser)]
#[command(name = "fc_cli")]
#[command(author = "FoamChannel Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "FoamChannel blockMeshDict generator", long_about = None)]
struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 从边界测量点生成回转流道网格
    Channel(commands::channel::ChannelArgs),
    /// 按参数生成圆柱过渡块网格
    Cylinder(commands::cylinder::CylinderArgs),
    /// 验证配置文件与点位表
    Validate(commands::validate::ValidateArgs),
    /// 显示信息
    Info(commands::info::InfoArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // 执行命令
    match cli.command {
        Commands::Channel(args) => commands::channel::execute(args),
        Commands::Cylinder(args) => commands::cylinder::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
        Commands::Info(args) => commands::info::execute(args),
    }
}
