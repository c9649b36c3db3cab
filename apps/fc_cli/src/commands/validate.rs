// apps/fc_cli/src/commands/validate.rs

//! 配置与数据验证命令
//!
//! 在不生成网格的前提下检查项目配置文件与点位表，
//! 汇总全部错误与警告后统一报告。

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::{error, info, warn};

use fc_config::ProjectConfig;
use fc_geom::curve::split_boundary_points;
use fc_io::table::read_point_table;

/// 验证参数
#[derive(Args)]
pub struct ValidateArgs {
    /// 项目配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 点位表文件路径
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// 严格模式（警告也视为错误）
    #[arg(long)]
    pub strict: bool,
}

/// 验证结果
#[derive(Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    fn is_ok_strict(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// 执行验证命令
pub fn execute(args: ValidateArgs) -> Result<()> {
    info!("=== FoamChannel 验证 ===");

    let mut result = ValidationResult::default();

    if let Some(config_path) = &args.config {
        validate_config(config_path, &mut result)?;
    }

    if let Some(input_path) = &args.input {
        validate_point_table(input_path, &mut result);
    }

    if args.config.is_none() && args.input.is_none() {
        println!("用法: fc_cli validate --config <配置文件> [--input <点位表>]");
        println!("      fc_cli validate --input <点位表>");
        return Ok(());
    }

    print_validation_result(&result, args.strict)
}

fn validate_config(path: &PathBuf, result: &mut ValidationResult) -> Result<()> {
    println!("\n检查配置文件: {}", path.display());

    if !path.exists() {
        result.add_error(format!("配置文件不存在: {}", path.display()));
        return Ok(());
    }

    let content = std::fs::read_to_string(path).context("无法读取配置文件")?;

    // 先做 JSON 语法检查，再做字段级校验
    let config: ProjectConfig = match serde_json::from_str(&content) {
        Ok(c) => c,
        Err(e) => {
            result.add_error(format!("JSON 解析错误: {}", e));
            return Ok(());
        }
    };

    if let Err(e) = config.validate() {
        result.add_error(e.to_string());
        return Ok(());
    }

    if config.boundary_layer.enabled {
        result.add_warning("边界层网格生成尚未支持，enabled=true 将在生成时被拒绝");
    }
    if config.mesh.num_layers > 1000 {
        result.add_warning(format!(
            "层数 {} 较大，生成的字典文件会很长",
            config.mesh.num_layers
        ));
    }

    println!("  ✓ 配置文件有效");
    Ok(())
}

fn validate_point_table(path: &PathBuf, result: &mut ValidationResult) {
    println!("\n检查点位表: {}", path.display());

    let points = match read_point_table(path) {
        Ok(p) => p,
        Err(e) => {
            result.add_error(e.to_string());
            return;
        }
    };

    // 分割检查：能否形成内外两条可插值曲线
    match split_boundary_points(&points) {
        Ok(curves) => {
            let stats = &curves.statistics;
            println!(
                "  ✓ {} 点 (内 {}, 外 {}), z ∈ [{:.4}, {:.4}]",
                stats.total_points,
                stats.inner_points,
                stats.outer_points,
                stats.z_range.0,
                stats.z_range.1
            );
            if stats.total_points < 10 {
                result.add_warning(format!(
                    "仅 {} 个测量点，插值精度可能不足",
                    stats.total_points
                ));
            }
        }
        Err(e) => result.add_error(e.to_string()),
    }
}

fn print_validation_result(result: &ValidationResult, strict: bool) -> Result<()> {
    println!("\n=== 验证结果 ===");

    if !result.errors.is_empty() {
        println!("\n错误 ({}):", result.errors.len());
        for err in &result.errors {
            error!("  ✗ {}", err);
            println!("  ✗ {}", err);
        }
    }

    if !result.warnings.is_empty() {
        println!("\n警告 ({}):", result.warnings.len());
        for warning in &result.warnings {
            warn!("  ⚠ {}", warning);
            println!("  ⚠ {}", warning);
        }
    }

    let success = if strict {
        result.is_ok_strict()
    } else {
        result.is_ok()
    };

    if success {
        println!("\n✓ 验证通过");
        Ok(())
    } else {
        println!("\n✗ 验证失败");
        bail!(
            "验证失败：发现 {} 个错误，{} 个警告",
            result.errors.len(),
            result.warnings.len()
        )
    }
}
