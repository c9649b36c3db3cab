// crates/fc_io/src/table.rs

//! 点位表读取
//!
//! 提供从文本表格文件加载三维边界测量点的功能，支持：
//! - CSV / TSV / 空白分隔 TXT 与 DAT
//! - 表头自动识别
//! - 注释行跳过
//! - 错误行跳过或严格模式
//!
//! 所有格式走同一条解析与校验路径，只有分隔符不同。每个
//! 有效数据行至少包含 3 个有限数值列，取前三列为 (x, y, z)。
//!
//! # 使用示例
//!
//! ```ignore
//! use std::path::Path;
//! use fc_io::table::read_point_table;
//!
//! let points = read_point_table(Path::new("boundary.csv"))?;
//! ```

use std::path::Path;

use fc_foundation::Point3D;

use crate::error::{IoError, IoResult};

/// 支持的文件扩展名
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["csv", "tsv", "txt", "dat"];

/// 点位表解析配置
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// 分隔符，`None` 表示按任意空白分割
    pub delimiter: Option<char>,
    /// 注释行前缀（以此开头的行将被跳过）
    pub comment_prefix: Option<char>,
    /// 是否跳过无效行（否则遇到无效行立即报错）
    pub skip_invalid: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            delimiter: Some(','),
            comment_prefix: Some('#'),
            skip_invalid: true,
        }
    }
}

impl TableConfig {
    /// 创建制表符分隔的配置
    pub fn tab_separated() -> Self {
        Self {
            delimiter: Some('\t'),
            ..Default::default()
        }
    }

    /// 创建空白分隔的配置
    pub fn whitespace_separated() -> Self {
        Self {
            delimiter: None,
            ..Default::default()
        }
    }

    /// 设置严格模式（无效行报错而非跳过）
    pub fn strict(mut self) -> Self {
        self.skip_invalid = false;
        self
    }

    /// 根据扩展名选择配置
    fn for_extension(ext: &str) -> Option<Self> {
        match ext {
            "csv" => Some(Self::default()),
            "tsv" => Some(Self::tab_separated()),
            "txt" | "dat" => Some(Self::whitespace_separated()),
            _ => None,
        }
    }
}

/// 从文件加载点位表
///
/// 按扩展名选择分隔符：`.csv` 逗号、`.tsv` 制表符、
/// `.txt` / `.dat` 任意空白。其他扩展名报不支持的格式错误。
///
/// # 错误
///
/// - 文件不存在或扩展名不受支持
/// - 无任何有效数据行
pub fn read_point_table(path: &Path) -> IoResult<Vec<Point3D>> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let config = TableConfig::for_extension(&ext).ok_or_else(|| IoError::UnsupportedFormat {
        format: ext.clone(),
        supported: SUPPORTED_EXTENSIONS.to_vec(),
    })?;

    let content = std::fs::read_to_string(path)?;
    parse_table_content(&content, &config, Some(path))
}

/// 从字符串解析点位表
pub fn parse_point_table(content: &str, config: &TableConfig) -> IoResult<Vec<Point3D>> {
    parse_table_content(content, config, None)
}

/// 将一行分割为列
fn split_columns<'a>(line: &'a str, config: &TableConfig) -> Vec<&'a str> {
    match config.delimiter {
        Some(d) => line.split(d).map(|s| s.trim()).collect(),
        None => line.split_whitespace().collect(),
    }
}

/// 尝试将一行的前三列解析为坐标
fn parse_row(parts: &[&str]) -> Option<Point3D> {
    if parts.len() < 3 {
        return None;
    }
    let x: f64 = parts[0].parse().ok()?;
    let y: f64 = parts[1].parse().ok()?;
    let z: f64 = parts[2].parse().ok()?;
    if x.is_finite() && y.is_finite() && z.is_finite() {
        Some(Point3D::new(x, y, z))
    } else {
        None
    }
}

/// 内部解析函数
///
/// 表头自动识别：第一个候选行若解析失败则视为表头丢弃，
/// 之后的失败行按 `skip_invalid` 处理。
fn parse_table_content(
    content: &str,
    config: &TableConfig,
    path: Option<&Path>,
) -> IoResult<Vec<Point3D>> {
    let mut points = Vec::new();
    let mut errors = Vec::new();
    let mut seen_candidate = false;

    let path_str = path
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "<string>".to_string());

    for (line_num, line) in content.lines().enumerate() {
        // 跳过空行
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        // 跳过注释行
        if let Some(prefix) = config.comment_prefix {
            if trimmed.starts_with(prefix) {
                continue;
            }
        }

        let parts = split_columns(trimmed, config);
        let first_candidate = !seen_candidate;
        seen_candidate = true;

        match parse_row(&parts) {
            Some(p) => points.push(p),
            None => {
                // 首个候选行解析失败视为表头
                if first_candidate {
                    continue;
                }
                if !config.skip_invalid {
                    return Err(IoError::ParseError {
                        file: path_str,
                        line: line_num + 1,
                        message: format!("无法解析为 3 列有限数值坐标: '{}'", trimmed),
                    });
                }
                errors.push(line_num + 1);
            }
        }
    }

    // 记录跳过的行
    if !errors.is_empty() {
        let preview: Vec<_> = errors.iter().take(5).collect();
        eprintln!(
            "WARNING: {}: 跳过了 {} 个无效行 (前几个: {:?}{})",
            path_str,
            errors.len(),
            preview,
            if errors.len() > 5 { "..." } else { "" }
        );
    }

    if points.is_empty() {
        return Err(IoError::NoValidData { file: path_str });
    }

    Ok(points)
}
