// crates/fc_io/src/error.rs

//! IO 错误类型定义
//!
//! 提供 IO 模块的统一错误枚举，支持通过 thiserror 自动转换底层错误。
//! 所有错误最终可转换为 `fc_foundation::FcError` 以实现跨层传递。

use std::path::PathBuf;

use fc_foundation::FcError;
use thiserror::Error;

/// IO 模块结果类型别名
pub type IoResult<T> = Result<T, IoError>;

/// IO 错误枚举
#[derive(Debug, Error)]
pub enum IoError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    FileNotFound {
        /// 未找到的路径
        path: PathBuf,
    },

    /// 不支持的文件格式
    #[error("不支持的文件格式: {format} (支持的格式: {supported:?})")]
    UnsupportedFormat {
        /// 输入文件扩展名
        format: String,
        /// 支持的扩展名列表
        supported: Vec<&'static str>,
    },

    /// 解析错误
    #[error("文件解析错误: {file}:{line} - {message}")]
    ParseError {
        /// 来源文件（字符串解析时为 `<string>`）
        file: String,
        /// 行号（从 1 开始）
        line: usize,
        /// 错误描述
        message: String,
    },

    /// 没有有效数据行
    #[error("没有有效数据行: {file}")]
    NoValidData {
        /// 来源文件
        file: String,
    },

    /// 底层 IO 错误
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

impl From<IoError> for FcError {
    fn from(err: IoError) -> Self {
        match err {
            IoError::FileNotFound { path } => FcError::FileNotFound { path },
            IoError::UnsupportedFormat { format, supported } => {
                FcError::UnsupportedFormat { format, supported }
            }
            IoError::ParseError { .. } | IoError::NoValidData { .. } => {
                FcError::data(err.to_string())
            }
            IoError::Io(e) => FcError::io("读写文件失败", Some(e)),
        }
    }
}
