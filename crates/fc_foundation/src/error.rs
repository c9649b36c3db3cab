// crates/fc_foundation/src/error.rs

//! 错误处理模块，定义统一错误类型
//!
//! 提供 `FcError` 枚举和 `FcResult` 类型别名，用于跨层错误传递。
//!
//! # 设计原则
//!
//! 1. **层次化**: 各 crate 定义自己的错误枚举，最终可转换为 `FcError`
//! 2. **三类错误**: 数据错误、参数错误、生成错误，对应流程的三个阶段
//! 3. **可读性**: 错误信息面向使用者，直接给出原因
//!
//! # 示例
//!
//! ```
//! use fc_foundation::error::{FcError, FcResult};
//!
//! fn check_layers(n: usize) -> FcResult<()> {
//!     if n < 2 {
//!         return Err(FcError::parameter("层数必须至少为 2"));
//!     }
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// 统一结果类型
pub type FcResult<T> = Result<T, FcError>;

/// FoamChannel 统一错误类型
///
/// 参数校验在任何生成动作之前同步执行；生成阶段只会产生
/// 数据错误或生成错误，失败时不写出任何部分产物。
#[derive(Error, Debug)]
pub enum FcError {
    /// 数据错误：点位不足、分割退化、数据行无法解析
    #[error("数据错误: {message}")]
    Data {
        /// 描述性错误信息
        message: String,
    },

    /// 参数错误：配置校验未通过
    #[error("参数错误: {message}")]
    Parameter {
        /// 校验失败原因
        message: String,
    },

    /// 生成错误：拓扑装配阶段的内部不一致
    #[error("生成错误: {message}")]
    Generation {
        /// 描述性错误信息
        message: String,
    },

    /// IO 错误
    #[error("IO错误: {message}")]
    Io {
        /// 描述性错误信息
        message: String,
        /// 可选的底层 IO 错误
        #[source]
        source: Option<std::io::Error>,
    },

    /// 文件不存在
    #[error("文件不存在: {path}")]
    FileNotFound {
        /// 未找到的路径
        path: PathBuf,
    },

    /// 不支持的文件格式
    #[error("不支持的文件格式: {format} (支持的格式: {supported:?})")]
    UnsupportedFormat {
        /// 输入文件格式
        format: String,
        /// 支持的格式列表
        supported: Vec<&'static str>,
    },
}

impl FcError {
    /// 构造数据错误
    pub fn data(message: impl Into<String>) -> Self {
        Self::Data {
            message: message.into(),
        }
    }

    /// 构造参数错误
    pub fn parameter(message: impl Into<String>) -> Self {
        Self::Parameter {
            message: message.into(),
        }
    }

    /// 构造生成错误
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// 构造 IO 错误
    pub fn io(message: impl Into<String>, source: Option<std::io::Error>) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FcError::parameter("层数必须至少为 2");
        assert!(err.to_string().contains("参数错误"));
        assert!(err.to_string().contains("层数"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(FcError::data("x"), FcError::Data { .. }));
        assert!(matches!(FcError::generation("x"), FcError::Generation { .. }));
        assert!(matches!(FcError::io("x", None), FcError::Io { .. }));
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = FcError::UnsupportedFormat {
            format: ".xlsx".into(),
            supported: vec![".csv", ".txt"],
        };
        let s = err.to_string();
        assert!(s.contains(".xlsx"));
        assert!(s.contains(".csv"));
    }
}
