// crates/fc_config/src/error.rs

//! 配置层错误类型

use fc_foundation::FcError;
use thiserror::Error;

/// 配置层结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO 错误
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 解析错误
    #[error("解析错误: {0}")]
    Parse(#[from] serde_json::Error),

    /// 参数校验失败
    #[error("无效参数 '{field}': {reason}")]
    InvalidValue {
        /// 参数字段名
        field: &'static str,
        /// 校验失败原因
        reason: String,
    },
}

impl ConfigError {
    /// 构造参数校验错误
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}

impl From<ConfigError> for FcError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(e) => FcError::io("读取配置失败", Some(e)),
            ConfigError::Parse(e) => FcError::parameter(format!("配置解析失败: {e}")),
            ConfigError::InvalidValue { field, reason } => {
                FcError::parameter(format!("{field}: {reason}"))
            }
        }
    }
}
