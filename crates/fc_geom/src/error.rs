// crates/fc_geom/src/error.rs

//! 几何层错误类型定义
//!
//! 几何阶段的失败均属于数据错误：来源数据不足以支撑插值，
//! 或内外曲线在展向上没有公共区间。

use fc_foundation::FcError;
use thiserror::Error;

/// 几何层结果类型别名
pub type GeomResult<T> = Result<T, GeomError>;

/// 几何错误枚举
#[derive(Debug, Error)]
pub enum GeomError {
    /// 点位数据不足
    #[error("数据点不足: {side}曲线只有 {count} 个点, 插值至少需要 2 个")]
    InsufficientData {
        /// 哪一侧曲线（内/外）
        side: &'static str,
        /// 实际点数
        count: usize,
    },

    /// 输入点集为空
    #[error("边界点集为空")]
    EmptyPointSet,

    /// 内外曲线展向区间不相交
    #[error("内外曲线展向区间不相交: 内 [{inner_min}, {inner_max}], 外 [{outer_min}, {outer_max}]")]
    DisjointAxialRange {
        /// 内曲线展向下界
        inner_min: f64,
        /// 内曲线展向上界
        inner_max: f64,
        /// 外曲线展向下界
        outer_min: f64,
        /// 外曲线展向上界
        outer_max: f64,
    },

    /// 层数不足
    #[error("采样层数不足: 请求 {requested} 层, 至少需要 2 层")]
    TooFewLayers {
        /// 请求的层数
        requested: usize,
    },

    /// 点位包含非有限值
    #[error("第 {index} 个点包含非有限坐标")]
    NonFinitePoint {
        /// 点在输入序列中的下标
        index: usize,
    },
}

impl From<GeomError> for FcError {
    fn from(err: GeomError) -> Self {
        FcError::data(err.to_string())
    }
}
