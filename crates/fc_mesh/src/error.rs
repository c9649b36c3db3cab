// crates/fc_mesh/src/error.rs

//! 网格层错误类型定义
//!
//! 拓扑装配阶段的内部不一致均归为生成错误，
//! 可转换为 `fc_foundation::FcError` 向上传播。

use fc_foundation::FcError;
use thiserror::Error;

/// 网格层结果类型别名
pub type MeshResult<T> = Result<T, MeshError>;

/// 网格错误枚举
#[derive(Debug, Error)]
pub enum MeshError {
    /// 截面数量不足
    #[error("截面数量不足: 提供 {provided} 个, 至少需要 2 个")]
    TooFewSections {
        /// 实际截面数
        provided: usize,
    },

    /// 边界层网格尚未支持
    #[error("边界层网格生成尚未支持: 请禁用 boundary_layer.enabled 后重新生成")]
    BoundaryLayerUnsupported,

    /// 顶点下标越界
    #[error("拓扑不一致: {context} 引用顶点 {index}, 顶点表只有 {vertex_count} 个")]
    VertexIndexOutOfRange {
        /// 引用该顶点的位置描述
        context: &'static str,
        /// 越界下标
        index: usize,
        /// 顶点总数
        vertex_count: usize,
    },
}

impl From<MeshError> for FcError {
    fn from(err: MeshError) -> Self {
        FcError::generation(err.to_string())
    }
}
