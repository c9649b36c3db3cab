// crates/fc_foundation/src/lib.rs

//! FoamChannel 基础层
//!
//! 提供整个项目共享的底层类型：
//!
//! - [`geometry`]: 统一几何类型（3D 点）
//! - [`error`]: 统一错误类型 [`FcError`] 与结果别名 [`FcResult`]
//!
//! 本层不依赖任何上层 crate，错误分类遵循三类设计：
//! 数据错误（点位不足、退化分割）、参数错误（配置校验失败）、
//! 生成错误（拓扑装配阶段的内部不一致）。

pub mod error;
pub mod geometry;

pub use error::{FcError, FcResult};
pub use geometry::Point3D;
