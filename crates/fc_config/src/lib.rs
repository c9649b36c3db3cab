// crates/fc_config/src/lib.rs

//! FoamChannel 配置模块
//!
//! 定义网格生成所需的全部参数结构，使用纯 f64 存储以便 JSON 序列化。
//!
//! # 模块结构
//!
//! - [`mesh_params`]: 流道网格参数与边界层参数
//! - [`cylinder_params`]: 圆柱网格参数
//! - [`project`]: 项目级配置的 JSON 读写
//! - [`error`]: 配置层错误类型
//!
//! # 校验约定
//!
//! 构造参数结构不做任何检查；`validate()` 是独立的显式步骤，
//! 必须在任何拓扑生成之前调用，失败时给出可读的原因字符串。
//!
//! # 示例
//!
//! ```
//! use fc_config::MeshParameters;
//!
//! let mut params = MeshParameters::default();
//! assert!(params.validate().is_ok());
//!
//! params.n_cells_circum = 402; // 不是 4 的倍数
//! assert!(params.validate().is_err());
//! ```

pub mod cylinder_params;
pub mod error;
pub mod mesh_params;
pub mod project;

pub use cylinder_params::CylinderMeshParams;
pub use error::{ConfigError, ConfigResult};
pub use mesh_params::{BoundaryLayerParams, MeshParameters};
pub use project::ProjectConfig;
