// crates/fc_mesh/src/lib.rs

//! FoamChannel 网格模块
//!
//! 将截面序列或圆柱几何参数装配为多块结构化网格拓扑，
//! 并序列化为 OpenFOAM blockMeshDict 文本。
//!
//! # 模块结构
//!
//! - [`dict`]: 网格拓扑数据模型（顶点表、六面体块、弧边、边界 patch）
//!   与 blockMeshDict 序列化
//! - [`revolved`]: 回转式流道网格生成器（四象限环形截面扫掠）
//! - [`transition`]: 圆柱过渡块网格生成器（中心方形 + 四扇形）
//!
//! 拓扑在一次装配中整体构建，构建后不再修改；顶点下标仅在
//! 单次生成内有效。序列化结果不含时间戳，相同输入字节级一致。
//!
//! # 示例
//!
//! ```
//! use fc_config::CylinderMeshParams;
//! use fc_mesh::transition::CylinderMeshBuilder;
//!
//! let params = CylinderMeshParams::default();
//! params.validate().unwrap();
//!
//! let dict = CylinderMeshBuilder::new(&params).build().unwrap();
//! assert_eq!(dict.vertices.len(), 16);
//! assert_eq!(dict.blocks.len(), 5);
//! ```

pub mod dict;
pub mod error;
pub mod revolved;
pub mod transition;

pub use dict::{ArcEdge, BlockMeshDict, HexBlock, Patch, PatchKind};
pub use error::{MeshError, MeshResult};
pub use revolved::RevolvedMeshBuilder;
pub use transition::CylinderMeshBuilder;
