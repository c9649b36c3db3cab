// crates/fc_geom/src/lib.rs

//! FoamChannel 几何模块
//!
//! 将无序的流道边界点转换为可供拓扑生成使用的等距截面序列：
//!
//! 1. [`curve`]: 按展向排序并以平均径向坐标分割内外曲线
//! 2. [`interpolate`]: 对每条曲线建立分段线性插值
//! 3. [`resample`]: 在公共展向区间上等距取 N 个截面
//! 4. [`grading`]: 壁面边界层的几何级数加密半径
//!
//! 全部为纯内存计算，无隐藏状态，相同输入产生相同输出。
//!
//! # 示例
//!
//! ```
//! use fc_foundation::Point3D;
//! use fc_geom::curve::split_boundary_points;
//! use fc_geom::resample::sample_cross_sections;
//!
//! let points = vec![
//!     Point3D::new(1.0, 0.0, 0.0),
//!     Point3D::new(1.0, 0.0, 10.0),
//!     Point3D::new(2.0, 0.0, 0.0),
//!     Point3D::new(2.0, 0.0, 10.0),
//! ];
//! let curves = split_boundary_points(&points).unwrap();
//! let sections = sample_cross_sections(&curves, 5).unwrap();
//! assert_eq!(sections.len(), 5);
//! ```

pub mod curve;
pub mod error;
pub mod grading;
pub mod interpolate;
pub mod resample;

pub use curve::{split_boundary_points, BoundaryCurves, Curve, PointStatistics};
pub use error::{GeomError, GeomResult};
pub use grading::{cumulative_ratios, GradedRadialProfile};
pub use interpolate::{CurveInterpolant, LinearSeries};
pub use resample::{sample_cross_sections, CrossSection};
