// crates/fc_geom/src/interpolate.rs

//! 分段线性插值
//!
//! 对应 scipy `interp1d(kind="linear", fill_value="extrapolate")` 的行为：
//! 区间内分段线性，区间外沿端部线段线性外推。
//!
//! # 示例
//!
//! ```
//! use fc_geom::interpolate::LinearSeries;
//!
//! let series = LinearSeries::new(vec![0.0, 1.0, 2.0], vec![0.0, 10.0, 40.0]).unwrap();
//! assert!((series.eval(0.5) - 5.0).abs() < 1e-12);
//! assert!((series.eval(3.0) - 70.0).abs() < 1e-12); // 外推
//! ```

use fc_foundation::Point3D;

use crate::curve::Curve;
use crate::error::{GeomError, GeomResult};

/// 一维分段线性插值序列
///
/// 不变量：横坐标非递减且长度 ≥ 2。构建后不可变。
#[derive(Debug, Clone)]
pub struct LinearSeries {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearSeries {
    /// 创建插值序列
    ///
    /// `xs` 必须非递减且与 `ys` 等长、长度 ≥ 2。
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> GeomResult<Self> {
        if xs.len() < 2 || xs.len() != ys.len() {
            return Err(GeomError::InsufficientData {
                side: "插值",
                count: xs.len().min(ys.len()),
            });
        }
        debug_assert!(
            xs.windows(2).all(|w| w[0] <= w[1]),
            "插值横坐标必须非递减"
        );
        Ok(Self { xs, ys })
    }

    /// 横坐标范围 (min, max)
    #[inline]
    pub fn x_range(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// 在 x 处求值
    ///
    /// 区间外沿端部线段线性外推。若相邻横坐标重合（重复 Z 值），
    /// 该段取右端点值，避免除零。
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.xs.len();

        // 定位区段：最后一个满足 xs[i] <= x 的 i，限制在 [0, n-2]
        let seg = match self.xs.partition_point(|&v| v <= x) {
            0 => 0,
            p => (p - 1).min(n - 2),
        };

        let x0 = self.xs[seg];
        let x1 = self.xs[seg + 1];
        let y0 = self.ys[seg];
        let y1 = self.ys[seg + 1];

        let dx = x1 - x0;
        if dx.abs() < 1e-14 {
            return y1;
        }
        y0 + (x - x0) / dx * (y1 - y0)
    }
}

/// 曲线插值器：展向坐标到横向坐标对 (x, y) 的映射
///
/// 由两个独立的一维插值序列构成，分别对应 X 与 Y 分量。
#[derive(Debug, Clone)]
pub struct CurveInterpolant {
    x_of_z: LinearSeries,
    y_of_z: LinearSeries,
    z_range: (f64, f64),
}

impl CurveInterpolant {
    /// 从排序曲线构建插值器
    pub fn from_curve(curve: &Curve) -> GeomResult<Self> {
        let zs: Vec<f64> = curve.points().iter().map(|p| p.z).collect();
        let xs: Vec<f64> = curve.points().iter().map(|p| p.x).collect();
        let ys: Vec<f64> = curve.points().iter().map(|p| p.y).collect();

        Ok(Self {
            x_of_z: LinearSeries::new(zs.clone(), xs)?,
            y_of_z: LinearSeries::new(zs, ys)?,
            z_range: curve.z_range(),
        })
    }

    /// 原始采样的展向范围 (z_min, z_max)
    #[inline]
    pub fn z_range(&self) -> (f64, f64) {
        self.z_range
    }

    /// 在展向坐标 z 处求曲线点
    pub fn eval(&self, z: f64) -> Point3D {
        Point3D::new(self.x_of_z.eval(z), self.y_of_z.eval(z), z)
    }
}
