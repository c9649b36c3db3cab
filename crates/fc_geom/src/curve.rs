// crates/fc_geom/src/curve.rs

//! 边界点分割与曲线构建
//!
//! 原始测量点不保证有序或唯一。本模块按展向（Z）坐标排序后，
//! 以径向（X）坐标的平均值为界将点集分为内外两条曲线：
//! `x < mean` 归内曲线，`x >= mean` 归外曲线（恰好等于平均值归外）。
//!
//! 两侧各自重新按 Z 排序（稳定排序，相同 Z 保持输入顺序）。
//! 任何一侧少于 2 个点都无法插值，按数据错误上报，
//! 不允许退化分割悄悄生成畸形网格。

use fc_foundation::Point3D;

use crate::error::{GeomError, GeomResult};

/// 一条按展向排序的边界曲线
///
/// 不变量：点序列按 Z 非递减排列，长度 ≥ 2。
#[derive(Debug, Clone)]
pub struct Curve {
    points: Vec<Point3D>,
}

impl Curve {
    /// 曲线上的点（按 Z 非递减）
    #[inline]
    pub fn points(&self) -> &[Point3D] {
        &self.points
    }

    /// 点数
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// 是否为空
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// 展向范围 (z_min, z_max)
    #[inline]
    pub fn z_range(&self) -> (f64, f64) {
        // 构造时已按 Z 排序
        (
            self.points[0].z,
            self.points[self.points.len() - 1].z,
        )
    }
}

/// 数据统计信息
///
/// 分割完成后生成，供界面或 `info` 命令展示。
#[derive(Debug, Clone)]
pub struct PointStatistics {
    /// 总点数
    pub total_points: usize,
    /// 内曲线点数
    pub inner_points: usize,
    /// 外曲线点数
    pub outer_points: usize,
    /// X 坐标范围
    pub x_range: (f64, f64),
    /// Y 坐标范围
    pub y_range: (f64, f64),
    /// Z 坐标范围
    pub z_range: (f64, f64),
    /// 平均 X 值（内外分割线）
    pub avg_x: f64,
}

/// 分割结果：内外两条曲线加统计信息
#[derive(Debug, Clone)]
pub struct BoundaryCurves {
    /// 内曲线（径向坐标小于平均值的一侧）
    pub inner: Curve,
    /// 外曲线
    pub outer: Curve,
    /// 统计信息
    pub statistics: PointStatistics,
}

/// 分割边界点集为内外曲线
///
/// # 算法
///
/// 1. 全部点按 Z 排序
/// 2. 计算 X 坐标平均值
/// 3. `x < mean` 归内曲线，`x >= mean` 归外曲线
/// 4. 两侧各自按 Z 稳定排序
///
/// # 错误
///
/// - 点集为空或包含非有限坐标
/// - 任一侧点数少于 2（退化分割）
pub fn split_boundary_points(points: &[Point3D]) -> GeomResult<BoundaryCurves> {
    if points.is_empty() {
        return Err(GeomError::EmptyPointSet);
    }
    for (index, p) in points.iter().enumerate() {
        if !p.is_finite() {
            return Err(GeomError::NonFinitePoint { index });
        }
    }

    let mut sorted: Vec<Point3D> = points.to_vec();
    sorted.sort_by(|a, b| a.z.total_cmp(&b.z));

    let avg_x = sorted.iter().map(|p| p.x).sum::<f64>() / sorted.len() as f64;

    let mut inner: Vec<Point3D> = Vec::new();
    let mut outer: Vec<Point3D> = Vec::new();
    for p in &sorted {
        if p.x < avg_x {
            inner.push(*p);
        } else {
            outer.push(*p);
        }
    }

    if inner.len() < 2 {
        return Err(GeomError::InsufficientData {
            side: "内",
            count: inner.len(),
        });
    }
    if outer.len() < 2 {
        return Err(GeomError::InsufficientData {
            side: "外",
            count: outer.len(),
        });
    }

    // 分侧后再次稳定排序，保证每条曲线各自按 Z 非递减
    inner.sort_by(|a, b| a.z.total_cmp(&b.z));
    outer.sort_by(|a, b| a.z.total_cmp(&b.z));

    let statistics = compute_statistics(&sorted, inner.len(), outer.len(), avg_x);

    Ok(BoundaryCurves {
        inner: Curve { points: inner },
        outer: Curve { points: outer },
        statistics,
    })
}

fn compute_statistics(
    sorted: &[Point3D],
    inner_count: usize,
    outer_count: usize,
    avg_x: f64,
) -> PointStatistics {
    let mut min = sorted[0];
    let mut max = sorted[0];
    for p in &sorted[1..] {
        min = min.min(p);
        max = max.max(p);
    }

    PointStatistics {
        total_points: sorted.len(),
        inner_points: inner_count,
        outer_points: outer_count,
        x_range: (min.x, max.x),
        y_range: (min.y, max.y),
        z_range: (min.z, max.z),
        avg_x,
    }
}
