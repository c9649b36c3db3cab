// crates/fc_geom/src/resample.rs

//! 截面重采样
//!
//! 在内外曲线展向范围的交集上等距取 N 个位置（含两端），
//! 对每个位置求两条曲线的插值点，得到成对的截面序列。
//!
//! 交集区间为空或倒置时直接上报数据错误，不做静默外推。

use fc_foundation::Point3D;

use crate::curve::BoundaryCurves;
use crate::error::{GeomError, GeomResult};
use crate::interpolate::CurveInterpolant;

/// 一个重采样截面
///
/// 截面序列按展向位置升序排列。
#[derive(Debug, Clone, Copy)]
pub struct CrossSection {
    /// 展向位置
    pub z: f64,
    /// 内曲线点（z 分量与本截面一致）
    pub inner: Point3D,
    /// 外曲线点
    pub outer: Point3D,
}

impl CrossSection {
    /// 内圈半径（径向坐标）
    #[inline]
    pub fn inner_radius(&self) -> f64 {
        self.inner.x
    }

    /// 外圈半径
    #[inline]
    pub fn outer_radius(&self) -> f64 {
        self.outer.x
    }

    /// 径向间距
    #[inline]
    pub fn radial_gap(&self) -> f64 {
        self.outer.x - self.inner.x
    }
}

/// 在公共展向区间上重采样 N 个截面
///
/// # 参数
///
/// - `curves`: 分割得到的内外曲线
/// - `num_layers`: 截面数，必须 ≥ 2
///
/// # 错误
///
/// - 层数不足 2
/// - 两条曲线的展向区间不相交
pub fn sample_cross_sections(
    curves: &BoundaryCurves,
    num_layers: usize,
) -> GeomResult<Vec<CrossSection>> {
    if num_layers < 2 {
        return Err(GeomError::TooFewLayers {
            requested: num_layers,
        });
    }

    let inner_interp = CurveInterpolant::from_curve(&curves.inner)?;
    let outer_interp = CurveInterpolant::from_curve(&curves.outer)?;

    let (inner_min, inner_max) = inner_interp.z_range();
    let (outer_min, outer_max) = outer_interp.z_range();

    // 公共区间：两侧都有实测数据支撑的范围
    let z_min = inner_min.max(outer_min);
    let z_max = inner_max.min(outer_max);

    if z_max <= z_min {
        return Err(GeomError::DisjointAxialRange {
            inner_min,
            inner_max,
            outer_min,
            outer_max,
        });
    }

    let step = (z_max - z_min) / (num_layers - 1) as f64;
    let mut sections = Vec::with_capacity(num_layers);

    for i in 0..num_layers {
        // 末端直接取 z_max，避免浮点累积误差
        let z = if i == num_layers - 1 {
            z_max
        } else {
            z_min + i as f64 * step
        };
        sections.push(CrossSection {
            z,
            inner: inner_interp.eval(z),
            outer: outer_interp.eval(z),
        });
    }

    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::split_boundary_points;

    fn straight_channel() -> BoundaryCurves {
        // 内半径 1，外半径 2，展向 0..10
        let points = vec![
            Point3D::new(1.0, 0.0, 0.0),
            Point3D::new(1.0, 0.0, 10.0),
            Point3D::new(2.0, 0.0, 0.0),
            Point3D::new(2.0, 0.0, 10.0),
        ];
        split_boundary_points(&points).unwrap()
    }

    #[test]
    fn test_sample_count_and_order() {
        let curves = straight_channel();
        let sections = sample_cross_sections(&curves, 11).unwrap();

        assert_eq!(sections.len(), 11);
        for w in sections.windows(2) {
            assert!(w[0].z < w[1].z);
        }
    }

    #[test]
    fn test_sample_endpoints_match_extrema() {
        let curves = straight_channel();
        let sections = sample_cross_sections(&curves, 5).unwrap();

        assert!((sections[0].z - 0.0).abs() < 1e-12);
        assert!((sections[4].z - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_sample_two_layers_equals_extrema() {
        let curves = straight_channel();
        let sections = sample_cross_sections(&curves, 2).unwrap();

        assert_eq!(sections.len(), 2);
        assert!((sections[0].z - 0.0).abs() < 1e-12);
        assert!((sections[1].z - 10.0).abs() < 1e-12);
        assert!((sections[0].inner_radius() - 1.0).abs() < 1e-12);
        assert!((sections[1].outer_radius() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_sample_intersected_range() {
        // 内曲线 z 覆盖 0..10，外曲线 2..8，公共区间 [2, 8]
        let points = vec![
            Point3D::new(1.0, 0.0, 0.0),
            Point3D::new(1.0, 0.0, 10.0),
            Point3D::new(2.0, 0.0, 2.0),
            Point3D::new(2.0, 0.0, 8.0),
        ];
        let curves = split_boundary_points(&points).unwrap();
        let sections = sample_cross_sections(&curves, 3).unwrap();

        assert!((sections[0].z - 2.0).abs() < 1e-12);
        assert!((sections[2].z - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_sample_disjoint_range_fails() {
        // 内曲线 0..1，外曲线 5..6，没有公共区间
        let points = vec![
            Point3D::new(1.0, 0.0, 0.0),
            Point3D::new(1.0, 0.0, 1.0),
            Point3D::new(2.0, 0.0, 5.0),
            Point3D::new(2.0, 0.0, 6.0),
        ];
        let curves = split_boundary_points(&points).unwrap();
        let err = sample_cross_sections(&curves, 5).unwrap_err();
        assert!(matches!(err, GeomError::DisjointAxialRange { .. }));
    }

    #[test]
    fn test_sample_too_few_layers() {
        let curves = straight_channel();
        let err = sample_cross_sections(&curves, 1).unwrap_err();
        assert!(matches!(err, GeomError::TooFewLayers { requested: 1 }));
    }

    #[test]
    fn test_sample_deterministic() {
        let curves = straight_channel();
        let a = sample_cross_sections(&curves, 7).unwrap();
        let b = sample_cross_sections(&curves, 7).unwrap();
        for (s1, s2) in a.iter().zip(b.iter()) {
            assert_eq!(s1.z, s2.z);
            assert_eq!(s1.inner, s2.inner);
            assert_eq!(s1.outer, s2.outer);
        }
    }

    #[test]
    fn test_radial_gap() {
        let curves = straight_channel();
        let sections = sample_cross_sections(&curves, 3).unwrap();
        assert!((sections[1].radial_gap() - 1.0).abs() < 1e-12);
    }
}
