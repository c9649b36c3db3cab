// crates/fc_config/src/cylinder_params.rs

//! 圆柱网格参数
//!
//! 以 X 轴为高度方向、Y-Z 平面为圆形截面的圆柱网格。
//! 核心为一个方形块外加四个过渡扇形块，
//! 方形边带微弯曲率，使内方形具有圆角而非尖角。

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// 圆柱网格参数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CylinderMeshParams {
    /// 内方形边长的一半
    #[serde(default = "default_inner_square_side")]
    pub inner_square_side: f64,

    /// 内方形弯曲半径（必须略大于 inner_square_side）
    #[serde(default = "default_inner_square_curve")]
    pub inner_square_curve: f64,

    /// 圆柱半径
    #[serde(default = "default_radius")]
    pub radius: f64,

    /// 圆柱高度（X 方向）
    #[serde(default = "default_height")]
    pub height: f64,

    /// 底面起始 X 坐标
    #[serde(default = "default_base_x")]
    pub base_x: f64,

    /// 内方形网格数
    #[serde(default = "default_n_cells_square")]
    pub n_cells_square: usize,

    /// 内方形到圆形之间的网格数
    #[serde(default = "default_n_cells_inner")]
    pub n_cells_inner: usize,

    /// 高度方向网格数
    #[serde(default = "default_n_cells_height")]
    pub n_cells_height: usize,
}

fn default_inner_square_side() -> f64 {
    0.3
}
fn default_inner_square_curve() -> f64 {
    0.4
}
fn default_radius() -> f64 {
    1.8
}
fn default_height() -> f64 {
    5.33
}
fn default_base_x() -> f64 {
    -1.8
}
fn default_n_cells_square() -> usize {
    30
}
fn default_n_cells_inner() -> usize {
    30
}
fn default_n_cells_height() -> usize {
    120
}

impl Default for CylinderMeshParams {
    fn default() -> Self {
        Self {
            inner_square_side: default_inner_square_side(),
            inner_square_curve: default_inner_square_curve(),
            radius: default_radius(),
            height: default_height(),
            base_x: default_base_x(),
            n_cells_square: default_n_cells_square(),
            n_cells_inner: default_n_cells_inner(),
            n_cells_height: default_n_cells_height(),
        }
    }
}

impl CylinderMeshParams {
    /// 计算出口 X 坐标
    #[inline]
    pub fn outlet_x(&self) -> f64 {
        self.base_x + self.height
    }

    /// 校验参数有效性
    ///
    /// 几何量必须满足嵌套顺序：边长 < 弯曲半径 < 圆柱半径。
    pub fn validate(&self) -> ConfigResult<()> {
        if self.inner_square_side <= 0.0 {
            return Err(ConfigError::invalid(
                "inner_square_side",
                "内方形边长必须大于 0",
            ));
        }
        if self.inner_square_curve <= self.inner_square_side {
            return Err(ConfigError::invalid(
                "inner_square_curve",
                "内方形弯曲半径必须大于内方形边长",
            ));
        }
        if self.radius <= self.inner_square_curve {
            return Err(ConfigError::invalid(
                "radius",
                "圆柱半径必须大于内方形弯曲半径",
            ));
        }
        if self.height <= 0.0 || !self.height.is_finite() {
            return Err(ConfigError::invalid("height", "圆柱高度必须大于 0"));
        }
        if self.n_cells_square < 1 {
            return Err(ConfigError::invalid(
                "n_cells_square",
                "内方形网格数必须至少为 1",
            ));
        }
        if self.n_cells_inner < 1 {
            return Err(ConfigError::invalid(
                "n_cells_inner",
                "内方形到圆形网格数必须至少为 1",
            ));
        }
        if self.n_cells_height < 1 {
            return Err(ConfigError::invalid(
                "n_cells_height",
                "高度方向网格数必须至少为 1",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cylinder_params_default_valid() {
        let params = CylinderMeshParams::default();
        assert!(params.validate().is_ok());
        assert!((params.outlet_x() - 3.53).abs() < 1e-12);
    }

    #[test]
    fn test_cylinder_params_curve_less_than_side() {
        let params = CylinderMeshParams {
            inner_square_curve: 0.25, // 小于边长 0.3
            ..Default::default()
        };
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("弯曲半径必须大于内方形边长"));
    }

    #[test]
    fn test_cylinder_params_radius_ordering() {
        let params = CylinderMeshParams {
            radius: 0.35, // 小于弯曲半径 0.4
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_cylinder_params_negative_height() {
        let params = CylinderMeshParams {
            height: -1.0,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_cylinder_params_zero_cells() {
        let params = CylinderMeshParams {
            n_cells_height: 0,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }
}
