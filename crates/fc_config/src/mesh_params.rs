// crates/fc_config/src/mesh_params.rs

//! 流道网格参数与边界层参数
//!
//! 默认配置：100 层截面、径向 25 格、圆周 400 格（4 的倍数）、
//! 轴向每段 2 格。

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// 网格基本参数
///
/// 控制回转式流道网格的尺度与各方向网格数。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshParameters {
    /// 尺度因子（写入 blockMeshDict 的 scale 行）
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f64,

    /// 层数（展向的截面数）
    #[serde(default = "default_num_layers")]
    pub num_layers: usize,

    /// 径向网格数（内壁到外壁）
    #[serde(default = "default_n_cells_radial")]
    pub n_cells_radial: usize,

    /// 圆周方向网格数（需为 4 的倍数）
    #[serde(default = "default_n_cells_circum")]
    pub n_cells_circum: usize,

    /// 轴向网格数（每段展向）
    #[serde(default = "default_n_cells_axial")]
    pub n_cells_axial: usize,
}

fn default_scale_factor() -> f64 {
    1.0
}
fn default_num_layers() -> usize {
    100
}
fn default_n_cells_radial() -> usize {
    25
}
fn default_n_cells_circum() -> usize {
    400
}
fn default_n_cells_axial() -> usize {
    2
}

impl Default for MeshParameters {
    fn default() -> Self {
        Self {
            scale_factor: default_scale_factor(),
            num_layers: default_num_layers(),
            n_cells_radial: default_n_cells_radial(),
            n_cells_circum: default_n_cells_circum(),
            n_cells_axial: default_n_cells_axial(),
        }
    }
}

impl MeshParameters {
    /// 校验参数有效性
    ///
    /// 圆周方向网格数必须是 4 的倍数：回转网格按四个象限生成块，
    /// 每个象限分得 `n_cells_circum / 4` 格。
    pub fn validate(&self) -> ConfigResult<()> {
        if self.scale_factor <= 0.0 || !self.scale_factor.is_finite() {
            return Err(ConfigError::invalid("scale_factor", "尺度因子必须大于 0"));
        }
        if self.num_layers < 2 {
            return Err(ConfigError::invalid("num_layers", "层数必须至少为 2"));
        }
        if self.n_cells_radial < 1 {
            return Err(ConfigError::invalid(
                "n_cells_radial",
                "径向网格数必须至少为 1",
            ));
        }
        if self.n_cells_circum < 4 || self.n_cells_circum % 4 != 0 {
            return Err(ConfigError::invalid(
                "n_cells_circum",
                "圆周方向网格数必须是 4 的倍数且至少为 4",
            ));
        }
        if self.n_cells_axial < 1 {
            return Err(ConfigError::invalid(
                "n_cells_axial",
                "轴向网格数必须至少为 1",
            ));
        }
        Ok(())
    }
}

/// 边界层参数
///
/// 描述内外壁的粘性底层加密：厚度以径向间距的比例给出，
/// 扩展比控制相邻子层的厚度比（靠壁最薄）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundaryLayerParams {
    /// 是否启用边界层
    #[serde(default)]
    pub enabled: bool,

    /// 内壁边界层厚度（相对于径向距离的比例）
    #[serde(default = "default_wall_thickness")]
    pub inner_thickness: f64,

    /// 外壁边界层厚度（相对于径向距离的比例）
    #[serde(default = "default_wall_thickness")]
    pub outer_thickness: f64,

    /// 内壁边界层层数
    #[serde(default = "default_wall_layers")]
    pub inner_layers: usize,

    /// 外壁边界层层数
    #[serde(default = "default_wall_layers")]
    pub outer_layers: usize,

    /// 边界层扩展比（每层相对于上一层的厚度比例）
    #[serde(default = "default_expansion_ratio")]
    pub expansion_ratio: f64,
}

fn default_wall_thickness() -> f64 {
    0.02
}
fn default_wall_layers() -> usize {
    5
}
fn default_expansion_ratio() -> f64 {
    1.2
}

impl Default for BoundaryLayerParams {
    fn default() -> Self {
        Self {
            enabled: false,
            inner_thickness: default_wall_thickness(),
            outer_thickness: default_wall_thickness(),
            inner_layers: default_wall_layers(),
            outer_layers: default_wall_layers(),
            expansion_ratio: default_expansion_ratio(),
        }
    }
}

impl BoundaryLayerParams {
    /// 校验参数有效性
    ///
    /// 未启用时总是通过；启用时内外厚度之和必须小于 1，
    /// 否则两侧加密区会在径向重叠。
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.enabled {
            return Ok(());
        }

        if self.inner_thickness <= 0.0 || self.inner_thickness >= 1.0 {
            return Err(ConfigError::invalid(
                "inner_thickness",
                "内壁边界层厚度必须大于 0 且小于 1",
            ));
        }
        if self.outer_thickness <= 0.0 || self.outer_thickness >= 1.0 {
            return Err(ConfigError::invalid(
                "outer_thickness",
                "外壁边界层厚度必须大于 0 且小于 1",
            ));
        }
        if self.inner_thickness + self.outer_thickness >= 1.0 {
            return Err(ConfigError::invalid(
                "inner_thickness",
                "内外壁边界层厚度总和必须小于 1",
            ));
        }
        if self.inner_layers < 1 {
            return Err(ConfigError::invalid(
                "inner_layers",
                "内壁边界层层数必须至少为 1",
            ));
        }
        if self.outer_layers < 1 {
            return Err(ConfigError::invalid(
                "outer_layers",
                "外壁边界层层数必须至少为 1",
            ));
        }
        if self.expansion_ratio <= 1.0 {
            return Err(ConfigError::invalid(
                "expansion_ratio",
                "边界层扩展比必须大于 1",
            ));
        }

        Ok(())
    }
}
