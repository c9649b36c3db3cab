// crates/fc_config/src/project.rs

//! 项目级配置的 JSON 读写
//!
//! 将三组参数汇总为一个可序列化的项目配置，
//! 供命令行与批处理脚本使用。

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cylinder_params::CylinderMeshParams;
use crate::error::ConfigResult;
use crate::mesh_params::{BoundaryLayerParams, MeshParameters};

/// 项目配置
///
/// 所有字段带默认值，JSON 中缺省的部分按默认参数填充。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// 流道网格参数
    #[serde(default)]
    pub mesh: MeshParameters,

    /// 边界层参数
    #[serde(default)]
    pub boundary_layer: BoundaryLayerParams,

    /// 圆柱网格参数
    #[serde(default)]
    pub cylinder: CylinderMeshParams,
}

impl ProjectConfig {
    /// 从 JSON 文件加载
    pub fn from_json_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// 保存为 JSON 文件
    pub fn to_json_file(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// 校验全部参数
    ///
    /// 按网格、边界层、圆柱的顺序检查，返回第一个失败原因。
    pub fn validate(&self) -> ConfigResult<()> {
        self.mesh.validate()?;
        self.boundary_layer.validate()?;
        self.cylinder.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_config_default_valid() {
        let config = ProjectConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_project_config_empty_json() {
        let config: ProjectConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.mesh.num_layers, 100);
        assert!(!config.boundary_layer.enabled);
    }

    #[test]
    fn test_project_config_partial_json() {
        let json = r#"{"mesh": {"num_layers": 50}, "cylinder": {"radius": 2.5}}"#;
        let config: ProjectConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.mesh.num_layers, 50);
        assert_eq!(config.mesh.n_cells_circum, 400);
        assert!((config.cylinder.radius - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_project_config_json_roundtrip() {
        let config = ProjectConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ProjectConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.mesh.num_layers, config.mesh.num_layers);
        assert_eq!(back.cylinder.n_cells_height, config.cylinder.n_cells_height);
    }

    #[test]
    fn test_project_config_validate_propagates() {
        let json = r#"{"mesh": {"n_cells_circum": 402}}"#;
        let config: ProjectConfig = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }
}
