// crates/fc_mesh/src/revolved.rs

//! 回转式流道网格生成器
//!
//! 每个截面以 8 个顶点表示：4 个内圈顶点与 4 个外圈顶点，
//! 沿 0°/90°/180°/270° 排布，截面 i 的顶点基址为 `i * 8`
//! （偏移 0–3 为内圈、4–7 为外圈，象限顺序固定）。
//!
//! 相邻截面两两相连，每对截面生成 4 个象限六面体块；
//! 每个象限边界按截面实际半径在对角（半角）位置给出弧线
//! 插值点，使象限边成为真圆弧而非弦。
//!
//! 边界 patch：`inlet` 为首截面 4 个象限面，`outlet` 为末截面
//! （绕向相反，二者外法线朝向相反的展向方向），`innerWall` /
//! `outerWall` 为全部相邻截面对的内外圈侧面。
//!
//! 前置条件：参数已通过 `MeshParameters::validate()`，
//! 特别是圆周网格数为 4 的倍数。

use std::f64::consts::FRAC_1_SQRT_2;

use fc_config::{BoundaryLayerParams, MeshParameters};
use fc_foundation::Point3D;
use fc_geom::resample::CrossSection;

use crate::dict::{ArcEdge, BlockMeshDict, HexBlock, Patch, PatchKind};
use crate::error::{MeshError, MeshResult};

/// 弧线插值点的象限符号表：(x 符号, y 符号)
const DIAGONAL_SIGNS: [(f64, f64); 4] = [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];

/// 回转式流道网格生成器
#[derive(Debug, Clone)]
pub struct RevolvedMeshBuilder {
    mesh_params: MeshParameters,
    bl_params: BoundaryLayerParams,
}

impl RevolvedMeshBuilder {
    /// 创建生成器（不启用边界层）
    pub fn new(mesh_params: &MeshParameters) -> Self {
        Self {
            mesh_params: mesh_params.clone(),
            bl_params: BoundaryLayerParams::default(),
        }
    }

    /// 指定边界层参数
    pub fn with_boundary_layer(mut self, bl_params: &BoundaryLayerParams) -> Self {
        self.bl_params = bl_params.clone();
        self
    }

    /// 从截面序列装配完整拓扑
    ///
    /// # 错误
    ///
    /// - 截面少于 2 个
    /// - 启用了边界层（多壳块插入尚未实现，显式拒绝而非静默回退）
    pub fn build(&self, sections: &[CrossSection]) -> MeshResult<BlockMeshDict> {
        if sections.len() < 2 {
            return Err(MeshError::TooFewSections {
                provided: sections.len(),
            });
        }
        if self.bl_params.enabled {
            return Err(MeshError::BoundaryLayerUnsupported);
        }

        let mut dict = BlockMeshDict::new(self.mesh_params.scale_factor);

        self.add_vertices(&mut dict, sections);
        self.add_blocks(&mut dict, sections.len());
        self.add_edges(&mut dict, sections);
        self.add_patches(&mut dict, sections.len());

        dict.check_indices()?;
        Ok(dict)
    }

    /// 每截面 8 个顶点：内圈 4 个在前，外圈 4 个在后
    fn add_vertices(&self, dict: &mut BlockMeshDict, sections: &[CrossSection]) {
        for section in sections {
            let z = section.z;
            for radius in [section.inner_radius(), section.outer_radius()] {
                dict.add_vertex(Point3D::new(radius, 0.0, z));
                dict.add_vertex(Point3D::new(0.0, radius, z));
                dict.add_vertex(Point3D::new(-radius, 0.0, z));
                dict.add_vertex(Point3D::new(0.0, -radius, z));
            }
        }
    }

    /// 每对相邻截面生成 4 个象限块
    fn add_blocks(&self, dict: &mut BlockMeshDict, num_sections: usize) {
        let cells = [
            self.mesh_params.n_cells_radial,
            self.mesh_params.n_cells_circum / 4,
            self.mesh_params.n_cells_axial,
        ];

        for i in 0..num_sections - 1 {
            let base = i * 8;
            let next = (i + 1) * 8;

            for quad in 0..4 {
                let q1 = (quad + 1) % 4;
                dict.blocks.push(HexBlock::uniform(
                    [
                        base + quad,
                        base + 4 + quad,
                        base + 4 + q1,
                        base + q1,
                        next + quad,
                        next + 4 + quad,
                        next + 4 + q1,
                        next + q1,
                    ],
                    cells,
                ));
            }
        }
    }

    /// 每截面 8 条弧：内外圈各 4 条，插值点取半角对角位置
    fn add_edges(&self, dict: &mut BlockMeshDict, sections: &[CrossSection]) {
        for (i, section) in sections.iter().enumerate() {
            let base = i * 8;
            let z = section.z;

            for (ring, radius) in [
                (0, section.inner_radius()),
                (4, section.outer_radius()),
            ] {
                let diag = radius * FRAC_1_SQRT_2;
                for (quad, (sx, sy)) in DIAGONAL_SIGNS.iter().enumerate() {
                    dict.edges.push(ArcEdge::new(
                        base + ring + quad,
                        base + ring + (quad + 1) % 4,
                        Point3D::new(sx * diag, sy * diag, z),
                    ));
                }
            }
        }
    }

    fn add_patches(&self, dict: &mut BlockMeshDict, num_sections: usize) {
        let mut inlet = Patch::new("inlet", PatchKind::Patch);
        for quad in 0..4 {
            let q1 = (quad + 1) % 4;
            inlet.faces.push([quad, 4 + quad, 4 + q1, q1]);
        }

        // 出口面绕向与入口相反，外法线朝向相反的展向方向
        let last = (num_sections - 1) * 8;
        let mut outlet = Patch::new("outlet", PatchKind::Patch);
        for quad in 0..4 {
            let q1 = (quad + 1) % 4;
            outlet
                .faces
                .push([last + quad, last + q1, last + 4 + q1, last + 4 + quad]);
        }

        let mut inner_wall = Patch::new("innerWall", PatchKind::Wall);
        let mut outer_wall = Patch::new("outerWall", PatchKind::Wall);
        for i in 0..num_sections - 1 {
            let base = i * 8;
            let next = (i + 1) * 8;
            for quad in 0..4 {
                let q1 = (quad + 1) % 4;
                inner_wall
                    .faces
                    .push([base + quad, base + q1, next + q1, next + quad]);
                outer_wall.faces.push([
                    base + 4 + quad,
                    next + 4 + quad,
                    next + 4 + q1,
                    base + 4 + q1,
                ]);
            }
        }

        dict.patches.extend([inlet, outlet, inner_wall, outer_wall]);
    }
}
