// crates/fc_mesh/src/transition.rs

//! 圆柱过渡块网格生成器
//!
//! 以 X 轴为高度方向、Y-Z 平面为圆形截面的单段挤出网格：
//! 只有底面与顶面两个纵向站位，不做分层扫掠。
//!
//! 每个站位上放置 4 个内方形顶点（角点角度 −45°/−135°/135°/45°，
//! 以 ±边长的直角坐标偏移摆放）与 4 个外圆顶点（同角度的极坐标
//! 摆放）。拓扑固定为 5 块：1 个中心方形块加 4 个连接方形边与
//! 外圆弧的过渡扇形块。
//!
//! 内方形边以弯曲半径（严格大于方形半边长）给出微凸弧线，
//! 使方形具有圆角；外圆弧的插值点取边中点角度
//! （0°/−90°/180°/90°）处的圆上点。
//!
//! 前置条件：参数已通过 `CylinderMeshParams::validate()`。

use fc_config::CylinderMeshParams;
use fc_foundation::Point3D;

use crate::dict::{ArcEdge, BlockMeshDict, HexBlock, Patch, PatchKind};
use crate::error::MeshResult;

/// 四个角点角度（度）
const CORNER_ANGLES: [f64; 4] = [-45.0, -135.0, 135.0, 45.0];

/// 四条边中点角度（度）
const EDGE_ANGLES: [f64; 4] = [0.0, -90.0, 180.0, 90.0];

/// 角点的方形偏移符号：(y 符号, z 符号)，与 [`CORNER_ANGLES`] 对应
const SQUARE_SIGNS: [(f64, f64); 4] = [(1.0, -1.0), (-1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)];

/// 圆柱过渡块网格生成器
#[derive(Debug, Clone)]
pub struct CylinderMeshBuilder {
    params: CylinderMeshParams,
}

impl CylinderMeshBuilder {
    /// 创建生成器
    pub fn new(params: &CylinderMeshParams) -> Self {
        Self {
            params: params.clone(),
        }
    }

    /// 装配完整拓扑
    ///
    /// 顶点布局：底面方形 0–3、底面外圆 4–7、顶面方形 8–11、
    /// 顶面外圆 12–15。块数恒为 5，与网格数无关。
    pub fn build(&self) -> MeshResult<BlockMeshDict> {
        let mut dict = BlockMeshDict::new(1.0);

        self.add_vertices(&mut dict);
        self.add_blocks(&mut dict);
        self.add_edges(&mut dict);
        self.add_patches(&mut dict);

        dict.check_indices()?;
        Ok(dict)
    }

    /// 方形角点坐标
    fn square_vertex(&self, corner: usize, x_pos: f64) -> Point3D {
        let s = self.params.inner_square_side;
        let (sy, sz) = SQUARE_SIGNS[corner];
        Point3D::new(x_pos, sy * s, sz * s)
    }

    /// 外圆角点坐标
    fn circle_vertex(&self, corner: usize, x_pos: f64) -> Point3D {
        let angle = CORNER_ANGLES[corner].to_radians();
        let r = self.params.radius;
        Point3D::new(x_pos, r * angle.cos(), r * angle.sin())
    }

    /// 边中点处的弧线插值点
    ///
    /// 外圆用圆柱半径，内方形用弯曲半径（微凸圆角）。
    fn edge_point(&self, is_outer: bool, edge: usize, x_pos: f64) -> Point3D {
        let angle = EDGE_ANGLES[edge].to_radians();
        let r = if is_outer {
            self.params.radius
        } else {
            self.params.inner_square_curve
        };
        Point3D::new(x_pos, r * angle.cos(), r * angle.sin())
    }

    fn add_vertices(&self, dict: &mut BlockMeshDict) {
        let p = &self.params;
        for x_pos in [p.base_x, p.outlet_x()] {
            for corner in 0..4 {
                dict.add_vertex(self.square_vertex(corner, x_pos));
            }
            for corner in 0..4 {
                dict.add_vertex(self.circle_vertex(corner, x_pos));
            }
        }
    }

    fn add_blocks(&self, dict: &mut BlockMeshDict) {
        let p = &self.params;
        let ns = p.n_cells_square;
        let ni = p.n_cells_inner;
        let nh = p.n_cells_height;

        // 中心方形块
        dict.blocks.push(HexBlock::zoned(
            [1, 0, 3, 2, 9, 8, 11, 10],
            "square",
            [ns, ns, nh],
        ));

        // 四个过渡扇形块：方形边 -> 对应外圆弧
        let sector_vertices: [[usize; 8]; 4] = [
            [0, 4, 7, 3, 8, 12, 15, 11],
            [3, 7, 6, 2, 11, 15, 14, 10],
            [2, 6, 5, 1, 10, 14, 13, 9],
            [1, 5, 4, 0, 9, 13, 12, 8],
        ];
        for vertices in sector_vertices {
            dict.blocks
                .push(HexBlock::zoned(vertices, "innerCircle", [ni, ns, nh]));
        }
    }

    fn add_edges(&self, dict: &mut BlockMeshDict) {
        let p = &self.params;
        let stations = [(0, p.base_x), (8, p.outlet_x())];

        // 外圆弧：两个站位各 4 条
        for (offset, x_pos) in stations {
            for edge in 0..4 {
                dict.edges.push(ArcEdge::new(
                    offset + 4 + (edge + 1) % 4,
                    offset + 4 + edge,
                    self.edge_point(true, edge, x_pos),
                ));
            }
        }

        // 内方形微凸弧：两个站位各 4 条
        for (offset, x_pos) in stations {
            for edge in 0..4 {
                dict.edges.push(ArcEdge::new(
                    offset + (edge + 1) % 4,
                    offset + edge,
                    self.edge_point(false, edge, x_pos),
                ));
            }
        }
    }

    fn add_patches(&self, dict: &mut BlockMeshDict) {
        // 外壁
        let mut enclosure = Patch::new("Enclosure", PatchKind::Patch);
        for i in 0..4 {
            let i1 = (i + 1) % 4;
            enclosure.faces.push([4 + i, 4 + i1, 12 + i1, 12 + i]);
        }

        // 入口：中心方形 + 四个扇形
        let mut inlet = Patch::new("inlet", PatchKind::Patch);
        inlet.faces.push([0, 1, 2, 3]);
        inlet.faces.push([0, 3, 7, 4]);
        inlet.faces.push([3, 2, 6, 7]);
        inlet.faces.push([2, 1, 5, 6]);
        inlet.faces.push([1, 0, 4, 5]);

        // 出口：与入口绕向相反
        let mut outlet = Patch::new("outlet", PatchKind::Patch);
        outlet.faces.push([8, 11, 10, 9]);
        outlet.faces.push([8, 12, 15, 11]);
        outlet.faces.push([11, 15, 14, 10]);
        outlet.faces.push([10, 14, 13, 9]);
        outlet.faces.push([9, 13, 12, 8]);

        dict.patches.extend([enclosure, inlet, outlet]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_dict() -> BlockMeshDict {
        CylinderMeshBuilder::new(&CylinderMeshParams::default())
            .build()
            .unwrap()
    }

    #[test]
    fn test_vertex_count() {
        assert_eq!(default_dict().vertices.len(), 16);
    }

    #[test]
    fn test_block_count_always_five() {
        let dict = default_dict();
        assert_eq!(dict.blocks.len(), 5);

        // 网格数不影响块数
        let params = CylinderMeshParams {
            n_cells_square: 5,
            n_cells_inner: 7,
            n_cells_height: 11,
            ..Default::default()
        };
        let dict = CylinderMeshBuilder::new(&params).build().unwrap();
        assert_eq!(dict.blocks.len(), 5);
    }

    #[test]
    fn test_square_vertices() {
        let dict = default_dict();
        let s = 0.3;

        // 角点 0（−45°）：(y, z) = (s, −s)，底面 x = base_x
        let v0 = dict.vertices[0];
        assert!((v0.x - (-1.8)).abs() < 1e-12);
        assert!((v0.y - s).abs() < 1e-12);
        assert!((v0.z + s).abs() < 1e-12);

        // 顶面方形在 outlet_x
        let v8 = dict.vertices[8];
        assert!((v8.x - 3.53).abs() < 1e-12);
    }

    #[test]
    fn test_circle_vertices_on_radius() {
        let dict = default_dict();
        for i in 4..8 {
            let v = dict.vertices[i];
            let r = (v.y * v.y + v.z * v.z).sqrt();
            assert!((r - 1.8).abs() < 1e-12);
        }
    }

    #[test]
    fn test_block_zones_and_cells() {
        let dict = default_dict();

        assert_eq!(dict.blocks[0].zone.as_deref(), Some("square"));
        assert_eq!(dict.blocks[0].vertices, [1, 0, 3, 2, 9, 8, 11, 10]);
        assert_eq!(dict.blocks[0].cells, [30, 30, 120]);

        for block in &dict.blocks[1..] {
            assert_eq!(block.zone.as_deref(), Some("innerCircle"));
            assert_eq!(block.cells, [30, 30, 120]);
        }
    }

    #[test]
    fn test_blocks_reference_distinct_vertices() {
        let dict = default_dict();
        for block in &dict.blocks {
            let mut seen = block.vertices.to_vec();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), 8);
            assert!(seen.iter().all(|&v| v < 16));
        }
    }

    #[test]
    fn test_edge_counts() {
        let dict = default_dict();
        // 外圆 8 条 + 内方形 8 条
        assert_eq!(dict.edges.len(), 16);
    }

    #[test]
    fn test_outer_arc_midpoints_on_circle() {
        let dict = default_dict();
        // 前 8 条为外圆弧
        for edge in &dict.edges[..8] {
            let m = edge.midpoint;
            let r = (m.y * m.y + m.z * m.z).sqrt();
            assert!((r - 1.8).abs() < 1e-12);
        }
    }

    #[test]
    fn test_inner_arc_bulge() {
        let dict = default_dict();
        // 后 8 条为内方形弧，插值点半径等于弯曲半径 0.4 > 边长 0.3
        for edge in &dict.edges[8..] {
            let m = edge.midpoint;
            let r = (m.y * m.y + m.z * m.z).sqrt();
            assert!((r - 0.4).abs() < 1e-12);
        }
    }

    #[test]
    fn test_first_outer_arc_endpoints() {
        let dict = default_dict();
        // 底面外圆第一条弧连接顶点 5 和 4
        let arc = &dict.edges[0];
        assert_eq!((arc.from, arc.to), (5, 4));
        assert!((arc.midpoint.x - (-1.8)).abs() < 1e-12);
    }

    #[test]
    fn test_patches() {
        let dict = default_dict();
        let names: Vec<&str> = dict.patches.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Enclosure", "inlet", "outlet"]);

        assert_eq!(dict.patches[0].faces.len(), 4);
        assert_eq!(dict.patches[1].faces.len(), 5);
        assert_eq!(dict.patches[2].faces.len(), 5);

        // 入口中心方形与出口中心方形绕向相反
        assert_eq!(dict.patches[1].faces[0], [0, 1, 2, 3]);
        assert_eq!(dict.patches[2].faces[0], [8, 11, 10, 9]);
    }

    #[test]
    fn test_render_deterministic() {
        let builder = CylinderMeshBuilder::new(&CylinderMeshParams::default());
        let a = builder.build().unwrap().render();
        let b = builder.build().unwrap().render();
        assert_eq!(a, b);
    }
}
