// crates/fc_mesh/src/dict.rs

//! blockMeshDict 数据模型与序列化
//!
//! 网格拓扑的完整产物：顶点表、六面体块、弧边与边界 patch。
//! 生成器一次性构建本结构，随后 [`BlockMeshDict::render`] 输出
//! OpenFOAM 字典文本，段落顺序固定为
//! header/scale、vertices、blocks、edges、boundary、mergePatchPairs。
//!
//! 所有坐标按 6 位小数输出；顶点下标从 0 开始，仅在单次生成内稳定。
//! 输出不含时间戳，相同拓扑的两次渲染字节级一致。

use std::fmt::Write as _;

use fc_foundation::Point3D;

use crate::error::{MeshError, MeshResult};

/// OpenFOAM blockMeshDict 文件头
const HEADER: &str = r"/*--------------------------------*- C++ -*----------------------------------*\
| =========                 |                                                 |
| \\      /  F ield         | OpenFOAM: The Open Source CFD Toolbox           |
|  \\    /   O peration     | Version:  v2212                                 |
|   \\  /    A nd           | Website:  www.openfoam.com                      |
|    \\/     M anipulation  |                                                 |
\*---------------------------------------------------------------------------*/
FoamFile
{
    version     2.0;
    format      ascii;
    class       dictionary;
    object      blockMeshDict;
}
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * //
";

/// 文件尾分隔线
const FOOTER: &str =
    "// ************************************************************************* //\n";

/// 六面体块
///
/// 顶点顺序遵循 OpenFOAM hex 约定：底面四点逆时针，再顶面四点。
#[derive(Debug, Clone)]
pub struct HexBlock {
    /// 8 个顶点下标
    pub vertices: [usize; 8],
    /// 可选的 cellZone 名称
    pub zone: Option<String>,
    /// 三个方向的网格数
    pub cells: [usize; 3],
    /// simpleGrading 三方向比例
    pub grading: [f64; 3],
}

impl HexBlock {
    /// 创建无 cellZone 的均匀块
    pub fn uniform(vertices: [usize; 8], cells: [usize; 3]) -> Self {
        Self {
            vertices,
            zone: None,
            cells,
            grading: [1.0, 1.0, 1.0],
        }
    }

    /// 创建带 cellZone 的均匀块
    pub fn zoned(vertices: [usize; 8], zone: impl Into<String>, cells: [usize; 3]) -> Self {
        Self {
            vertices,
            zone: Some(zone.into()),
            cells,
            grading: [1.0, 1.0, 1.0],
        }
    }
}

/// 圆弧边：两个顶点下标加一个插值点
#[derive(Debug, Clone, Copy)]
pub struct ArcEdge {
    /// 起点下标
    pub from: usize,
    /// 终点下标
    pub to: usize,
    /// 弧上插值点
    pub midpoint: Point3D,
}

impl ArcEdge {
    /// 创建弧边
    pub fn new(from: usize, to: usize, midpoint: Point3D) -> Self {
        Self { from, to, midpoint }
    }
}

/// 边界 patch 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchKind {
    /// 普通 patch（进出口等）
    Patch,
    /// 壁面
    Wall,
}

impl PatchKind {
    /// OpenFOAM 关键字
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Patch => "patch",
            Self::Wall => "wall",
        }
    }
}

/// 命名边界 patch：四顶点面的有序集合
#[derive(Debug, Clone)]
pub struct Patch {
    /// patch 名称
    pub name: String,
    /// patch 类型
    pub kind: PatchKind,
    /// 面列表，每面 4 个顶点下标，绕向满足外法线约定
    pub faces: Vec<[usize; 4]>,
}

impl Patch {
    /// 创建空 patch
    pub fn new(name: impl Into<String>, kind: PatchKind) -> Self {
        Self {
            name: name.into(),
            kind,
            faces: Vec::new(),
        }
    }
}

/// 完整的 blockMeshDict 拓扑
///
/// 由生成器一次装配完成，之后只读。
#[derive(Debug, Clone)]
pub struct BlockMeshDict {
    /// 尺度因子
    pub scale: f64,
    /// 顶点表（下标即 ID）
    pub vertices: Vec<Point3D>,
    /// 六面体块列表
    pub blocks: Vec<HexBlock>,
    /// 弧边列表
    pub edges: Vec<ArcEdge>,
    /// 边界 patch 列表
    pub patches: Vec<Patch>,
}

impl BlockMeshDict {
    /// 创建空字典
    pub fn new(scale: f64) -> Self {
        Self {
            scale,
            vertices: Vec::new(),
            blocks: Vec::new(),
            edges: Vec::new(),
            patches: Vec::new(),
        }
    }

    /// 添加顶点，返回其下标
    pub fn add_vertex(&mut self, p: Point3D) -> usize {
        self.vertices.push(p);
        self.vertices.len() - 1
    }

    /// 一致性检查：所有块、边、patch 引用的顶点下标必须在表内
    pub fn check_indices(&self) -> MeshResult<()> {
        let n = self.vertices.len();

        for block in &self.blocks {
            for &v in &block.vertices {
                if v >= n {
                    return Err(MeshError::VertexIndexOutOfRange {
                        context: "块",
                        index: v,
                        vertex_count: n,
                    });
                }
            }
        }
        for edge in &self.edges {
            if edge.from >= n || edge.to >= n {
                return Err(MeshError::VertexIndexOutOfRange {
                    context: "弧边",
                    index: edge.from.max(edge.to),
                    vertex_count: n,
                });
            }
        }
        for patch in &self.patches {
            for face in &patch.faces {
                for &v in face {
                    if v >= n {
                        return Err(MeshError::VertexIndexOutOfRange {
                            context: "边界面",
                            index: v,
                            vertex_count: n,
                        });
                    }
                }
            }
        }

        Ok(())
    }

    /// 渲染为 blockMeshDict 文本
    ///
    /// 输出完全由拓扑内容决定，可重复、可比对。
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(4096 + self.vertices.len() * 64);

        out.push_str(HEADER);
        out.push('\n');
        // {:?} 保留小数点（1.0 输出 "1.0" 而非 "1"）
        let _ = writeln!(out, "scale {:?};", self.scale);
        out.push('\n');

        self.render_vertices(&mut out);
        self.render_blocks(&mut out);
        self.render_edges(&mut out);
        self.render_boundary(&mut out);

        out.push_str("mergePatchPairs\n(\n);\n\n");
        out.push_str(FOOTER);
        out
    }

    fn render_vertices(&self, out: &mut String) {
        out.push_str("vertices\n(\n");
        for (i, v) in self.vertices.iter().enumerate() {
            let _ = writeln!(
                out,
                "    ({:.6} {:.6} {:.6})  // {}",
                v.x, v.y, v.z, i
            );
        }
        out.push_str(");\n\n");
    }

    fn render_blocks(&self, out: &mut String) {
        out.push_str("blocks\n(\n");
        for block in &self.blocks {
            let v = &block.vertices;
            let _ = write!(
                out,
                "    hex ({} {} {} {} {} {} {} {})",
                v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7]
            );
            if let Some(zone) = &block.zone {
                let _ = write!(out, " {}", zone);
            }
            let _ = writeln!(
                out,
                " ({} {} {}) simpleGrading ({} {} {})",
                block.cells[0],
                block.cells[1],
                block.cells[2],
                block.grading[0],
                block.grading[1],
                block.grading[2]
            );
        }
        out.push_str(");\n\n");
    }

    fn render_edges(&self, out: &mut String) {
        out.push_str("edges\n(\n");
        for edge in &self.edges {
            let m = edge.midpoint;
            let _ = writeln!(
                out,
                "    arc {} {} ({:.6} {:.6} {:.6})",
                edge.from, edge.to, m.x, m.y, m.z
            );
        }
        out.push_str(");\n\n");
    }

    fn render_boundary(&self, out: &mut String) {
        out.push_str("boundary\n(\n");
        for patch in &self.patches {
            let _ = writeln!(out, "    {}", patch.name);
            out.push_str("    {\n");
            let _ = writeln!(out, "        type {};", patch.kind.keyword());
            out.push_str("        faces\n        (\n");
            for face in &patch.faces {
                let _ = writeln!(
                    out,
                    "            ({} {} {} {})",
                    face[0], face[1], face[2], face[3]
                );
            }
            out.push_str("        );\n    }\n");
        }
        out.push_str(");\n\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_dict() -> BlockMeshDict {
        let mut dict = BlockMeshDict::new(1.0);
        for i in 0..8 {
            let x = (i & 1) as f64;
            let y = ((i >> 1) & 1) as f64;
            let z = ((i >> 2) & 1) as f64;
            dict.add_vertex(Point3D::new(x, y, z));
        }
        dict.blocks
            .push(HexBlock::uniform([0, 1, 3, 2, 4, 5, 7, 6], [2, 2, 2]));
        dict.edges
            .push(ArcEdge::new(0, 1, Point3D::new(0.5, -0.1, 0.0)));
        let mut inlet = Patch::new("inlet", PatchKind::Patch);
        inlet.faces.push([0, 1, 3, 2]);
        dict.patches.push(inlet);
        dict
    }

    #[test]
    fn test_render_section_order() {
        let text = tiny_dict().render();

        let pos = |s: &str| text.find(s).unwrap();
        assert!(pos("scale 1.0;") < pos("vertices"));
        assert!(pos("vertices") < pos("blocks"));
        assert!(pos("blocks") < pos("edges"));
        assert!(pos("edges") < pos("boundary"));
        assert!(pos("boundary") < pos("mergePatchPairs"));
    }

    #[test]
    fn test_render_scale_keeps_decimal_point() {
        let text = BlockMeshDict::new(1.0).render();
        assert!(text.contains("scale 1.0;"));

        let text = BlockMeshDict::new(0.001).render();
        assert!(text.contains("scale 0.001;"));
    }

    #[test]
    fn test_render_six_decimal_precision() {
        let mut dict = BlockMeshDict::new(1.0);
        dict.add_vertex(Point3D::new(1.0 / 3.0, 0.0, 0.0));
        let text = dict.render();
        assert!(text.contains("(0.333333 0.000000 0.000000)"));
    }

    #[test]
    fn test_render_hex_line() {
        let text = tiny_dict().render();
        assert!(text.contains("hex (0 1 3 2 4 5 7 6) (2 2 2) simpleGrading (1 1 1)"));
    }

    #[test]
    fn test_render_zoned_block() {
        let mut dict = tiny_dict();
        dict.blocks[0].zone = Some("square".into());
        let text = dict.render();
        assert!(text.contains("hex (0 1 3 2 4 5 7 6) square (2 2 2)"));
    }

    #[test]
    fn test_render_arc_and_patch() {
        let text = tiny_dict().render();
        assert!(text.contains("arc 0 1 (0.500000 -0.100000 0.000000)"));
        assert!(text.contains("type patch;"));
        assert!(text.contains("(0 1 3 2)"));
    }

    #[test]
    fn test_render_deterministic() {
        let dict = tiny_dict();
        assert_eq!(dict.render(), dict.render());
    }

    #[test]
    fn test_check_indices_valid() {
        assert!(tiny_dict().check_indices().is_ok());
    }

    #[test]
    fn test_check_indices_block_out_of_range() {
        let mut dict = tiny_dict();
        dict.blocks[0].vertices[7] = 99;
        let err = dict.check_indices().unwrap_err();
        assert!(matches!(
            err,
            MeshError::VertexIndexOutOfRange { index: 99, .. }
        ));
    }

    #[test]
    fn test_check_indices_patch_out_of_range() {
        let mut dict = tiny_dict();
        dict.patches[0].faces.push([0, 1, 2, 42]);
        assert!(dict.check_indices().is_err());
    }

    #[test]
    fn test_patch_kind_keyword() {
        assert_eq!(PatchKind::Patch.keyword(), "patch");
        assert_eq!(PatchKind::Wall.keyword(), "wall");
    }
}
