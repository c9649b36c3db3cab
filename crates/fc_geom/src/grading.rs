// crates/fc_geom/src/grading.rs

//! 边界层加密计算
//!
//! 壁面附近的子层厚度按几何级数增长：第 i 层单位厚度为
//! `r^i`（r 为扩展比），归一化后累加得到 (0, 1] 上的分数位置，
//! 再乘以边界层总厚度映射为实际径向偏移。
//!
//! 扩展比大于 1 时靠壁第一层最薄，符合粘性底层加密惯例。

use fc_config::BoundaryLayerParams;

/// 计算边界层各子层的累积比例
///
/// 返回长度为 `num_layers` 的序列，严格递增，末项为 1.0。
///
/// - `num_layers == 1` 退化为 `[1.0]`（全厚度一层）
/// - `expansion_ratio == 1.0` 退化为均匀间距（参数校验排除该值，
///   但计算本身对其良定义）
pub fn cumulative_ratios(num_layers: usize, expansion_ratio: f64) -> Vec<f64> {
    if num_layers <= 1 {
        return vec![1.0];
    }

    let mut thicknesses = Vec::with_capacity(num_layers);
    let mut t = 1.0;
    for _ in 0..num_layers {
        thicknesses.push(t);
        t *= expansion_ratio;
    }

    let total: f64 = thicknesses.iter().sum();

    let mut cumulative = 0.0;
    thicknesses
        .iter()
        .map(|t| {
            cumulative += t;
            cumulative / total
        })
        .collect()
}

/// 单侧壁面的加密半径序列
///
/// 首元素为壁面基线半径（比例 0.0），其后每个子层边界一个半径，
/// 末元素为全边界层厚度处的半径。序列严格单调。
#[derive(Debug, Clone)]
pub struct GradedRadialProfile {
    /// 自内壁向外的半径序列（含基线）
    pub inner: Vec<f64>,
    /// 自外壁向内的半径序列（含基线）
    pub outer: Vec<f64>,
}

impl GradedRadialProfile {
    /// 从内外壁半径与边界层参数计算双侧加密序列
    ///
    /// 内侧半径向外递增，外侧半径向内递减。参数校验保证
    /// `inner_thickness + outer_thickness < 1`，两侧序列不会重叠。
    pub fn from_walls(inner_radius: f64, outer_radius: f64, params: &BoundaryLayerParams) -> Self {
        let radial_gap = outer_radius - inner_radius;
        let inner_total = radial_gap * params.inner_thickness;
        let outer_total = radial_gap * params.outer_thickness;

        let inner_ratios = cumulative_ratios(params.inner_layers, params.expansion_ratio);
        let outer_ratios = cumulative_ratios(params.outer_layers, params.expansion_ratio);

        let mut inner = Vec::with_capacity(inner_ratios.len() + 1);
        inner.push(inner_radius);
        for ratio in &inner_ratios {
            inner.push(inner_radius + ratio * inner_total);
        }

        let mut outer = Vec::with_capacity(outer_ratios.len() + 1);
        outer.push(outer_radius);
        for ratio in &outer_ratios {
            outer.push(outer_radius - ratio * outer_total);
        }

        Self { inner, outer }
    }
}
