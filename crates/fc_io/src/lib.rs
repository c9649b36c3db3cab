// crates/fc_io/src/lib.rs

//! FoamChannel IO 模块
//!
//! 提供数据输入输出功能。
//!
//! # 模块
//!
//! - [`table`]: 点位表读取（CSV / TSV / 空白分隔 TXT），
//!   统一产出有序的 N×3 坐标序列
//! - [`writer`]: 文本产物写出（blockMeshDict）
//! - [`error`]: IO 层错误类型
//!
//! 读取端是一个封闭的格式适配器集合：全部格式走同一条
//! 解析与校验路径，只有分隔符不同。产物写出只在拓扑完整
//! 构建成功后发生，失败时不产生部分文件。

pub mod error;
pub mod table;
pub mod writer;

pub use error::{IoError, IoResult};
pub use table::{parse_point_table, read_point_table, TableConfig};
pub use writer::write_artifact;
