// crates/fc_io/src/writer.rs

//! 文本产物写出
//!
//! 负责将渲染完成的 blockMeshDict 文本落盘。写出发生在拓扑
//! 完整装配并校验之后，失败时不产生部分文件。

use std::path::Path;

use crate::error::IoResult;

/// 将文本产物写入指定路径
///
/// 父目录不存在时会自动创建。内容整体写出，不做追加。
pub fn write_artifact(path: &Path, content: &str) -> IoResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_read_back() {
        let dir = std::env::temp_dir().join("fc_io_writer_test");
        let path = dir.join("system").join("blockMeshDict");

        write_artifact(&path, "FoamFile\n{\n}\n").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "FoamFile\n{\n}\n");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_write_overwrites_existing() {
        let dir = std::env::temp_dir().join("fc_io_writer_overwrite_test");
        let path = dir.join("blockMeshDict");

        write_artifact(&path, "first").unwrap();
        write_artifact(&path, "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
        std::fs::remove_dir_all(&dir).ok();
    }
}
