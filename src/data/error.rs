use std::path::PathBuf;

use thiserror::Error;

/// 读取、下载参考数据集时的错误
#[derive(Debug, Error)]
pub enum DataError {
    #[error("找不到数据文件`{0}`（可开启下载，或手动放入该目录）")]
    FileNotFound(PathBuf),

    #[error("读取数据失败: {0}")]
    Io(#[from] std::io::Error),

    /// IDX文件头或数据长度不符合预期
    #[error("`{path}`不是有效的IDX文件: {reason}")]
    InvalidIdx { path: PathBuf, reason: String },

    #[error("样本索引{index}越界（共{len}个样本）")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("数据形状不符: 期望{expected:?}, 实际{got:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    #[error("类别标签{0}超出了0-9的范围")]
    InvalidLabel(usize),

    #[error("下载`{url}`失败: {reason}")]
    Download { url: String, reason: String },

    #[error("`{file}`的MD5校验失败: 期望{expected}, 实际{got}")]
    ChecksumMismatch {
        file: String,
        expected: String,
        got: String,
    },
}
