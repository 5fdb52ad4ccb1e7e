use std::path::PathBuf;

use thiserror::Error;

use crate::data::DataError;
use crate::gan::GanKind;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TensorError {
    #[error("张量列表为空")]
    EmptyList,
    #[error("张量形状不一致")]
    InconsitentShape,
    #[error("张量形状不兼容")]
    IncompatibleShape,
    #[error("批索引越界：{index} >= {len}")]
    BatchIndexOutOfBounds { index: usize, len: usize },
    #[error("无法将形状为{0:?}的张量视为图像")]
    NotAnImage(Vec<usize>),
}

/// 本库对外的统一错误类型
#[derive(Error, Debug)]
pub enum VisualError {
    /// 不在`GanKind`枚举之内的模型类型名
    #[error("未知的GAN模型类型：`{0}`")]
    UnknownModelKind(String),
    /// 某些模型（ccgan、cyclegan）需要调用方额外提供真实图像
    #[error("模型`{kind}`缺少必需的辅助图像参数`{name}`")]
    MissingAuxImage { kind: GanKind, name: &'static str },
    #[error("参数无效：{0}")]
    InvalidArgument(String),
    #[error("图像数量不足：需要{needed}张，实际只有{got}张")]
    NotEnoughImages { needed: usize, got: usize },
    #[error("目录`{0}`中没有以数字命名的png快照帧")]
    NoSnapshotFrames(PathBuf),
    /// 由调用方实现的生成器在推理时返回的错误
    #[error("模型推理失败：{0}")]
    Inference(String),
    #[error("张量读写失败：{0}")]
    Persist(String),

    #[error(transparent)]
    Tensor(#[from] TensorError),
    #[error(transparent)]
    Data(#[from] DataError),
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
    #[error("图像编解码错误: {0}")]
    Image(#[from] image::ImageError),
    #[error("配置解析失败: {0}")]
    Config(#[from] serde_json::Error),
}

impl VisualError {
    /// 是否属于“参数无效”一类的错误（调用方传入了本库无法处理的参数）
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::UnknownModelKind(_) | Self::MissingAuxImage { .. } | Self::InvalidArgument(_)
        )
    }
}
