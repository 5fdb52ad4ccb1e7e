//! 可视化的配置：输出目录、网格版式与动图参数，以JSON格式保存

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::VisualError;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualConfig {
    /// 所有输出文件的根目录
    pub root_dir: PathBuf,
    /// 单元格中源图像的放大倍数
    pub cell_scale: u32,
    /// 单元格之间的白边宽度（像素）
    pub cell_padding: u32,
    /// 类别标注的左下角位置，以源图像的像素为单位
    pub label_offset: (u32, u32),
    /// 是否将每个单元格的最小、最大值拉伸到整个灰度范围
    pub normalize_cells: bool,
    /// MNIST样本图的列数
    pub sampler_columns: usize,
    /// 动图每帧的停留时间（毫秒）
    pub frame_delay_ms: u32,
    /// 快照帧放入动图前宽、高缩小的倍数
    pub gif_downscale: u32,
    /// 随机数种子，为空时使用系统熵
    pub seed: Option<u64>,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("visual"),
            cell_scale: 4,
            cell_padding: 2,
            label_offset: (23, 26),
            normalize_cells: true,
            sampler_columns: 5,
            frame_delay_ms: 400,
            gif_downscale: 10,
            seed: None,
        }
    }
}

impl VisualConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, VisualError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), VisualError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// 从`path`读取配置；文件不存在时以默认值创建该文件
    pub fn load_or_init<P: AsRef<Path>>(path: P) -> Result<Self, VisualError> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }
        let config = Self::default();
        config.save(path)?;
        info!("已创建默认配置 {}", path.display());
        Ok(config)
    }

    /// 某个模型的快照目录：`<root_dir>/<name>`
    pub fn model_dir(&self, name: &str) -> PathBuf {
        self.root_dir.join(name)
    }
}
