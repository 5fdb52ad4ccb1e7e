//! 本模块提供图像相关的底层功能：图像的载入、灰度转换、色图（colormap）、
//! 网格画布以及动图的组装。
//! 在本模块中，不严谨地说：
//! 1. 所谓的image/图像是指灰度或RGB(A)格式的图像；
//! 2. “灰度”（图）等同于英文中luma、luminance、grey、gray的概念。

use std::path::Path;

use crate::errors::VisualError;
use crate::tensor::Tensor;
use crate::utils::traits::dynamic_image::TraitForDynamicImage;

mod animation;
mod canvas;
mod glyph;

pub use animation::{SNAPSHOT_GIF_NAME, assemble_gif, collect_snapshot_frames};
pub use canvas::Canvas;
pub use glyph::{GLYPH_HEIGHT, GLYPH_WIDTH, draw_text};

#[cfg(test)]
mod tests;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ImageType {
    L8,    // 单通道或者只有高（行）、宽（列）2个维度的图像张量
    Rgb8,  // 3通道的图像张量
    Rgba8, // 4通道的图像张量
}

/// 将[0, 255]的灰度值映射为最终显示的像素值
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Colormap {
    /// 0为黑、255为白
    Gray,
    /// 反转的灰度：0为白、255为黑（MNIST风格的白底黑字）
    GrayReversed,
}

impl Colormap {
    pub fn apply(&self, value: u8) -> u8 {
        match self {
            Colormap::Gray => value,
            Colormap::GrayReversed => 255 - value,
        }
    }
}

pub struct Vision;

impl Vision {
    /// 将本地的图像加载到Tensor中，形状为`[H, W]`（灰度）或`[H, W, C]`
    pub fn load_image<P: AsRef<Path>>(path: P) -> Result<Tensor, VisualError> {
        let image = image::open(path)?;
        let mut tensor = image.to_tensor()?;
        if tensor.shape()[2] == 1 {
            let (height, width) = (tensor.shape()[0], tensor.shape()[1]);
            tensor = tensor.into_reshape(&[height, width]);
        }
        Ok(tensor)
    }

    /// 形状为图像（见`Tensor::image_type`）时，返回该图像的灰度图`[H, W]`， 否则返回错误信息
    /// * `input_tensor` - 输入张量
    ///
    /// 注：如果输入张量是单通道的图像张量，则直接返回（去掉通道维度后的）该张量；
    /// RGBA图像会忽略透明通道。不检查像素值范围。
    pub fn to_luma(input_tensor: &Tensor) -> Result<Tensor, VisualError> {
        match input_tensor.image_type()? {
            ImageType::L8 => {
                let shape = input_tensor.shape();
                Ok(input_tensor.reshape(&[shape[0], shape[1]]))
            }
            ImageType::Rgb8 | ImageType::Rgba8 => {
                let height = input_tensor.shape()[0];
                let width = input_tensor.shape()[1];
                let input_view = input_tensor.view();
                let mut luma_data = Vec::with_capacity(height * width);
                // 多通道的图像转化为灰度图，需压缩到单通道
                for y in 0..height {
                    for x in 0..width {
                        let r = input_view[[y, x, 0]];
                        let g = input_view[[y, x, 1]];
                        let b = input_view[[y, x, 2]];
                        let luma = 0.299 * r + 0.587 * g + 0.114 * b;
                        luma_data.push(luma.round());
                    }
                }
                Ok(Tensor::new(&luma_data, &[height, width]))
            }
        }
    }
}
