//! 训练结果的可视化：MNIST样本图、各类GAN的10×10生成网格、图像转换模型的前后对照图、
//! infogan的风格对比图，以及把各轮快照组装为动图。
//!
//! 所有输出都写在`VisualConfig::root_dir`之下：
//! - `mnist.png`
//! - `<模型名>/<epoch>.png`
//! - `<模型名>/generating.gif`
//! - `infogan/style<n>.png`

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::VisualConfig;
use crate::errors::VisualError;
use crate::tensor::Tensor;
use crate::vision::{Canvas, Colormap};

mod animator;
mod grid;
mod paired;
mod sampler;
mod styles;

pub use grid::{MaskSquare, grid_labels, grid_styles};

#[cfg(test)]
mod tests;

/// 生成网格的行数与列数
pub const GRID_SIDE: usize = 10;
/// 生成网格的单元格数
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;

/// 可视化入口。每次渲染都新建独立的画布，`Visualizer`本身只持有配置和随机数生成器
#[derive(Debug, Clone)]
pub struct Visualizer {
    config: VisualConfig,
    rng: StdRng,
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new(VisualConfig::default())
    }
}

impl Visualizer {
    /// 配置中给定`seed`时结果可复现，否则使用系统熵
    pub fn new(config: VisualConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &VisualConfig {
        &self.config
    }

    /// 取一批图像中的前`rows * cols`张，按行优先绘制到新画布上。
    /// * `images` - 首维为批维度、取值在[0, 255]的图像
    /// * `labeled` - 为`true`时在每个单元格中标注其行号
    fn draw_grid(
        &self,
        images: &Tensor,
        rows: usize,
        cols: usize,
        colormap: Colormap,
        labeled: bool,
    ) -> Result<Canvas, VisualError> {
        let cells = batch_cells(images, rows * cols)?;
        let mut canvas = self.new_canvas(rows, cols, &cells[0])?;
        for r in 0..rows {
            for c in 0..cols {
                let cell = &cells[r * cols + c];
                canvas.draw_cell(r, c, cell, colormap, self.config.normalize_cells)?;
                if labeled {
                    canvas.draw_label(r, c, &r.to_string(), self.config.label_offset)?;
                }
            }
        }
        Ok(canvas)
    }

    fn new_canvas(&self, rows: usize, cols: usize, first: &Tensor) -> Result<Canvas, VisualError> {
        let (height, width) = match first.shape() {
            &[height, width, ..] => (height, width),
            shape => {
                return Err(VisualError::InvalidArgument(format!(
                    "无法将形状为{shape:?}的张量绘制为图像"
                )));
            }
        };
        Ok(Canvas::new(
            rows,
            cols,
            height,
            width,
            self.config.cell_scale,
            self.config.cell_padding,
        ))
    }
}

/// 将一批图像的前`needed`张整理为可绘制的单张图像，不足时返回`NotEnoughImages`
fn batch_cells(images: &Tensor, needed: usize) -> Result<Vec<Tensor>, VisualError> {
    let got = if images.dimension() == 0 {
        0
    } else {
        images.batch_len()
    };
    if needed == 0 || got < needed {
        return Err(VisualError::NotEnoughImages { needed, got });
    }
    (0..needed)
        .map(|i| images.batch_image(i).map_err(VisualError::from))
        .collect()
}
