use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};
use imageproc::rect::Rect;
use tracing::info;

use super::{Colormap, Vision};
use super::glyph::{GLYPH_HEIGHT, draw_text};
use crate::errors::VisualError;
use crate::tensor::Tensor;
use crate::utils::traits::image::TraitForImageBuffer;

/// 白色背景上按`rows`×`cols`排列的网格画布。
///
/// 每次渲染都新建一个画布，绘制完毕后由`save`消耗掉，不存在全局共享的绘图状态。
/// 单元格中的源图像按`scale`倍最近邻放大，单元格之间留`padding`像素的白边。
#[derive(Debug, Clone)]
pub struct Canvas {
    rows: usize,
    cols: usize,
    cell_height: u32,
    cell_width: u32,
    scale: u32,
    padding: u32,
    buffer: GrayImage,
    drawn: Vec<bool>,
    labels: Vec<Option<String>>,
}

impl Canvas {
    /// * `cell_height`、`cell_width` - 单元格中源图像的高、宽（放大前）
    pub fn new(
        rows: usize,
        cols: usize,
        cell_height: usize,
        cell_width: usize,
        scale: u32,
        padding: u32,
    ) -> Self {
        let scale = scale.max(1);
        let (cell_height, cell_width) = (cell_height as u32, cell_width as u32);
        let width = cols as u32 * (cell_width * scale + padding) + padding;
        let height = rows as u32 * (cell_height * scale + padding) + padding;
        Self {
            rows,
            cols,
            cell_height,
            cell_width,
            scale,
            padding,
            buffer: GrayImage::from_pixel(width, height, Luma([255])),
            drawn: vec![false; rows * cols],
            labels: vec![None; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// 已绘制过图像的单元格数量
    pub fn drawn_cells(&self) -> usize {
        self.drawn.iter().filter(|&&d| d).count()
    }

    pub fn is_drawn(&self, row: usize, col: usize) -> bool {
        self.cell_index(row, col)
            .map(|i| self.drawn[i])
            .unwrap_or(false)
    }

    /// 单元格上标注的文本
    pub fn label(&self, row: usize, col: usize) -> Option<&str> {
        self.cell_index(row, col)
            .ok()
            .and_then(|i| self.labels[i].as_deref())
    }

    /// 单元格在画布中的像素区域（左上角x、y，以及宽、高）
    pub fn cell_rect(&self, row: usize, col: usize) -> (u32, u32, u32, u32) {
        let w = self.cell_width * self.scale;
        let h = self.cell_height * self.scale;
        let x = self.padding + col as u32 * (w + self.padding);
        let y = self.padding + row as u32 * (h + self.padding);
        (x, y, w, h)
    }

    fn cell_index(&self, row: usize, col: usize) -> Result<usize, VisualError> {
        if row >= self.rows || col >= self.cols {
            return Err(VisualError::InvalidArgument(format!(
                "单元格({row}, {col})超出了{}×{}的网格",
                self.rows, self.cols
            )));
        }
        Ok(row * self.cols + col)
    }

    /// 在单元格`(row, col)`中绘制一张图像。
    /// * `image` - `[H, W]`或`[H, W, C]`（C为1、3或4）的图像，取值应在[0, 255]；彩色图像先转为灰度
    /// * `normalize` - 为`true`时，将本图像的最小、最大值拉伸到[0, 255]（与自动缩放色阶的绘图方式一致）；
    ///   否则超出[0, 255]的值被截断
    pub fn draw_cell(
        &mut self,
        row: usize,
        col: usize,
        image: &Tensor,
        colormap: Colormap,
        normalize: bool,
    ) -> Result<(), VisualError> {
        let index = self.cell_index(row, col)?;
        let luma = Vision::to_luma(image)?;
        let (height, width) = (luma.shape()[0], luma.shape()[1]);
        if height as u32 != self.cell_height || width as u32 != self.cell_width {
            return Err(VisualError::InvalidArgument(format!(
                "图像尺寸{height}×{width}与单元格尺寸{}×{}不符",
                self.cell_height, self.cell_width
            )));
        }

        let stretch = if normalize { luma.min_max() } else { None };
        let view = luma.view();
        let cell = GrayImage::from_fn(self.cell_width, self.cell_height, |x, y| {
            let value = view[[y as usize, x as usize]];
            let level = match stretch {
                Some((lo, hi)) if hi > lo => (value - lo) / (hi - lo) * 255.0,
                Some(_) => 0.0,
                None => value,
            };
            Luma([colormap.apply(level.round().clamp(0.0, 255.0) as u8)])
        });

        let (x0, y0, w, h) = self.cell_rect(row, col);
        let scaled = imageops::resize(&cell, w, h, FilterType::Nearest);
        imageops::replace(&mut self.buffer, &scaled, x0 as i64, y0 as i64);
        self.drawn[index] = true;
        Ok(())
    }

    /// 在单元格`(row, col)`中标注文本（黑色）。
    /// * `offset` - 文本左下角在源图像坐标系中的位置，超出单元格的部分被裁掉
    pub fn draw_label(
        &mut self,
        row: usize,
        col: usize,
        text: &str,
        offset: (u32, u32),
    ) -> Result<(), VisualError> {
        let index = self.cell_index(row, col)?;
        let (x0, y0, w, h) = self.cell_rect(row, col);
        let left = (x0 + offset.0 * self.scale) as i32;
        let top = (y0 + offset.1 * self.scale) as i32 - (GLYPH_HEIGHT * self.scale) as i32;
        let clip = Rect::at(x0 as i32, y0 as i32).of_size(w, h);
        draw_text(&mut self.buffer, text, (left, top), self.scale, clip, 0);
        self.labels[index] = Some(text.to_string());
        Ok(())
    }

    /// 单元格`(row, col)`区域内的像素（放大后）
    pub fn cell_pixels(&self, row: usize, col: usize) -> Result<GrayImage, VisualError> {
        self.cell_index(row, col)?;
        let (x, y, w, h) = self.cell_rect(row, col);
        Ok(imageops::crop_imm(&self.buffer, x, y, w, h).to_image())
    }

    pub fn image(&self) -> &GrayImage {
        &self.buffer
    }

    /// 整张画布转为`[H, W]`的张量
    pub fn to_tensor(&self) -> Tensor {
        self.buffer.to_tensor()
    }

    /// 将画布编码为图像文件（格式由扩展名决定），必要时创建父目录；画布随之释放
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<PathBuf, VisualError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        self.buffer.save(path)?;
        info!("已保存 {}", path.display());
        Ok(path.to_path_buf())
    }
}
