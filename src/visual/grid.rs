use std::path::PathBuf;

use ndarray::{Array1, Axis, Slice};
use rand::Rng;

use super::{GRID_CELLS, GRID_SIDE, Visualizer};
use crate::errors::VisualError;
use crate::gan::{AuxImages, GanKind, GanModel};
use crate::tensor::Tensor;
use crate::vision::{Canvas, Colormap};

/// 每个域参与cyclegan对照的图像数
const CYCLE_IMAGES_PER_DOMAIN: usize = GRID_CELLS / 2;

impl Visualizer {
    /// 为模型第`epoch`轮的生成结果绘制网格，保存为`<root_dir>/<模型名>/<epoch>.png`并返回其路径。
    ///
    /// 网格的内容取决于模型族：
    /// - 无条件模型：生成100张图像，10×10排列；
    /// - 条件模型：第`r`行的10张图像均以标签`r`生成，并在单元格中标注`r`；
    /// - infogan：标签同上，第`i`张图像的各维风格编码均取`linspace(-s, s, 10)[i % 10]`；
    /// - ccgan：对`aux.source`中的前100张图像各加一块随机方形遮挡，绘制遮挡前后的对照图；
    /// - cyclegan：`aux.domain_a`、`aux.domain_b`各取前50张，绘制转换前后的对照图。
    pub fn save_gan(
        &mut self,
        model: &GanModel,
        epoch: usize,
        aux: &AuxImages,
    ) -> Result<PathBuf, VisualError> {
        let canvas = self.render_gan(model, aux)?;
        canvas.save(
            self.config
                .model_dir(model.kind().name())
                .join(format!("{epoch}.png")),
        )
    }

    pub(crate) fn render_gan(
        &mut self,
        model: &GanModel,
        aux: &AuxImages,
    ) -> Result<Canvas, VisualError> {
        model.validate()?;
        let kind = model.kind();
        let (images, labeled) = match *model {
            GanModel::Unconditional { generator, .. } => (generator.generate(GRID_CELLS)?, false),
            GanModel::Conditional { generator, .. } => (generator.generate(&grid_labels())?, true),
            GanModel::Info {
                generator,
                style_dim,
                style_scale,
                ..
            } => {
                let styles = grid_styles(style_dim, style_scale, None);
                (generator.generate(&grid_labels(), &styles)?, false)
            }
            GanModel::ContextConditional {
                generator,
                mask_range,
                img_shape,
            } => {
                let source = AuxImages::require(aux.source, kind, "source")?.take(GRID_CELLS);
                ensure_batch(&source, GRID_CELLS)?;
                let masks = MaskSquare::sample_batch(
                    &mut self.rng,
                    source.batch_len(),
                    mask_range,
                    img_shape,
                );
                let masked = MaskSquare::apply_all(&source, &masks, img_shape)?;
                let images = generator.translate(&masked)?;
                return self.draw_paired(&masked.to_pixel_range(), &images.to_pixel_range());
            }
            GanModel::Cycle { g, f } => {
                let domain_a = AuxImages::require(aux.domain_a, kind, "domain_a")?;
                let domain_b = AuxImages::require(aux.domain_b, kind, "domain_b")?;
                let real_a = domain_a.take(CYCLE_IMAGES_PER_DOMAIN);
                let real_b = domain_b.take(CYCLE_IMAGES_PER_DOMAIN);
                ensure_batch(&real_a, CYCLE_IMAGES_PER_DOMAIN)?;
                ensure_batch(&real_b, CYCLE_IMAGES_PER_DOMAIN)?;
                let fake_b = g.translate(&real_a)?;
                let fake_a = f.translate(&real_b)?;
                let before = concat_batches(&real_a, &real_b, kind)?;
                let after = concat_batches(&fake_b, &fake_a, kind)?;
                return self.draw_paired(&before.to_pixel_range(), &after.to_pixel_range());
            }
        };
        self.draw_grid(
            &images.to_pixel_range(),
            GRID_SIDE,
            GRID_SIDE,
            Colormap::GrayReversed,
            labeled,
        )
    }
}

/// 网格中每张图像的类别标签：`[0; 10], [1; 10], ..., [9; 10]`
pub fn grid_labels() -> Vec<usize> {
    (0..GRID_SIDE)
        .flat_map(|label| std::iter::repeat_n(label, GRID_SIDE))
        .collect()
}

/// 网格中每张图像的风格编码，形状为`[100, style_dim]`，第`i`行取`linspace(-scale, scale, 10)[i % 10]`。
/// * `only_dim` - 为`Some(d)`时只有第`d`维取上述值，其余维度为0
pub fn grid_styles(style_dim: usize, scale: f32, only_dim: Option<usize>) -> Tensor {
    let steps = Array1::linspace(-scale, scale, GRID_SIDE);
    let mut data = vec![0.0; GRID_CELLS * style_dim];
    for i in 0..GRID_CELLS {
        let value = steps[i % GRID_SIDE];
        for d in 0..style_dim {
            if only_dim.is_none_or(|only| only == d) {
                data[i * style_dim + d] = value;
            }
        }
    }
    Tensor::new(&data, &[GRID_CELLS, style_dim])
}

// 在调用生成器之前确认图像足够填满网格
fn ensure_batch(images: &Tensor, needed: usize) -> Result<(), VisualError> {
    let got = if images.dimension() == 0 { 0 } else { images.batch_len() };
    if got < needed {
        return Err(VisualError::NotEnoughImages { needed, got });
    }
    Ok(())
}

/// 沿批维度拼接两批图像，单张图像的形状须一致
fn concat_batches(a: &Tensor, b: &Tensor, kind: GanKind) -> Result<Tensor, VisualError> {
    let compatible = a.dimension() > 0
        && a.dimension() == b.dimension()
        && a.shape()[1..] == b.shape()[1..];
    if !compatible {
        return Err(VisualError::InvalidArgument(format!(
            "{kind}的两批图像形状不一致：{:?}与{:?}",
            a.shape(),
            b.shape()
        )));
    }
    Ok(Tensor::concat(&[a, b]))
}

/// ccgan的方形遮挡：左上角位于第`top`行、第`left`列，边长为`width`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskSquare {
    pub top: usize,
    pub left: usize,
    pub width: usize,
}

impl MaskSquare {
    /// 随机生成一块遮挡：边长取自`[lo, hi)`，左上角的行、列分别取自`[0, H - width)`、`[0, W - width)`。
    /// 调用方需保证`0 < lo < hi <= min(H, W)`
    pub fn sample<R: Rng + ?Sized>(
        rng: &mut R,
        (lo, hi): (usize, usize),
        (height, width): (usize, usize),
    ) -> Self {
        let side = rng.gen_range(lo..hi);
        Self {
            top: rng.gen_range(0..height - side),
            left: rng.gen_range(0..width - side),
            width: side,
        }
    }

    pub fn sample_batch<R: Rng + ?Sized>(
        rng: &mut R,
        n: usize,
        mask_range: (usize, usize),
        img_shape: (usize, usize),
    ) -> Vec<Self> {
        (0..n)
            .map(|_| Self::sample(rng, mask_range, img_shape))
            .collect()
    }

    /// 返回遮挡后的图像副本：第`i`张图像的`masks[i]`区域（所有通道）置0。
    /// 图像可以是`[N, H, W]`、`[N, H, W, C]`或`[N, C, H, W]`，由`img_shape`确定高、宽所在的维度
    pub fn apply_all(
        images: &Tensor,
        masks: &[MaskSquare],
        img_shape: (usize, usize),
    ) -> Result<Tensor, VisualError> {
        let (row_axis, col_axis) = spatial_axes(images.shape(), img_shape).ok_or_else(|| {
            VisualError::InvalidArgument(format!(
                "形状为{:?}的图像与高宽{img_shape:?}不符",
                images.shape()
            ))
        })?;
        let mut masked = images.clone();
        let mut view = masked.view_mut();
        for (i, mask) in masks.iter().enumerate().take(images.batch_len()) {
            let mut item = view.index_axis_mut(Axis(0), i);
            // 去掉批维度后，行、列所在的维度各减1
            item.slice_each_axis_mut(|axis| {
                let index = axis.axis.index() + 1;
                if index == row_axis {
                    Slice::from(mask.top..mask.top + mask.width)
                } else if index == col_axis {
                    Slice::from(mask.left..mask.left + mask.width)
                } else {
                    Slice::from(..)
                }
            })
            .fill(0.0);
        }
        Ok(masked)
    }
}

fn spatial_axes(shape: &[usize], (height, width): (usize, usize)) -> Option<(usize, usize)> {
    match shape {
        [_, h, w] | [_, h, w, _] if (*h, *w) == (height, width) => Some((1, 2)),
        [_, _, h, w] if (*h, *w) == (height, width) => Some((2, 3)),
        _ => None,
    }
}
