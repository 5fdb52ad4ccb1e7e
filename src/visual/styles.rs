use std::path::PathBuf;

use super::{GRID_CELLS, GRID_SIDE, Visualizer, grid_labels, grid_styles};
use crate::errors::VisualError;
use crate::gan::GanModel;
use crate::tensor::Tensor;
use crate::vision::Colormap;

impl Visualizer {
    /// infogan的风格对比：固定一行随机噪声并重复100次，对每个风格维度`d`，
    /// 只让第`d`维按`linspace(-s, s, 10)`变化（其余维度为0），生成带标签的10×10网格，
    /// 保存为`<root_dir>/infogan/style<d+1>.png`。按维度顺序返回写出的路径。
    pub fn save_infogan_styles(&mut self, model: &GanModel) -> Result<Vec<PathBuf>, VisualError> {
        let GanModel::Info {
            generator,
            style_dim,
            style_scale,
            rand_dim,
            ..
        } = *model
        else {
            return Err(VisualError::InvalidArgument(format!(
                "风格对比图只适用于infogan，而不是{}",
                model.kind()
            )));
        };
        model.validate()?;

        let noise_row = Tensor::new_normal_with_rng(0.0, 1.0, &[rand_dim], &mut self.rng);
        let noise = Tensor::new(&noise_row.to_vec().repeat(GRID_CELLS), &[GRID_CELLS, rand_dim]);
        let labels = grid_labels();
        let dir = self.config.model_dir(model.kind().name());

        let mut paths = Vec::with_capacity(style_dim);
        for d in 0..style_dim {
            let styles = grid_styles(style_dim, style_scale, Some(d));
            let images = generator.generate_with_noise(&noise, &labels, &styles)?;
            let canvas = self.draw_grid(
                &images.to_pixel_range(),
                GRID_SIDE,
                GRID_SIDE,
                Colormap::GrayReversed,
                true,
            )?;
            paths.push(canvas.save(dir.join(format!("style{}.png", d + 1)))?);
        }
        Ok(paths)
    }
}
