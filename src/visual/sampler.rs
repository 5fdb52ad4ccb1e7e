use std::path::PathBuf;

use super::Visualizer;
use crate::data::MnistDataset;
use crate::errors::VisualError;
use crate::vision::Colormap;

impl Visualizer {
    /// 从数据集中有放回地随机抽取`n`张图像，以`sampler_columns`列、`n / sampler_columns`行
    /// （多出的样本丢弃）的网格保存为`<root_dir>/mnist.png`
    pub fn show_mnist(&mut self, dataset: &MnistDataset, n: usize) -> Result<PathBuf, VisualError> {
        let cols = self.config.sampler_columns;
        if cols == 0 || n < cols {
            return Err(VisualError::InvalidArgument(format!(
                "样本数{n}不足以填满一行（{cols}列）"
            )));
        }
        let rows = n / cols;
        let (images, _) = dataset.sample(n, &mut self.rng)?;
        let canvas = self.draw_grid(&(&images * 255.0), rows, cols, Colormap::GrayReversed, false)?;
        canvas.save(self.config.root_dir.join("mnist.png"))
    }
}
