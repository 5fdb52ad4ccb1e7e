use super::{GRID_CELLS, GRID_SIDE, Visualizer, batch_cells};
use crate::errors::VisualError;
use crate::tensor::Tensor;
use crate::vision::{Canvas, Colormap};

impl Visualizer {
    /// 10行×20列的前后对照图：第`i`对图像（先按列对、再按行递增）中，
    /// `before[i]`以灰度绘制在偶数列，`after[i]`以反转灰度绘制在其右侧。
    /// 两批图像的取值均应在[0, 255]，且各自不少于100张
    pub(crate) fn draw_paired(&self, before: &Tensor, after: &Tensor) -> Result<Canvas, VisualError> {
        let before = batch_cells(before, GRID_CELLS)?;
        let after = batch_cells(after, GRID_CELLS)?;
        let cols = GRID_SIDE * 2;
        let mut canvas = self.new_canvas(GRID_SIDE, cols, &before[0])?;
        let normalize = self.config.normalize_cells;
        let mut i = 0;
        for c in (0..cols).step_by(2) {
            for r in 0..GRID_SIDE {
                canvas.draw_cell(r, c, &before[i], Colormap::Gray, normalize)?;
                canvas.draw_cell(r, c + 1, &after[i], Colormap::GrayReversed, normalize)?;
                i += 1;
            }
        }
        Ok(canvas)
    }
}
