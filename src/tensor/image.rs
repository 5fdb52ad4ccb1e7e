use super::Tensor;
use crate::errors::TensorError;
use crate::vision::ImageType;

impl Tensor {
    /// 按形状判断张量是否为一张图像：须为`[H, W]`或`[H, W, C]`（C为1、3或4）。
    /// 注：本方法不检查像素值范围。
    pub fn image_type(&self) -> Result<ImageType, TensorError> {
        let not_image = || TensorError::NotAnImage(self.shape().to_vec());
        let channels = match self.shape() {
            [_, _] => 1,
            [_, _, c] => *c,
            _ => return Err(not_image()),
        };
        match channels {
            1 => Ok(ImageType::L8),
            3 => Ok(ImageType::Rgb8),
            4 => Ok(ImageType::Rgba8),
            _ => Err(not_image()),
        }
    }

    /// 将单个样本整理成可直接绘制的图像形状：`[H, W]`（灰度）或`[H, W, C]`（彩色）。
    /// 支持的输入布局：
    /// - `[H, W]`；
    /// - `[H, W, C]`，C为1、3或4（通道在后）；
    /// - `[C, H, W]`，C为1、3或4（通道在前，如MNIST的`[1, 28, 28]`）；
    /// - 展平后的正方形图像`[H*W]`。
    ///
    /// 注：本方法不检查像素值范围。
    pub fn as_image_cell(&self) -> Result<Tensor, TensorError> {
        let shape = self.shape().to_vec();
        let not_image = || TensorError::NotAnImage(shape.clone());
        match shape.as_slice() {
            [len] => {
                let side = (*len as f64).sqrt().round() as usize;
                if side == 0 || side * side != *len {
                    return Err(not_image());
                }
                Ok(self.reshape(&[side, side]))
            }
            [_, _] => Ok(self.clone()),
            [h, w, 1] => Ok(self.reshape(&[*h, *w])),
            [_, _, 3 | 4] => Ok(self.clone()),
            [1, h, w] => Ok(self.reshape(&[*h, *w])),
            [3 | 4, _, _] => Ok(self.permute(&[1, 2, 0])),
            _ => Err(not_image()),
        }
    }

    /// 取出一批图像中的第`index`张，并整理为可绘制的形状（见`as_image_cell`）
    pub fn batch_image(&self, index: usize) -> Result<Tensor, TensorError> {
        self.item(index)?.as_image_cell()
    }

    /// 将生成器惯用的[-1, 1]取值区间线性映射到[0, 255]的像素区间
    pub fn to_pixel_range(&self) -> Tensor {
        (self + 1.0) * (255.0 / 2.0)
    }
}
