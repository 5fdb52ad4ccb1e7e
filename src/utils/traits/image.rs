use crate::tensor::Tensor;
use image::{ImageBuffer, Pixel};

pub trait TraitForImageBuffer {
    fn to_tensor(&self) -> Tensor;
}

impl<P: Pixel + 'static> TraitForImageBuffer for ImageBuffer<P, Vec<P::Subpixel>> {
    /// 转换为`[H, W, C]`的张量（单通道图像为`[H, W]`）
    fn to_tensor(&self) -> Tensor {
        let width = self.width() as usize;
        let height = self.height() as usize;
        let channels = P::CHANNEL_COUNT as usize;

        let mut tensor_data = Vec::with_capacity(height * width * channels);
        for pixel in self.pixels() {
            for &value in pixel.channels() {
                let sample = num_traits::NumCast::from(value).unwrap_or(0.0);
                tensor_data.push(sample);
            }
        }

        if channels == 1 {
            Tensor::new(&tensor_data, &[height, width])
        } else {
            Tensor::new(&tensor_data, &[height, width, channels])
        }
    }
}
