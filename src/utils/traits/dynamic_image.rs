use crate::errors::TensorError;
use crate::tensor::Tensor;
use image::{DynamicImage, GenericImageView};

pub trait TraitForDynamicImage {
    fn to_tensor(&self) -> Result<Tensor, TensorError>;
}

impl TraitForDynamicImage for DynamicImage {
    /// 将Image库的`DynamicImage`格式转换为`[H, W, C]`的张量。
    /// 灰度图（含带透明通道的灰度图）转为单通道，其余一律按RGB或RGBA处理。
    fn to_tensor(&self) -> Result<Tensor, TensorError> {
        let (width, height) = self.dimensions();
        let (width, height) = (width as usize, height as usize);
        let (channels, raw) = match self.color() {
            image::ColorType::L8 | image::ColorType::L16 | image::ColorType::La8 | image::ColorType::La16 => {
                (1, self.to_luma8().into_raw())
            }
            image::ColorType::Rgba8 | image::ColorType::Rgba16 | image::ColorType::Rgba32F => {
                (4, self.to_rgba8().into_raw())
            }
            _ => (3, self.to_rgb8().into_raw()),
        };
        let data = raw.into_iter().map(f32::from).collect::<Vec<_>>();
        if data.len() != height * width * channels {
            return Err(TensorError::NotAnImage(vec![height, width, channels]));
        }
        Ok(Tensor::new(&data, &[height, width, channels]))
    }
}
