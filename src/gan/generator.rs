use crate::errors::VisualError;
use crate::tensor::Tensor;

// 生成器返回的图像批次首维为批维度，取值惯例为[-1, 1]

/// 由随机噪声生成图像（gan、wgan、wgangp、lsgan、wgandiv）
pub trait NoiseGenerator {
    /// 生成`n`张图像
    fn generate(&self, n: usize) -> Result<Tensor, VisualError>;
}

/// 由类别标签生成图像（cgan、acgan）
pub trait LabelGenerator {
    /// 为每个标签生成一张图像，输出第`i`张对应`labels[i]`
    fn generate(&self, labels: &[usize]) -> Result<Tensor, VisualError>;
}

/// 由类别标签和连续风格编码生成图像（infogan）
pub trait InfoGenerator {
    /// * `styles` - 形状为`[labels.len(), style_dim]`的风格编码，随机噪声由生成器自行采样
    fn generate(&self, labels: &[usize], styles: &Tensor) -> Result<Tensor, VisualError>;

    /// 与`generate`相同，但使用调用方给定的噪声`[labels.len(), rand_dim]`
    fn generate_with_noise(
        &self,
        noise: &Tensor,
        labels: &[usize],
        styles: &Tensor,
    ) -> Result<Tensor, VisualError>;
}

/// 图像到图像的转换（ccgan的生成器，cyclegan的`g`与`f`）
pub trait ImageTranslator {
    fn translate(&self, images: &Tensor) -> Result<Tensor, VisualError>;
}
