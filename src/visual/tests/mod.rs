//! 可视化的单元测试。生成器都是输出确定值的小结构体，不涉及任何真实模型。

use std::cell::{Cell, RefCell};
use std::path::Path;

use crate::config::VisualConfig;
use crate::errors::VisualError;
use crate::gan::{ImageTranslator, InfoGenerator, LabelGenerator, NoiseGenerator};
use crate::tensor::Tensor;

mod animator;

/// 单元格不放大、无白边、不拉伸，且随机数可复现，方便逐像素检查
fn test_config(root: &Path) -> VisualConfig {
    VisualConfig {
        root_dir: root.to_path_buf(),
        cell_scale: 1,
        cell_padding: 0,
        normalize_cells: false,
        seed: Some(42),
        ..VisualConfig::default()
    }
}

/// 生成器输出值`x`（[-1, 1]）经反转灰度后的像素值
fn reversed_pixel(x: f32) -> u8 {
    255 - ((x + 1.0) * 255.0 / 2.0).round() as u8
}

/// 第`i`个样本为`[1, 4, 4]`的纯色图像，取值`i / 99 * 2 - 1`
struct IndexedNoise;

impl IndexedNoise {
    fn value(i: usize) -> f32 {
        i as f32 / 99.0 * 2.0 - 1.0
    }
}

impl NoiseGenerator for IndexedNoise {
    fn generate(&self, n: usize) -> Result<Tensor, VisualError> {
        let data = (0..n)
            .flat_map(|i| std::iter::repeat_n(Self::value(i), 16))
            .collect::<Vec<_>>();
        Ok(Tensor::new(&data, &[n, 1, 4, 4]))
    }
}

/// 总是推理失败的生成器
struct Broken;

impl NoiseGenerator for Broken {
    fn generate(&self, _n: usize) -> Result<Tensor, VisualError> {
        Err(VisualError::Inference("权重未加载".to_string()))
    }
}

/// 以标签编码亮度：标签为`l`的图像是取值`l / 9 * 2 - 1`的`[4, 4, 1]`纯色图像
#[derive(Default)]
struct LabelIntensity {
    seen: RefCell<Vec<usize>>,
}

impl LabelIntensity {
    fn value(label: usize) -> f32 {
        label as f32 / 9.0 * 2.0 - 1.0
    }
}

impl LabelGenerator for LabelIntensity {
    fn generate(&self, labels: &[usize]) -> Result<Tensor, VisualError> {
        self.seen.borrow_mut().extend_from_slice(labels);
        let data = labels
            .iter()
            .flat_map(|&l| std::iter::repeat_n(Self::value(l), 16))
            .collect::<Vec<_>>();
        Ok(Tensor::new(&data, &[labels.len(), 4, 4, 1]))
    }
}

/// 记录每次调用的输入，输出全0的`[n, 4, 4]`图像
#[derive(Default)]
struct InfoRecorder {
    calls: RefCell<Vec<(Option<Tensor>, Vec<usize>, Tensor)>>,
}

impl InfoGenerator for InfoRecorder {
    fn generate(&self, labels: &[usize], styles: &Tensor) -> Result<Tensor, VisualError> {
        self.calls
            .borrow_mut()
            .push((None, labels.to_vec(), styles.clone()));
        Ok(Tensor::zeros(&[labels.len(), 4, 4]))
    }

    fn generate_with_noise(
        &self,
        noise: &Tensor,
        labels: &[usize],
        styles: &Tensor,
    ) -> Result<Tensor, VisualError> {
        self.calls
            .borrow_mut()
            .push((Some(noise.clone()), labels.to_vec(), styles.clone()));
        Ok(Tensor::zeros(&[labels.len(), 4, 4]))
    }
}

/// 输出取反的图像，并记录被调用的次数
#[derive(Default)]
struct Negate {
    calls: Cell<usize>,
}

impl ImageTranslator for Negate {
    fn translate(&self, images: &Tensor) -> Result<Tensor, VisualError> {
        self.calls.set(self.calls.get() + 1);
        Ok(images * -1.0)
    }
}

/// 原样输出，并记录被调用的次数
#[derive(Default)]
struct Identity {
    calls: Cell<usize>,
}

impl ImageTranslator for Identity {
    fn translate(&self, images: &Tensor) -> Result<Tensor, VisualError> {
        self.calls.set(self.calls.get() + 1);
        Ok(images.clone())
    }
}
