/*
 * @Description  : 可视化演示：用几个“玩具”生成器模拟训练过程中的若干轮快照，
 *                 依次输出生成网格、对照图、infogan风格图，最后把各模型的快照组装为动图。
 *                 运行：`cargo run --example visualize`，日志级别可用 RUST_LOG 调整。
 */

use gan_visual::config::VisualConfig;
use gan_visual::data::{MnistDataset, MnistSplit};
use gan_visual::errors::VisualError;
use gan_visual::gan::{
    AuxImages, GanKind, GanModel, ImageTranslator, InfoGenerator, LabelGenerator, NoiseGenerator,
};
use gan_visual::tensor::Tensor;
use gan_visual::visual::Visualizer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const SIDE: usize = 28;
const EPOCHS: usize = 5;

/// 以`(cy, cx)`为中心的高斯光斑，`sharpness`越大越清晰，取值在[-1, 1]
fn blob(cy: f32, cx: f32, sharpness: f32) -> Vec<f32> {
    let sigma = 8.0 / (1.0 + sharpness);
    (0..SIDE * SIDE)
        .map(|p| {
            let (y, x) = ((p / SIDE) as f32, (p % SIDE) as f32);
            let d2 = (y - cy).powi(2) + (x - cx).powi(2);
            (-d2 / (2.0 * sigma * sigma)).exp() * 2.0 - 1.0
        })
        .collect()
}

fn batch(images: Vec<Vec<f32>>) -> Tensor {
    let n = images.len();
    Tensor::new(&images.concat(), &[n, 1, SIDE, SIDE])
}

/// 随轮次变清晰的光斑
struct ToyNoise {
    epoch: usize,
}

impl NoiseGenerator for ToyNoise {
    fn generate(&self, n: usize) -> Result<Tensor, VisualError> {
        let images = (0..n)
            .map(|i| {
                let cy = 8.0 + ((i * 7) % 12) as f32;
                let cx = 8.0 + ((i * 5) % 12) as f32;
                blob(cy, cx, self.epoch as f32)
            })
            .collect();
        Ok(batch(images))
    }
}

/// 光斑的水平位置由标签决定
struct ToyConditional {
    epoch: usize,
}

impl LabelGenerator for ToyConditional {
    fn generate(&self, labels: &[usize]) -> Result<Tensor, VisualError> {
        let images = labels
            .iter()
            .map(|&l| blob(14.0, 4.0 + 2.2 * l as f32, self.epoch as f32))
            .collect();
        Ok(batch(images))
    }
}

/// 标签决定水平位置，前两维风格编码决定竖直位置与清晰度
struct ToyInfo {
    epoch: usize,
}

impl ToyInfo {
    fn draw(&self, labels: &[usize], styles: &Tensor) -> Tensor {
        let style_dim = styles.shape()[1];
        let images = labels
            .iter()
            .enumerate()
            .map(|(i, &l)| {
                let s0 = styles[[i, 0]];
                let s1 = if style_dim > 1 { styles[[i, 1]] } else { 0.0 };
                blob(14.0 + 8.0 * s0, 4.0 + 2.2 * l as f32, self.epoch as f32 + 2.0 * s1)
            })
            .collect();
        batch(images)
    }
}

impl InfoGenerator for ToyInfo {
    fn generate(&self, labels: &[usize], styles: &Tensor) -> Result<Tensor, VisualError> {
        Ok(self.draw(labels, styles))
    }

    fn generate_with_noise(
        &self,
        _noise: &Tensor,
        labels: &[usize],
        styles: &Tensor,
    ) -> Result<Tensor, VisualError> {
        Ok(self.draw(labels, styles))
    }
}

/// 把被遮挡（取值为0）的像素补为背景色
struct ToyInpaint;

impl ImageTranslator for ToyInpaint {
    fn translate(&self, images: &Tensor) -> Result<Tensor, VisualError> {
        Ok(images.map(|x| if x == 0.0 { -1.0 } else { x }))
    }
}

/// 反色
struct ToyInvert;

impl ImageTranslator for ToyInvert {
    fn translate(&self, images: &Tensor) -> Result<Tensor, VisualError> {
        Ok(images * -1.0)
    }
}

fn main() -> Result<(), VisualError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = VisualConfig::load_or_init("visual.json")?;
    let mut visualizer = Visualizer::new(config);

    // 本地已有MNIST时才画样本图，不联网下载
    match MnistDataset::load(None, MnistSplit::Train, false) {
        Ok(dataset) => {
            visualizer.show_mnist(&dataset, 20)?;
        }
        Err(err) => warn!("跳过MNIST样本图：{err}"),
    }

    let real = ToyNoise { epoch: EPOCHS }.generate(100)?;
    let inverted = &real * -1.0;
    for epoch in 0..EPOCHS {
        let noise = ToyNoise { epoch };
        let conditional = ToyConditional { epoch };
        let toy_info = ToyInfo { epoch };
        let models = [
            GanModel::unconditional("gan", &noise)?,
            GanModel::unconditional("wgangp", &noise)?,
            GanModel::conditional("cgan", &conditional)?,
            GanModel::info(&toy_info, 10, 2, 1.0, 88)?,
            GanModel::context_conditional(&ToyInpaint, (6, 12), (SIDE, SIDE))?,
            GanModel::cycle(&ToyInvert, &ToyInvert),
        ];
        let aux = AuxImages::new()
            .with_source(&real)
            .with_domains(&real, &inverted);
        for model in &models {
            visualizer.save_gan(model, epoch, &aux)?;
        }
        if epoch + 1 == EPOCHS {
            visualizer.save_infogan_styles(&models[3])?;
        }
    }

    for kind in GanKind::ALL {
        match visualizer.cvt_gif(&[kind.name()]) {
            Ok(paths) => info!("{kind}: {}", paths[0].display()),
            Err(err @ (VisualError::Io(_) | VisualError::NoSnapshotFrames(_))) => {
                warn!("{kind}：{err}")
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}
