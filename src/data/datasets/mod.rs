//! 内置数据集
//!
//! - MNIST：手写数字（GAN 可视化中用作参考图像）

mod mnist;

pub use mnist::{MnistDataset, MnistSplit, default_data_dir};
