//! 数据加载模块
//!
//! 提供可视化所需的参考数据集。
//!
//! # 主要组件
//!
//! - [`MnistDataset`]: MNIST 手写数字数据集
//! - [`transforms`]: 数据变换函数（像素归一化）
//! - [`DataError`]: 数据加载错误类型
//!
//! # 使用示例
//!
//! ```ignore
//! use gan_visual::data::MnistDataset;
//!
//! let dataset = MnistDataset::train()?;
//! let (images, classes) = dataset.sample(25, &mut rand::thread_rng())?;
//! ```

pub mod datasets;
pub mod download;
pub mod error;
pub mod transforms;


// Re-exports
pub use datasets::{MnistDataset, MnistSplit, default_data_dir};
pub use error::DataError;
