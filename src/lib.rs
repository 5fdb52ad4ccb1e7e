//! # GAN Visual
//!
//! `gan_visual`用于在训练之后检查GAN（生成对抗网络）的生成效果：
//! 把MNIST样本、各类GAN在某一轮的生成结果、图像转换模型的前后对照排成网格图，
//! 并把按轮次保存的快照组装成循环播放的GIF动图。
//!
//! 本库不训练任何模型：调用方为训练好的生成器实现`gan`模块中的trait，
//! 再用`GanModel`描述模型、交给`visual::Visualizer`渲染即可。

pub mod config;
pub mod data;
pub mod errors;
pub mod gan;
pub mod tensor;
pub mod utils;
pub mod vision;
pub mod visual;
