//! GAN模型的描述：模型类型（`GanKind`）、可视化时用到的生成器接口，以及把二者绑在一起的`GanModel`。
//!
//! 本库不训练、也不实现任何生成器，调用方只需为训练好的模型实现相应的trait即可。

mod generator;
mod kind;
mod model;

pub use generator::{ImageTranslator, InfoGenerator, LabelGenerator, NoiseGenerator};
pub use kind::{ConditionalKind, GanKind, UnconditionalKind};
pub use model::{AuxImages, GanModel};
