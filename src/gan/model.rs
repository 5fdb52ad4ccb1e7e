use super::generator::{ImageTranslator, InfoGenerator, LabelGenerator, NoiseGenerator};
use super::kind::{ConditionalKind, GanKind, UnconditionalKind};
use crate::errors::VisualError;
use crate::tensor::Tensor;

/// 一个待可视化的GAN模型：模型族决定了渲染方式，每个变体只携带该族需要的生成器与参数。
pub enum GanModel<'m> {
    Unconditional {
        kind: UnconditionalKind,
        generator: &'m dyn NoiseGenerator,
    },
    Conditional {
        kind: ConditionalKind,
        generator: &'m dyn LabelGenerator,
    },
    Info {
        generator: &'m dyn InfoGenerator,
        /// 类别数，不少于10
        label_dim: usize,
        style_dim: usize,
        /// 风格编码的取值范围为[-style_scale, style_scale]
        style_scale: f32,
        /// 随机噪声的维度
        rand_dim: usize,
    },
    ContextConditional {
        generator: &'m dyn ImageTranslator,
        /// 遮挡方块边长的取值范围[lo, hi)
        mask_range: (usize, usize),
        /// 图像的高、宽
        img_shape: (usize, usize),
    },
    Cycle {
        /// 域A到域B
        g: &'m dyn ImageTranslator,
        /// 域B到域A
        f: &'m dyn ImageTranslator,
    },
}

impl<'m> GanModel<'m> {
    /// 按模型名构造无条件生成的模型，模型名不合法时返回`UnknownModelKind`
    pub fn unconditional(
        name: &str,
        generator: &'m dyn NoiseGenerator,
    ) -> Result<Self, VisualError> {
        let kind = Self::parse_family(name, UnconditionalKind::try_from)?;
        Ok(Self::Unconditional { kind, generator })
    }

    /// 按模型名构造以标签为条件的模型，模型名不合法时返回`UnknownModelKind`
    pub fn conditional(name: &str, generator: &'m dyn LabelGenerator) -> Result<Self, VisualError> {
        let kind = Self::parse_family(name, ConditionalKind::try_from)?;
        Ok(Self::Conditional { kind, generator })
    }

    pub fn info(
        generator: &'m dyn InfoGenerator,
        label_dim: usize,
        style_dim: usize,
        style_scale: f32,
        rand_dim: usize,
    ) -> Result<Self, VisualError> {
        let model = Self::Info {
            generator,
            label_dim,
            style_dim,
            style_scale,
            rand_dim,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn context_conditional(
        generator: &'m dyn ImageTranslator,
        mask_range: (usize, usize),
        img_shape: (usize, usize),
    ) -> Result<Self, VisualError> {
        let model = Self::ContextConditional {
            generator,
            mask_range,
            img_shape,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn cycle(g: &'m dyn ImageTranslator, f: &'m dyn ImageTranslator) -> Self {
        Self::Cycle { g, f }
    }

    // 模型名须能解析为`GanKind`，且属于期望的模型族
    fn parse_family<K>(
        name: &str,
        narrow: impl Fn(GanKind) -> Result<K, VisualError>,
    ) -> Result<K, VisualError> {
        let kind: GanKind = name.parse()?;
        narrow(kind).map_err(|_| VisualError::UnknownModelKind(name.to_string()))
    }

    pub fn kind(&self) -> GanKind {
        match self {
            GanModel::Unconditional { kind, .. } => (*kind).into(),
            GanModel::Conditional { kind, .. } => (*kind).into(),
            GanModel::Info { .. } => GanKind::InfoGan,
            GanModel::ContextConditional { .. } => GanKind::CcGan,
            GanModel::Cycle { .. } => GanKind::CycleGan,
        }
    }

    /// 检查描述符中的参数能否用于渲染
    pub fn validate(&self) -> Result<(), VisualError> {
        match *self {
            GanModel::Info {
                label_dim,
                style_dim,
                style_scale,
                ..
            } => {
                if label_dim < 10 {
                    return Err(VisualError::InvalidArgument(format!(
                        "infogan的类别数至少为10，实际为{label_dim}"
                    )));
                }
                if style_dim == 0 {
                    return Err(VisualError::InvalidArgument(
                        "infogan的风格维度不能为0".to_string(),
                    ));
                }
                if !style_scale.is_finite() || style_scale < 0.0 {
                    return Err(VisualError::InvalidArgument(format!(
                        "infogan的风格范围无效：{style_scale}"
                    )));
                }
                Ok(())
            }
            GanModel::ContextConditional {
                mask_range: (lo, hi),
                img_shape: (height, width),
                ..
            } => {
                if lo == 0 || lo >= hi || hi > height.min(width) {
                    return Err(VisualError::InvalidArgument(format!(
                        "遮挡范围[{lo}, {hi})无法放入{height}×{width}的图像"
                    )));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

/// 部分模型渲染时需要的真实图像
#[derive(Debug, Clone, Copy, Default)]
pub struct AuxImages<'a> {
    /// ccgan：待遮挡的输入图像
    pub source: Option<&'a Tensor>,
    /// cyclegan：域A的图像
    pub domain_a: Option<&'a Tensor>,
    /// cyclegan：域B的图像
    pub domain_b: Option<&'a Tensor>,
}

impl<'a> AuxImages<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, images: &'a Tensor) -> Self {
        self.source = Some(images);
        self
    }

    pub fn with_domains(mut self, domain_a: &'a Tensor, domain_b: &'a Tensor) -> Self {
        self.domain_a = Some(domain_a);
        self.domain_b = Some(domain_b);
        self
    }

    /// 取出`kind`所需的辅助图像，缺失时返回`MissingAuxImage`
    pub(crate) fn require(
        image: Option<&'a Tensor>,
        kind: GanKind,
        name: &'static str,
    ) -> Result<&'a Tensor, VisualError> {
        image.ok_or(VisualError::MissingAuxImage { kind, name })
    }
}
