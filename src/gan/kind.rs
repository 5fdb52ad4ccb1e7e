use std::fmt;
use std::str::FromStr;

use crate::errors::VisualError;

/// 所有支持可视化的GAN模型类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GanKind {
    Gan,
    Wgan,
    WganGp,
    Lsgan,
    WganDiv,
    Cgan,
    Acgan,
    InfoGan,
    CcGan,
    CycleGan,
}

impl GanKind {
    pub const ALL: [GanKind; 10] = [
        GanKind::Gan,
        GanKind::Wgan,
        GanKind::WganGp,
        GanKind::Lsgan,
        GanKind::WganDiv,
        GanKind::Cgan,
        GanKind::Acgan,
        GanKind::InfoGan,
        GanKind::CcGan,
        GanKind::CycleGan,
    ];

    /// 小写的模型名，同时也是快照目录名
    pub fn name(&self) -> &'static str {
        match self {
            GanKind::Gan => "gan",
            GanKind::Wgan => "wgan",
            GanKind::WganGp => "wgangp",
            GanKind::Lsgan => "lsgan",
            GanKind::WganDiv => "wgandiv",
            GanKind::Cgan => "cgan",
            GanKind::Acgan => "acgan",
            GanKind::InfoGan => "infogan",
            GanKind::CcGan => "ccgan",
            GanKind::CycleGan => "cyclegan",
        }
    }
}

impl fmt::Display for GanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GanKind {
    type Err = VisualError;

    /// 按模型名解析，不区分大小写
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        GanKind::ALL
            .into_iter()
            .find(|kind| kind.name() == lower)
            .ok_or_else(|| VisualError::UnknownModelKind(s.to_string()))
    }
}

/// 只需随机噪声即可生成图像的模型类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnconditionalKind {
    Gan,
    Wgan,
    WganGp,
    Lsgan,
    WganDiv,
}

impl From<UnconditionalKind> for GanKind {
    fn from(kind: UnconditionalKind) -> Self {
        match kind {
            UnconditionalKind::Gan => GanKind::Gan,
            UnconditionalKind::Wgan => GanKind::Wgan,
            UnconditionalKind::WganGp => GanKind::WganGp,
            UnconditionalKind::Lsgan => GanKind::Lsgan,
            UnconditionalKind::WganDiv => GanKind::WganDiv,
        }
    }
}

impl TryFrom<GanKind> for UnconditionalKind {
    type Error = VisualError;

    fn try_from(kind: GanKind) -> Result<Self, Self::Error> {
        match kind {
            GanKind::Gan => Ok(UnconditionalKind::Gan),
            GanKind::Wgan => Ok(UnconditionalKind::Wgan),
            GanKind::WganGp => Ok(UnconditionalKind::WganGp),
            GanKind::Lsgan => Ok(UnconditionalKind::Lsgan),
            GanKind::WganDiv => Ok(UnconditionalKind::WganDiv),
            other => Err(VisualError::InvalidArgument(format!(
                "`{other}`不是无条件生成的模型"
            ))),
        }
    }
}

/// 以类别标签为条件生成图像的模型类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionalKind {
    Cgan,
    Acgan,
}

impl From<ConditionalKind> for GanKind {
    fn from(kind: ConditionalKind) -> Self {
        match kind {
            ConditionalKind::Cgan => GanKind::Cgan,
            ConditionalKind::Acgan => GanKind::Acgan,
        }
    }
}

impl TryFrom<GanKind> for ConditionalKind {
    type Error = VisualError;

    fn try_from(kind: GanKind) -> Result<Self, Self::Error> {
        match kind {
            GanKind::Cgan => Ok(ConditionalKind::Cgan),
            GanKind::Acgan => Ok(ConditionalKind::Acgan),
            other => Err(VisualError::InvalidArgument(format!(
                "`{other}`不是以标签为条件的模型"
            ))),
        }
    }
}
