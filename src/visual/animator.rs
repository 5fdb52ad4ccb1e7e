use std::path::{Path, PathBuf};

use super::Visualizer;
use crate::errors::VisualError;
use crate::gan::GanModel;
use crate::vision::{SNAPSHOT_GIF_NAME, assemble_gif, collect_snapshot_frames};

impl Visualizer {
    /// 依次把`<root_dir>/<dir>`中的快照帧组装为`<root_dir>/<dir>/generating.gif`，返回写出的动图路径。
    /// 遇到第一个没有快照帧的目录即返回错误。
    pub fn cvt_gif<S: AsRef<str>>(&self, dirs: &[S]) -> Result<Vec<PathBuf>, VisualError> {
        dirs.iter()
            .map(|dir| self.animate_dir(&self.config.model_dir(dir.as_ref())))
            .collect()
    }

    /// 以模型名为目录名，组装该模型的快照动图
    pub fn cvt_gif_for_model(&self, model: &GanModel) -> Result<PathBuf, VisualError> {
        self.animate_dir(&self.config.model_dir(model.kind().name()))
    }

    fn animate_dir(&self, dir: &Path) -> Result<PathBuf, VisualError> {
        let frames = collect_snapshot_frames(dir)?;
        if frames.is_empty() {
            return Err(VisualError::NoSnapshotFrames(dir.to_path_buf()));
        }
        let output = dir.join(SNAPSHOT_GIF_NAME);
        assemble_gif(
            &frames,
            &output,
            self.config.frame_delay_ms,
            self.config.gif_downscale,
        )?;
        Ok(output)
    }
}
