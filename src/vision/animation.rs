//! 将按训练轮次（epoch）编号保存的快照帧组装为循环播放的GIF动图

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use image::codecs::gif::{GifEncoder, Repeat};
use image::imageops::FilterType;
use image::{Delay, Frame};
use tracing::{debug, info};

use crate::errors::VisualError;

/// 每个快照目录中组装出的动图文件名
pub const SNAPSHOT_GIF_NAME: &str = "generating.gif";

/// 列出`dir`中的快照帧：扩展名为`png`且文件名（不含扩展名）可解析为整数的文件，
/// 按修改时间升序排列（修改时间相同时按编号排列）。其它文件一律忽略。
pub fn collect_snapshot_frames<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, VisualError> {
    let mut frames: Vec<(SystemTime, i64, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir.as_ref())? {
        let path = entry?.path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != "png") {
            continue;
        }
        let Some(epoch) = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| stem.parse::<i64>().ok())
        else {
            debug!("跳过非快照文件 {}", path.display());
            continue;
        };
        let modified = fs::metadata(&path)?.modified()?;
        frames.push((modified, epoch, path));
    }
    frames.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
    Ok(frames.into_iter().map(|(_, _, path)| path).collect())
}

/// 依次打开`frames`中的图像，宽、高各缩小为原来的`1/downscale`（至少1像素），
/// 以每帧`delay_ms`毫秒、无限循环的方式编码为GIF写入`output`（已存在则覆盖）。
///
/// 先写入同目录下的`.part`临时文件，成功后才替换`output`，失败时原有的动图保持不变。
/// 返回写入的帧数。`frames`为空时报错，且不会写出任何文件。
pub fn assemble_gif<P: AsRef<Path>>(
    frames: &[PathBuf],
    output: P,
    delay_ms: u32,
    downscale: u32,
) -> Result<usize, VisualError> {
    let output = output.as_ref();
    if frames.is_empty() {
        let dir = output.parent().map(Path::to_path_buf).unwrap_or_default();
        return Err(VisualError::NoSnapshotFrames(dir));
    }

    let downscale = downscale.max(1);
    let delay = Delay::from_numer_denom_ms(delay_ms, 1);
    let mut encoded_frames = Vec::with_capacity(frames.len());
    for path in frames {
        let image = image::open(path)?;
        let width = (image.width() / downscale).max(1);
        let height = (image.height() / downscale).max(1);
        let resized = image.resize_exact(width, height, FilterType::Lanczos3);
        encoded_frames.push(Frame::from_parts(resized.to_rgba8(), 0, 0, delay));
    }

    let part_path = output.with_extension("gif.part");
    let written = File::create(&part_path)
        .map_err(VisualError::from)
        .and_then(|file| write_gif(encoded_frames, &mut BufWriter::new(file)));
    if let Err(e) = written {
        let _ = fs::remove_file(&part_path);
        return Err(e);
    }
    fs::rename(&part_path, output)?;

    info!("已保存 {}（{}帧）", output.display(), frames.len());
    Ok(frames.len())
}

/// 把`frames`编码为无限循环的GIF写入`writer`，并确保GIF文件尾与缓冲区都已写出
pub(crate) fn write_gif<W: Write>(frames: Vec<Frame>, writer: &mut W) -> Result<(), VisualError> {
    {
        let mut encoder = GifEncoder::new(&mut *writer);
        encoder.set_repeat(Repeat::Infinite)?;
        encoder.encode_frames(frames)?;
        // 编码器在离开作用域时写入GIF文件尾
    }
    writer.flush()?;
    Ok(())
}
