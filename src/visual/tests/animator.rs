use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use image::AnimationDecoder;
use image::codecs::gif::GifDecoder;

use super::{IndexedNoise, test_config};
use crate::assert_err;
use crate::errors::VisualError;
use crate::gan::{AuxImages, GanModel};
use crate::vision::SNAPSHOT_GIF_NAME;
use crate::visual::Visualizer;

fn gif_frame_count(path: &Path) -> usize {
    let decoder = GifDecoder::new(BufReader::new(File::open(path).unwrap())).unwrap();
    decoder.into_frames().collect_frames().unwrap().len()
}

#[test]
fn test_cvt_gif_from_snapshots() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let mut visualizer = Visualizer::new(config);
    let generator = IndexedNoise;
    let model = GanModel::unconditional("gan", &generator).unwrap();
    for epoch in 0..4 {
        visualizer.save_gan(&model, epoch, &AuxImages::new()).unwrap();
    }
    // 非快照文件不计入
    fs::write(dir.path().join("gan").join("notes.png"), b"x").unwrap();
    fs::write(dir.path().join("gan").join("5.jpg"), b"x").unwrap();

    let paths = visualizer.cvt_gif(&["gan"]).unwrap();
    let gif = dir.path().join("gan").join(SNAPSHOT_GIF_NAME);
    assert_eq!(paths, vec![gif.clone()]);
    assert_eq!(gif_frame_count(&gif), 4);

    // 再次运行时覆盖旧的动图
    visualizer.save_gan(&model, 4, &AuxImages::new()).unwrap();
    assert_eq!(visualizer.cvt_gif_for_model(&model).unwrap(), gif);
    assert_eq!(gif_frame_count(&gif), 5);
}

#[test]
fn test_cvt_gif_without_frames() {
    let dir = tempfile::tempdir().unwrap();
    let visualizer = Visualizer::new(test_config(dir.path()));
    let empty = dir.path().join("wgan");
    fs::create_dir_all(&empty).unwrap();
    fs::write(empty.join("readme.txt"), "no frames").unwrap();

    assert_err!(
        visualizer.cvt_gif(&["wgan".to_string()]),
        VisualError::NoSnapshotFrames(path) if path == &empty
    );
    assert!(!empty.join(SNAPSHOT_GIF_NAME).exists());

    // 目录不存在
    assert_err!(visualizer.cvt_gif(&["lsgan"]), VisualError::Io(_));
}
