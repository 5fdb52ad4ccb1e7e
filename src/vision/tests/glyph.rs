use image::{GrayImage, Luma};
use imageproc::rect::Rect;

use crate::vision::{GLYPH_HEIGHT, GLYPH_WIDTH, draw_text};

fn dark_pixels(image: &GrayImage) -> usize {
    image.pixels().filter(|p| p[0] == 0).count()
}

#[test]
fn test_draw_digit() {
    let mut image = GrayImage::from_pixel(10, 10, Luma([255]));
    let clip = Rect::at(0, 0).of_size(10, 10);
    draw_text(&mut image, "8", (0, 0), 1, clip, 0);
    // “8”的点阵共13个点
    assert_eq!(dark_pixels(&image), 13);
    // 点阵之外的像素保持不变
    assert_eq!(image.get_pixel(GLYPH_WIDTH, 0)[0], 255);
    assert_eq!(image.get_pixel(0, GLYPH_HEIGHT)[0], 255);
}

#[test]
fn test_draw_scaled_and_clipped() {
    let mut image = GrayImage::from_pixel(20, 20, Luma([255]));
    let clip = Rect::at(0, 0).of_size(20, 20);
    draw_text(&mut image, "1", (0, 0), 2, clip, 0);
    // “1”的点阵共8个点，放大2倍后每个点4个像素
    assert_eq!(dark_pixels(&image), 8 * 4);

    // 裁剪区域之外不绘制
    let mut image = GrayImage::from_pixel(20, 20, Luma([255]));
    let clip = Rect::at(0, 0).of_size(2, 20);
    draw_text(&mut image, "8", (0, 0), 1, clip, 0);
    assert!(image.enumerate_pixels().all(|(x, _, p)| x < 2 || p[0] == 255));
}

#[test]
fn test_unknown_chars_are_skipped() {
    let mut image = GrayImage::from_pixel(20, 10, Luma([255]));
    let clip = Rect::at(0, 0).of_size(20, 10);
    draw_text(&mut image, "a?", (0, 0), 1, clip, 0);
    assert_eq!(dark_pixels(&image), 0);
    draw_text(&mut image, "-", (0, 0), 1, clip, 0);
    assert_eq!(dark_pixels(&image), 3);
}
