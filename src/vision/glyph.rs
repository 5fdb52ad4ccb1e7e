//! 极简的点阵字体，只用于在网格单元中标注类别编号

use image::{GrayImage, Luma};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

pub const GLYPH_WIDTH: u32 = 3;
pub const GLYPH_HEIGHT: u32 = 5;

// 每行3位，高位在左
const DIGITS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111], // 0
    [0b010, 0b110, 0b010, 0b010, 0b111], // 1
    [0b111, 0b001, 0b111, 0b100, 0b111], // 2
    [0b111, 0b001, 0b111, 0b001, 0b111], // 3
    [0b101, 0b101, 0b111, 0b001, 0b001], // 4
    [0b111, 0b100, 0b111, 0b001, 0b111], // 5
    [0b111, 0b100, 0b111, 0b101, 0b111], // 6
    [0b111, 0b001, 0b010, 0b010, 0b010], // 7
    [0b111, 0b101, 0b111, 0b101, 0b111], // 8
    [0b111, 0b101, 0b111, 0b001, 0b111], // 9
];
const MINUS: [u8; 5] = [0b000, 0b000, 0b111, 0b000, 0b000];

fn glyph(c: char) -> Option<&'static [u8; 5]> {
    match c {
        '0'..='9' => c.to_digit(10).map(|d| &DIGITS[d as usize]),
        '-' => Some(&MINUS),
        _ => None,
    }
}

/// 以`(x, y)`为左上角绘制文本，每个点阵像素放大为`pixel_size`见方的方块，超出`clip`的部分不绘制。
/// 只支持数字与负号，其余字符按空格处理。
pub fn draw_text(
    image: &mut GrayImage,
    text: &str,
    (x, y): (i32, i32),
    pixel_size: u32,
    clip: Rect,
    color: u8,
) {
    let pixel_size = pixel_size.max(1);
    let advance = ((GLYPH_WIDTH + 1) * pixel_size) as i32;
    for (i, c) in text.chars().enumerate() {
        let Some(rows) = glyph(c) else {
            continue;
        };
        let left = x + i as i32 * advance;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                let block = Rect::at(
                    left + (col * pixel_size) as i32,
                    y + (row as u32 * pixel_size) as i32,
                )
                .of_size(pixel_size, pixel_size);
                if let Some(visible) = block.intersect(clip) {
                    draw_filled_rect_mut(image, visible, Luma([color]));
                }
            }
        }
    }
}
