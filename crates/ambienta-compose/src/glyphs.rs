//! Tiny embedded pixel face for placeholder labels.
//!
//! Placeholder tiles need a short category label without dragging a font
//! rasterizer and a bundled TTF into the build. A 5x7 bitmap face drawn as
//! scaled rectangles covers the catalog's needs; accented characters fold to
//! their base letter first.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

/// Glyph cell is 5 columns x 7 rows; each row is a 5-bit pattern.
type Glyph = [u8; 7];

/// Horizontal advance in cells: 5 pixel columns plus 1 of spacing.
const ADVANCE: u32 = 6;

fn glyph(ch: char) -> Option<Glyph> {
    let rows = match ch {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10011, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        ' ' => [0b00000; 7],
        _ => return None,
    };
    Some(rows)
}

/// Uppercase, fold Spanish accents to base letters, keep only characters the
/// face covers.
fn label_chars(text: &str) -> Vec<char> {
    text.chars()
        .flat_map(char::to_uppercase)
        .map(|ch| match ch {
            'Á' => 'A',
            'É' => 'E',
            'Í' => 'I',
            'Ó' => 'O',
            'Ú' | 'Ü' => 'U',
            'Ñ' => 'N',
            other => other,
        })
        .filter(|ch| glyph(*ch).is_some())
        .collect()
}

/// Stencil `text` centered on the image, auto-scaling to roughly three
/// quarters of the image width. Unknown characters are dropped; an empty
/// label draws nothing.
pub fn draw_label_centered(img: &mut RgbaImage, text: &str, color: Rgba<u8>) {
    let chars = label_chars(text);
    if chars.is_empty() {
        return;
    }
    let cells = chars.len() as u32 * ADVANCE;
    let scale = (img.width() * 3 / 4 / cells).clamp(1, 8);
    let text_w = cells * scale - scale; // no spacing after the last glyph
    let text_h = 7 * scale;
    let origin_x = img.width().saturating_sub(text_w) / 2;
    let origin_y = img.height().saturating_sub(text_h) / 2;

    for (idx, ch) in chars.iter().enumerate() {
        if let Some(rows) = glyph(*ch) {
            let glyph_x = origin_x + idx as u32 * ADVANCE * scale;
            draw_glyph(img, &rows, glyph_x, origin_y, scale, color);
        }
    }
}

fn draw_glyph(img: &mut RgbaImage, rows: &Glyph, x: u32, y: u32, scale: u32, color: Rgba<u8>) {
    for (row_idx, row) in rows.iter().enumerate() {
        for col_idx in 0..5u32 {
            if row & (0b10000 >> col_idx) != 0 {
                let px = x + col_idx * scale;
                let py = y + row_idx as u32 * scale;
                if px + scale <= img.width() && py + scale <= img.height() {
                    draw_filled_rect_mut(
                        img,
                        Rect::at(px as i32, py as i32).of_size(scale, scale),
                        color,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageBuffer;

    const BG: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const FG: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn lit_pixels(img: &RgbaImage) -> usize {
        img.pixels().filter(|pixel| **pixel == FG).count()
    }

    #[test]
    fn known_characters_have_glyphs() {
        for ch in ('A'..='Z').chain('0'..='9') {
            assert!(glyph(ch).is_some(), "missing glyph for {ch}");
        }
        assert!(glyph('-').is_some());
        assert!(glyph(' ').is_some());
        assert!(glyph('%').is_none());
    }

    #[test]
    fn accents_fold_to_base_letters() {
        assert_eq!(label_chars("Baño"), vec!['B', 'A', 'N', 'O']);
        assert_eq!(label_chars("Contemporáneo"), "CONTEMPORANEO".chars().collect::<Vec<_>>());
        assert_eq!(label_chars("日本"), Vec::<char>::new());
    }

    #[test]
    fn label_marks_pixels() {
        let mut img: RgbaImage = ImageBuffer::from_pixel(160, 120, BG);
        draw_label_centered(&mut img, "sala", FG);
        assert!(lit_pixels(&img) > 0, "label must be visible");
    }

    #[test]
    fn empty_label_draws_nothing() {
        let mut img: RgbaImage = ImageBuffer::from_pixel(160, 120, BG);
        draw_label_centered(&mut img, "@@@", FG);
        assert_eq!(lit_pixels(&img), 0);
    }

    #[test]
    fn long_labels_still_fit() {
        // Wider than the canvas even at scale 1; trailing glyphs clip away
        // but the visible part still renders.
        let mut img: RgbaImage = ImageBuffer::from_pixel(96, 64, BG);
        draw_label_centered(&mut img, "dormitorio infantil", FG);
        assert!(lit_pixels(&img) > 0);
    }
}
