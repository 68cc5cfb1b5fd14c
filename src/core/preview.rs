//! Annotated preview of crop rectangles.
//!
//! Everything is drawn on a transparent overlay that is alpha-blended over the
//! source sheet at the end, so the markers stay translucent.
use ab_glyph::{FontVec, PxScale};
use font8x8::{BASIC_FONTS, UnicodeFonts};
use image::{DynamicImage, Rgba, RgbaImage, imageops};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_rect_mut, draw_polygon_mut, draw_text_mut,
};
use imageproc::point::Point;
use imageproc::rect::Rect;

use crate::types::TileBounds;

const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
const YELLOW: Rgba<u8> = Rgba([255, 255, 0, 255]);
const SEED: Rgba<u8> = Rgba([255, 255, 0, 200]);
const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const RED_MARKER: Rgba<u8> = Rgba([255, 0, 0, 200]);
const CYAN_MARKER: Rgba<u8> = Rgba([0, 255, 255, 200]);

const OUTLINE_WIDTH: u32 = 2;
const DETECTED_MARKER_RADIUS: i32 = 5;
const FIXED_MARKER_SIZE: i32 = 6;
const LABEL_OFFSET: i32 = 5;
const LABEL_PX: f32 = 14.0;
/// Pixel size of one font8x8 dot when no TrueType font is loaded
const BITMAP_SCALE: i32 = 2;
const CROSS_ARM: i32 = 10;

pub struct PreviewCanvas<'f> {
    overlay: RgbaImage,
    font: Option<&'f FontVec>,
    label_scale: PxScale,
}

impl<'f> PreviewCanvas<'f> {
    /// Transparent canvas for a `width` x `height` sheet. Labels use `font`
    /// when given, the built-in 8x8 bitmap font otherwise.
    pub fn new(width: u32, height: u32, font: Option<&'f FontVec>) -> Self {
        Self {
            overlay: RgbaImage::new(width, height),
            font,
            label_scale: PxScale::from(LABEL_PX),
        }
    }

    #[cfg(test)]
    fn overlay(&self) -> &RgbaImage {
        &self.overlay
    }

    /// Yellow dot on a detection seed
    pub fn draw_seed(&mut self, (x, y): (u32, u32)) {
        draw_filled_circle_mut(&mut self.overlay, (x as i32, y as i32), 3, SEED);
    }

    /// Red cross on a seed whose tile could not be located
    pub fn draw_failure(&mut self, (x, y): (u32, u32)) {
        let (x, y) = (x as i32, y as i32);
        let a = CROSS_ARM;
        // each stroke is a quad offset one pixel either side of its diagonal
        let falling = [
            Point::new(x - a + 1, y - a - 1),
            Point::new(x + a + 1, y + a - 1),
            Point::new(x + a - 1, y + a + 1),
            Point::new(x - a - 1, y - a + 1),
        ];
        let rising = [
            Point::new(x - a - 1, y + a - 1),
            Point::new(x + a - 1, y - a - 1),
            Point::new(x + a + 1, y - a + 1),
            Point::new(x - a + 1, y + a + 1),
        ];
        draw_polygon_mut(&mut self.overlay, &falling, RED);
        draw_polygon_mut(&mut self.overlay, &rising, RED);
    }

    /// Detected tile: outline on its outermost pixels plus cyan corner squares.
    pub fn draw_detected(&mut self, bounds: &TileBounds, name: &str) {
        if bounds.is_empty() {
            return;
        }
        let (l, t) = (bounds.left as i32, bounds.top as i32);
        let (r, b) = (bounds.right as i32 - 1, bounds.bottom as i32 - 1);
        self.outline(l, t, bounds.width(), bounds.height(), GREEN);

        let side = (2 * DETECTED_MARKER_RADIUS + 1) as u32;
        for (cx, cy) in [(l, t), (r, t), (l, b), (r, b)] {
            let rect = Rect::at(cx - DETECTED_MARKER_RADIUS, cy - DETECTED_MARKER_RADIUS).of_size(side, side);
            draw_filled_rect_mut(&mut self.overlay, rect, CYAN_MARKER);
        }

        self.draw_label(l, t, name);
    }

    /// Fixed-grid crop: outline one pixel outside the crop on the right and
    /// bottom, plus red squares hugging each corner.
    pub fn draw_fixed(&mut self, bounds: &TileBounds, name: &str) {
        let (x, y) = (bounds.left as i32, bounds.top as i32);
        let (x2, y2) = (bounds.right as i32, bounds.bottom as i32);
        self.outline(x, y, bounds.width() + 1, bounds.height() + 1, GREEN);

        let m = FIXED_MARKER_SIZE;
        let side = (m + 2) as u32;
        for (mx, my) in [(x - 1, y - 1), (x2 - m, y - 1), (x - 1, y2 - m), (x2 - m, y2 - m)] {
            draw_filled_rect_mut(&mut self.overlay, Rect::at(mx, my).of_size(side, side), RED_MARKER);
        }

        self.draw_label(x, y, name);
    }

    /// Blend the overlay over `base` and return the annotated sheet.
    pub fn compose(self, base: &DynamicImage) -> RgbaImage {
        let mut out = base.to_rgba8();
        imageops::overlay(&mut out, &self.overlay, 0, 0);
        out
    }

    fn outline(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgba<u8>) {
        for inset in 0..OUTLINE_WIDTH {
            let (w, h) = (width.saturating_sub(2 * inset), height.saturating_sub(2 * inset));
            if w == 0 || h == 0 {
                break;
            }
            let rect = Rect::at(x + inset as i32, y + inset as i32).of_size(w, h);
            draw_hollow_rect_mut(&mut self.overlay, rect, color);
        }
    }

    fn draw_label(&mut self, x: i32, y: i32, text: &str) {
        let (x, y) = (x + LABEL_OFFSET, y + LABEL_OFFSET);
        match self.font {
            Some(font) => draw_text_mut(&mut self.overlay, YELLOW, x, y, self.label_scale, font, text),
            None => self.draw_bitmap_text(x, y, text),
        }
    }

    fn draw_bitmap_text(&mut self, x: i32, y: i32, text: &str) {
        let s = BITMAP_SCALE;
        let mut cursor_x = x;
        for ch in text.chars() {
            let Some(glyph) = BASIC_FONTS.get(ch).or_else(|| BASIC_FONTS.get('?')) else {
                cursor_x += 8 * s;
                continue;
            };
            for (row_idx, row) in glyph.iter().enumerate() {
                for col_idx in 0..8 {
                    if (row >> col_idx) & 1 == 0 {
                        continue;
                    }
                    let dot = Rect::at(cursor_x + col_idx * s, y + row_idx as i32 * s).of_size(s as u32, s as u32);
                    draw_filled_rect_mut(&mut self.overlay, dot, YELLOW);
                }
            }
            cursor_x += 8 * s;
        }
    }
}
