//! Raster image widget drawn with upper-half-block characters.
//!
//! Each terminal cell shows two vertically stacked pixels: the glyph `▀`
//! takes the top pixel as foreground and the bottom pixel as background.

use std::cell::RefCell;

use image::{imageops, Rgb, RgbImage};
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

/// Last scaled copy of a source image, reused while the target size holds.
///
/// One cache per source image.
#[derive(Debug, Default)]
pub struct ScaleCache {
    scaled: RefCell<Option<RgbImage>>,
}

impl ScaleCache {
    /// Dimensions of the cached copy, if any.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.scaled.borrow().as_ref().map(RgbImage::dimensions)
    }
}

/// Scales an image to fit its area, preserving aspect ratio, and centers it.
pub struct HalfBlockImage<'a> {
    image: &'a RgbImage,
    cache: &'a ScaleCache,
}

impl<'a> HalfBlockImage<'a> {
    pub fn new(image: &'a RgbImage, cache: &'a ScaleCache) -> Self {
        Self { image, cache }
    }
}

impl Widget for HalfBlockImage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, height) = self.image.dimensions();
        if area.is_empty() || width == 0 || height == 0 {
            return;
        }

        let (w, h) = fit(
            (width, height),
            u32::from(area.width),
            u32::from(area.height) * 2,
        );

        let mut slot = self.cache.scaled.borrow_mut();
        if slot.as_ref().map(RgbImage::dimensions) != Some((w, h)) {
            *slot = Some(if (w, h) == (width, height) {
                self.image.clone()
            } else {
                imageops::thumbnail(self.image, w, h)
            });
        }
        if let Some(scaled) = slot.as_ref() {
            draw_pixels(scaled, area, buf);
        }
    }
}

/// Paint `scaled` centered in `area`, two pixel rows per terminal row.
fn draw_pixels(scaled: &RgbImage, area: Rect, buf: &mut Buffer) {
    let (w, h) = scaled.dimensions();
    let rows = h.div_ceil(2);

    let x0 = area.x + (area.width - w as u16) / 2;
    let y0 = area.y + (area.height - rows as u16) / 2;

    for row in 0..rows {
        for col in 0..w {
            let top = scaled.get_pixel(col, row * 2);
            let bottom = (row * 2 + 1 < h).then(|| scaled.get_pixel(col, row * 2 + 1));
            if let Some(cell) = buf.cell_mut((x0 + col as u16, y0 + row as u16)) {
                cell.set_char('▀').set_fg(to_color(top));
                cell.set_bg(bottom.map_or(Color::Reset, to_color));
            }
        }
    }
}

/// Largest size within `max_w` x `max_h` keeping the source aspect ratio.
fn fit((width, height): (u32, u32), max_w: u32, max_h: u32) -> (u32, u32) {
    let scale = f64::min(
        f64::from(max_w) / f64::from(width),
        f64::from(max_h) / f64::from(height),
    );
    let w = ((f64::from(width) * scale).floor() as u32).clamp(1, max_w.max(1));
    let h = ((f64::from(height) * scale).floor() as u32).clamp(1, max_h.max(1));
    (w, h)
}

fn to_color(pixel: &Rgb<u8>) -> Color {
    let [r, g, b] = pixel.0;
    Color::Rgb(r, g, b)
}
