use image::{GrayImage, Luma, Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::builder::Frame;

// Text
//------------------------------------------------------------------------------

impl Frame {
    /// One char per module, rows separated by newlines. `padding` blank lines
    /// are added above and below.
    pub fn to_text(&self, dark: &str, light: &str, padding: usize) -> String {
        let w = self.width;
        let mut res = String::with_capacity((w + 1) * (w + 2 * padding));
        res.extend(std::iter::repeat('\n').take(padding));
        for r in 0..w {
            for c in 0..w {
                res.push_str(if self.is_dark(r, c) { dark } else { light });
            }
            if r != w - 1 {
                res.push('\n');
            }
        }
        res.extend(std::iter::repeat('\n').take(padding));
        res
    }

    /// Packs two module rows into every line with half block chars. The row
    /// below the last one of an odd width symbol reads as light.
    pub fn to_two_tone(&self) -> String {
        let w = self.width;
        let is_dark = |r: usize, c: usize| r < w && self.is_dark(r, c);
        let mut lines = Vec::with_capacity((w + 1) / 2);
        for r in (0..w).step_by(2) {
            let line = (0..w)
                .map(|c| match (is_dark(r, c), is_dark(r + 1, c)) {
                    (true, true) => '█',
                    (false, true) => '▄',
                    (true, false) => '▀',
                    (false, false) => ' ',
                })
                .collect::<String>();
            lines.push(line);
        }
        lines.join("\n")
    }
}

// Image
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageOptions {
    /// Side of the square canvas in pixels
    pub size: u32,
    /// Margin around the symbol, centred in the canvas when unset
    pub padding: Option<u32>,
    pub foreground: Rgba<u8>,
    pub background: Rgba<u8>,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            size: 100,
            padding: None,
            foreground: Rgba([0, 0, 0, 255]),
            background: Rgba([255, 255, 255, 255]),
        }
    }
}

impl Frame {
    /// Pixels per module, never below 1.
    pub fn module_size(&self, size: u32, padding: u32) -> u32 {
        let avail = size.saturating_sub(padding * 2);
        (avail / self.width as u32).max(1)
    }

    pub fn to_image(&self, opts: &ImageOptions) -> RgbaImage {
        let w = self.width as u32;
        let (module_sz, padding) = match opts.padding {
            Some(p) => (self.module_size(opts.size, p), p),
            None => {
                let m = self.module_size(opts.size, 0);
                (m, opts.size.saturating_sub(m * w) / 2)
            }
        };

        let mut canvas = RgbaImage::from_pixel(opts.size, opts.size, opts.background);
        for r in 0..self.width {
            for c in 0..self.width {
                if !self.is_dark(r, c) {
                    continue;
                }
                let x = padding + c as u32 * module_sz;
                let y = padding + r as u32 * module_sz;
                let rect = Rect::at(x as i32, y as i32).of_size(module_sz, module_sz);
                draw_filled_rect_mut(&mut canvas, rect, opts.foreground);
            }
        }
        canvas
    }

    /// Black on white with a 4 module quiet zone.
    pub fn to_gray_image(&self, module_sz: u32) -> GrayImage {
        let qz_sz = 4 * module_sz;
        let qr_sz = self.width as u32 * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        let mut canvas = GrayImage::from_pixel(total_sz, total_sz, Luma([255]));
        for r in 0..self.width {
            for c in 0..self.width {
                if self.is_dark(r, c) {
                    let x = qz_sz + c as u32 * module_sz;
                    let y = qz_sz + r as u32 * module_sz;
                    let rect = Rect::at(x as i32, y as i32).of_size(module_sz, module_sz);
                    draw_filled_rect_mut(&mut canvas, rect, Luma([0]));
                }
            }
        }
        canvas
    }
}
