use crate::coords::PixelPoint;
use crate::paint::{Color, Rgba8};

use super::line::rasterize_line;

/// CPU pixel canvas (RGBA8, row-major, origin top-left).
///
/// All drawing clips silently against the canvas bounds. Every mutation bumps
/// [`revision`](Self::revision) so a renderer can skip re-uploading an
/// unchanged canvas.
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
    revision: u64,
}

impl RasterCanvas {
    /// Creates a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![background.to_rgba8(); width as usize * height as usize],
            revision: 0,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Raw RGBA8 bytes, `width * 4` bytes per row.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Fills the whole canvas.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_rgba8());
        self.touch();
    }

    /// Changes the canvas size. Content is discarded (filled with `background`),
    /// matching how a resized drawing surface behaves.
    pub fn resize(&mut self, width: u32, height: u32, background: Color) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels = vec![background.to_rgba8(); width as usize * height as usize];
        self.touch();
    }

    /// Returns the pixel at `p`, or `None` outside the canvas.
    pub fn pixel(&self, p: PixelPoint) -> Option<Rgba8> {
        self.index(p).map(|i| self.pixels[i])
    }

    /// Writes one pixel; out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, p: PixelPoint, color: Color) {
        self.put(p, color.to_rgba8());
        self.touch();
    }

    /// Strokes a straight segment with a square brush of side `width` (min 1).
    pub fn stroke_line(&mut self, a: PixelPoint, b: PixelPoint, color: Color, width: u32) {
        let rgba = color.to_rgba8();
        for p in rasterize_line(a, b) {
            self.stamp(p, rgba, width);
        }
        self.touch();
    }

    /// Strokes a closed triangle outline.
    pub fn stroke_triangle(&mut self, [a, b, c]: [PixelPoint; 3], color: Color, width: u32) {
        self.stroke_line(a, b, color, width);
        self.stroke_line(b, c, color, width);
        self.stroke_line(c, a, color, width);
    }

    /// Stamps each point with a square of side `size` (min 1).
    pub fn plot_points(&mut self, points: &[PixelPoint], color: Color, size: u32) {
        let rgba = color.to_rgba8();
        for &p in points {
            self.stamp(p, rgba, size);
        }
        self.touch();
    }

    // ── private helpers ────────────────────────────────────────────────────

    /// Square brush covering `[-size/2, (size-1)/2]` around `p` on both axes.
    ///
    /// Even sizes lean up-left: a point at an integer coordinate sits on the
    /// corner between four pixels, and a 2 px brush covers the two pixels on
    /// each axis that share that corner, `p - 1` and `p`.
    fn stamp(&mut self, p: PixelPoint, rgba: Rgba8, size: u32) {
        let size = size.max(1) as i32;
        let lo = -(size / 2);
        let hi = (size - 1) / 2;
        for dy in lo..=hi {
            for dx in lo..=hi {
                self.put(PixelPoint::new(p.x + dx, p.y + dy), rgba);
            }
        }
    }

    #[inline]
    fn put(&mut self, p: PixelPoint, rgba: Rgba8) {
        if let Some(i) = self.index(p) {
            self.pixels[i] = rgba;
        }
    }

    #[inline]
    fn index(&self, p: PixelPoint) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x as u32 >= self.width || p.y as u32 >= self.height {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    #[inline]
    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
