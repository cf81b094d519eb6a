use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::color::Rgb;
use crate::raster::{self, Stroke};
use crate::surface::{Rect, Surface};

/// Window-backed surface. Drawing goes into the pixels frame; nothing shows
/// until [`GraphicsRenderer::present`].
pub struct GraphicsRenderer {
    pixels: Pixels,
    width: u32,
    height: u32,
    stroke: Stroke,
}

impl GraphicsRenderer {
    pub fn new(window: &Window, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            width,
            height,
            stroke: Stroke::default(),
        })
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}

impl Surface for GraphicsRenderer {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgb) {
        let (w, h) = (self.width, self.height);
        raster::fill_rect(self.pixels.frame_mut(), w, h, x, y, width, height, color);
    }

    fn set_stroke(&mut self, color: Rgb, width: f64) {
        self.stroke = Stroke { color, width };
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64)) {
        let (w, h, stroke) = (self.width, self.height, self.stroke);
        raster::draw_line(self.pixels.frame_mut(), w, h, from, to, stroke);
    }

    // The window is sized to the buffer, so the buffer starts at the window
    // origin and cursor positions are already buffer pixels.
    fn bounding_rect(&self) -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width: self.width as f64,
            height: self.height as f64,
        }
    }
}
