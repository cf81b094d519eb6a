use crate::color::{Rgb, BLACK};
use crate::surface::{Rect, Surface};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f64,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: BLACK,
            width: 1.0,
        }
    }
}

/// Fills the pixels covered by the rectangle, clipped to the frame.
/// `frame` is RGBA, `frame_width * frame_height * 4` bytes.
pub fn fill_rect(
    frame: &mut [u8],
    frame_width: u32,
    frame_height: u32,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    color: Rgb,
) {
    let x0 = clip(x.floor(), frame_width);
    let y0 = clip(y.floor(), frame_height);
    let x1 = clip((x + width).ceil(), frame_width);
    let y1 = clip((y + height).ceil(), frame_height);
    let rgba = color.to_rgba();

    for py in y0..y1 {
        for px in x0..x1 {
            put_pixel(frame, frame_width, px, py, rgba);
        }
    }
}

/// Strokes a segment. Axis-aligned segments become a band `stroke.width`
/// thick centred on the segment; anything else is stepped pixel by pixel.
pub fn draw_line(
    frame: &mut [u8],
    frame_width: u32,
    frame_height: u32,
    from: (f64, f64),
    to: (f64, f64),
    stroke: Stroke,
) {
    let half = stroke.width / 2.0;
    let (x0, y0) = from;
    let (x1, y1) = to;

    if x0 == x1 {
        let top = y0.min(y1);
        fill_rect(frame, frame_width, frame_height, x0 - half, top, stroke.width, (y1 - y0).abs(), stroke.color);
    } else if y0 == y1 {
        let left = x0.min(x1);
        fill_rect(frame, frame_width, frame_height, left, y0 - half, (x1 - x0).abs(), stroke.width, stroke.color);
    } else {
        let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil();
        let rgba = stroke.color.to_rgba();
        let mut i = 0.0;
        while i <= steps {
            let t = i / steps;
            let px = (x0 + (x1 - x0) * t).floor();
            let py = (y0 + (y1 - y0) * t).floor();
            if px >= 0.0 && py >= 0.0 && px < frame_width as f64 && py < frame_height as f64 {
                put_pixel(frame, frame_width, px as u32, py as u32, rgba);
            }
            i += 1.0;
        }
    }
}

fn clip(v: f64, max: u32) -> u32 {
    v.max(0.0).min(max as f64) as u32
}

fn pixel_index(frame_width: u32, x: u32, y: u32) -> usize {
    (y as usize * frame_width as usize + x as usize) * 4
}

fn put_pixel(frame: &mut [u8], frame_width: u32, x: u32, y: u32, rgba: [u8; 4]) {
    let index = pixel_index(frame_width, x, y);
    if let Some(pixel) = frame.get_mut(index..index + 4) {
        pixel.copy_from_slice(&rgba);
    }
}

/// An owned RGBA frame that can be painted through [`Surface`].
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    origin: (f64, f64),
    stroke: Stroke,
    pixels: Vec<u8>,
}

impl FrameBuffer {
    /// `None` if the frame would not be addressable.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        let len = (width as usize).checked_mul(height as usize)?.checked_mul(4)?;
        Some(Self {
            width,
            height,
            origin: (0.0, 0.0),
            stroke: Stroke::default(),
            pixels: vec![0; len],
        })
    }

    /// Places the frame at `origin` in viewport coordinates.
    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin = (x, y);
        self
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = pixel_index(self.width, x, y);
        let p = &self.pixels[index..index + 3];
        Some(Rgb::new(p[0], p[1], p[2]))
    }
}

impl Surface for FrameBuffer {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgb) {
        fill_rect(&mut self.pixels, self.width, self.height, x, y, width, height, color);
    }

    fn set_stroke(&mut self, color: Rgb, width: f64) {
        self.stroke = Stroke { color, width };
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64)) {
        draw_line(&mut self.pixels, self.width, self.height, from, to, self.stroke);
    }

    fn bounding_rect(&self) -> Rect {
        Rect {
            x: self.origin.0,
            y: self.origin.1,
            width: self.width as f64,
            height: self.height as f64,
        }
    }
}
