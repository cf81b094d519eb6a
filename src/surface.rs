use crate::color::Rgb;

/// Axis-aligned rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The 2D painting operations the renderer needs from its host.
pub trait Surface {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgb);

    fn set_stroke(&mut self, color: Rgb, width: f64);

    /// Strokes a segment with the current stroke style.
    fn line(&mut self, from: (f64, f64), to: (f64, f64));

    /// Where the surface sits on screen, used to map pointer positions.
    fn bounding_rect(&self) -> Rect;
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Rgb,
    },
    SetStroke {
        color: Rgb,
        width: f64,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
    },
}

/// Surface that records every command instead of drawing it.
#[derive(Debug, Clone)]
pub struct DrawLog {
    bounds: Rect,
    commands: Vec<DrawCommand>,
}

impl DrawLog {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
            .count()
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.bounds.x = x;
        self.bounds.y = y;
    }
}

impl Surface for DrawLog {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgb) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn set_stroke(&mut self, color: Rgb, width: f64) {
        self.commands.push(DrawCommand::SetStroke { color, width });
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64)) {
        self.commands.push(DrawCommand::Line { from, to });
    }

    fn bounding_rect(&self) -> Rect {
        self.bounds
    }
}
