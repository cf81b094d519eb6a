//! Interaction state for one painting session.
//!
//! A [`Session`] owns the grid image, the drawing surface and the brush
//! state. The host feeds it [`InputEvent`]s; every event that changes the
//! image is followed by a full repaint.

use crate::color::Rgb;
use crate::config::Config;
use crate::error::AppError;
use crate::image::{GridStore, StoreFactory};
use crate::render::render;
use crate::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Press { x: f64, y: f64 },
    Release { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Click { x: f64, y: f64 },
    SelectColor(Rgb),
}

/// Pointer button state as seen by the brush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Up,
    Down,
}

pub struct Session<G, S> {
    image: G,
    surface: S,
    cell_size: u32,
    current_color: Rgb,
    drag: DragState,
    pending_frame: bool,
}

impl<G: GridStore, S: Surface> Session<G, S> {
    /// Wraps an existing image and paints it once.
    pub fn new(image: G, surface: S, cell_size: u32, initial_color: Rgb) -> Self {
        let mut session = Self {
            image,
            surface,
            cell_size: cell_size.max(1),
            current_color: initial_color,
            drag: DragState::Up,
            pending_frame: false,
        };
        session.repaint();
        session
    }

    /// Obtains the image from `factory` and paints it. Nothing is drawn if
    /// the factory fails.
    pub fn start<F>(factory: &F, surface: S, config: &Config) -> Result<Self, AppError>
    where
        F: StoreFactory<Store = G>,
    {
        config.validate()?;
        let image = factory.create(config.grid_width, config.grid_height)?;
        log::info!(
            "Session started: {}x{} cells, {}px per cell",
            image.width(),
            image.height(),
            config.cell_size
        );
        Ok(Self::new(image, surface, config.cell_size, config.initial_color))
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Press { x, y } => self.on_press(x, y),
            InputEvent::Release { x, y } => self.on_release(x, y),
            InputEvent::Move { x, y } => self.on_move(x, y),
            InputEvent::Click { x, y } => self.on_click(x, y),
            InputEvent::SelectColor(color) => self.on_select_color(color),
        }
    }

    pub fn on_press(&mut self, _x: f64, _y: f64) {
        self.drag = DragState::Down;
    }

    pub fn on_release(&mut self, _x: f64, _y: f64) {
        self.drag = DragState::Up;
    }

    pub fn on_move(&mut self, x: f64, y: f64) {
        if self.drag == DragState::Up {
            log::trace!("Ignoring move to ({}, {}) while not dragging", x, y);
            return;
        }
        self.paint_at(x, y);
    }

    pub fn on_click(&mut self, x: f64, y: f64) {
        self.paint_at(x, y);
    }

    pub fn on_select_color(&mut self, color: Rgb) {
        log::debug!("Brush color set to {:?}", color);
        self.current_color = color;
    }

    /// Maps viewport coordinates to grid coordinates, flooring toward
    /// negative infinity so positions left of or above the surface stay out
    /// of range. Non-finite positions map to no cell at all.
    pub fn to_grid(&self, x: f64, y: f64) -> Option<(i64, i64)> {
        let origin = self.surface.bounding_rect();
        let size = self.cell_size as f64;
        let gx = ((x - origin.x) / size).floor();
        let gy = ((y - origin.y) / size).floor();
        if !gx.is_finite() || !gy.is_finite() {
            return None;
        }
        Some((gx as i64, gy as i64))
    }

    fn paint_at(&mut self, x: f64, y: f64) {
        match self.to_grid(x, y) {
            Some((gx, gy)) => {
                log::debug!("Brush {:?} at cell ({}, {})", self.current_color, gx, gy);
                self.image.brush(gx, gy, self.current_color);
            }
            None => log::trace!("Ignoring pointer at non-finite position ({}, {})", x, y),
        }
        self.repaint();
    }

    pub fn repaint(&mut self) {
        render(&self.image, &mut self.surface, self.cell_size);
        self.pending_frame = true;
    }

    /// Returns whether anything was drawn since the last call.
    pub fn take_pending_frame(&mut self) -> bool {
        std::mem::take(&mut self.pending_frame)
    }

    pub fn image(&self) -> &G {
        &self.image
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn current_color(&self) -> Rgb {
        self.current_color
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Down
    }
}
