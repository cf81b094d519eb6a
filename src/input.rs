use winit::event::{ElementState, MouseButton, VirtualKeyCode, WindowEvent};

use crate::color;
use crate::session::InputEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    None,
    Dispatch(Vec<InputEvent>),
    Quit,
}

/// Turns raw window events into session events. winit reports button
/// changes without a position, so the last cursor position is tracked here.
pub struct InputHandler {
    /// Last reported position, kept after the cursor leaves the window.
    cursor: Option<(f64, f64)>,
    inside: bool,
    press_position: Option<(f64, f64)>,
    click_slop: f64,
}

impl InputHandler {
    pub fn new(click_slop: f64) -> Self {
        Self {
            cursor: None,
            inside: false,
            press_position: None,
            click_slop,
        }
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent<'_>) -> InputAction {
        match event {
            WindowEvent::CloseRequested => InputAction::Quit,
            WindowEvent::CursorMoved { position, .. } => self.cursor_moved(position.x, position.y),
            WindowEvent::CursorLeft { .. } => self.cursor_left(),
            WindowEvent::Focused(false) => self.focus_lost(),
            WindowEvent::MouseInput { state, button, .. } => self.mouse_button(*button, *state),
            WindowEvent::KeyboardInput { input, .. } => match input.virtual_keycode {
                Some(key_code) => self.key(key_code, input.state),
                None => InputAction::None,
            },
            _ => InputAction::None,
        }
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64) -> InputAction {
        self.cursor = Some((x, y));
        self.inside = true;
        InputAction::Dispatch(vec![InputEvent::Move { x, y }])
    }

    pub fn cursor_left(&mut self) -> InputAction {
        self.inside = false;
        InputAction::None
    }

    /// A release may never arrive once focus is gone, so end any drag now.
    pub fn focus_lost(&mut self) -> InputAction {
        match self.press_position.take() {
            Some(_) => {
                let (x, y) = self.cursor.unwrap_or_default();
                InputAction::Dispatch(vec![InputEvent::Release { x, y }])
            }
            None => InputAction::None,
        }
    }

    pub fn mouse_button(&mut self, button: MouseButton, state: ElementState) -> InputAction {
        if button != MouseButton::Left {
            return InputAction::None;
        }

        match state {
            ElementState::Pressed => {
                let Some((x, y)) = self.cursor.filter(|_| self.inside) else {
                    return InputAction::None;
                };
                self.press_position = Some((x, y));
                InputAction::Dispatch(vec![InputEvent::Press { x, y }])
            }
            // Always released, even with the cursor outside, so the session
            // never stays in a drag. Only the click needs a real position.
            ElementState::Released => {
                let press = self.press_position.take();
                let (x, y) = self.cursor.or(press).unwrap_or_default();
                let mut events = vec![InputEvent::Release { x, y }];
                if let (true, Some((px, py))) = (self.inside, press) {
                    if (x - px).hypot(y - py) <= self.click_slop {
                        events.push(InputEvent::Click { x, y });
                    }
                }
                InputAction::Dispatch(events)
            }
        }
    }

    pub fn key(&mut self, key_code: VirtualKeyCode, state: ElementState) -> InputAction {
        if state != ElementState::Pressed {
            return InputAction::None;
        }

        let slot = match key_code {
            VirtualKeyCode::Escape => return InputAction::Quit,
            VirtualKeyCode::Key1 | VirtualKeyCode::Numpad1 => 0,
            VirtualKeyCode::Key2 | VirtualKeyCode::Numpad2 => 1,
            VirtualKeyCode::Key3 | VirtualKeyCode::Numpad3 => 2,
            VirtualKeyCode::Key4 | VirtualKeyCode::Numpad4 => 3,
            VirtualKeyCode::Key5 | VirtualKeyCode::Numpad5 => 4,
            VirtualKeyCode::Key6 | VirtualKeyCode::Numpad6 => 5,
            _ => return InputAction::None,
        };

        match color::preset(slot) {
            Some(preset) => InputAction::Dispatch(vec![InputEvent::SelectColor(preset)]),
            None => InputAction::None,
        }
    }
}
