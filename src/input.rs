//! Mouse input and drag-to-move.
//!
//! [`Input`] tracks instantaneous events (button pressed this frame) and
//! continuous state (button held, cursor position). Feed it either winit
//! window events through [`Input::handle_event`] or raw calls to
//! [`Input::press`], [`Input::release`] and [`Input::move_cursor`].
//!
//! [`DragHandle`] turns that state into body movement:
//!
//! ```ignore
//! input.handle_event(&event);          // for every window event
//! drag.update(&input, &mut body);      // once per frame
//! input.begin_frame();                 // after the frame is processed
//! ```

use crate::body::Body;
use crate::bounds::Rect;
use glam::Vec2;
use std::collections::HashSet;
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Back, Forward and other extra buttons have no mapping and are returned
/// as the error.
impl TryFrom<WinitMouseButton> for MouseButton {
    type Error = WinitMouseButton;

    fn try_from(btn: WinitMouseButton) -> Result<Self, Self::Error> {
        match btn {
            WinitMouseButton::Left => Ok(MouseButton::Left),
            WinitMouseButton::Right => Ok(MouseButton::Right),
            WinitMouseButton::Middle => Ok(MouseButton::Middle),
            other => Err(other),
        }
    }
}

/// Per-frame mouse state.
#[derive(Debug, Default)]
pub struct Input {
    mouse_held: HashSet<MouseButton>,
    mouse_pressed: HashSet<MouseButton>,
    mouse_released: HashSet<MouseButton>,

    cursor: Vec2,
    cursor_delta: Vec2,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Queries ==========

    /// Button went down this frame.
    pub fn mouse_pressed(&self, button: MouseButton) -> bool {
        self.mouse_pressed.contains(&button)
    }

    /// Button is currently down.
    pub fn mouse_held(&self, button: MouseButton) -> bool {
        self.mouse_held.contains(&button)
    }

    /// Button went up this frame.
    pub fn mouse_released(&self, button: MouseButton) -> bool {
        self.mouse_released.contains(&button)
    }

    /// Cursor position in window pixels (Y-down).
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Cursor movement accumulated this frame.
    pub fn cursor_delta(&self) -> Vec2 {
        self.cursor_delta
    }

    // ========== Feeding ==========

    pub fn press(&mut self, button: MouseButton) {
        self.mouse_pressed.insert(button);
        self.mouse_held.insert(button);
    }

    pub fn release(&mut self, button: MouseButton) {
        self.mouse_held.remove(&button);
        self.mouse_released.insert(button);
    }

    pub fn move_cursor(&mut self, position: Vec2) {
        self.cursor_delta += position - self.cursor;
        self.cursor = position;
    }

    /// Clear per-frame events. Held buttons and the cursor persist.
    pub fn begin_frame(&mut self) {
        self.mouse_pressed.clear();
        self.mouse_released.clear();
        self.cursor_delta = Vec2::ZERO;
    }

    /// Process a winit window event. Non-mouse events and unmapped buttons
    /// are ignored.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::MouseInput { state, button, .. } => {
                let Ok(btn) = MouseButton::try_from(*button) else {
                    return;
                };
                match state {
                    ElementState::Pressed => self.press(btn),
                    ElementState::Released => self.release(btn),
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.move_cursor(Vec2::new(position.x as f32, position.y as f32));
            }

            _ => {}
        }
    }
}

/// Left-button drag of a [`Body`].
///
/// A drag starts when the button goes down within `grab_radius` pixels
/// (square hit box) of the body and ends when it goes up. While dragging,
/// the body sits under the cursor, optionally clamped into a region.
#[derive(Debug, Clone)]
pub struct DragHandle {
    grab_radius: f32,
    region: Option<Rect>,
    dragging: bool,
}

impl DragHandle {
    pub fn new() -> Self {
        Self {
            grab_radius: 10.0,
            region: None,
            dragging: false,
        }
    }

    pub fn with_grab_radius(mut self, radius: f32) -> Self {
        self.grab_radius = radius.abs();
        self
    }

    /// Keep dragged positions inside `region` (e.g. away from a side panel).
    pub fn with_region(mut self, region: Rect) -> Self {
        self.region = Some(region);
        self
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether `point` is close enough to `target` to grab it.
    pub fn hits(&self, target: Vec2, point: Vec2) -> bool {
        let d = (point - target).abs();
        d.x <= self.grab_radius && d.y <= self.grab_radius
    }

    /// Apply this frame's input. Returns `true` if the body was moved.
    pub fn update(&mut self, input: &Input, body: &mut Body) -> bool {
        if input.mouse_pressed(MouseButton::Left) && self.hits(body.position, input.cursor()) {
            self.dragging = true;
        }
        if !input.mouse_held(MouseButton::Left) {
            self.dragging = false;
        }
        if !self.dragging {
            return false;
        }

        let mut target = input.cursor();
        if let Some(region) = &self.region {
            target = target.max(region.min).min(region.max);
        }
        let moved = target != body.position;
        body.position = target;
        moved
    }
}

impl Default for DragHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmitterConfig;
    use crate::emitter::Emitter;
    use crate::random::RandomSource;

    fn body_at(position: Vec2) -> Body {
        let emitter = Emitter::with_random(Vec2::ZERO, EmitterConfig::default(), RandomSource::seeded(2));
        Body::new(emitter, position)
    }

    #[test]
    fn test_button_state() {
        let mut input = Input::new();
        assert!(!input.mouse_held(MouseButton::Left));

        input.press(MouseButton::Left);
        assert!(input.mouse_pressed(MouseButton::Left));
        assert!(input.mouse_held(MouseButton::Left));

        // After begin_frame, pressed is cleared but held remains
        input.begin_frame();
        assert!(!input.mouse_pressed(MouseButton::Left));
        assert!(input.mouse_held(MouseButton::Left));

        input.release(MouseButton::Left);
        assert!(input.mouse_released(MouseButton::Left));
        assert!(!input.mouse_held(MouseButton::Left));
    }

    #[test]
    fn test_cursor_delta() {
        let mut input = Input::new();
        input.move_cursor(Vec2::new(10.0, 10.0));
        input.begin_frame();
        input.move_cursor(Vec2::new(15.0, 8.0));
        input.move_cursor(Vec2::new(20.0, 6.0));
        assert_eq!(input.cursor_delta(), Vec2::new(10.0, -4.0));
    }

    #[test]
    fn test_drag_moves_body() {
        let mut body = body_at(Vec2::new(300.0, 300.0));
        let mut drag = DragHandle::new();
        let mut input = Input::new();

        input.move_cursor(Vec2::new(305.0, 296.0));
        input.press(MouseButton::Left);
        assert!(drag.update(&input, &mut body));
        assert!(drag.is_dragging());
        input.begin_frame();

        input.move_cursor(Vec2::new(400.0, 250.0));
        assert!(drag.update(&input, &mut body));
        assert_eq!(body.position, Vec2::new(400.0, 250.0));
        input.begin_frame();

        input.release(MouseButton::Left);
        input.move_cursor(Vec2::new(0.0, 0.0));
        assert!(!drag.update(&input, &mut body));
        assert!(!drag.is_dragging());
        assert_eq!(body.position, Vec2::new(400.0, 250.0));
    }

    #[test]
    fn test_press_away_from_body_does_not_grab() {
        let mut body = body_at(Vec2::new(300.0, 300.0));
        let mut drag = DragHandle::new();
        let mut input = Input::new();

        input.move_cursor(Vec2::new(320.0, 300.0));
        input.press(MouseButton::Left);
        assert!(!drag.update(&input, &mut body));
        assert_eq!(body.position, Vec2::new(300.0, 300.0));
    }

    fn mouse_event(state: ElementState, button: WinitMouseButton) -> WindowEvent {
        WindowEvent::MouseInput {
            device_id: unsafe { winit::event::DeviceId::dummy() },
            state,
            button,
        }
    }

    #[test]
    fn test_extra_buttons_are_ignored() {
        assert_eq!(MouseButton::try_from(WinitMouseButton::Back), Err(WinitMouseButton::Back));
        assert_eq!(MouseButton::try_from(WinitMouseButton::Other(7)), Err(WinitMouseButton::Other(7)));
        assert_eq!(MouseButton::try_from(WinitMouseButton::Middle), Ok(MouseButton::Middle));

        let mut input = Input::new();
        input.handle_event(&mouse_event(ElementState::Pressed, WinitMouseButton::Forward));
        assert!(!input.mouse_held(MouseButton::Left));
        assert!(!input.mouse_pressed(MouseButton::Left));
    }

    #[test]
    fn test_extra_button_release_keeps_left_drag() {
        let mut body = body_at(Vec2::new(300.0, 300.0));
        let mut drag = DragHandle::new();
        let mut input = Input::new();

        input.move_cursor(Vec2::new(300.0, 300.0));
        input.handle_event(&mouse_event(ElementState::Pressed, WinitMouseButton::Left));
        drag.update(&input, &mut body);
        input.begin_frame();

        input.handle_event(&mouse_event(ElementState::Pressed, WinitMouseButton::Back));
        input.handle_event(&mouse_event(ElementState::Released, WinitMouseButton::Back));
        input.move_cursor(Vec2::new(350.0, 320.0));
        assert!(drag.update(&input, &mut body));
        assert!(drag.is_dragging());
        assert!(input.mouse_held(MouseButton::Left));
        assert_eq!(body.position, Vec2::new(350.0, 320.0));
    }

    #[test]
    fn test_extra_button_press_does_not_grab() {
        let mut body = body_at(Vec2::new(300.0, 300.0));
        let mut drag = DragHandle::new();
        let mut input = Input::new();

        input.move_cursor(Vec2::new(302.0, 298.0));
        input.handle_event(&mouse_event(ElementState::Pressed, WinitMouseButton::Other(4)));
        assert!(!drag.update(&input, &mut body));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_drag_region() {
        let mut body = body_at(Vec2::new(100.0, 100.0));
        let mut drag = DragHandle::new().with_region(Rect::from_size(600.0, 600.0));
        let mut input = Input::new();

        input.move_cursor(Vec2::new(100.0, 100.0));
        input.press(MouseButton::Left);
        drag.update(&input, &mut body);
        input.move_cursor(Vec2::new(750.0, 50.0));
        drag.update(&input, &mut body);
        assert_eq!(body.position, Vec2::new(600.0, 50.0));
    }
}
