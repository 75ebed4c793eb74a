//! Pointer tracking over raw window events.
//!
//! The proximity glow only needs the latest pointer position, so this is a
//! deliberately small abstraction: it consumes `WindowEvent`s and answers
//! "where is the pointer, if it has moved at all". Keyboard and mouse-button
//! input are out of scope for this crate.

use glam::Vec2;
use winit::event::WindowEvent;

/// Pointer state fed by the window event stream.
///
/// The position is `None` until the first `CursorMoved` arrives; particle
/// fading treats that as "infinitely far away" rather than a coordinate.
#[derive(Debug, Default)]
pub struct Input {
    position: Option<Vec2>,
    delta: Vec2,
    window_size: (u32, u32),
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest pointer position in pixels, if the pointer has ever moved.
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Pointer movement since the previous `CursorMoved` event.
    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    /// Window size in pixels, as last reported.
    pub fn window_size(&self) -> (u32, u32) {
        self.window_size
    }

    pub(crate) fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
    }

    /// Process a winit window event.
    pub(crate) fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let new_pos = Vec2::new(position.x as f32, position.y as f32);
                self.delta = match self.position {
                    Some(last) => new_pos - last,
                    None => Vec2::ZERO,
                };
                self.position = Some(new_pos);
            }
            WindowEvent::Resized(size) => {
                self.set_window_size(size.width, size.height);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_starts_unset() {
        let input = Input::new();
        assert_eq!(input.position(), None);
        assert_eq!(input.delta(), Vec2::ZERO);
    }

    #[test]
    fn test_pointer_tracks_moves() {
        let mut input = Input::new();

        // First move: position set, no delta yet.
        input.position = Some(Vec2::new(100.0, 50.0));
        assert_eq!(input.position(), Some(Vec2::new(100.0, 50.0)));

        // Subsequent move via the same path handle_event takes.
        let new_pos = Vec2::new(130.0, 90.0);
        input.delta = new_pos - input.position.unwrap();
        input.position = Some(new_pos);

        assert_eq!(input.position(), Some(new_pos));
        assert_eq!(input.delta(), Vec2::new(30.0, 40.0));
    }

    #[test]
    fn test_window_size_updates() {
        let mut input = Input::new();
        input.set_window_size(1280, 720);
        assert_eq!(input.window_size(), (1280, 720));
    }
}
