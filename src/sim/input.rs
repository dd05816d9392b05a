//! Per-frame input snapshot
//!
//! The driver polls the platform and fills one of these before each frame.

use glam::Vec2;

/// Logical buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    Start,
    Select,
    A,
    B,
    X,
    Y,
    L,
    R,
}

impl Button {
    pub const COUNT: usize = 12;

    pub const ALL: [Button; Button::COUNT] = [
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::Start,
        Button::Select,
        Button::A,
        Button::B,
        Button::X,
        Button::Y,
        Button::L,
        Button::R,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Button and stick state for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    held: [bool; Button::COUNT],
    pressed: [bool; Button::COUNT],
    pub left_stick: Vec2,
    pub right_stick: Vec2,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `button` is currently held
    #[inline]
    pub fn is_down(&self, button: Button) -> bool {
        self.held[button.index()]
    }

    /// Whether `button` went down since the previous frame
    #[inline]
    pub fn was_pressed(&self, button: Button) -> bool {
        self.pressed[button.index()]
    }

    pub fn set_down(&mut self, button: Button, down: bool) {
        self.held[button.index()] = down;
    }

    pub fn set_pressed(&mut self, button: Button, pressed: bool) {
        self.pressed[button.index()] = pressed;
    }

    pub fn with_held(mut self, button: Button) -> Self {
        self.set_down(button, true);
        self
    }

    /// Mark `button` as newly pressed (and therefore held)
    pub fn with_pressed(mut self, button: Button) -> Self {
        self.set_down(button, true);
        self.set_pressed(button, true);
        self
    }

    /// Held state as `1.0` / `0.0`
    #[inline]
    pub fn axis(&self, button: Button) -> f32 {
        if self.is_down(button) { 1.0 } else { 0.0 }
    }

    /// Clear the one-shot presses, keeping held state
    pub fn clear_pressed(&mut self) {
        self.pressed = [false; Button::COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_indices_are_dense() {
        for (i, button) in Button::ALL.iter().enumerate() {
            assert_eq!(button.index(), i);
        }
    }

    #[test]
    fn test_held_and_pressed() {
        let input = InputSnapshot::new()
            .with_held(Button::Left)
            .with_pressed(Button::Start);
        assert!(input.is_down(Button::Left));
        assert!(!input.was_pressed(Button::Left));
        assert!(input.is_down(Button::Start));
        assert!(input.was_pressed(Button::Start));
        assert_eq!(input.axis(Button::Left), 1.0);
        assert_eq!(input.axis(Button::Right), 0.0);
    }

    #[test]
    fn test_clear_pressed_keeps_held() {
        let mut input = InputSnapshot::new().with_pressed(Button::A);
        input.clear_pressed();
        assert!(input.is_down(Button::A));
        assert!(!input.was_pressed(Button::A));
    }
}
