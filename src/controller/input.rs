//! Platform-agnostic input handling

use std::collections::HashSet;

use winit::keyboard::KeyCode;

/// Logical keys the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Forward,
    Left,
    Back,
    Right,
    Jump,
    Sprint,
    Slow,
    ToggleCursor,
}

/// Platform-independent input events
#[derive(Debug, Clone)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    MouseMove { dx: f32, dy: f32 },
    FocusLost,
    CursorLockChanged { locked: bool },
}

/// Key mapping configuration
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: Vec<(KeyCode, Key)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            bindings: vec![
                (KeyCode::KeyW, Key::Forward),
                (KeyCode::ArrowUp, Key::Forward),
                (KeyCode::KeyA, Key::Left),
                (KeyCode::ArrowLeft, Key::Left),
                (KeyCode::KeyS, Key::Back),
                (KeyCode::ArrowDown, Key::Back),
                (KeyCode::KeyD, Key::Right),
                (KeyCode::ArrowRight, Key::Right),
                (KeyCode::Space, Key::Jump),
                (KeyCode::ShiftLeft, Key::Sprint),
                (KeyCode::KeyC, Key::Slow),
                (KeyCode::Tab, Key::ToggleCursor),
            ],
        }
    }
}

impl KeyBindings {
    /// Replace every binding of `key` with `code`
    pub fn rebind(&mut self, key: Key, code: KeyCode) {
        self.bindings.retain(|(_, k)| *k != key);
        self.bindings.push((code, key));
    }

    pub fn key_for(&self, code: KeyCode) -> Option<Key> {
        self.bindings.iter().find(|(c, _)| *c == code).map(|(_, k)| *k)
    }
}

/// Input for one frame, taken from [`InputState::frame`]
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Elapsed time since the previous frame, in seconds
    pub dt: f32,
    pub held: HashSet<Key>,
    pub look_delta: (f32, f32),
    pub cursor_locked: bool,
}

impl FrameInput {
    pub fn new(dt: f32) -> Self {
        Self { dt, ..Default::default() }
    }

    pub fn with_keys(mut self, keys: &[Key]) -> Self {
        self.held.extend(keys.iter().copied());
        self
    }

    pub fn with_look(mut self, dx: f32, dy: f32) -> Self {
        self.look_delta = (dx, dy);
        self.cursor_locked = true;
        self
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

/// Held keys, accumulated mouse motion and cursor lock between frames
pub struct InputState {
    bindings: KeyBindings,
    /// Physical keys currently down, so two codes bound to one key release cleanly
    pressed_codes: HashSet<KeyCode>,
    pub look_delta: (f32, f32),
    pub cursor_locked: bool,
}

impl InputState {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            pressed_codes: HashSet::new(),
            look_delta: (0.0, 0.0),
            cursor_locked: false,
        }
    }

    /// Process an input event and update state
    pub fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(code) => {
                let newly_pressed = self.pressed_codes.insert(*code);
                if newly_pressed && self.bindings.key_for(*code) == Some(Key::ToggleCursor) {
                    self.cursor_locked = !self.cursor_locked;
                    tracing::debug!(locked = self.cursor_locked, "cursor lock toggled");
                }
            }
            InputEvent::KeyUp(code) => {
                self.pressed_codes.remove(code);
            }
            InputEvent::MouseMove { dx, dy } => {
                if self.cursor_locked {
                    self.look_delta.0 += dx;
                    self.look_delta.1 += dy;
                }
            }
            InputEvent::FocusLost => {
                self.clear_keys();
            }
            InputEvent::CursorLockChanged { locked } => {
                self.cursor_locked = *locked;
            }
        }
    }

    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.pressed_codes
            .iter()
            .any(|code| self.bindings.key_for(*code) == Some(key))
    }

    pub fn held_keys(&self) -> HashSet<Key> {
        self.pressed_codes
            .iter()
            .filter_map(|code| self.bindings.key_for(*code))
            .collect()
    }

    pub fn clear_keys(&mut self) {
        self.pressed_codes.clear();
    }

    pub fn consume_look(&mut self) -> (f32, f32) {
        std::mem::take(&mut self.look_delta)
    }

    /// Snapshot this frame's input and reset the look accumulator
    pub fn frame(&mut self, dt: f32) -> FrameInput {
        FrameInput {
            dt,
            held: self.held_keys(),
            look_delta: self.consume_look(),
            cursor_locked: self.cursor_locked,
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        let mut input = InputState::default();
        input.process_event(&InputEvent::KeyDown(KeyCode::KeyW));
        input.process_event(&InputEvent::KeyDown(KeyCode::ShiftLeft));
        assert!(input.is_key_pressed(Key::Forward));
        assert!(input.is_key_pressed(Key::Sprint));
        assert!(!input.is_key_pressed(Key::Back));

        input.process_event(&InputEvent::KeyUp(KeyCode::KeyW));
        assert!(!input.is_key_pressed(Key::Forward));
    }

    #[test]
    fn test_alternate_binding_keeps_key_held() {
        let mut input = InputState::default();
        input.process_event(&InputEvent::KeyDown(KeyCode::KeyA));
        input.process_event(&InputEvent::KeyDown(KeyCode::ArrowLeft));
        input.process_event(&InputEvent::KeyUp(KeyCode::KeyA));
        assert!(input.is_key_pressed(Key::Left));
    }

    #[test]
    fn test_look_only_accumulates_when_locked() {
        let mut input = InputState::default();
        input.process_event(&InputEvent::MouseMove { dx: 5.0, dy: 1.0 });
        assert_eq!(input.look_delta, (0.0, 0.0));

        input.process_event(&InputEvent::CursorLockChanged { locked: true });
        input.process_event(&InputEvent::MouseMove { dx: 5.0, dy: 1.0 });
        input.process_event(&InputEvent::MouseMove { dx: -2.0, dy: 1.0 });
        let frame = input.frame(0.016);
        assert_eq!(frame.look_delta, (3.0, 2.0));
        assert!(frame.cursor_locked);
        assert_eq!(input.look_delta, (0.0, 0.0), "frame() should consume the look delta");
    }

    #[test]
    fn test_toggle_cursor_is_edge_triggered() {
        let mut input = InputState::default();
        input.process_event(&InputEvent::KeyDown(KeyCode::Tab));
        // key repeat
        input.process_event(&InputEvent::KeyDown(KeyCode::Tab));
        assert!(input.cursor_locked);

        input.process_event(&InputEvent::KeyUp(KeyCode::Tab));
        input.process_event(&InputEvent::KeyDown(KeyCode::Tab));
        assert!(!input.cursor_locked);
    }

    #[test]
    fn test_focus_loss_clears_keys() {
        let mut input = InputState::default();
        input.process_event(&InputEvent::KeyDown(KeyCode::KeyD));
        input.process_event(&InputEvent::FocusLost);
        assert!(input.held_keys().is_empty());
    }

    #[test]
    fn test_rebind() {
        let mut bindings = KeyBindings::default();
        bindings.rebind(Key::Slow, KeyCode::ControlLeft);
        assert_eq!(bindings.key_for(KeyCode::ControlLeft), Some(Key::Slow));
        assert_eq!(bindings.key_for(KeyCode::KeyC), None);
    }
}
