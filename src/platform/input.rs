//! Keyboard state with edge-triggered presses
//!
//! Each key cycles Released -> Pressed -> Consumed -> Released. Menu actions
//! consume a press so that holding a key fires once; movement just checks
//! whether the key is down.

/// Game actions the host binds physical keys to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Move paddle left (A)
    Left,
    /// Move paddle right (D)
    Right,
    /// Release the ball (Space)
    Launch,
    /// Confirm / start (Enter)
    Confirm,
    /// Next level in the menu (W)
    Next,
    /// Previous level in the menu (S)
    Previous,
}

impl Key {
    pub const COUNT: usize = 6;

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Released,
    /// Down and not yet acted on
    Pressed,
    /// Down and already acted on
    Consumed,
}

#[derive(Debug, Clone, Default)]
pub struct Keys {
    states: [KeyState; Key::COUNT],
}

impl Keys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key went down. Repeats while held are ignored.
    pub fn press(&mut self, key: Key) {
        let state = &mut self.states[key.index()];
        if *state == KeyState::Released {
            *state = KeyState::Pressed;
        }
    }

    pub fn release(&mut self, key: Key) {
        self.states[key.index()] = KeyState::Released;
    }

    pub fn state(&self, key: Key) -> KeyState {
        self.states[key.index()]
    }

    /// Held, whether or not the press was consumed
    pub fn is_down(&self, key: Key) -> bool {
        self.state(key) != KeyState::Released
    }

    /// Consume a fresh press. Returns true once per physical press.
    pub fn take_press(&mut self, key: Key) -> bool {
        let state = &mut self.states[key.index()];
        if *state == KeyState::Pressed {
            *state = KeyState::Consumed;
            true
        } else {
            false
        }
    }

    pub fn release_all(&mut self) {
        self.states = [KeyState::Released; Key::COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_fires_once_while_held() {
        let mut keys = Keys::new();
        keys.press(Key::Confirm);
        assert!(keys.take_press(Key::Confirm));
        assert!(!keys.take_press(Key::Confirm));
        // Key repeat from the host
        keys.press(Key::Confirm);
        assert!(!keys.take_press(Key::Confirm));
        assert!(keys.is_down(Key::Confirm));
    }

    #[test]
    fn test_release_rearms() {
        let mut keys = Keys::new();
        keys.press(Key::Next);
        assert!(keys.take_press(Key::Next));
        keys.release(Key::Next);
        assert_eq!(keys.state(Key::Next), KeyState::Released);
        keys.press(Key::Next);
        assert!(keys.take_press(Key::Next));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut keys = Keys::new();
        keys.press(Key::Left);
        assert!(keys.is_down(Key::Left));
        assert!(!keys.is_down(Key::Right));
        assert!(!keys.take_press(Key::Confirm));
        keys.release_all();
        assert!(!keys.is_down(Key::Left));
    }
}
