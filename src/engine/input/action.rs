// Game controls and their key bindings

use winit::keyboard::KeyCode;

/// The five controls the game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Up,
    Down,
    Left,
    Right,
    /// Confirm in menus
    Hit,
}

/// Fixed key table: arrows for movement, space to confirm
pub fn default_bindings() -> Vec<(KeyCode, Control)> {
    vec![
        (KeyCode::ArrowLeft, Control::Left),
        (KeyCode::ArrowRight, Control::Right),
        (KeyCode::ArrowUp, Control::Up),
        (KeyCode::ArrowDown, Control::Down),
        (KeyCode::Space, Control::Hit),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_control_is_bound() {
        let bindings = default_bindings();
        for control in [
            Control::Up,
            Control::Down,
            Control::Left,
            Control::Right,
            Control::Hit,
        ] {
            assert!(
                bindings.iter().any(|(_, c)| *c == control),
                "{:?} has no key",
                control
            );
        }
    }

    #[test]
    fn test_no_duplicate_keys() {
        let bindings = default_bindings();
        let mut seen_keys = std::collections::HashSet::new();
        for (key, _) in bindings {
            assert!(seen_keys.insert(key), "Duplicate key {:?}", key);
        }
    }
}
