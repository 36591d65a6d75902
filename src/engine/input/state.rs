// Owned keyboard state fed by a per-frame event queue

use super::action::{default_bindings, Control};
use log::trace;
use std::collections::{HashMap, VecDeque};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Snapshot of the five control flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub hit: bool,
}

impl Controls {
    fn set(&mut self, control: Control, pressed: bool) {
        match control {
            Control::Up => self.up = pressed,
            Control::Down => self.down = pressed,
            Control::Left => self.left = pressed,
            Control::Right => self.right = pressed,
            Control::Hit => self.hit = pressed,
        }
    }
}

/// Input state for the game
///
/// Key events are queued as they arrive and applied together by
/// [`InputState::begin_frame`], so every system sees the same flags for a
/// whole tick and a recorded event stream replays identically.
#[derive(Debug)]
pub struct InputState {
    bindings: HashMap<KeyCode, Control>,
    queue: VecDeque<(Control, bool)>,
    controls: Controls,
}

impl InputState {
    /// Create an input state using the default key table
    pub fn new() -> Self {
        Self {
            bindings: default_bindings().into_iter().collect(),
            queue: VecDeque::new(),
            controls: Controls::default(),
        }
    }

    /// Queue a key change; returns false for keys the game does not use
    pub fn queue_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        let Some(&control) = self.bindings.get(&key) else {
            return false;
        };
        self.queue.push_back((control, pressed));
        true
    }

    /// Queue a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) -> bool {
        // Only physical keys are bound
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return false;
        };
        self.queue_key(key_code, event.state == ElementState::Pressed)
    }

    /// Apply every queued event; call once per frame before updating scenes
    pub fn begin_frame(&mut self) {
        while let Some((control, pressed)) = self.queue.pop_front() {
            trace!("{:?} {}", control, if pressed { "down" } else { "up" });
            self.controls.set(control, pressed);
        }
    }

    /// Flags as of the last [`InputState::begin_frame`]
    pub fn controls(&self) -> Controls {
        self.controls
    }

}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
