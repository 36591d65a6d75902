// Input handling system
//
// - `action`: the five game controls and the fixed key table
// - `state`: per-frame control flags fed by a queue of key events
//
// ## Usage Example
//
// ```rust
// let mut input = InputState::new();
//
// // In the event loop, queue keyboard events as they arrive
// input.process_keyboard_event(&key_event);
//
// // Once per frame, apply the queue and read a snapshot
// input.begin_frame();
// if input.controls().hit {
//     // start the game
// }
// ```

pub mod action;
pub mod state;

pub use state::{Controls, InputState};

#[allow(unused_imports)]
pub use action::Control;
