// Character system
//
// - `animation`: sprite sheets with named frame sequences
// - `state`: headings and velocity
// - `character`: a body that walks with one animation per heading
// - `player`: keyboard intent on top of a body

pub mod animation;
pub mod character;
pub mod player;
pub mod state;

pub use animation::{CharacterSheet, DEFAULT_FRAME_DURATION};
pub use player::{Player, PLAYER_SPAWN, PLAYER_SPEED};

#[allow(unused_imports)]
pub use character::Body;
#[allow(unused_imports)]
pub use player::Intent;
#[allow(unused_imports)]
pub use state::{Heading, Velocity};
