// Engine modules: assets, frame clock, input, rendering

pub mod assets;
pub mod game_loop;
pub mod input;
pub mod renderer;
