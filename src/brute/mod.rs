//! General-purpose cube computer: the window kernel on every slice,
//! optionally spread across an owned worker pool.

mod config;
mod engine;

pub use config::WindowCubeConfig;
pub use engine::{BruteForceCubeComputer, compute_brute_force};
