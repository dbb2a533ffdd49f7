//! 5x5 window sums over X*Y*T binary cubes.
//!
//! Two computers produce identical results for the canonical alternating-bit
//! input: [`BruteForceCubeComputer`] handles any cube slice by slice, and
//! [`PatternCubeComputer`] computes at most two representative slices and
//! replicates them along `t`.

pub mod brute;
pub mod cube;
pub mod error;
pub mod kernel;
pub mod pattern;

pub use brute::{BruteForceCubeComputer, WindowCubeConfig, compute_brute_force};
pub use cube::{BinaryCube, BinarySlice, Cell, CubeDims};
pub use error::{Axis, CubeError};
pub use kernel::{KernelBackend, window_sum};
pub use pattern::{PatternCubeComputer, StructuralCase, canonical_cube, compute_from_pattern};
