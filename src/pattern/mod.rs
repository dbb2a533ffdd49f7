//! Canonical alternating-bit input and the computer that exploits it.

mod alternating;
mod engine;
mod matrix;

pub use alternating::{AlternatingPair, AlternatingVector, build_alternating};
pub use engine::{ParityTable, PatternCubeComputer, compute_from_pattern, representatives};
pub use matrix::{StructuralCase, build_matrix, build_matrix_from, canonical_cube, canonical_value};
