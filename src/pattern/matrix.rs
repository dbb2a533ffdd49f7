//! Structural cases and the pattern matrices built from them.
//!
//! The canonical cube is the column-major fill of 0,1,0,1,... so cell
//! `(x, y, t)` holds `(x + X*y + X*Y*t) mod 2`. Reduced by parity:
//!
//! | case          | value               | distinct slices |
//! |---------------|---------------------|-----------------|
//! | `EvenX`       | `x mod 2`           | 1               |
//! | `OddXEvenY`   | `(x + y) mod 2`     | 1               |
//! | `OddXOddY`    | `(x + y + t) mod 2` | 2 (by `t & 1`)  |

use super::alternating::AlternatingPair;
use crate::cube::{BinaryCube, BinarySlice, Cell, CubeDims};
use crate::error::{Axis, CubeError};

/// Pattern class of an `(xdim, ydim)` pair; exactly one applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StructuralCase {
    EvenX,
    OddXEvenY,
    OddXOddY,
}

impl StructuralCase {
    pub const ALL: [StructuralCase; 3] = [
        StructuralCase::EvenX,
        StructuralCase::OddXEvenY,
        StructuralCase::OddXOddY,
    ];

    #[inline]
    pub const fn classify(xdim: usize, ydim: usize) -> Self {
        match (xdim % 2 == 0, ydim % 2 == 0) {
            (true, _) => StructuralCase::EvenX,
            (false, true) => StructuralCase::OddXEvenY,
            (false, false) => StructuralCase::OddXOddY,
        }
    }

    /// Phase of column `y` in this case's matrix (`true` = starts with 1).
    #[inline]
    pub const fn column_starts_high(self, y: usize) -> bool {
        let odd_column = y % 2 == 1;
        match self {
            StructuralCase::EvenX => false,
            StructuralCase::OddXOddY => !odd_column,
            StructuralCase::OddXEvenY => odd_column,
        }
    }

    /// Number of distinct input slices along the `t` axis.
    #[inline]
    pub const fn distinct_slices(self) -> usize {
        match self {
            StructuralCase::OddXOddY => 2,
            _ => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StructuralCase::EvenX => "even-x",
            StructuralCase::OddXEvenY => "odd-x-even-y",
            StructuralCase::OddXOddY => "odd-x-odd-y",
        }
    }
}

/// Build the `xdim * ydim` pattern matrix for `case`.
pub fn build_matrix(
    xdim: usize,
    ydim: usize,
    case: StructuralCase,
) -> Result<BinarySlice, CubeError> {
    if xdim == 0 {
        return Err(CubeError::invalid_dimension(Axis::X, xdim));
    }
    if ydim == 0 {
        return Err(CubeError::invalid_dimension(Axis::Y, ydim));
    }
    Ok(build_matrix_from(&AlternatingPair::new(xdim), ydim, case))
}

/// Same as [`build_matrix`] but reusing already-built column vectors.
pub fn build_matrix_from(
    columns: &AlternatingPair,
    ydim: usize,
    case: StructuralCase,
) -> BinarySlice {
    BinarySlice::from_columns(columns.len(), ydim, |y| {
        columns.get(case.column_starts_high(y)).as_slice()
    })
}

/// Value of the canonical alternating-bit cube at `(x, y, t)`.
#[inline]
pub fn canonical_value(dims: CubeDims, x: usize, y: usize, t: usize) -> Cell {
    let x_odd = dims.xdim & 1;
    let xy_odd = x_odd & dims.ydim & 1;
    ((x & 1) ^ (x_odd & y & 1) ^ (xy_odd & t & 1)) as Cell
}

/// Materialise the full canonical cube, the brute-force path's input.
pub fn canonical_cube(dims: CubeDims) -> BinaryCube {
    BinaryCube::from_fn(dims, |x, y, t| canonical_value(dims, x, y, t))
}
