//! Dense cube and slice storage.
//!
//! Both types are column-major: `x` varies fastest, then `y`, then `t`.
//! A cube is therefore a run of `tdim` contiguous slices of `xdim * ydim`
//! cells each, which is what lets the brute-force path hand every worker
//! its own disjoint output chunk.

use crate::error::{Axis, CubeError};
use crate::pattern::StructuralCase;

/// Cell type for both binary inputs and window sums (at most 25).
pub type Cell = u32;

/// Shape of a cube: `xdim` rows, `ydim` columns, `tdim` slices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CubeDims {
    pub xdim: usize,
    pub ydim: usize,
    pub tdim: usize,
}

impl CubeDims {
    /// Validated shape: every axis must be at least 1.
    pub fn new(xdim: usize, ydim: usize, tdim: usize) -> Result<Self, CubeError> {
        let dims = Self { xdim, ydim, tdim };
        dims.validate_spatial()?;
        if tdim == 0 {
            return Err(CubeError::invalid_dimension(Axis::T, tdim));
        }
        Ok(dims)
    }

    /// Checks the two spatial axes only. A cube with no slices is still a
    /// valid (empty) input for the brute-force path.
    pub fn validate_spatial(&self) -> Result<(), CubeError> {
        if self.xdim == 0 {
            return Err(CubeError::invalid_dimension(Axis::X, self.xdim));
        }
        if self.ydim == 0 {
            return Err(CubeError::invalid_dimension(Axis::Y, self.ydim));
        }
        Ok(())
    }

    #[inline]
    pub fn slice_len(&self) -> usize {
        self.xdim * self.ydim
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.slice_len() * self.tdim
    }

    /// True when at least one cell has a full 5x5 window.
    #[inline]
    pub fn has_interior(&self) -> bool {
        crate::kernel::has_interior(self.xdim, self.ydim)
    }

    #[inline]
    pub fn structural_case(&self) -> StructuralCase {
        StructuralCase::classify(self.xdim, self.ydim)
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize, t: usize) -> usize {
        debug_assert!(x < self.xdim);
        debug_assert!(y < self.ydim);
        debug_assert!(t < self.tdim);
        x + self.xdim * (y + self.ydim * t)
    }
}

/// A dense X*Y*T cube of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryCube {
    dims: CubeDims,
    data: Vec<Cell>,
}

impl BinaryCube {
    pub fn zeros(dims: CubeDims) -> Self {
        Self {
            dims,
            data: vec![0; dims.cell_count()],
        }
    }

    /// Wrap a column-major buffer. The length must match the shape exactly.
    pub fn from_vec(dims: CubeDims, data: Vec<Cell>) -> Result<Self, CubeError> {
        if data.len() != dims.cell_count() {
            return Err(CubeError::shape_mismatch(dims.cell_count(), data.len()));
        }
        Ok(Self { dims, data })
    }

    /// Build a cube by evaluating `f(x, y, t)` for every cell.
    pub fn from_fn(dims: CubeDims, mut f: impl FnMut(usize, usize, usize) -> Cell) -> Self {
        let mut data = Vec::with_capacity(dims.cell_count());
        for t in 0..dims.tdim {
            for y in 0..dims.ydim {
                for x in 0..dims.xdim {
                    data.push(f(x, y, t));
                }
            }
        }
        Self { dims, data }
    }

    #[inline]
    pub fn dims(&self) -> CubeDims {
        self.dims
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, t: usize) -> Cell {
        self.data[self.dims.index(x, y, t)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, t: usize, value: Cell) {
        let idx = self.dims.index(x, y, t);
        self.data[idx] = value;
    }

    /// Borrow slice `t` as a raw column-major buffer.
    pub fn slice_data(&self, t: usize) -> &[Cell] {
        let len = self.dims.slice_len();
        &self.data[t * len..(t + 1) * len]
    }

    /// Copy slice `t` out as an owned matrix.
    pub fn slice(&self, t: usize) -> BinarySlice {
        BinarySlice {
            xdim: self.dims.xdim,
            ydim: self.dims.ydim,
            data: self.slice_data(t).to_vec(),
        }
    }

    /// Iterate over all slices in `t` order.
    pub fn slices(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks_exact panics on a zero chunk size.
        let len = self.dims.slice_len().max(1);
        self.data.chunks_exact(len)
    }

    /// Overwrite slice `t` with the contents of `slice`.
    pub fn fill_slice(&mut self, t: usize, slice: &BinarySlice) {
        debug_assert_eq!(slice.xdim, self.dims.xdim);
        debug_assert_eq!(slice.ydim, self.dims.ydim);
        let len = self.dims.slice_len();
        self.data[t * len..(t + 1) * len].copy_from_slice(&slice.data);
    }

    #[inline]
    pub fn as_slice(&self) -> &[Cell] {
        &self.data
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Cell] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<Cell> {
        self.data
    }

    /// Sum of all cells; used as a cheap checksum.
    pub fn sum(&self) -> u64 {
        self.data.iter().map(|&v| v as u64).sum()
    }
}

/// An owned X*Y matrix, one `t` slice of a cube.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinarySlice {
    xdim: usize,
    ydim: usize,
    data: Vec<Cell>,
}

impl BinarySlice {
    pub fn zeros(xdim: usize, ydim: usize) -> Self {
        Self {
            xdim,
            ydim,
            data: vec![0; xdim * ydim],
        }
    }

    pub fn from_vec(xdim: usize, ydim: usize, data: Vec<Cell>) -> Result<Self, CubeError> {
        if data.len() != xdim * ydim {
            return Err(CubeError::shape_mismatch(xdim * ydim, data.len()));
        }
        Ok(Self { xdim, ydim, data })
    }

    /// Assemble a matrix column by column; `column(y)` must yield `xdim` values.
    pub fn from_columns<'a, I>(xdim: usize, ydim: usize, mut column: impl FnMut(usize) -> I) -> Self
    where
        I: IntoIterator<Item = &'a u8>,
    {
        let mut data = Vec::with_capacity(xdim * ydim);
        for y in 0..ydim {
            let before = data.len();
            data.extend(column(y).into_iter().map(|&bit| bit as Cell));
            debug_assert_eq!(data.len() - before, xdim);
        }
        Self { xdim, ydim, data }
    }

    #[inline]
    pub fn xdim(&self) -> usize {
        self.xdim
    }

    #[inline]
    pub fn ydim(&self) -> usize {
        self.ydim
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        debug_assert!(x < self.xdim && y < self.ydim);
        self.data[x + self.xdim * y]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: Cell) {
        debug_assert!(x < self.xdim && y < self.ydim);
        self.data[x + self.xdim * y] = value;
    }

    /// Column `y` as a contiguous run of `xdim` cells.
    pub fn column(&self, y: usize) -> &[Cell] {
        &self.data[y * self.xdim..(y + 1) * self.xdim]
    }

    #[inline]
    pub fn as_slice(&self) -> &[Cell] {
        &self.data
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Cell] {
        &mut self.data
    }
}
