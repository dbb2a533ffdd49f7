//! 5x5 window-sum kernel shared by both cube computers.
//!
//! Output starts as a copy of the input; only interior cells (at least
//! `WINDOW_RADIUS` cells from every edge) are overwritten with the sum of
//! their window. Matrices smaller than the window pass through unchanged.

use crate::cube::{BinarySlice, Cell};

pub const WINDOW_RADIUS: usize = 2;
pub const WINDOW_SIDE: usize = 2 * WINDOW_RADIUS + 1;

/// Strategy for summing the window. Both produce identical results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KernelBackend {
    /// 25 loads and adds per interior cell.
    Direct,
    /// Running 5-row sums per column, then 5-column sums of those.
    Separable,
}

impl KernelBackend {
    pub fn name(self) -> &'static str {
        match self {
            KernelBackend::Direct => "direct",
            KernelBackend::Separable => "separable",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Some(KernelBackend::Direct),
            "separable" => Some(KernelBackend::Separable),
            _ => None,
        }
    }
}

/// Reusable column-sum buffer for the separable kernel.
#[derive(Default)]
pub struct WindowScratch {
    column_sums: Vec<Cell>,
}

impl WindowScratch {
    fn prepare(&mut self, len: usize) -> &mut [Cell] {
        if self.column_sums.len() < len {
            self.column_sums.resize(len, 0);
        }
        &mut self.column_sums[..len]
    }
}

#[inline]
pub fn has_interior(xdim: usize, ydim: usize) -> bool {
    xdim >= WINDOW_SIDE && ydim >= WINDOW_SIDE
}

/// Window sums of a whole matrix, returned as a new matrix.
pub fn window_sum(matrix: &BinarySlice, backend: KernelBackend) -> BinarySlice {
    let mut out = matrix.clone();
    let mut scratch = WindowScratch::default();
    window_sum_into(
        matrix.as_slice(),
        out.as_mut_slice(),
        matrix.xdim(),
        matrix.ydim(),
        backend,
        &mut scratch,
    );
    out
}

/// Window sums over raw column-major buffers.
///
/// `dst` is overwritten entirely: margins get the input values, interior
/// cells get window sums.
pub fn window_sum_into(
    src: &[Cell],
    dst: &mut [Cell],
    xdim: usize,
    ydim: usize,
    backend: KernelBackend,
    scratch: &mut WindowScratch,
) {
    debug_assert_eq!(src.len(), xdim * ydim);
    debug_assert_eq!(dst.len(), xdim * ydim);

    dst.copy_from_slice(src);
    if !has_interior(xdim, ydim) {
        return;
    }
    match backend {
        KernelBackend::Direct => window_sum_direct(src, dst, xdim, ydim),
        KernelBackend::Separable => window_sum_separable(src, dst, xdim, ydim, scratch),
    }
}

fn window_sum_direct(src: &[Cell], dst: &mut [Cell], xdim: usize, ydim: usize) {
    for y in WINDOW_RADIUS..ydim - WINDOW_RADIUS {
        for x in WINDOW_RADIUS..xdim - WINDOW_RADIUS {
            let mut sum = 0;
            for wy in y - WINDOW_RADIUS..=y + WINDOW_RADIUS {
                let column = &src[wy * xdim..(wy + 1) * xdim];
                for &v in &column[x - WINDOW_RADIUS..=x + WINDOW_RADIUS] {
                    sum += v;
                }
            }
            dst[x + xdim * y] = sum;
        }
    }
}

fn window_sum_separable(
    src: &[Cell],
    dst: &mut [Cell],
    xdim: usize,
    ydim: usize,
    scratch: &mut WindowScratch,
) {
    let sums = scratch.prepare(xdim * ydim);

    // Pass 1: sliding 5-row sum down every column (contiguous in memory).
    for y in 0..ydim {
        let column = &src[y * xdim..(y + 1) * xdim];
        let out = &mut sums[y * xdim..(y + 1) * xdim];
        let mut running: Cell = column[..WINDOW_SIDE].iter().sum();
        out[WINDOW_RADIUS] = running;
        for x in WINDOW_RADIUS + 1..xdim - WINDOW_RADIUS {
            running += column[x + WINDOW_RADIUS];
            running -= column[x - WINDOW_RADIUS - 1];
            out[x] = running;
        }
    }

    // Pass 2: sum five adjacent column sums.
    for y in WINDOW_RADIUS..ydim - WINDOW_RADIUS {
        for x in WINDOW_RADIUS..xdim - WINDOW_RADIUS {
            let mut sum = 0;
            for wy in y - WINDOW_RADIUS..=y + WINDOW_RADIUS {
                sum += sums[x + xdim * wy];
            }
            dst[x + xdim * y] = sum;
        }
    }
}
