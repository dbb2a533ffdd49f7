//! Pattern-specialised cube computer.
//!
//! The canonical input repeats along `t` with period 1 or 2, so at most two
//! window sums are ever computed; every output slice is a copy of one of
//! them, picked by `t & 1`.

use tracing::{debug, trace};

use super::alternating::AlternatingPair;
use super::matrix::{StructuralCase, build_matrix_from};
use crate::cube::{BinaryCube, BinarySlice, CubeDims};
use crate::error::CubeError;
use crate::kernel::{KernelBackend, window_sum};

/// Two-entry table indexed by `t & 1`. Period-1 cases store the same
/// matrix in both entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParityTable<T> {
    entries: [T; 2],
}

impl<T: Clone> ParityTable<T> {
    pub fn uniform(value: T) -> Self {
        Self {
            entries: [value.clone(), value],
        }
    }
}

impl<T> ParityTable<T> {
    pub fn alternating(even: T, odd: T) -> Self {
        Self {
            entries: [even, odd],
        }
    }

    #[inline]
    pub fn get(&self, t: usize) -> &T {
        &self.entries[t & 1]
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> ParityTable<U> {
        let [even, odd] = &self.entries;
        ParityTable {
            entries: [f(even), f(odd)],
        }
    }
}

/// Distinct input slices of the canonical cube for `dims`, keyed by parity.
pub fn representatives(dims: CubeDims) -> ParityTable<BinarySlice> {
    let columns = AlternatingPair::new(dims.xdim);
    match dims.structural_case() {
        case @ (StructuralCase::EvenX | StructuralCase::OddXEvenY) => {
            ParityTable::uniform(build_matrix_from(&columns, dims.ydim, case))
        }
        // Even slices follow the odd-x-even-y layout; odd slices are its complement.
        StructuralCase::OddXOddY => ParityTable::alternating(
            build_matrix_from(&columns, dims.ydim, StructuralCase::OddXEvenY),
            build_matrix_from(&columns, dims.ydim, StructuralCase::OddXOddY),
        ),
    }
}

/// Computes window sums of the canonical cube without materialising it.
#[derive(Clone, Copy, Debug)]
pub struct PatternCubeComputer {
    backend: KernelBackend,
}

impl Default for PatternCubeComputer {
    fn default() -> Self {
        Self::new(KernelBackend::Separable)
    }
}

impl PatternCubeComputer {
    pub fn new(backend: KernelBackend) -> Self {
        Self { backend }
    }

    #[inline]
    pub fn backend(&self) -> KernelBackend {
        self.backend
    }

    /// Result for validated dims.
    pub fn compute(&self, dims: CubeDims) -> BinaryCube {
        let case = dims.structural_case();
        debug!(
            xdim = dims.xdim,
            ydim = dims.ydim,
            tdim = dims.tdim,
            case = case.name(),
            "pattern computer selected case"
        );

        let inputs = representatives(dims);
        let results = match case.distinct_slices() {
            1 => ParityTable::uniform(window_sum(inputs.get(0), self.backend)),
            _ => inputs.map(|input| window_sum(input, self.backend)),
        };

        let mut out = BinaryCube::zeros(dims);
        for t in 0..dims.tdim {
            trace!(t, parity = t & 1, "replicating representative slice");
            out.fill_slice(t, results.get(t));
        }
        out
    }

    /// Validate the dimensions, then compute.
    pub fn compute_from_pattern(
        &self,
        xdim: usize,
        ydim: usize,
        tdim: usize,
    ) -> Result<BinaryCube, CubeError> {
        let dims = CubeDims::new(xdim, ydim, tdim)?;
        Ok(self.compute(dims))
    }
}

/// One-shot entry point with the default kernel.
pub fn compute_from_pattern(xdim: usize, ydim: usize, tdim: usize) -> Result<BinaryCube, CubeError> {
    PatternCubeComputer::default().compute_from_pattern(xdim, ydim, tdim)
}
