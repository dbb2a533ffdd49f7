use rayon::prelude::*;
use tracing::{debug, trace};

use super::config::{
    WindowCubeConfig, effective_workers, resolve_kernel_backend, resolve_thread_count,
};
use crate::cube::{BinaryCube, Cell};
use crate::error::CubeError;
use crate::kernel::{KernelBackend, WindowScratch, window_sum_into};

/// Runs the window kernel on every slice of an arbitrary cube.
///
/// Owns its worker pool for its whole lifetime; build it once and reuse it
/// across calls. With one worker no pool exists and slices run in order on
/// the calling thread, producing exactly the same output.
pub struct BruteForceCubeComputer {
    pool: Option<rayon::ThreadPool>,
    threads: usize,
    backend: KernelBackend,
}

impl BruteForceCubeComputer {
    pub fn new() -> Result<Self, CubeError> {
        Self::with_config(WindowCubeConfig::default())
    }

    pub fn with_config(config: WindowCubeConfig) -> Result<Self, CubeError> {
        let threads = resolve_thread_count(&config);
        let backend = resolve_kernel_backend(&config);
        let pool = if threads > 1 {
            Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("window-cube-{i}"))
                    .build()?,
            )
        } else {
            None
        };
        debug!(threads, backend = backend.name(), "brute-force computer ready");
        Ok(Self {
            pool,
            threads,
            backend,
        })
    }

    #[inline]
    pub fn threads(&self) -> usize {
        self.threads
    }

    #[inline]
    pub fn backend(&self) -> KernelBackend {
        self.backend
    }

    #[inline]
    pub fn is_sequential(&self) -> bool {
        self.pool.is_none()
    }

    /// Window sums of every slice. The input is only read; each output
    /// slice is written by exactly one worker.
    pub fn compute(&self, cube: &BinaryCube) -> Result<BinaryCube, CubeError> {
        let dims = cube.dims();
        let mut out = BinaryCube::zeros(dims);
        if dims.tdim == 0 {
            return Ok(out);
        }
        dims.validate_spatial()?;

        let (xdim, ydim) = (dims.xdim, dims.ydim);
        let slice_len = dims.slice_len();
        let backend = self.backend;
        let workers = effective_workers(dims.tdim, self.threads);

        match &self.pool {
            Some(pool) if workers > 1 => {
                debug!(tdim = dims.tdim, workers, "dispatching slices to pool");
                pool.install(|| {
                    out.as_mut_slice()
                        .par_chunks_exact_mut(slice_len)
                        .zip(cube.as_slice().par_chunks_exact(slice_len))
                        .enumerate()
                        .for_each_init(WindowScratch::default, |scratch, (t, (dst, src))| {
                            advance_slice(t, src, dst, xdim, ydim, backend, scratch);
                        });
                });
            }
            _ => {
                debug!(tdim = dims.tdim, "running slices sequentially");
                let mut scratch = WindowScratch::default();
                let inputs = cube.as_slice().chunks_exact(slice_len);
                let outputs = out.as_mut_slice().chunks_exact_mut(slice_len);
                for (t, (src, dst)) in inputs.zip(outputs).enumerate() {
                    advance_slice(t, src, dst, xdim, ydim, backend, &mut scratch);
                }
            }
        }
        Ok(out)
    }
}

#[inline]
fn advance_slice(
    t: usize,
    src: &[Cell],
    dst: &mut [Cell],
    xdim: usize,
    ydim: usize,
    backend: KernelBackend,
    scratch: &mut WindowScratch,
) {
    trace!(t, "window sum");
    window_sum_into(src, dst, xdim, ydim, backend, scratch);
}

/// One-shot entry point with a worker-count hint (values below 1 act as 1).
///
/// Builds and tears down a pool on every call; callers running many cubes
/// should keep a [`BruteForceCubeComputer`] instead.
pub fn compute_brute_force(cube: &BinaryCube, concurrency: usize) -> Result<BinaryCube, CubeError> {
    let config = WindowCubeConfig::default().thread_count(concurrency);
    BruteForceCubeComputer::with_config(config)?.compute(cube)
}

#[cfg(test)]
mod tests {
    use super::{BruteForceCubeComputer, compute_brute_force};
    use crate::brute::WindowCubeConfig;
    use crate::cube::{BinaryCube, CubeDims};
    use crate::error::CubeError;
    use crate::kernel::{KernelBackend, window_sum};

    use rand::Rng;
    use rand::SeedableRng;

    fn random_cube(seed: u64, dims: CubeDims) -> BinaryCube {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        BinaryCube::from_fn(dims, |_, _, _| rng.random_range(0..2))
    }

    #[test]
    fn one_worker_builds_no_pool() {
        let computer =
            BruteForceCubeComputer::with_config(WindowCubeConfig::default().sequential()).unwrap();
        assert!(computer.is_sequential());
        assert_eq!(computer.threads(), 1);

        let pooled =
            BruteForceCubeComputer::with_config(WindowCubeConfig::default().thread_count(3))
                .unwrap();
        assert!(!pooled.is_sequential());
        assert_eq!(pooled.threads(), 3);
    }

    #[test]
    fn every_slice_matches_the_kernel() {
        let dims = CubeDims::new(9, 8, 6).unwrap();
        let cube = random_cube(0xC0FFEE, dims);
        let computer = BruteForceCubeComputer::with_config(
            WindowCubeConfig::default()
                .thread_count(4)
                .kernel(KernelBackend::Direct),
        )
        .unwrap();
        let out = computer.compute(&cube).unwrap();
        for t in 0..dims.tdim {
            assert_eq!(out.slice(t), window_sum(&cube.slice(t), KernelBackend::Direct));
        }
    }

    #[test]
    fn empty_t_axis_yields_empty_cube() {
        let cube = BinaryCube::zeros(CubeDims { xdim: 6, ydim: 6, tdim: 0 });
        let out = compute_brute_force(&cube, 2).unwrap();
        assert_eq!(out.dims().tdim, 0);
        assert!(out.as_slice().is_empty());
    }

    #[test]
    fn zero_spatial_axis_is_rejected() {
        let cube = BinaryCube::zeros(CubeDims { xdim: 0, ydim: 6, tdim: 2 });
        assert!(matches!(
            compute_brute_force(&cube, 1),
            Err(CubeError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn computer_is_reusable_across_calls() {
        let computer =
            BruteForceCubeComputer::with_config(WindowCubeConfig::default().thread_count(2))
                .unwrap();
        let a = random_cube(1, CubeDims::new(7, 7, 3).unwrap());
        let b = random_cube(2, CubeDims::new(5, 11, 5).unwrap());
        let first = computer.compute(&a).unwrap();
        computer.compute(&b).unwrap();
        assert_eq!(computer.compute(&a).unwrap(), first);
    }
}
