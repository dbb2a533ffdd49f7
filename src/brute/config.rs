use std::sync::OnceLock;

use crate::kernel::KernelBackend;

static PHYSICAL_CORES: OnceLock<usize> = OnceLock::new();

const KERNEL_ENV: &str = "WINDOW_CUBE_KERNEL";
const DEFAULT_KERNEL: KernelBackend = KernelBackend::Separable;

/// Configuration for a [`BruteForceCubeComputer`](super::BruteForceCubeComputer).
///
/// `WindowCubeConfig::default()` auto-detects everything; the builder
/// methods pin individual knobs.
#[derive(Clone, Debug, Default)]
pub struct WindowCubeConfig {
    /// Worker threads for the slice pool.
    /// `None` means one per physical core.
    pub thread_count: Option<usize>,
    /// Hard upper bound on workers regardless of auto-detection.
    pub max_threads: Option<usize>,
    /// Window kernel. `None` reads `WINDOW_CUBE_KERNEL` (`direct` or
    /// `separable`) and falls back to separable.
    pub kernel: Option<KernelBackend>,
}

impl WindowCubeConfig {
    /// Set an explicit worker count. Zero is treated as one.
    pub fn thread_count(mut self, n: usize) -> Self {
        self.thread_count = Some(n.max(1));
        self
    }

    /// Set a hard upper bound on workers.
    pub fn max_threads(mut self, n: usize) -> Self {
        self.max_threads = Some(n.max(1));
        self
    }

    pub fn kernel(mut self, backend: KernelBackend) -> Self {
        self.kernel = Some(backend);
        self
    }

    /// Run every slice on the calling thread; no pool is built.
    pub fn sequential(self) -> Self {
        self.thread_count(1)
    }
}

#[inline]
fn physical_core_count() -> usize {
    *PHYSICAL_CORES.get_or_init(|| num_cpus::get_physical().max(1))
}

pub(super) fn resolve_thread_count(config: &WindowCubeConfig) -> usize {
    let mut threads = config.thread_count.unwrap_or_else(physical_core_count);
    if let Some(cap) = config.max_threads {
        threads = threads.min(cap);
    }
    threads.max(1)
}

pub(super) fn resolve_kernel_backend(config: &WindowCubeConfig) -> KernelBackend {
    if let Some(backend) = config.kernel {
        return backend;
    }
    kernel_from_env(std::env::var(KERNEL_ENV).ok().as_deref())
}

fn kernel_from_env(value: Option<&str>) -> KernelBackend {
    value
        .filter(|v| !v.trim().is_empty())
        .and_then(KernelBackend::parse)
        .unwrap_or(DEFAULT_KERNEL)
}

/// Workers actually used for `slices` slices: never more than there are
/// slices to hand out.
#[inline]
pub(super) fn effective_workers(slices: usize, threads: usize) -> usize {
    threads.min(slices).max(1)
}
