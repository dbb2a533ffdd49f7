use window_cube::brute::{BruteForceCubeComputer, WindowCubeConfig};
use window_cube::cube::CubeDims;
use window_cube::kernel::KernelBackend;
use window_cube::pattern::{PatternCubeComputer, StructuralCase, canonical_cube};

fn run_parity_case(xdim: usize, ydim: usize, tdim: usize, threads: usize) {
    let dims = CubeDims::new(xdim, ydim, tdim).expect("valid dims");
    let brute = BruteForceCubeComputer::with_config(WindowCubeConfig::default().thread_count(threads))
        .expect("build computer");
    let brute_out = brute.compute(&canonical_cube(dims)).expect("brute force");
    let pattern_out = PatternCubeComputer::default().compute(dims);
    assert_eq!(
        brute_out, pattern_out,
        "pattern/brute mismatch for {xdim}x{ydim}x{tdim} ({:?}) threads {threads}",
        dims.structural_case()
    );
}

#[test]
fn parity_each_structural_case() {
    run_parity_case(20, 20, 5, 2);
    run_parity_case(21, 20, 5, 2);
    run_parity_case(21, 21, 5, 2);
    run_parity_case(21, 21, 6, 3);
}

#[test]
fn parity_sweep_small_shapes() {
    for xdim in 5..=13 {
        for ydim in 5..=13 {
            for tdim in [1, 2, 3] {
                run_parity_case(xdim, ydim, tdim, 1);
            }
        }
    }
}

#[test]
fn parity_degenerate_shapes() {
    for (xdim, ydim, tdim) in [(4, 4, 3), (4, 9, 2), (9, 4, 2), (1, 1, 1), (3, 7, 4), (7, 3, 5)] {
        run_parity_case(xdim, ydim, tdim, 2);
    }
}

#[test]
fn parity_across_kernels() {
    let dims = CubeDims::new(17, 15, 4).unwrap();
    let input = canonical_cube(dims);
    for backend in [KernelBackend::Direct, KernelBackend::Separable] {
        let brute = BruteForceCubeComputer::with_config(
            WindowCubeConfig::default().thread_count(2).kernel(backend),
        )
        .unwrap();
        for pattern_backend in [KernelBackend::Direct, KernelBackend::Separable] {
            assert_eq!(
                brute.compute(&input).unwrap(),
                PatternCubeComputer::new(pattern_backend).compute(dims)
            );
        }
    }
}

#[test]
fn odd_odd_case_really_alternates_in_t() {
    let dims = CubeDims::new(9, 9, 2).unwrap();
    assert_eq!(dims.structural_case(), StructuralCase::OddXOddY);
    let out = PatternCubeComputer::default().compute(dims);
    // Window centred on an even-parity cell covers 12 ones; odd covers 13.
    assert_eq!(out.get(2, 2, 0), 12);
    assert_eq!(out.get(2, 2, 1), 13);
    assert_eq!(out.get(3, 2, 0), 13);
}
