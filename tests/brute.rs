use window_cube::brute::{BruteForceCubeComputer, WindowCubeConfig, compute_brute_force};
use window_cube::cube::{BinaryCube, CubeDims};
use window_cube::pattern::{canonical_cube, compute_from_pattern};
use rand::Rng;
use rand::SeedableRng;

fn random_cube(seed: u64, dims: CubeDims, density: f64) -> BinaryCube {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    BinaryCube::from_fn(dims, |_, _, _| rng.random_bool(density) as u32)
}

fn is_margin(dims: CubeDims, x: usize, y: usize) -> bool {
    x < 2 || y < 2 || x + 3 > dims.xdim || y + 3 > dims.ydim
}

#[test]
fn deterministic_across_thread_counts() {
    let dims = CubeDims::new(23, 19, 9).unwrap();
    let cube = random_cube(0xD37E_A515, dims, 0.3);

    let baseline = compute_brute_force(&cube, 1).unwrap();
    for threads in 2..=4 {
        assert_eq!(compute_brute_force(&cube, threads).unwrap(), baseline, "threads {threads}");
    }
}

#[test]
fn zero_concurrency_behaves_like_one() {
    let dims = CubeDims::new(8, 8, 3).unwrap();
    let cube = random_cube(7, dims, 0.5);
    assert_eq!(
        compute_brute_force(&cube, 0).unwrap(),
        compute_brute_force(&cube, 1).unwrap()
    );
}

#[test]
fn margin_passes_through() {
    let dims = CubeDims::new(12, 10, 4).unwrap();
    let cube = random_cube(0xBADC0FFEE, dims, 0.4);
    let out = compute_brute_force(&cube, 3).unwrap();
    for t in 0..dims.tdim {
        for y in 0..dims.ydim {
            for x in 0..dims.xdim {
                if is_margin(dims, x, y) {
                    assert_eq!(out.get(x, y, t), cube.get(x, y, t), "margin ({x},{y},{t})");
                }
            }
        }
    }
}

#[test]
fn interior_is_direct_five_by_five_sum() {
    let dims = CubeDims::new(11, 9, 3).unwrap();
    let cube = random_cube(0xA1, dims, 0.6);
    let out = compute_brute_force(&cube, 2).unwrap();
    for t in 0..dims.tdim {
        for y in 2..dims.ydim - 2 {
            for x in 2..dims.xdim - 2 {
                let mut sum = 0;
                for j in y - 2..=y + 2 {
                    for i in x - 2..=x + 2 {
                        sum += cube.get(i, j, t);
                    }
                }
                assert_eq!(out.get(x, y, t), sum);
            }
        }
    }
}

#[test]
fn twenty_by_twenty_sample_values() {
    let dims = CubeDims::new(20, 20, 5).unwrap();
    let out = compute_brute_force(&canonical_cube(dims), 2).unwrap();
    assert_eq!(out.get(2, 2, 0), 10);
    assert_eq!(out.get(3, 2, 0), 15);
    assert_eq!(compute_from_pattern(20, 20, 5).unwrap(), out);
}

#[test]
fn six_by_six_literal_case() {
    // Even x: every column reads 0,1,0,1,0,1, so windows cover two or three rows of ones.
    let dims = CubeDims::new(6, 6, 2).unwrap();
    let input = canonical_cube(dims);
    let out = compute_brute_force(&input, 2).unwrap();
    for t in 0..2 {
        for y in 2..=3 {
            assert_eq!(out.get(2, y, t), 10);
            assert_eq!(out.get(3, y, t), 15);
        }
    }
    assert_eq!(out.slice(0), out.slice(1));
    for t in 0..2 {
        for y in 0..6 {
            for x in 0..6 {
                if is_margin(dims, x, y) {
                    assert_eq!(out.get(x, y, t), input.get(x, y, t));
                }
            }
        }
    }
}

#[test]
fn degenerate_shapes_return_input() {
    for (xdim, ydim) in [(4, 4), (4, 10), (10, 4)] {
        let dims = CubeDims::new(xdim, ydim, 3).unwrap();
        let cube = random_cube(xdim as u64 * 31 + ydim as u64, dims, 0.5);
        assert_eq!(compute_brute_force(&cube, 2).unwrap(), cube);
        let canonical = canonical_cube(dims);
        assert_eq!(compute_from_pattern(xdim, ydim, 3).unwrap(), canonical);
    }
}

#[test]
fn sequential_and_pooled_paths_agree() {
    let dims = CubeDims::new(16, 16, 7).unwrap();
    let cube = random_cube(44, dims, 0.25);
    let sequential =
        BruteForceCubeComputer::with_config(WindowCubeConfig::default().sequential()).unwrap();
    let pooled =
        BruteForceCubeComputer::with_config(WindowCubeConfig::default().thread_count(4)).unwrap();
    assert!(sequential.is_sequential());
    assert_eq!(sequential.compute(&cube).unwrap(), pooled.compute(&cube).unwrap());
}
