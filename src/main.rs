#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use rand::Rng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;
use window_cube::{
    BinaryCube, BruteForceCubeComputer, CubeDims, CubeError, KernelBackend, PatternCubeComputer,
    WindowCubeConfig, canonical_cube,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Strategy {
    Brute,
    Pattern,
    Both,
}

/// 5x5 window sums over an X*Y*T binary cube.
#[derive(Parser, Debug)]
#[command(name = "window-cube", version)]
struct Cli {
    /// Rows per slice.
    #[arg(short = 'x', long, default_value_t = 20)]
    x: usize,

    /// Columns per slice.
    #[arg(short = 'y', long, default_value_t = 20)]
    y: usize,

    /// Number of slices.
    #[arg(short = 't', long, default_value_t = 5)]
    t: usize,

    #[arg(long, value_enum, default_value_t = Strategy::Both)]
    strategy: Strategy,

    /// Worker threads for the brute-force path (auto when omitted).
    #[arg(long)]
    threads: Option<usize>,

    /// Window kernel: direct or separable.
    #[arg(long, value_parser = parse_kernel)]
    kernel: Option<KernelBackend>,

    /// Print this result slice as a grid.
    #[arg(long)]
    show_slice: Option<usize>,

    /// Feed the brute-force path a random cube with this density of ones.
    #[arg(long)]
    random_density: Option<f64>,

    #[arg(long, default_value_t = 0x5EED_1234_ABCD_EF01)]
    seed: u64,
}

fn parse_kernel(s: &str) -> Result<KernelBackend, String> {
    KernelBackend::parse(s).ok_or_else(|| format!("unknown kernel {s:?} (expected direct or separable)"))
}

fn random_cube(dims: CubeDims, density: f64, seed: u64) -> BinaryCube {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    BinaryCube::from_fn(dims, |_, _, _| rng.random_bool(density) as u32)
}

fn print_slice(cube: &BinaryCube, t: usize) {
    let dims = cube.dims();
    if t >= dims.tdim {
        tracing::warn!("slice {t} out of range (tdim = {})", dims.tdim);
        return;
    }
    println!("slice t={t}:");
    for x in 0..dims.xdim {
        let row: Vec<String> = (0..dims.ydim)
            .map(|y| format!("{:>2}", cube.get(x, y, t)))
            .collect();
        println!("  {}", row.join(" "));
    }
}

fn run(cli: &Cli) -> Result<bool, CubeError> {
    let dims = CubeDims::new(cli.x, cli.y, cli.t)?;
    let mut config = WindowCubeConfig::default();
    if let Some(n) = cli.threads {
        config = config.thread_count(n);
    }
    if let Some(backend) = cli.kernel {
        config = config.kernel(backend);
    }

    tracing::info!(
        "cube {}x{}x{}, case {}",
        dims.xdim,
        dims.ydim,
        dims.tdim,
        dims.structural_case().name()
    );

    let brute = match cli.strategy {
        Strategy::Brute | Strategy::Both => {
            let computer = BruteForceCubeComputer::with_config(config)?;
            let input = match cli.random_density {
                Some(density) => random_cube(dims, density.clamp(0.0, 1.0), cli.seed),
                None => canonical_cube(dims),
            };
            let start = Instant::now();
            let out = computer.compute(&input)?;
            let ms = start.elapsed().as_secs_f64() * 1000.0;
            tracing::info!(
                "brute force: {ms:.3} ms, {} threads, {} kernel, checksum {}",
                computer.threads(),
                computer.backend().name(),
                out.sum()
            );
            Some(out)
        }
        Strategy::Pattern => None,
    };

    let pattern = match cli.strategy {
        Strategy::Pattern | Strategy::Both => {
            let computer = PatternCubeComputer::new(cli.kernel.unwrap_or(KernelBackend::Separable));
            let start = Instant::now();
            let out = computer.compute(dims);
            let ms = start.elapsed().as_secs_f64() * 1000.0;
            tracing::info!("pattern: {ms:.3} ms, checksum {}", out.sum());
            Some(out)
        }
        Strategy::Brute => None,
    };

    if let Some(t) = cli.show_slice {
        if let Some(cube) = pattern.as_ref().or(brute.as_ref()) {
            print_slice(cube, t);
        }
    }

    match (&brute, &pattern) {
        (Some(b), Some(p)) => {
            let matched = b == p;
            let status = if matched { "MATCH" } else { "MISMATCH" };
            tracing::info!("brute force vs pattern: [{status}]");
            Ok(matched)
        }
        _ => Ok(true),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if cli.random_density.is_some() && cli.strategy != Strategy::Brute {
        tracing::error!("--random-density only applies to --strategy brute");
        return ExitCode::from(2);
    }

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::from(2)
        }
    }
}
