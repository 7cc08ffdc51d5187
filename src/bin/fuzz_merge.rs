//! Throw random byte buffers at the fuzzing entry point.
//! Every buffer is derived from the base seed and its index so that any
//! failure can be replayed with `--seed <seed> --first <index> --iterations 1`.
use anyhow::{Context, Result};
use biased_merge::fuzz::run_one_input;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Differential fuzzing of linear and biased merges")]
struct Args {
    /// Number of buffers to check.
    #[arg(long, default_value_t = 100_000)]
    iterations: u64,
    /// Index of the first buffer.
    #[arg(long, default_value_t = 0)]
    first: u64,
    /// Maximal buffer size in bytes.
    #[arg(long, default_value_t = 4096)]
    max_bytes: usize,
    /// Values are drawn in `0..range` to get plenty of ties.
    #[arg(long, default_value_t = 64)]
    range: i32,
    /// Base seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Worker threads (0 lets rayon decide).
    #[arg(long, default_value_t = 0)]
    threads: usize,
}

fn buffer(args: &Args, index: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(args.seed ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    let words = rng.gen_range(0..=args.max_bytes / 4);
    let mut bytes = Vec::with_capacity(words * 4);
    for w in 0..words {
        // first word is the split point, keep it unconstrained
        let value = if w == 0 {
            rng.gen::<i32>()
        } else {
            rng.gen_range(0..args.range.max(1))
        };
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    bytes
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();
    debug!(?args, "starting");

    let pool = ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build()
        .context("pool creation failed")?;

    let end = args.first + args.iterations;
    pool.install(|| {
        (args.first..end).into_par_iter().try_for_each(|index| {
            run_one_input(&buffer(&args, index))
                .with_context(|| format!("buffer {} of seed {} failed", index, args.seed))
        })
    })?;
    info!(
        iterations = args.iterations,
        threads = pool.current_num_threads(),
        "all merges agree"
    );
    Ok(())
}
