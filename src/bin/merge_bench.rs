//! Quick timings of the merges and searches on synthetic inputs.
//! Use `cargo bench` for statistically sound numbers.
use anyhow::{ensure, Result};
use biased_merge::generate::{interleaved, long_runs, random_split, unique_sorted};
use biased_merge::oracle::{itertools_merge_by, naive_merge_by};
use biased_merge::search::lower_bound_biased;
use biased_merge::{merge_biased, merge_linear};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Time merges and biased searches")]
struct Args {
    /// Total number of merged elements.
    #[arg(long, default_value_t = 1_000_000)]
    size: u32,
    /// Number of elements in the short side of the long runs input.
    #[arg(long, default_value_t = 100)]
    others: u32,
    /// Repetitions of each measurement; the fastest is kept.
    #[arg(long, default_value_t = 10)]
    runs: usize,
    /// Size of the searched slice.
    #[arg(long, default_value_t = 1000)]
    search_size: usize,
    /// Seed of random inputs.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

/// Fastest of `runs` executions of `op`, in nanoseconds.
fn time_it<F: FnMut()>(runs: usize, mut op: F) -> u64 {
    (0..runs.max(1))
        .map(|_| {
            let start = time::precise_time_ns();
            op();
            time::precise_time_ns() - start
        })
        .min()
        .unwrap_or(0)
}

fn bench_merges(name: &str, left: &[u32], right: &[u32], runs: usize) -> Result<()> {
    let mut output = vec![0u32; left.len() + right.len()];
    let mut check = output.clone();
    merge_linear(left, right, &mut check);
    let timings = [
        (
            "linear",
            time_it(runs, || {
                black_box(merge_linear(left, right, &mut output));
            }),
        ),
        (
            "biased",
            time_it(runs, || {
                black_box(merge_biased(left, right, &mut output));
            }),
        ),
        (
            "naive",
            time_it(runs, || {
                black_box(naive_merge_by(left, right, |a, b| a < b));
            }),
        ),
        (
            "itertools",
            time_it(runs, || {
                black_box(itertools_merge_by(left, right, |a, b| a < b));
            }),
        ),
    ];
    ensure!(output == check, "{}: biased and linear merges differ", name);
    for &(algorithm, ns) in timings.iter() {
        info!(input = name, algorithm, ns, "merge");
    }
    Ok(())
}

fn bench_searches(args: &Args) {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let input = unique_sorted(&mut rng, args.search_size);
    let mut step = 1;
    while step <= input.len() {
        let target = &input[step - 1];
        let biased = time_it(args.runs, || {
            for _ in 0..1000 {
                black_box(lower_bound_biased(&input, black_box(target)));
            }
        });
        let binary = time_it(args.runs, || {
            for _ in 0..1000 {
                black_box(input.partition_point(|x| x < black_box(target)));
            }
        });
        info!(index = step - 1, biased, binary, "search x1000");
        step *= 2;
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let (left, right) = interleaved(args.size);
    bench_merges("interleaved", &left, &right, args.runs)?;

    let mut rng = StdRng::seed_from_u64(args.seed);
    let (left, right) = random_split(&mut rng, args.size as usize, args.size);
    bench_merges("random", &left, &right, args.runs)?;

    let (left, right) = long_runs(args.size, args.others);
    bench_merges("long runs", &left, &right, args.runs)?;
    bench_merges("long runs (swapped)", &right, &left, args.runs)?;

    bench_searches(&args);
    Ok(())
}
