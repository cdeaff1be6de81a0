use anyhow::Context;
use clap::Parser;
use knightmoves::board::{Board, Cell};
use knightmoves::search::{enumerate_with_stats, EnumParams, MergePolicy};
use std::time::Instant;

#[derive(clap::Parser, Debug)]
#[command(name = "enumerate", about = "Count distinct knight-path letter sequences between two cells")]
struct Args {
    /// Start cell, e.g. a1
    #[arg(value_name = "FROM")]
    from: String,
    /// End cell, e.g. f6
    #[arg(value_name = "TO")]
    to: String,
    /// Maximum knight moves per path
    #[arg(long, default_value_t = 34)]
    max_steps: usize,
    /// Threads (and first-move batches); 0 uses all cores
    #[arg(long, default_value_t = 0)]
    threads: usize,
    /// Keep the smallest path per sequence when merging batches
    #[arg(long, default_value_t = false)]
    smallest_path: bool,
    /// Print every sequence with its path, sorted
    #[arg(long, default_value_t = false)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let from: Cell = args.from.parse().with_context(|| format!("bad start cell {:?}", args.from))?;
    let to: Cell = args.to.parse().with_context(|| format!("bad end cell {:?}", args.to))?;
    let board = Board::knight();
    let params = EnumParams {
        max_steps: args.max_steps,
        workers: args.threads,
        merge: if args.smallest_path { MergePolicy::SmallestPath } else { MergePolicy::LastWriter },
    };

    let t0 = Instant::now();
    let (map, stats) = if args.threads > 0 {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads).build().context("thread pool")?;
        pool.install(|| enumerate_with_stats(&board, from, to, params))?
    } else {
        enumerate_with_stats(&board, from, to, params)?
    };
    let dt = t0.elapsed().as_secs_f64();

    if args.list {
        for (labels, path) in map.sorted() { println!("{labels} {path}"); }
    }
    println!("sequences: {} nodes: {} duplicates: {} batches: {} elapsed: {:.3}s nps: {:.1}",
        map.len(), stats.nodes, stats.duplicates, stats.batches, dt, stats.nodes as f64 / dt.max(f64::EPSILON));
    Ok(())
}
