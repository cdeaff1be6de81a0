use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use knightmoves::board::Board;
use knightmoves::config::{PuzzleConfig, Route};
use knightmoves::report::{Report, RouteReport};
use knightmoves::search::{enumerate_with_stats, search_with, MergePolicy, SequenceMap};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(author, version, about = "Find the cheapest A/B/C weights that let knight paths on both diagonals score the target", long_about = None)]
struct Args {
    /// JSON config file; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start of the first route (board notation)
    #[arg(long)]
    from_a: Option<String>,

    /// End of the first route
    #[arg(long)]
    to_a: Option<String>,

    /// Start of the second route
    #[arg(long)]
    from_b: Option<String>,

    /// End of the second route
    #[arg(long)]
    to_b: Option<String>,

    /// Maximum knight moves per path
    #[arg(long)]
    max_steps: Option<usize>,

    /// Score both paths must hit exactly
    #[arg(long)]
    target: Option<u64>,

    /// Scoring aborts once the running total exceeds this
    #[arg(long)]
    ceiling: Option<u64>,

    /// Candidate weights, comma separated
    #[arg(long, value_delimiter = ',')]
    weights: Option<Vec<i64>>,

    /// Worker threads (defaults to available parallelism)
    #[arg(long)]
    threads: Option<usize>,

    /// Keep the smallest path per sequence when merging workers
    #[arg(long)]
    smallest_path: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Hide progress spinners
    #[arg(long)]
    quiet: bool,
}

fn build_config(args: &Args) -> Result<PuzzleConfig> {
    let mut cfg = match &args.config {
        Some(p) => PuzzleConfig::load(p).with_context(|| format!("loading config {}", p.display()))?,
        None => PuzzleConfig::default(),
    };
    let [a, b] = &mut cfg.routes;
    override_route(a, &args.from_a, &args.to_a);
    override_route(b, &args.from_b, &args.to_b);
    if let Some(v) = args.max_steps { cfg.max_steps = v; }
    if let Some(v) = args.target { cfg.target = v; }
    if let Some(v) = args.ceiling { cfg.ceiling = v; }
    if let Some(v) = &args.weights { cfg.candidates = v.clone(); }
    if args.threads.is_some() { cfg.threads = args.threads; }
    if args.smallest_path { cfg.merge = MergePolicy::SmallestPath; }
    Ok(cfg)
}

fn override_route(route: &mut Route, start: &Option<String>, end: &Option<String>) {
    if let Some(s) = start { route.start = s.clone(); }
    if let Some(e) = end { route.end = e.clone(); }
}

fn spinner(quiet: bool, msg: String) -> Result<ProgressBar> {
    if quiet { return Ok(ProgressBar::hidden()); }
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg} [{elapsed}]")?);
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

fn run(args: &Args, cfg: &PuzzleConfig) -> Result<Report> {
    let board = Board::knight();
    let puzzle = cfg.validate(&board).context("invalid configuration")?;
    let total = Instant::now();

    let mut maps: Vec<SequenceMap> = Vec::with_capacity(2);
    let mut routes = Vec::with_capacity(2);
    for &(start, end) in &puzzle.routes {
        let pb = spinner(args.quiet, format!("Generating paths from {start} to {end}..."))?;
        let t0 = Instant::now();
        let (map, stats) = enumerate_with_stats(&board, start, end, puzzle.enumeration)?;
        pb.finish_and_clear();
        routes.push(RouteReport::new(start, end, map.len(), &stats, t0.elapsed()));
        maps.push(map);
    }

    let pb = spinner(args.quiet, "Searching weight combinations...".to_string())?;
    let t0 = Instant::now();
    let outcome = search_with(&maps[0], &maps[1], &puzzle.candidates, puzzle.search)?;
    let search_elapsed = t0.elapsed();
    pb.finish_and_clear();

    Ok(Report::new(routes, puzzle.search.target, &outcome, search_elapsed, total.elapsed()))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let cfg = build_config(&args)?;

    let report = match cfg.threads {
        Some(t) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(t.max(1)).build().context("thread pool")?;
            pool.install(|| run(&args, &cfg))?
        }
        None => run(&args, &cfg)?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}
