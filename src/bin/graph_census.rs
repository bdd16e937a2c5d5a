use anyhow::{Context, Result};
use clap::Parser;
use digraph_motifs::{
    config::DEFAULT_MAX_CENSUS_SIZE,
    generate_weakly_connected,
    parser::parse_size,
    report::{census_filename, mirror, write_census_report},
    Dedup, EdgeUniverse, Limits,
};
use log::info;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Census of all weakly connected directed graphs on n vertices, up to isomorphism
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of vertices (prompted for when omitted)
    n: Option<usize>,

    /// Include self-loop positions in the edge universe
    #[arg(long)]
    self_loops: bool,

    /// Deduplication strategy: 'pairwise' or 'canonical'
    #[arg(short, long, default_value = "canonical")]
    dedup: Dedup,

    /// Largest n accepted before refusing to run
    #[arg(long, default_value_t = DEFAULT_MAX_CENSUS_SIZE)]
    max_size: usize,

    /// Output file path. Default: n=<n>.txt
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}

fn prompt_size() -> Result<usize> {
    print!("Enter n: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read n from stdin")?;
    Ok(parse_size(&line)?)
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let n = match args.n {
        Some(n) => n,
        None => prompt_size()?,
    };
    let universe = if args.self_loops {
        EdgeUniverse::WithLoops
    } else {
        EdgeUniverse::WithoutLoops
    };
    let limits = Limits::with_max_size(args.max_size);

    info!("Generating all weakly connected graphs with {} vertices...", n);
    let generation_start = std::time::Instant::now();
    let graphs = generate_weakly_connected(n, universe, args.dedup, &limits)
        .with_context(|| format!("census of {} vertices", n))?;
    let generation_time = generation_start.elapsed();

    let mut report = Vec::new();
    write_census_report(&mut report, n, &graphs)?;

    let output = args.output.unwrap_or_else(|| census_filename(n));
    mirror(&report, &output).with_context(|| format!("write report to {:?}", output))?;

    info!("Output written to {:?}", output);
    info!(
        "Graph generation time: {:.4} seconds",
        generation_time.as_secs_f64()
    );
    Ok(())
}
