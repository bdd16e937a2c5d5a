use anyhow::{Context, Result};
use clap::Parser;
use digraph_motifs::{
    config::DEFAULT_MAX_MOTIF_SIZE,
    count_motifs,
    parser::{parse_input_file, read_host_input},
    report::{mirror, motif_filename, write_motif_report},
    Limits,
};
use log::info;
use std::path::PathBuf;

/// Count every size-k motif among the induced subgraphs of a host graph.
///
/// Input: the motif size k on the first line, then one directed edge
/// `source target` per line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input file (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Largest k accepted before refusing to run
    #[arg(long, default_value_t = DEFAULT_MAX_MOTIF_SIZE)]
    max_size: usize,

    /// Output file path. Default: motifs_k=<k>.txt
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let input = match &args.input {
        Some(path) => parse_input_file(path).with_context(|| format!("parse {:?}", path))?,
        None => read_host_input(std::io::stdin().lock()).context("parse stdin")?,
    };
    info!(
        "Host graph: {} vertices, {} edges; motif size k={}",
        input.host.num_vertices(),
        input.host.num_edges(),
        input.k
    );

    let limits = Limits::with_max_size(args.max_size);
    let start_time = std::time::Instant::now();
    let table = count_motifs(&input.host, input.k, &limits)
        .with_context(|| format!("count motifs of size {}", input.k))?;
    let elapsed = start_time.elapsed();

    let mut report = Vec::new();
    write_motif_report(&mut report, &table)?;

    let output = args.output.unwrap_or_else(|| motif_filename(input.k));
    mirror(&report, &output).with_context(|| format!("write report to {:?}", output))?;

    info!("Output written to {:?}", output);
    info!("Computation time: {:.3}s", elapsed.as_secs_f64());
    Ok(())
}
