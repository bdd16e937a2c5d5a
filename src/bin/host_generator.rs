use anyhow::{bail, Context, Result};
use clap::Parser;
use digraph_motifs::HostEdge;
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Input generator for the motif counter.
///
/// Writes a random directed host graph in the motif counter's input format:
///
/// <k>
/// <source> <target>
/// ...
///
/// Vertex identifiers start at `--offset` so that generated instances also
/// exercise non-zero-based labels.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate random host graphs for the motif counter"
)]
struct Args {
    /// Number of host vertices
    #[arg(long)]
    vertices: usize,

    /// Probability of each ordered pair carrying an edge
    #[arg(long, default_value_t = 0.2)]
    density: f64,

    /// Allow self-loops
    #[arg(long)]
    self_loops: bool,

    /// First vertex identifier
    #[arg(long, default_value_t = 1)]
    offset: i64,

    /// Motif size written on the first line
    #[arg(long)]
    size: usize,

    /// Random seed (if omitted, uses entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Output file path to write the instance (mandatory)
    #[arg(long)]
    output: PathBuf,
}

fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}

/// Random directed edges over `offset .. offset + n`, row-major
fn generate_edges<R: Rng>(
    n: usize,
    density: f64,
    self_loops: bool,
    offset: i64,
    rng: &mut R,
) -> Vec<HostEdge> {
    let mut edges = Vec::new();
    for i in 0..n {
        for j in 0..n {
            if i == j && !self_loops {
                continue;
            }
            if rng.gen::<f64>() < density {
                edges.push((offset + i as i64, offset + j as i64));
            }
        }
    }
    edges
}

fn write_instance<W: Write>(writer: &mut W, k: usize, edges: &[HostEdge]) -> std::io::Result<()> {
    writeln!(writer, "{}", k)?;
    for (u, v) in edges {
        writeln!(writer, "{} {}", u, v)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    if args.vertices == 0 {
        bail!("vertices must be positive");
    }
    if !(0.0..=1.0).contains(&args.density) {
        bail!("density must be in [0,1]");
    }

    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let edges = generate_edges(
        args.vertices,
        args.density,
        args.self_loops,
        args.offset,
        &mut rng,
    );

    let file = File::create(&args.output).with_context(|| format!("create {:?}", args.output))?;
    let mut writer = BufWriter::new(file);
    write_instance(&mut writer, args.size, &edges)?;
    writer.flush()?;

    info!(
        "Generated {} vertices, {} edges, k={} into {:?}",
        args.vertices,
        edges.len(),
        args.size,
        args.output
    );
    if let Some(seed) = args.seed {
        info!("seed = {}", seed);
    }
    Ok(())
}
