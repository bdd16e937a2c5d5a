//! Text reports for the census and the motif counter.
//!
//! Vertices are printed 1-indexed. Reports are rendered into a buffer once
//! and then mirrored to the console and to a file named after the size.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::motif::MotifTable;
use crate::{Edge, Graph};

/// Default census output file, `n=<k>.txt`
pub fn census_filename(n: usize) -> PathBuf {
    PathBuf::from(format!("n={}.txt", n))
}

/// Default motif output file, `motifs_k=<k>.txt`
pub fn motif_filename(k: usize) -> PathBuf {
    PathBuf::from(format!("motifs_k={}.txt", k))
}

fn write_edges<W: Write>(writer: &mut W, edges: &[Edge]) -> io::Result<()> {
    for &(u, v) in edges {
        writeln!(writer, "{} {}", u + 1, v + 1)?;
    }
    Ok(())
}

/// `n=`, `count=`, then each graph as `#i` and its sorted edges
pub fn write_census_report<W: Write>(writer: &mut W, n: usize, graphs: &[Graph]) -> io::Result<()> {
    writeln!(writer, "n={}", n)?;
    writeln!(writer, "count={}", graphs.len())?;

    for (idx, graph) in graphs.iter().enumerate() {
        writeln!(writer, "#{}", idx + 1)?;
        let mut edges = graph.edges();
        edges.sort_unstable();
        write_edges(writer, &edges)?;
    }
    Ok(())
}

/// `k=`, `motifs=`, then each motif as `#i`, representative edges and
/// `count=`, with a blank line between entries
pub fn write_motif_report<W: Write>(writer: &mut W, table: &MotifTable) -> io::Result<()> {
    writeln!(writer, "k={}", table.motif_size())?;
    writeln!(writer, "motifs={}", table.len())?;

    for (idx, (_, entry)) in table.iter().enumerate() {
        if idx > 0 {
            writeln!(writer)?;
        }
        writeln!(writer, "#{}", idx + 1)?;
        write_edges(writer, &entry.edges)?;
        writeln!(writer, "count={}", entry.count)?;
    }
    Ok(())
}

/// Write a rendered report to stdout and to `path`
pub fn mirror(report: &[u8], path: &Path) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(report)?;
    file.flush()?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(report)?;
    handle.flush()
}
