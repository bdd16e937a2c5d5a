use anyhow::Result;
use digraph_motifs::parser::parse_host_input;
use digraph_motifs::report::{write_census_report, write_motif_report};
use digraph_motifs::utils::num_combinations;
use digraph_motifs::{
    canonicalize, count_motifs, enumerate_motifs, generate_weakly_connected, Dedup, EdgeUniverse,
    Limits,
};

fn feed_forward_host() -> String {
    // two feed-forward loops sharing the edge 20 -> 30, sparse labels
    "3\n\
     10 20\n\
     20 30\n\
     10 30\n\
     -5 20\n\
     -5 30\n\
     30 30\n"
        .to_string()
}

#[test]
fn counts_from_text_input() -> Result<()> {
    let input = parse_host_input(&feed_forward_host())?;
    assert_eq!(input.k, 3);
    assert_eq!(input.host.vertices, vec![-5, 10, 20, 30]);

    let table = count_motifs(&input.host, input.k, &Limits::default())?;
    assert_eq!(table.len(), 104);
    assert_eq!(
        table.total_occurrences(),
        num_combinations(input.host.num_vertices(), 3)
    );

    // {-5, 10, 20}: only 10 -> 20 and -5 -> 20, a fan-in with no loops
    let fan_in = canonicalize(3, &[(0, 2), (1, 2)])?;
    assert_eq!(table.count_of(&fan_in), Some(1));
    Ok(())
}

#[test]
fn single_edge_scenario() -> Result<()> {
    let input = parse_host_input("2\n1 2\n")?;
    let table = count_motifs(&input.host, input.k, &Limits::default())?;

    let mut report = Vec::new();
    write_motif_report(&mut report, &table)?;
    let text = String::from_utf8(report)?;

    assert!(text.starts_with("k=2\nmotifs=10\n#1\ncount=0\n\n#2\n"));
    assert_eq!(text.matches("count=1").count(), 1);
    assert_eq!(text.matches("count=0").count(), 9);
    Ok(())
}

#[test]
fn reports_are_byte_identical_across_runs() -> Result<()> {
    let render = || -> Result<Vec<u8>> {
        let input = parse_host_input(&feed_forward_host())?;
        let table = count_motifs(&input.host, input.k, &Limits::default())?;
        let mut report = Vec::new();
        write_motif_report(&mut report, &table)?;
        Ok(report)
    };
    assert_eq!(render()?, render()?);
    Ok(())
}

#[test]
fn motif_universe_contains_every_connected_class() -> Result<()> {
    let limits = Limits::default();
    let motifs = enumerate_motifs(3, &limits)?;
    let connected = generate_weakly_connected(3, EdgeUniverse::WithLoops, Dedup::Canonical, &limits)?;

    for graph in &connected {
        let form = canonicalize(3, &graph.edges())?;
        assert!(motifs.iter().any(|motif| motif.form == form));
    }
    Ok(())
}

#[test]
fn census_report_for_three_vertices() -> Result<()> {
    let graphs = generate_weakly_connected(
        3,
        EdgeUniverse::WithoutLoops,
        Dedup::Pairwise,
        &Limits::default(),
    )?;
    let mut report = Vec::new();
    write_census_report(&mut report, 3, &graphs)?;
    let text = String::from_utf8(report)?;

    assert!(text.starts_with("n=3\ncount=13\n#1\n"));
    assert_eq!(text.matches('#').count(), 13);
    Ok(())
}
