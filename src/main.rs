use anyhow::Context;
use clap::Parser;
use graphkit::{props, EdgeKey, Graph, GraphConfig, MultiGraph};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "graphkit", version, about = "Graphkit in-memory graph containers demo")]
struct Cli {
    /// Graph configuration file (YAML, or JSON with a .json extension)
    #[arg(long, env = "GRAPHKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Build directed graphs regardless of the configuration file
    #[arg(long)]
    directed: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => GraphConfig::from_path(path)
            .with_context(|| format!("loading graph config from {}", path.display()))?,
        None => GraphConfig::default(),
    };
    if cli.directed {
        config.directed = true;
    }
    info!("Using graph config {:?}", config);

    println!("Graphkit v{}", graphkit::version());
    println!("==========================================");
    println!();

    demo_simple_graph(&config)?;
    demo_multigraph(&config)?;
    demo_conversions(&config)?;
    Ok(())
}

fn demo_simple_graph(config: &GraphConfig) -> anyhow::Result<()> {
    println!("=== Demo 1: Simple Graph ===");
    let mut g = Graph::with_config(config.clone());

    for name in ["Alice", "Bob", "Charlie"] {
        g.add_node(name, props! { "kind" => "person" })?;
    }
    g.add_edge("Alice", "Bob", props! { "since" => 2020i64, "weight" => 0.9 })?;
    g.add_edge("Bob", "Charlie", props! { "since" => 2019i64, "weight" => 0.8 })?;
    g.add_edge("Alice", "Charlie", props! { "weight" => 0.4 })?;
    println!("✓ Alice - Bob (since 2020), Bob - Charlie (since 2019), Alice - Charlie");

    if let Some(data) = g.get_edge_data_mut(&"Bob", &"Alice") {
        data.insert("note".to_string(), "met at work".into());
    }
    if !g.is_directed() {
        let shared = g
            .get_edge_data(&"Alice", &"Bob")
            .map_or(false, |d| d.contains_key("note"));
        println!(
            "✓ Attribute written through Bob - Alice is visible through Alice - Bob: {}",
            shared
        );
    }

    println!("\nGraph Statistics:");
    println!("  Total nodes: {}", g.number_of_nodes());
    println!("  Total edges: {}", g.number_of_edges());
    for (node, degree) in g.degrees() {
        println!("  degree({}) = {}", node, degree);
    }
    println!("  weighted degree(Alice) = {:?}", g.degree_with(&"Alice", Some("weight")));
    Ok(())
}

fn demo_multigraph(config: &GraphConfig) -> anyhow::Result<()> {
    println!("\n=== Demo 2: Multigraph Edge Keys ===");
    let mut m = MultiGraph::with_config(config.clone());
    // endpoints must exist when the config turns off auto-creation
    m.add_nodes_from((0..3).map(|n| (n, props! {})))?;

    let keys = m.add_edges_from(vec![(0, 1), (0, 1), (1, 2)])?;
    let keys: Vec<u64> = keys.iter().map(EdgeKey::as_u64).collect();
    println!("✓ Added edges with keys {:?}", keys);

    m.remove_edge(&0, &1, Some(EdgeKey::new(0)))?;
    let next = m.add_edge(0, 1, None, props! {})?;
    println!("✓ After removing key 0 the next key for 0 - 1 is {}", next);

    m.add_edge(2, 2, None, props! {})?;
    println!("  degree(2) with a self-loop = {:?}", m.degree(&2));
    for (u, v, key) in m.edges() {
        println!("  {} - {} [{}]", u, v, key);
    }
    Ok(())
}

fn demo_conversions(config: &GraphConfig) -> anyhow::Result<()> {
    println!("\n=== Demo 3: Conversions ===");
    let mut g = Graph::with_config(config.clone());
    g.add_nodes_from((1..=3).map(|n| (n, props! {})))?;
    g.add_edges_from(vec![(1, 2), (2, 3)])?;

    let d = g.to_directed();
    println!("✓ to_directed: {} edges, directed = {}", d.number_of_edges(), d.is_directed());

    let m = MultiGraph::from_graph(&g);
    println!("✓ as multigraph: {:?}", m.edges());

    let back = Graph::from_multigraph(&m);
    println!("✓ back to simple: {:?}", back.edges());
    Ok(())
}
