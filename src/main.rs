// Command-line entry point for TreeVec.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;

use treevec::api::dto::{SampleDto, TreeDto};
use treevec::api::server::{start_server, ServerState};
use treevec::application::EncodePipeline;
use treevec::common::EncodeConfig;
use treevec::infrastructure::{
    init_thread_pool, load_json_table, load_snapshot, MemoryEmbeddingStore,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input tree JSON file path (can specify multiple)
    #[arg(short, long, required = false)]
    input: Vec<String>,

    /// Embedding table path (.json table or bincode snapshot)
    #[arg(short, long)]
    table: String,

    /// Pipeline config TOML
    #[arg(short, long)]
    config: Option<String>,

    /// Traversal order (DFS or BFS), overrides config
    #[arg(long)]
    order: Option<String>,

    /// Rows per encoded sample, overrides config
    #[arg(long)]
    max_length: Option<usize>,

    /// Output file path (JSON array of samples); stdout if omitted
    #[arg(short, long)]
    output: Option<String>,

    /// Run the API server on this port instead of batch encoding
    #[arg(long)]
    serve: Option<u16>,
}

fn load_table(path: &str) -> Result<MemoryEmbeddingStore> {
    if path.ends_with(".json") {
        load_json_table(Path::new(path))
    } else {
        load_snapshot(Path::new(path))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => EncodeConfig::load(Path::new(path))?,
        None => EncodeConfig::default(),
    };
    if let Some(order) = &cli.order {
        config.order = order.clone();
    }
    if let Some(max_length) = cli.max_length {
        config.max_length = max_length;
    }

    let order = config.traversal_order()?;
    let store = load_table(&cli.table)?;
    let pipeline = EncodePipeline::new(order, config.max_length);

    if let Some(port) = cli.serve {
        let state = Arc::new(ServerState {
            pipeline,
            store: Arc::new(store),
        });
        return start_server(port, state);
    }

    if cli.input.is_empty() {
        bail!("Please provide at least one --input <tree.json> (or --serve <port>)");
    }

    init_thread_pool(config.workers)?;

    let mut trees = Vec::new();
    for input_file in &cli.input {
        let contents = fs::read_to_string(input_file)
            .with_context(|| format!("Cannot read input file: {}", input_file))?;
        let dto: TreeDto = serde_json::from_str(&contents)
            .with_context(|| format!("Malformed tree JSON: {}", input_file))?;
        trees.push(dto.into_tree()?);
    }

    let count = trees.len();
    let samples = pipeline.encode_batch(trees, &store)?;
    let dtos: Vec<SampleDto> = samples.into_iter().map(SampleDto::from).collect();
    let json = serde_json::to_string(&dtos)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Cannot write output file: {}", path))?;
            println!("Encoded {} tree(s). Output written to {}", count, path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
