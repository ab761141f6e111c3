use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::json;

use crate::api::dto::{SampleDto, TreeDto};
use crate::application::EncodePipeline;
use crate::ports::EmbeddingStore;

#[derive(Debug, Deserialize)]
struct CommandReq {
    command: String,
    params: Option<serde_json::Value>,
}

/// Everything a connection handler needs: the configured pipeline and the
/// shared read-only store.
pub struct ServerState {
    pub pipeline: EncodePipeline,
    pub store: Arc<dyn EmbeddingStore>,
}

/// Run the line-oriented JSON command server. One thread per connection;
/// each request is a single JSON line, each response a single JSON line.
pub fn start_server(port: u16, state: Arc<ServerState>) -> Result<()> {
    let address = format!("127.0.0.1:{}", port);
    let listener = TcpListener::bind(&address)
        .with_context(|| format!("Failed to bind to {}", address))?;

    println!("[TreeVec] API server listening on {}", address);

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                let state = Arc::clone(&state);
                thread::spawn(move || {
                    if let Err(e) = handle_connection(stream, state) {
                        eprintln!("[API] Connection error: {}", e);
                    }
                });
            }
            Err(e) => eprintln!("[API] Accept error: {}", e),
        }
    }

    Ok(())
}

fn handle_connection(stream: TcpStream, state: Arc<ServerState>) -> Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);
    let mut writer = stream;
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line)?;
        if bytes_read == 0 {
            break; // Connection closed
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let response = match process_command(trimmed, &state) {
            Ok(data) => json!({
                "status": "success",
                "data": data,
            }),
            Err(e) => json!({
                "status": "error",
                "message": format!("{:#}", e),
            }),
        };

        writer.write_all(response.to_string().as_bytes())?;
        writer.write_all(b"\n")?;
    }

    Ok(())
}

fn process_command(raw: &str, state: &ServerState) -> Result<serde_json::Value> {
    let req: CommandReq = serde_json::from_str(raw).context("Malformed request")?;

    match req.command.as_str() {
        "ping" => Ok(json!("pong")),
        "encode" => {
            let params = req.params.context("Missing params")?;
            let tree_value = params
                .get("tree")
                .context("Missing params.tree")?
                .clone();
            let dto: TreeDto =
                serde_json::from_value(tree_value).context("Malformed tree")?;
            let tree = dto.into_tree()?;
            let sample = state.pipeline.encode(tree, state.store.as_ref())?;
            Ok(serde_json::to_value(SampleDto::from(sample))?)
        }
        other => anyhow::bail!("Unknown command: {}", other),
    }
}
