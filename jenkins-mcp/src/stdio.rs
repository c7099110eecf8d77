//! Stdio transport
//!
//! Newline-delimited JSON over stdin/stdout: one JSON-RPC request per line,
//! one response per line. Blank lines are skipped; EOF ends the loop.
//! Diagnostics go to stderr via tracing, keeping stdout clean for frames.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::server::McpServer;

/// Runs the server until stdin is closed
pub async fn run(server: &McpServer) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }

        let Some(response) = server.handle_raw(raw).await else {
            continue;
        };

        let mut frame =
            serde_json::to_vec(&response).context("Failed to serialize response frame")?;
        frame.push(b'\n');
        stdout
            .write_all(&frame)
            .await
            .context("Failed to write response frame")?;
        stdout.flush().await.context("Failed to flush stdout")?;
    }

    Ok(())
}
