//! server
//!
//! Newline-delimited JSON service loop.
//!
//! # Protocol
//!
//! One request object per line in, one envelope per line out. Blank lines
//! are skipped; a line that fails to decode answers with a `bad_request`
//! envelope and the connection stays open. The connection closes on EOF.
//!
//! The wire layer carries no semantics of its own: every line goes straight
//! through [`Service::apply_json`].

use std::net::SocketAddr;

use anyhow::{Context as _, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

use crate::service::Service;
use crate::ui::output::{self, Verbosity};

/// Bind a listener.
///
/// Kept separate from [`serve`] so callers (and tests) can bind port 0 and
/// read back the local address.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))
}

/// Accept connections until the task is cancelled.
pub async fn serve(service: Service, listener: TcpListener, verbosity: Verbosity) -> Result<()> {
    loop {
        let (stream, peer) = listener
            .accept()
            .await
            .context("failed to accept connection")?;
        output::debug(format!("client connected: {peer}"), verbosity);

        let service = service.clone();
        tokio::spawn(async move {
            if let Err(e) = handle_connection(service, stream).await {
                output::debug(format!("client {peer}: {e}"), verbosity);
            }
            output::debug(format!("client disconnected: {peer}"), verbosity);
        });
    }
}

/// Serve a single connection: decode, apply, answer, line by line.
async fn handle_connection(service: Service, stream: TcpStream) -> Result<()> {
    let (reader, mut writer) = stream.into_split();
    let mut lines = BufReader::new(reader).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let envelope = service.apply_json(&line);
        let mut response = envelope.to_json();
        response.push('\n');
        writer.write_all(response.as_bytes()).await?;
    }

    Ok(())
}
