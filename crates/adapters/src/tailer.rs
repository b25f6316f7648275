// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tails an append-only log file: opens it, seeks to end-of-file, and
//! yields complete, trimmed, non-empty lines written after that point.

use std::path::PathBuf;
use std::time::Instant;

use thiserror::Error;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncSeekExt, BufReader, SeekFrom};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use idt_core::RawLine;

/// How long the tailer sleeps after hitting end-of-file before retrying.
const POLL_INTERVAL: std::time::Duration = std::time::Duration::from_millis(50);

#[derive(Debug, Error)]
pub enum TailError {
    #[error("failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read log file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Tails a single file, handing each complete line to `line_tx` until
/// cancellation or a fatal I/O error.
pub struct Tailer {
    path: PathBuf,
}

impl Tailer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the file, seek to its current end, and run the tail loop until
    /// `cancel` is triggered or the channel closes. Returns `Ok(())` on
    /// clean shutdown, `Err` on a fatal I/O error.
    pub async fn run(
        &self,
        line_tx: mpsc::Sender<RawLine>,
        cancel: CancellationToken,
    ) -> Result<(), TailError> {
        let mut file = File::open(&self.path).await.map_err(|source| TailError::Open {
            path: self.path.clone(),
            source,
        })?;
        file.seek(SeekFrom::End(0))
            .await
            .map_err(|source| TailError::Read {
                path: self.path.clone(),
                source,
            })?;
        let mut reader = BufReader::new(file);

        let mut buf = String::new();
        loop {
            if cancel.is_cancelled() {
                tracing::debug!(path = %self.path.display(), "tailer cancelled");
                return Ok(());
            }

            buf.clear();
            let read = reader.read_line(&mut buf).await.map_err(|source| TailError::Read {
                path: self.path.clone(),
                source,
            })?;

            if read == 0 {
                tokio::select! {
                    _ = tokio::time::sleep(POLL_INTERVAL) => {}
                    _ = cancel.cancelled() => {
                        tracing::debug!(path = %self.path.display(), "tailer cancelled at eof");
                        return Ok(());
                    }
                }
                continue;
            }

            if let Some(line) = RawLine::new(&buf, Instant::now()) {
                if line_tx.send(line).await.is_err() {
                    tracing::debug!(path = %self.path.display(), "line receiver dropped");
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tailer_tests.rs"]
mod tests;
