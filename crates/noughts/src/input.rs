//! Line-oriented input shared by everyone who reads from the terminal.

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};
use tokio::sync::Mutex;
use tracing::{debug, instrument};

type LineReader = Lines<BufReader<Box<dyn AsyncRead + Send + Unpin>>>;

/// Cloneable handle to a single line reader.
///
/// Human players and the between-games menu read from the same source, so
/// lines are never split between two buffers.
#[derive(Clone)]
pub struct Console {
    lines: Arc<Mutex<LineReader>>,
}

impl Console {
    /// Reads from standard input.
    pub fn stdin() -> Self {
        Self::from_reader(tokio::io::stdin())
    }

    /// Reads from any async source (scripted input in tests).
    pub fn from_reader(reader: impl AsyncRead + Send + Unpin + 'static) -> Self {
        let boxed: Box<dyn AsyncRead + Send + Unpin> = Box::new(reader);
        Self {
            lines: Arc::new(Mutex::new(BufReader::new(boxed).lines())),
        }
    }

    /// Next trimmed line, or `None` at end of input.
    #[instrument(skip(self))]
    pub async fn next_line(&self) -> Result<Option<String>> {
        let mut lines = self.lines.lock().await;
        let line = lines.next_line().await.context("Failed to read input")?;
        debug!(?line, "Read input line");
        Ok(line.map(|l| l.trim().to_string()))
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}
