//! Line-based terminal I/O used by command actions.

use std::io::{self, Write};

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};
use tokio::sync::Mutex;

/// Interactive input/output available to command actions.
#[async_trait]
pub trait Terminal: Send + Sync {
    /// Write `text` verbatim and flush it before returning.
    fn write(&self, text: &str) -> io::Result<()>;

    /// Wait for the next line of input.
    ///
    /// The trailing newline is kept. An empty string means the input is
    /// closed.
    async fn read_line(&self) -> io::Result<String>;
}

/// Remove a trailing `\n` or `\r\n` from a line returned by
/// [`Terminal::read_line`].
pub fn strip_newline(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

/// Read one line from `reader`, newline included.
///
/// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.
async fn read_decoded_line<R: AsyncBufRead + Unpin>(reader: &mut R) -> io::Result<String> {
    let mut buf = Vec::new();
    reader.read_until(b'\n', &mut buf).await?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Terminal backed by the process standard streams.
#[derive(Debug)]
pub struct StdTerminal {
    stdin: Mutex<BufReader<Stdin>>,
}

impl StdTerminal {
    pub fn new() -> Self {
        Self {
            stdin: Mutex::new(BufReader::new(tokio::io::stdin())),
        }
    }
}

impl Default for StdTerminal {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Terminal for StdTerminal {
    fn write(&self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }

    async fn read_line(&self) -> io::Result<String> {
        let mut reader = self.stdin.lock().await;
        read_decoded_line(&mut *reader).await
    }
}

/// In-memory terminal that replays scripted input and records output.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    input: std::sync::Mutex<std::collections::VecDeque<String>>,
    output: std::sync::Mutex<String>,
}

#[cfg(any(test, feature = "test-utils"))]
impl ScriptedTerminal {
    /// Create a terminal that answers reads with `lines`, each followed by
    /// a newline as a real terminal would deliver it.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: std::sync::Mutex::new(
                lines
                    .into_iter()
                    .map(|l| format!("{}\n", l.into()))
                    .collect(),
            ),
            output: std::sync::Mutex::default(),
        }
    }

    /// Everything written so far.
    pub fn output(&self) -> String {
        self.output
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Number of scripted lines not read yet.
    pub fn remaining_input(&self) -> usize {
        self.input.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl Terminal for ScriptedTerminal {
    fn write(&self, text: &str) -> io::Result<()> {
        self.output
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_str(text);
        Ok(())
    }

    async fn read_line(&self) -> io::Result<String> {
        Ok(self
            .input
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or_default())
    }
}
