//! yh-logging: tracing setup + NDJSON claim events.
//!
//! Binaries call [`init_tracing`] once at startup. Claim results can also be
//! appended to an NDJSON file for later inspection (one JSON object per line).

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Event schema version written into every claim event.
pub const CLAIM_EVENT_VERSION: u32 = 1;

/// Install a global `fmt` subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence; otherwise `default_directive` (e.g. `"yh=warn"`)
/// is used. Calling this twice is harmless: the second install is ignored.
pub fn init_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

pub fn now_ms() -> u64 {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    d.as_millis() as u64
}

/// One claim attempt on a score-card row.
#[derive(Debug, Clone, Serialize)]
pub struct ClaimEventV1 {
    pub event: &'static str,
    pub v: u32,
    pub ts_ms: u64,

    pub rule: String,
    pub dice: Vec<u8>,

    /// "claimed" | "already_claimed" | "invalid_hand"
    pub outcome: &'static str,
    pub score: Option<u32>,
    pub error: Option<String>,
}

impl ClaimEventV1 {
    pub fn new(rule: impl Into<String>, dice: &[u8], outcome: &'static str) -> Self {
        Self {
            event: "claim",
            v: CLAIM_EVENT_VERSION,
            ts_ms: now_ms(),
            rule: rule.into(),
            dice: dice.to_vec(),
            outcome,
            score: None,
            error: None,
        }
    }

    pub fn with_score(mut self, score: u32) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_error(mut self, error: impl ToString) -> Self {
        self.error = Some(error.to_string());
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NdjsonError {
    #[error("ndjson io: {0}")]
    Io(#[from] io::Error),
    #[error("ndjson encode: {0}")]
    Json(#[from] serde_json::Error),
}

/// Append-only NDJSON writer.
///
/// Contract: each call writes exactly one JSON object followed by a newline.
pub struct NdjsonWriter {
    w: BufWriter<File>,
    lines_since_flush: u64,
    flush_every_lines: u64,
}

impl NdjsonWriter {
    /// Open a file for append. Creates it if it doesn't exist.
    pub fn open_append(path: impl AsRef<Path>) -> Result<Self, NdjsonError> {
        Self::open_append_with_flush(path, 0)
    }

    /// `flush_every_lines=0` disables periodic flushing.
    pub fn open_append_with_flush(
        path: impl AsRef<Path>,
        flush_every_lines: u64,
    ) -> Result<Self, NdjsonError> {
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            w: BufWriter::new(f),
            lines_since_flush: 0,
            flush_every_lines,
        })
    }

    pub fn write_event<T: Serialize>(&mut self, event: &T) -> Result<(), NdjsonError> {
        let mut buf = serde_json::to_vec(event)?;
        buf.push(b'\n');
        self.w.write_all(&buf)?;
        self.lines_since_flush += 1;
        if self.flush_every_lines > 0 && self.lines_since_flush >= self.flush_every_lines {
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), NdjsonError> {
        self.w.flush()?;
        self.lines_since_flush = 0;
        Ok(())
    }
}
