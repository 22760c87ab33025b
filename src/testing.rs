//! Test doubles shared by the unit tests.

use anyhow::Result;
use log::{Level, LevelFilter, Log, Metadata, Record};
use serenity::async_trait;
use std::sync::{Mutex, Once};

use crate::message::IncomingMessage;
use crate::reply::Reply;
use crate::session::Session;

/// Records every reply instead of sending it. Optionally fails every send.
#[derive(Default)]
pub struct RecordingSession {
    sent: Mutex<Vec<(String, Reply)>>,
    fail: bool,
}

impl RecordingSession {
    pub fn failing() -> Self {
        RecordingSession {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<(String, Reply)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Session for RecordingSession {
    async fn send(&self, channel_id: &str, reply: Reply) -> Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push((channel_id.to_string(), reply));

        if self.fail {
            anyhow::bail!("channel unavailable");
        }
        Ok(())
    }
}

pub fn message(content: &str) -> IncomingMessage {
    IncomingMessage {
        id: "300".to_string(),
        channel_id: "200".to_string(),
        guild_id: Some("100".to_string()),
        author_id: "1234".to_string(),
        author_name: "gonzo".to_string(),
        author_bot: false,
        content: content.to_string(),
    }
}

/// Keeps every log record in memory.
struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

/// Route `log` output into memory. The logger is process-wide, so tests
/// should filter records by something unique to them, like a command name.
pub fn capture_logs() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
    });
}

/// Captured records at `level` containing `needle`.
pub fn logs_containing(level: Level, needle: &str) -> Vec<String> {
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(l, line)| *l == level && line.contains(needle))
        .map(|(_, line)| line.clone())
        .collect()
}
