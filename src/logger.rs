// In-app logger behind the `log` facade.
// Keeps a bounded ring of records for the Logs window, optionally mirrors to
// stderr (GUI_LOG_STDERR=1), appends warn+ lines to log.txt and installs a
// panic hook that writes the backtrace there as well.

use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::backtrace::Backtrace;
use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

const MAX_LOG_LINES: usize = 5000;
const LOG_FILE_NAME: &str = "log.txt";

#[derive(Clone, Debug)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub msg: String,
}

impl LogEntry {
    pub fn line(&self) -> String {
        format!("[{:>5}] {}: {}", self.level, self.target, self.msg)
    }
}

/// Fixed-capacity FIFO of log entries; the oldest entry is dropped on overflow.
#[derive(Debug)]
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl LogBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Copies of the entries at `min` or more severe, oldest first.
    pub fn at_least(&self, min: Level) -> Vec<LogEntry> {
        self.entries.iter().filter(|e| e.level <= min).cloned().collect()
    }
}

lazy_static! {
    static ref LOGS: Mutex<LogBuffer> = Mutex::new(LogBuffer::with_capacity(MAX_LOG_LINES));
    static ref MIRROR_STDERR: bool = std::env::var("GUI_LOG_STDERR")
        .map(|v| is_truthy(&v))
        .unwrap_or(false);
    static ref LOG_FILE: Mutex<Option<File>> = Mutex::new(None);
}

static NEW_LOGS: AtomicBool = AtomicBool::new(false);

fn is_truthy(v: &str) -> bool {
    matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

struct GuiLogger;

impl Log for GuiLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = LogEntry {
            level: record.level(),
            target: record.target().to_string(),
            msg: record.args().to_string(),
        };
        let line = format!("[{}] {}", timestamp_millis(), entry.line());

        if *MIRROR_STDERR {
            eprintln!("{}", line);
        }
        if record.level() <= Level::Warn {
            write_file_line(&line);
        }

        if let Ok(mut buf) = LOGS.lock() {
            buf.push(entry);
        }
        NEW_LOGS.store(true, Ordering::Relaxed);
    }

    fn flush(&self) {
        if let Ok(mut lf) = LOG_FILE.lock() {
            if let Some(f) = lf.as_mut() {
                let _ = f.flush();
            }
        }
    }
}

/// Parses a RUST_LOG-like value. Only the most verbose level word is used,
/// module directives are not supported.
pub fn parse_level_filter(value: &str) -> Option<LevelFilter> {
    let v = value.to_lowercase();
    [
        ("trace", LevelFilter::Trace),
        ("debug", LevelFilter::Debug),
        ("info", LevelFilter::Info),
        ("warn", LevelFilter::Warn),
        ("error", LevelFilter::Error),
        ("off", LevelFilter::Off),
    ]
    .into_iter()
    .find(|(word, _)| v.contains(word))
    .map(|(_, level)| level)
}

/// Install the logger, open log.txt and the panic hook.
/// Defaults to Debug when RUST_LOG is not set.
pub fn init() {
    if log::set_boxed_logger(Box::new(GuiLogger)).is_err() {
        return;
    }
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| parse_level_filter(&v))
        .unwrap_or(LevelFilter::Debug);
    log::set_max_level(level);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE_NAME);
    match file {
        Ok(f) => {
            if let Ok(mut lf) = LOG_FILE.lock() {
                *lf = Some(f);
            }
        }
        Err(e) => log::warn!("Cannot open {LOG_FILE_NAME}: {e}"),
    }

    install_panic_hook();

    log::info!("GUI logger initialized at level {}", level);
}

pub fn at_least(min: Level) -> Vec<LogEntry> {
    LOGS.lock().map(|buf| buf.at_least(min)).unwrap_or_default()
}


pub fn clear() {
    if let Ok(mut buf) = LOGS.lock() {
        buf.clear();
    }
    NEW_LOGS.store(true, Ordering::Relaxed);
}

/// Returns true if new logs arrived since the last call.
pub fn take_new_flag() -> bool {
    NEW_LOGS.swap(false, Ordering::Relaxed)
}

fn timestamp_millis() -> String {
    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
    format!("{}.{:03}", now.as_secs(), now.subsec_millis())
}

fn write_file_line(line: &str) {
    if let Ok(mut lf) = LOG_FILE.lock() {
        if let Some(f) = lf.as_mut() {
            let _ = writeln!(f, "{}", line);
            let _ = f.flush();
        }
    }
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        let payload = panic_info.payload();
        let msg = payload
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
            .unwrap_or("Box<Any>");
        let loc = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());

        let bt = Backtrace::force_capture();
        write_file_line(&format!("[{}] [ERROR] panic at {loc}: {msg}", timestamp_millis()));
        for line in format!("{bt}").lines() {
            write_file_line(line);
        }
        log::error!("panic at {loc}: {msg}");
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(i: usize) -> LogEntry {
        LogEntry {
            level: Level::Info,
            target: "test".into(),
            msg: format!("m{i}"),
        }
    }

    #[test]
    fn buffer_drops_oldest_on_overflow() {
        let mut b = LogBuffer::with_capacity(3);
        for i in 0..5 {
            b.push(entry(i));
        }
        let msgs: Vec<_> = b.at_least(Level::Trace).into_iter().map(|e| e.msg).collect();
        assert_eq!(msgs, vec!["m2", "m3", "m4"]);
    }

    #[test]
    fn at_least_keeps_more_severe_levels() {
        let mut b = LogBuffer::with_capacity(10);
        for level in [Level::Debug, Level::Error, Level::Info, Level::Warn] {
            b.push(LogEntry {
                level,
                target: "test".into(),
                msg: level.to_string(),
            });
        }
        let levels = |min| b.at_least(min).iter().map(|e| e.level).collect::<Vec<_>>();
        assert_eq!(levels(Level::Warn), vec![Level::Error, Level::Warn]);
        assert_eq!(levels(Level::Info), vec![Level::Error, Level::Info, Level::Warn]);
        assert_eq!(levels(Level::Trace).len(), 4);
        assert_eq!(levels(Level::Error), vec![Level::Error]);
    }

    #[test]
    fn level_filter_from_env_value() {
        assert_eq!(parse_level_filter("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level_filter("WARN"), Some(LevelFilter::Warn));
        assert_eq!(parse_level_filter("creative_hub=trace"), Some(LevelFilter::Trace));
        assert_eq!(parse_level_filter("verbose"), None);
    }

    #[test]
    fn formatted_line() {
        let e = LogEntry {
            level: Level::Warn,
            target: "cart".into(),
            msg: "x".into(),
        };
        assert_eq!(e.line(), "[ WARN] cart: x");
    }
}
