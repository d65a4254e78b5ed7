use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::{Mutex, OnceLock};

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Logger {
    fn new(prefix: Option<String>, sink: Box<dyn Write + Send>) -> Self {
        Self {
            prefix,
            sink: Mutex::new(sink),
        }
    }

    fn write_line(&self, message: &str) -> io::Result<()> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = match self.prefix {
            Some(ref prefix) => format!("[{}][{}] {}\n", timestamp, prefix, message),
            None => format!("[{}] {}\n", timestamp, message),
        };
        let mut sink = self
            .sink
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log sink poisoned"))?;
        sink.write_all(line.as_bytes())?;
        sink.flush()
    }

    pub fn log(&self, message: &str) {
        if let Err(err) = self.write_line(message) {
            eprintln!("Failed to write log line: {}", err);
        }
    }
}

/// Appends log lines to `path`. Later calls keep the first logger.
pub fn init_logger(prefix: Option<String>, path: &str) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    LOGGER.get_or_init(|| Logger::new(prefix, Box::new(file)));
    Ok(())
}

/// Messages are dropped until `init_logger` has been called; the terminal UI owns stdout.
pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
