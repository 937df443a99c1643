use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

/// Number of entries retained in the persisted log.
pub const MAX_ENTRIES: usize = 100;

static REPOSITORY: Mutex<Option<Arc<Mutex<dyn Repository>>>> = Mutex::new(None);
static LOGGER: Logger = Logger;

/// Persisted ring buffer of log entries, kept alongside the browser
/// console output so that messages survive a page reload.
pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

impl Entry {
    fn new(level: Level, message: String) -> Self {
        Self {
            time: Local::now().format("%b %d %H:%M:%S").to_string(),
            level,
            message,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Inserts the entry newest-first and drops the oldest entries beyond
/// [`MAX_ENTRIES`].
pub fn push(entries: &mut VecDeque<Entry>, entry: Entry) {
    entries.push_front(entry);
    entries.truncate(MAX_ENTRIES);
}

/// Installs the global logger and routes every record into `repository`.
///
/// # Errors
///
/// Returns an error if a logger has already been installed.
pub fn init(repository: Arc<Mutex<dyn Repository>>) -> Result<(), SetLoggerError> {
    if let Ok(mut repo) = REPOSITORY.lock() {
        *repo = Some(repository);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Trace))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = Entry::new(record.level(), record.args().to_string());
        mirror_to_console(&entry);
        if let Ok(repository) = REPOSITORY.lock() {
            if let Some(ref repository) = *repository {
                if let Ok(repository) = repository.lock() {
                    let _ = repository.write_entry(entry);
                }
            }
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn mirror_to_console(entry: &Entry) {
    let message = entry.message.clone();
    match entry.level {
        Level::Error => gloo_console::error!(message),
        Level::Warn => gloo_console::warn!(message),
        Level::Info => gloo_console::info!(message),
        Level::Debug | Level::Trace => gloo_console::debug!(message),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn mirror_to_console(_entry: &Entry) {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct FakeRepository {
        entries: Mutex<VecDeque<Entry>>,
    }

    impl Repository for FakeRepository {
        fn read_entries(&self) -> Result<VecDeque<Entry>, Error> {
            Ok(self.entries.lock().unwrap().clone())
        }

        fn write_entry(&self, entry: Entry) -> Result<(), Error> {
            push(&mut self.entries.lock().unwrap(), entry);
            Ok(())
        }
    }

    fn entry(message: &str) -> Entry {
        Entry {
            time: String::new(),
            level: Level::Info,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_push_newest_first_and_capped() {
        let mut entries = VecDeque::new();

        for i in 0..=MAX_ENTRIES {
            push(&mut entries, entry(&i.to_string()));
        }

        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries.front(), Some(&entry(&MAX_ENTRIES.to_string())));
        assert_eq!(entries.back(), Some(&entry("1")));
    }

    #[test]
    fn test_init_routes_records_to_repository() {
        let repository = Arc::new(Mutex::new(FakeRepository::default()));
        init(repository.clone()).unwrap();

        log::error!("failed to read custom exercises");

        let entries = repository.lock().unwrap().read_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, Level::Error);
        assert_eq!(entries[0].message, "failed to read custom exercises");
    }
}
