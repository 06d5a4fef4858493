//! ストア操作をログに記録する JokeStore のラッパ

use crate::domain::{Joke, JokeId, NewJoke, StorageError};
use crate::ports::outbound::JokeStore;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

pub struct LoggingJokeStore {
    inner: Arc<dyn JokeStore>,
    log: Arc<dyn Log>,
}

impl LoggingJokeStore {
    pub fn new(inner: Arc<dyn JokeStore>, log: Arc<dyn Log>) -> Self {
        Self { inner, log }
    }

    fn record<T>(
        &self,
        operation: &str,
        result: &Result<T, StorageError>,
        detail: impl FnOnce(&T) -> (&'static str, serde_json::Value),
    ) {
        let rec = match result {
            Ok(value) => {
                let (key, v) = detail(value);
                LogRecord::new(LogLevel::Info, "adapter", "storage", "storage operation")
                    .with_field("operation", serde_json::json!(operation))
                    .with_field(key, v)
            }
            Err(e) => LogRecord::new(LogLevel::Error, "adapter", "storage", "storage operation failed")
                .with_field("operation", serde_json::json!(operation))
                .with_field("error", serde_json::json!(e.cause())),
        };
        let _ = self.log.log(&rec);
    }
}

impl JokeStore for LoggingJokeStore {
    fn ensure_schema(&self) -> Result<(), StorageError> {
        let out = self.inner.ensure_schema();
        self.record("ensure_schema", &out, |_| ("table", serde_json::json!("jokes")));
        out
    }

    fn insert(&self, joke: &NewJoke) -> Result<JokeId, StorageError> {
        let out = self.inner.insert(joke);
        self.record("insert", &out, |id| ("joke_id", serde_json::json!(id.get())));
        out
    }

    fn fetch_all(&self) -> Result<Vec<Joke>, StorageError> {
        let out = self.inner.fetch_all();
        self.record("fetch_all", &out, |rows| ("count", serde_json::json!(rows.len())));
        out
    }

    fn delete_all(&self) -> Result<(), StorageError> {
        let out = self.inner.delete_all();
        self.record("delete_all", &out, |_| ("table", serde_json::json!("jokes")));
        out
    }
}
