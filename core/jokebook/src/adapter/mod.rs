pub(crate) mod http_joke_source;
pub(crate) mod logging_joke_store;
pub(crate) mod sqlite_joke_store;

pub(crate) use http_joke_source::{HttpJokeSource, DEFAULT_API_URL};
pub(crate) use logging_joke_store::LoggingJokeStore;
pub(crate) use sqlite_joke_store::SqliteJokeStore;
