//! Outbound ポート: アプリが外界（ローカル DB・ジョーク API）を使うための trait

pub mod joke_source;
pub mod joke_store;

pub use joke_source::JokeSource;
pub use joke_store::JokeStore;
