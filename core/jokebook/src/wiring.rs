//! 配線: 標準アダプタで JokeScreen を組み立てる

use std::sync::Arc;

use common::adapter::{FileJsonLog, NoopLog};
use common::error::Error;
use common::ports::outbound::Log;

use crate::adapter::{HttpJokeSource, LoggingJokeStore, SqliteJokeStore};
use crate::config::AppConfig;
use crate::ports::outbound::{JokeSource, JokeStore};
use crate::usecase::JokeScreen;

/// 配線で組み立てたアプリ（main で初期化・画面ループに利用）
pub struct App {
    pub screen: JokeScreen,
    /// 構造化ログ（ファイルへ JSONL）。画面・エラー表示とは別。
    pub logger: Arc<dyn Log>,
}

/// 配線: ストアは起動時に 1 度だけ開き、JokeScreen に注入する
pub fn wire_jokebook(config: &AppConfig) -> Result<App, Error> {
    let logger: Arc<dyn Log> = match &config.log_path {
        Some(path) => Arc::new(FileJsonLog::new(path)),
        None => Arc::new(NoopLog),
    };
    let sqlite = SqliteJokeStore::open(&config.db_path)?;
    let store: Arc<dyn JokeStore> =
        Arc::new(LoggingJokeStore::new(Arc::new(sqlite), Arc::clone(&logger)));
    let source: Arc<dyn JokeSource> = Arc::new(HttpJokeSource::new(config.api_url.clone())?);
    let screen = JokeScreen::new(store, source, Arc::clone(&logger));
    Ok(App { screen, logger })
}
