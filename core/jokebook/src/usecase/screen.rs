//! ジョーク画面のユースケース（取得・選択・クリアと表示状態の管理）
//!
//! ストアとリモート取得はポート経由で注入される。表示状態はストアの読み取り専用の写しで、
//! ストアへ書き戻すことはない。

use std::sync::Arc;

use common::ports::outbound::{Log, LogLevel, LogRecord};

use crate::domain::{Joke, StorageError};
use crate::ports::outbound::{JokeSource, JokeStore};

/// 取得失敗時にバナーへ出す文言
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching joke data";
/// 取得は成功したが保存に失敗したとき
pub const SAVE_ERROR_MESSAGE: &str = "Error saving joke data";
/// クリアに失敗したとき
pub const CLEAR_ERROR_MESSAGE: &str = "Error clearing jokes";

/// 画面の表示状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// 到着順
    pub records: Vec<Joke>,
    pub selected: Option<Joke>,
    pub last_error: Option<String>,
}

pub struct JokeScreen {
    store: Arc<dyn JokeStore>,
    source: Arc<dyn JokeSource>,
    log: Arc<dyn Log>,
    state: ViewState,
}

impl JokeScreen {
    pub fn new(store: Arc<dyn JokeStore>, source: Arc<dyn JokeSource>, log: Arc<dyn Log>) -> Self {
        Self {
            store,
            source,
            log,
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// スキーマを用意して既存の全件を読み込む。ここでのストア失敗は呼び出し側で致命扱い。
    pub fn initialize(&mut self) -> Result<(), StorageError> {
        self.store.ensure_schema()?;
        self.state.records = self.store.fetch_all()?;
        Ok(())
    }

    /// 1 件取得して保存し、保存できたものを一覧に追加する。
    ///
    /// 保存の完了を待ってから一覧に反映する（再起動後の一覧と食い違わない）。
    /// 失敗は last_error に落とし、records / selected は変えない。
    pub fn request_joke(&mut self) {
        let fetched = match self.source.fetch_random_joke() {
            Ok(joke) => joke,
            Err(e) => {
                self.warn("fetch", "fetch failed", e.cause());
                self.state.last_error = Some(FETCH_ERROR_MESSAGE.to_string());
                return;
            }
        };
        match self.store.insert(&fetched) {
            Ok(id) => self.state.records.push(Joke::stored(id, fetched)),
            Err(e) => {
                self.warn("storage", "insert failed", e.cause());
                self.state.last_error = Some(SAVE_ERROR_MESSAGE.to_string());
            }
        }
    }

    /// 一覧の index 番目（0 始まり）を選択する。範囲外なら何もしない。ストアには触れない。
    pub fn select(&mut self, index: usize) -> bool {
        match self.state.records.get(index) {
            Some(joke) => {
                self.state.selected = Some(joke.clone());
                true
            }
            None => false,
        }
    }

    /// ストアを全削除し、成功したら表示状態をすべて空にする
    pub fn clear(&mut self) {
        match self.store.delete_all() {
            Ok(()) => self.state = ViewState::default(),
            Err(e) => {
                self.warn("storage", "delete failed", e.cause());
                self.state.last_error = Some(CLEAR_ERROR_MESSAGE.to_string());
            }
        }
    }

    fn warn(&self, kind: &str, message: &str, cause: &str) {
        let rec = LogRecord::new(LogLevel::Warn, "usecase", kind, message)
            .with_field("error", serde_json::json!(cause));
        let _ = self.log.log(&rec);
    }
}
