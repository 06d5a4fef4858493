//! 実行時ディレクトリ（XDG / JOKEBOOK_HOME 解決結果）
//!
//! EnvResolver::resolve_dirs() で取得し、データベース・ログのパス計算に使う。

use std::path::PathBuf;

/// データベースファイル名
pub const DB_FILE_NAME: &str = "jokes.db";

/// 構造化ログのファイル名
pub const LOG_FILE_NAME: &str = "jokebook.jsonl";

/// 解決済みの data / state ディレクトリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dirs {
    pub data_dir: PathBuf,
    pub state_dir: PathBuf,
}

impl Dirs {
    /// 既定のデータベースファイル（data/jokes.db）
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }

    /// ログ格納ディレクトリ（state/logs）
    pub fn logs_dir(&self) -> PathBuf {
        self.state_dir.join("logs")
    }

    pub fn log_file_path(&self) -> PathBuf {
        self.logs_dir().join(LOG_FILE_NAME)
    }
}
