//! ドメイン層のエラー
//!
//! 利用者から見える失敗は 2 種類のみ。原因の文字列はログ用に保持する。

/// リモート取得の失敗（ネットワーク・HTTP ステータス・JSON 形状をまとめて 1 種類）
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Failed to fetch joke: {0}")]
pub struct FetchError(String);

impl FetchError {
    pub fn new(cause: impl Into<String>) -> Self {
        Self(cause.into())
    }

    pub fn cause(&self) -> &str {
        &self.0
    }
}

/// ローカルストアの失敗（スキーマ作成・挿入・取得・削除）
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Storage error: {0}")]
pub struct StorageError(String);

impl StorageError {
    pub fn new(cause: impl Into<String>) -> Self {
        Self(cause.into())
    }

    pub fn cause(&self) -> &str {
        &self.0
    }
}

impl From<StorageError> for common::error::Error {
    fn from(e: StorageError) -> Self {
        common::error::Error::storage(e.to_string())
    }
}
